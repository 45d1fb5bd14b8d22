//! Randomized movement-practice sequences.
//!
//! A routine is modeled as a directed [`Graph`] of move-to-move transitions.
//! [`Sequence::generate`] walks it from one of the four [`Posture`]s, and
//! [`Combination::generate`] lists every way into and out of a focus move.
//! Loading the graph ([`source`]) and recording results ([`Notes`]) sit
//! around that core.
mod combination;
mod graph;
mod moves;
mod notes;
mod posture;
mod sequence;
pub mod source;

#[cfg(feature = "cli")]
pub mod cli;

pub use combination::*;
pub use graph::*;
pub use moves::*;
pub use notes::*;
pub use posture::*;
pub use sequence::*;

// ============================================================================
// GENERATION PARAMETERS
// ============================================================================
/// Default lower bound on counted moves per sequence.
pub const MIN_LENGTH: usize = 4;
/// Default upper bound on counted moves per sequence.
pub const MAX_LENGTH: usize = 6;
/// Postures appended in a row after which a walk is abandoned.
/// Only reachable when postures form a cycle with no way out.
pub const WALK_LIMIT: usize = 1024;
/// Combinations shown for a focus move unless all are requested.
pub const FOCUS_SAMPLE: usize = 10;
/// Separator between moves when rendering sequences and combinations.
pub const ARROW: &str = " -> ";

// ============================================================================
// RUNTIME CONFIGURATION
// ============================================================================
/// Graph file used when neither flag nor environment names one.
pub const GRAPH_PATH: &str = "moves.json";
/// Environment variable naming the graph file.
pub const GRAPH_ENV: &str = "MOVEGEN_GRAPH";
/// Environment variable naming the notes document.
pub const NOTES_ENV: &str = "MOVEGEN_NOTES";

/// Initialize terminal logging on stderr, keeping stdout for results.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .set_time_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
