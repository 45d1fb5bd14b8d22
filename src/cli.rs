use crate::*;
use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Randomized movement practice", long_about = None)]
pub struct Cli {
    /// Transition graph (.json or .md)
    #[arg(long, global = true, env = GRAPH_ENV, default_value = GRAPH_PATH)]
    graph: PathBuf,
    /// Markdown notes document to record results into
    #[arg(long, global = true, env = NOTES_ENV)]
    notes: Option<PathBuf>,
    /// Record without asking
    #[arg(long, global = true)]
    record: bool,
    /// Print results as JSON lines
    #[arg(long, global = true)]
    json: bool,
    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Generate random movement sequences", alias = "seq")]
    Sequence {
        #[arg(long, default_value_t = MIN_LENGTH)]
        min: usize,
        #[arg(long, default_value_t = MAX_LENGTH)]
        max: usize,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Never repeat the first move to close the loop
        #[arg(long)]
        open: bool,
    },
    #[command(about = "List every way into and out of a move", alias = "foc")]
    Focus {
        #[arg(required = true)]
        name: String,
        #[arg(short = 'k', long, default_value_t = FOCUS_SAMPLE)]
        limit: usize,
        /// Show every combination instead of a random sample
        #[arg(long)]
        all: bool,
    },
    #[command(about = "List moves in the graph", alias = "ls")]
    Moves,
}

impl Cli {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        let ref graph = source::load(&self.graph)?;
        let ref mut rng = rand::rng();
        match &self.command {
            Command::Sequence {
                min,
                max,
                count,
                open,
            } => {
                let bounds = Bounds::new(*min, *max)?;
                let sequences = (0..*count)
                    .map(|_| Sequence::generate(graph, bounds, rng))
                    .map(|walk| match open {
                        true => walk,
                        false => walk.close(graph),
                    })
                    .collect::<Vec<_>>();
                for sequence in sequences.iter() {
                    self.show(sequence, sequence.moves())?;
                }
                self.keep("sequences", &sequences)
            }
            Command::Focus { name, limit, all } => {
                let focus = Move::from(name.as_str());
                if !graph.contains(&focus) {
                    log::warn!("{} is not in the graph", focus);
                }
                let found = Combination::generate(graph, &focus);
                log::info!("{} combinations through {}", found.len(), focus);
                let shown = match all {
                    true => found,
                    false => Combination::sample(&found, *limit, rng),
                };
                if shown.is_empty() {
                    println!("no combinations through {}", focus);
                    return Ok(());
                }
                for combination in shown.iter() {
                    let moves = [combination.before(), combination.focus(), combination.after()];
                    self.show(combination, moves.map(Move::clone).as_slice())?;
                }
                self.keep(&format!("focus {}", focus), &shown)
            }
            Command::Moves => {
                for m in graph.moves() {
                    let n = graph.successors(m).len();
                    match m.is_posture() {
                        true => println!("{:<24} {}", m.as_str().bold(), n),
                        false => println!("{:<24} {}", m.as_str(), n),
                    }
                }
                Ok(())
            }
        }
    }

    fn show<T>(&self, item: &T, moves: &[Move]) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        match self.json {
            true => println!("{}", serde_json::to_string(item)?),
            false => println!("{}", paint(moves)),
        }
        Ok(())
    }

    /// Append to the notes document when configured, asking first unless
    /// `--record` was given.
    fn keep<T>(&self, title: &str, items: &[T]) -> anyhow::Result<()>
    where
        T: std::fmt::Display,
    {
        let Some(ref path) = self.notes else {
            return Ok(());
        };
        if items.is_empty() {
            return Ok(());
        }
        let notes = Notes::new(path);
        let attended = std::io::stdin().is_terminal();
        match Consent::from((self.record, attended)) {
            Consent::Granted => notes.record(title, items),
            Consent::Ask => match dialoguer::Confirm::new()
                .with_prompt(format!("Record to {}?", notes.path().display()))
                .default(false)
                .interact()?
            {
                true => notes.record(title, items),
                false => Ok(()),
            },
            Consent::Skipped => {
                log::warn!(
                    "not recording to {} without a terminal, pass --record",
                    notes.path().display()
                );
                Ok(())
            }
        }
    }
}

/// Whether results may be appended to the notes document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Consent {
    Granted,
    Ask,
    Skipped,
}

/// From (`--record` given, stdin is a terminal).
impl From<(bool, bool)> for Consent {
    fn from((record, attended): (bool, bool)) -> Self {
        match (record, attended) {
            (true, _) => Self::Granted,
            (false, true) => Self::Ask,
            (false, false) => Self::Skipped,
        }
    }
}

/// Arrow-joined moves with postures emphasized.
fn paint(moves: &[Move]) -> String {
    let arrow = ARROW.dimmed().to_string();
    moves
        .iter()
        .map(|m| match m.is_posture() {
            true => m.as_str().bold().to_string(),
            false => m.as_str().to_string(),
        })
        .collect::<Vec<_>>()
        .join(arrow.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_flag_skips_the_prompt() {
        assert_eq!(Consent::from((true, true)), Consent::Granted);
        assert_eq!(Consent::from((true, false)), Consent::Granted);
    }

    #[test]
    fn unattended_runs_never_prompt() {
        assert_eq!(Consent::from((false, true)), Consent::Ask);
        assert_eq!(Consent::from((false, false)), Consent::Skipped);
    }

    #[test]
    fn sequence_flags_parse() {
        let cli = Cli::try_parse_from(["movegen", "sequence", "--min", "2", "--max", "3", "--open"]).unwrap();
        match cli.command {
            Command::Sequence { min, max, open, .. } => assert_eq!((min, max, open), (2, 3, true)),
            _ => panic!("expected sequence"),
        }
    }
}
