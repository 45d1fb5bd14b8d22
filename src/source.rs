//! Loading a transition graph from disk.
//!
//! Two formats are understood:
//!
//! - **JSON**: an object mapping each move to an array of its successors,
//!   e.g. `{"squat": ["kneel"], "kneel": ["squat", "crawl"]}`. Key order is
//!   kept.
//! - **Markdown**: notes where each `## heading` names a move and each `- `
//!   bullet below it names a successor. Wiki links (`[[kneel]]`,
//!   `[[kneel|Kneeling]]`) resolve to their target.
use crate::Graph;
use crate::Move;
use anyhow::Context;
use std::path::Path;

/// On-disk graph format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Markdown,
}

impl TryFrom<&Path> for Format {
    type Error = anyhow::Error;
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("md") | Some("markdown") => Ok(Self::Markdown),
            _ => Err(anyhow::anyhow!(
                "unrecognized graph format: {}",
                path.display()
            )),
        }
    }
}

impl Format {
    pub fn parse(&self, text: &str) -> anyhow::Result<Graph> {
        match self {
            Self::Json => json(text),
            Self::Markdown => markdown(text),
        }
    }
}

/// Read and parse a graph file, warning about moves a walk cannot leave and
/// postures a walk cannot start from.
pub fn load(path: &Path) -> anyhow::Result<Graph> {
    let format = Format::try_from(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading graph {}", path.display()))?;
    let graph = format
        .parse(&text)
        .with_context(|| format!("parsing graph {}", path.display()))?;
    log::info!(
        "loaded {} moves and {} transitions from {}",
        graph.len(),
        graph.transitions(),
        path.display()
    );
    for m in graph.dead_ends() {
        log::warn!("{} has no successors", m);
    }
    for p in graph.missing_postures() {
        log::warn!("posture {} is missing from the graph", p);
    }
    Ok(graph)
}

fn json(text: &str) -> anyhow::Result<Graph> {
    let object = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(text)
        .context("expected an object of move -> [moves]")?;
    object
        .into_iter()
        .map(|(key, value)| {
            serde_json::from_value::<Vec<Move>>(value)
                .with_context(|| format!("successors of {}", key))
                .map(|nexts| (Move::from(key), nexts))
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .map(Graph::from_iter)
}

fn markdown(text: &str) -> anyhow::Result<Graph> {
    let mut rows = Vec::<(Move, Vec<Move>)>::new();
    let mut current = None::<usize>;
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if let Some(heading) = line.strip_prefix("## ") {
            rows.push((name(heading), Vec::new()));
            current = Some(rows.len() - 1);
        } else if line.starts_with('#') {
            current = None;
        } else if let Some(item) = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
        {
            current
                .and_then(|j| rows.get_mut(j))
                .ok_or_else(|| anyhow::anyhow!("line {}: successor outside any move", i + 1))?
                .1
                .push(name(item));
        }
    }
    Ok(Graph::from_iter(rows))
}

/// Normalize a heading or bullet to a move name.
fn name(raw: &str) -> Move {
    let raw = raw.trim();
    let raw = raw
        .strip_prefix("[[")
        .and_then(|s| s.strip_suffix("]]"))
        .map(|link| link.split('|').next().unwrap_or(link))
        .unwrap_or(raw);
    Move::from(raw.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(moves: Vec<&Move>) -> Vec<&str> {
        moves.into_iter().map(Move::as_str).collect()
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::try_from(Path::new("moves.json")).unwrap(), Format::Json);
        assert_eq!(Format::try_from(Path::new("vault/Moves.md")).unwrap(), Format::Markdown);
        assert!(Format::try_from(Path::new("moves.yaml")).is_err());
        assert!(Format::try_from(Path::new("moves")).is_err());
    }

    #[test]
    fn json_keeps_key_order() {
        let graph = json(r#"{"stand": ["lunge"], "kneel": ["squat", "crawl"], "crawl": []}"#).unwrap();
        assert_eq!(names(graph.moves().collect()), ["stand", "kneel", "crawl", "lunge", "squat"]);
        assert_eq!(names(graph.successors(&Move::from("kneel"))), ["squat", "crawl"]);
    }

    #[test]
    fn json_rejects_bad_shapes() {
        assert!(json("[]").is_err());
        assert!(json(r#"{"stand": "lunge"}"#).is_err());
        assert!(json(r#"{"stand": [1]}"#).is_err());
        assert!(json("{").is_err());
    }

    #[test]
    fn markdown_headings_and_bullets() {
        let text = "\
# Moves

## Squat
- [[Kneel]]
- [[deep squat|Deep Squat]]

## Kneel
some prose that is ignored
* squat
* Crawl
";
        let graph = markdown(text).unwrap();
        assert_eq!(names(graph.successors(&Move::from("squat"))), ["kneel", "deep squat"]);
        assert_eq!(names(graph.successors(&Move::from("kneel"))), ["squat", "crawl"]);
        assert!(graph.successors(&Move::from("deep squat")).is_empty());
    }

    #[test]
    fn markdown_rejects_orphan_bullets() {
        assert!(markdown("- kneel\n## squat\n").is_err());
    }

    #[test]
    fn markdown_subheadings_end_the_move() {
        assert!(markdown("## squat\n- kneel\n### cues\n- knees out\n").is_err());
        let graph = markdown("## squat\n- kneel\n### cues\n\n## kneel\n- squat\n").unwrap();
        assert_eq!(names(graph.successors(&Move::from("squat"))), ["kneel"]);
        assert_eq!(names(graph.successors(&Move::from("kneel"))), ["squat"]);
    }

    #[test]
    fn bundled_graph_is_complete() {
        let graph = json(include_str!("../moves.json")).unwrap();
        assert!(graph.missing_postures().is_empty());
        assert!(graph.dead_ends().is_empty());
    }

    #[test]
    fn load_reads_from_disk() {
        let path = std::env::temp_dir().join(format!("movegen-load-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"squat": ["kneel"], "kneel": ["squat"]}"#).unwrap();
        let graph = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(graph.len(), 2);
        assert!(load(&path).is_err());
    }
}
