use anyhow::Context;
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// A markdown notes document that practice results are appended to.
#[derive(Debug, Clone)]
pub struct Notes {
    path: PathBuf,
}

impl Notes {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append today's entry, creating the document if needed.
    pub fn record<T>(&self, title: &str, items: &[T]) -> anyhow::Result<()>
    where
        T: std::fmt::Display,
    {
        let today = chrono::Local::now().date_naive();
        let entry = Self::entry(today, title, items);
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening notes {}", self.path.display()))?;
        file.write_all(entry.as_bytes())
            .with_context(|| format!("writing notes {}", self.path.display()))?;
        log::info!("recorded {} {} to {}", items.len(), title, self.path.display());
        Ok(())
    }

    /// `## Practice <date> (<title>)` followed by one bullet per item.
    pub fn entry<T>(date: NaiveDate, title: &str, items: &[T]) -> String
    where
        T: std::fmt::Display,
    {
        std::iter::once(format!("\n## Practice {} ({})\n", date.format("%Y-%m-%d"), title))
            .chain(items.iter().map(|item| format!("- {}\n", item)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_layout() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let entry = Notes::entry(date, "sequences", &["squat -> kneel", "stand -> lunge"]);
        assert_eq!(
            entry,
            "\n## Practice 2024-03-09 (sequences)\n- squat -> kneel\n- stand -> lunge\n"
        );
    }

    #[test]
    fn record_appends() {
        let path = std::env::temp_dir().join(format!("movegen-notes-{}.md", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let notes = Notes::new(&path);
        notes.record("sequences", &["squat -> kneel"]).unwrap();
        notes.record("focus kneel", &["squat -> kneel -> crawl"]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text.matches("## Practice").count(), 2);
        assert!(text.contains("- squat -> kneel\n"));
        assert!(text.contains("(focus kneel)\n- squat -> kneel -> crawl\n"));
    }

    #[test]
    fn record_fails_on_missing_directory() {
        let notes = Notes::new(std::env::temp_dir().join("movegen-missing-dir/notes.md"));
        assert!(notes.record("sequences", &["squat"]).is_err());
    }
}
