use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, warn};

/// One line of the score file: `<name> <score>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    /// May contain spaces. Empty for lines that only hold a number.
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(name: &str, score: u32) -> Self {
        // Keep the entry on a single line
        let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        Self { name, score }
    }

    /// The score is the last whitespace-separated token.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (name, score) = line.rsplit_once(char::is_whitespace).unwrap_or(("", line));
        let score = score.parse().ok()?;
        Some(Self::new(name, score))
    }
}

impl std::fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.score)
        } else {
            write!(f, "{} {}", self.name, self.score)
        }
    }
}

/// The plain-text file holding the human's results.
///
/// The first line is the best score. The lines below it are earlier
/// results in the order they were played.
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The score on the first line, or 0 if there is none.
    ///
    /// A missing, unreadable or malformed file counts as "no high score yet",
    /// so this never fails.
    pub fn read_high_score(&self) -> u32 {
        let text = match self.read_to_string() {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %self.path.display(), "Could not read score file: {:#}", err);
                return 0;
            }
        };
        let first_line = text.lines().next().unwrap_or_default();
        match ScoreEntry::parse(first_line) {
            Some(entry) => entry.score,
            None => {
                if !first_line.trim().is_empty() {
                    warn!(path = %self.path.display(), line = first_line, "Malformed high score");
                }
                0
            }
        }
    }

    /// All well-formed entries, best score first. Malformed lines are skipped.
    pub fn entries(&self) -> anyhow::Result<Vec<ScoreEntry>> {
        Ok(self
            .read_to_string()?
            .lines()
            .filter_map(ScoreEntry::parse)
            .collect())
    }

    /// Puts the entry on the first line, keeping everything else below it.
    pub fn write_high_score(&self, name: &str, score: u32) -> anyhow::Result<()> {
        let rest = self.read_to_string()?;
        let mut writer = BufWriter::new(self.create()?);
        writeln!(writer, "{}", ScoreEntry::new(name, score))?;
        write!(writer, "{}", rest)?;
        if !rest.is_empty() && !rest.ends_with('\n') {
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Adds the entry at the end of the file.
    pub fn append(&self, name: &str, score: u32) -> anyhow::Result<()> {
        let existing = self.read_to_string()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Could not open score file '{}'", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        if !existing.is_empty() && !existing.ends_with('\n') {
            writeln!(writer)?;
        }
        writeln!(writer, "{}", ScoreEntry::new(name, score))?;
        writer.flush()?;
        Ok(())
    }

    /// Stores a finished game's score. Returns whether it is a new high score.
    pub fn record(&self, name: &str, score: u32) -> anyhow::Result<bool> {
        let high_score = self.read_high_score();
        if score > high_score {
            debug!(score, previous = high_score, "New high score");
            self.write_high_score(name, score)?;
            Ok(true)
        } else {
            self.append(name, score)?;
            Ok(false)
        }
    }

    // A missing file reads as empty
    fn read_to_string(&self) -> anyhow::Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(err)
                .with_context(|| format!("Could not read score file '{}'", self.path.display())),
        }
    }

    fn create(&self) -> anyhow::Result<File> {
        File::create(&self.path)
            .with_context(|| format!("Could not write score file '{}'", self.path.display()))
    }
}
