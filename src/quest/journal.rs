//! Append-only JSON-lines journal of quest acceptance and completion.
use std::{
    fs::{create_dir_all, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use bevy::{log::warn, prelude::*};
use serde::Serialize;

use crate::core::paths::ConfigPaths;

use super::types::QuestRecord;

/// Single journal line.
#[derive(Debug, Clone, Serialize)]
pub struct QuestJournalRecord {
    pub occurred_at_seconds: f64,
    pub event: QuestJournalEvent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum QuestJournalEvent {
    Accepted { description: String, target: String },
    Completed { description: String, target: String },
}

impl QuestJournalEvent {
    pub fn accepted(record: &QuestRecord) -> Self {
        Self::Accepted {
            description: record.description.clone(),
            target: record.target.clone(),
        }
    }

    pub fn completed(record: &QuestRecord) -> Self {
        Self::Completed {
            description: record.description.clone(),
            target: record.target.clone(),
        }
    }
}

/// Buffers journal records and appends them to disk once per frame.
#[derive(Resource, Debug)]
pub struct QuestJournal {
    output_path: PathBuf,
    pending: Vec<QuestJournalRecord>,
}

impl QuestJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
            pending: Vec::new(),
        }
    }

    pub fn push(&mut self, occurred_at_seconds: f64, event: QuestJournalEvent) {
        self.pending.push(QuestJournalRecord {
            occurred_at_seconds,
            event,
        });
    }

    fn ensure_directory(&self) -> std::io::Result<()> {
        if let Some(parent) = self.output_path.parent() {
            create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        self.ensure_directory()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output_path)?;

        for record in std::mem::take(&mut self.pending) {
            serde_json::to_writer(&mut file, &record)?;
            file.write_all(b"\n")?;
        }

        file.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.output_path
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl FromWorld for QuestJournal {
    fn from_world(world: &mut World) -> Self {
        let path = world
            .get_resource::<ConfigPaths>()
            .map(|paths| paths.quest_journal.clone())
            .unwrap_or_else(|| ConfigPaths::default().quest_journal);
        Self::new(path)
    }
}

/// Flushes pending journal entries, logging a warning if persistence fails.
pub fn flush_quest_journal(mut journal: ResMut<QuestJournal>) {
    if journal.pending.is_empty() {
        return;
    }

    if let Err(err) = journal.flush() {
        warn!(
            target: "quest",
            "Failed to append quest journal to {:?}: {}",
            journal.path(),
            err
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::types::QuestTemplate;
    use serde_json::Value;
    use std::{env, fs, time::SystemTime};

    fn temp_journal_path(tag: &str) -> PathBuf {
        let unique_suffix = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        env::temp_dir().join(format!("quest_journal_{}_{}.jsonl", tag, unique_suffix))
    }

    #[test]
    fn journal_writes_json_lines() {
        let path = temp_journal_path("lines");
        let mut journal = QuestJournal::new(&path);
        let record = QuestRecord::from_template(&QuestTemplate::new(
            "Find and talk to Explorer",
            "Explorer",
        ));

        journal.push(4.5, QuestJournalEvent::accepted(&record));
        journal.push(9.0, QuestJournalEvent::completed(&record));
        journal.flush().expect("journal should flush");
        assert_eq!(journal.pending_len(), 0);

        let raw = fs::read_to_string(&path).expect("journal file should exist");
        let lines: Vec<_> = raw.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Value = serde_json::from_str(lines[0]).expect("json line should parse");
        assert_eq!(first["occurred_at_seconds"], 4.5);
        assert_eq!(first["event"]["event_type"], "accepted");
        assert_eq!(first["event"]["target"], "Explorer");

        let second: Value = serde_json::from_str(lines[1]).expect("json line should parse");
        assert_eq!(second["event"]["event_type"], "completed");
        assert_eq!(second["event"]["description"], "Find and talk to Explorer");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn empty_flush_does_not_create_file() {
        let path = temp_journal_path("empty");
        let mut journal = QuestJournal::new(&path);
        journal.flush().expect("empty flush is a no-op");
        assert!(!path.exists());
    }
}
