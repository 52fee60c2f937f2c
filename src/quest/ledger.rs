//! Ordered, append-only list of accepted quests.
use bevy::prelude::*;

use super::types::{QuestRecord, QuestTemplate};

/// Quests accepted during the session, in acceptance order. Records are never removed.
#[derive(Resource, Debug, Default, Clone)]
pub struct QuestLedger {
    records: Vec<QuestRecord>,
}

impl QuestLedger {
    /// Appends a fresh copy of `template`.
    ///
    /// Returns the new record, or `None` when there is no template or it is already completed.
    /// Accepting the same template twice appends two records.
    pub fn accept(&mut self, template: Option<&QuestTemplate>) -> Option<&QuestRecord> {
        let template = template?;
        if template.completed {
            return None;
        }

        self.records.push(QuestRecord::from_template(template));
        self.records.last()
    }

    /// Marks every record targeting `npc_name` as completed.
    ///
    /// Returns copies of the records whose flag flipped during this call.
    pub fn mark_completed(&mut self, npc_name: &str) -> Vec<QuestRecord> {
        let mut newly_completed = Vec::new();
        for record in self.records.iter_mut().filter(|r| r.target == npc_name) {
            if !record.completed {
                record.completed = true;
                newly_completed.push(record.clone());
            }
        }
        newly_completed
    }

    pub fn has_open_quest_for(&self, npc_name: &str) -> bool {
        self.records
            .iter()
            .any(|record| record.target == npc_name && !record.completed)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn records(&self) -> &[QuestRecord] {
        &self.records
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Quest log text: one `"{description} - {✅|❌}"` line per record in insertion order.
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(QuestRecord::log_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
