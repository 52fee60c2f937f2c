//! Quest templates owned by NPC descriptors and the records copied from them.
use serde::Deserialize;

/// Quest offered by an NPC. Immutable once the registry is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestTemplate {
    pub description: String,
    /// Name of the NPC that completes the quest.
    pub target: String,
    #[serde(default)]
    pub completed: bool,
}

impl QuestTemplate {
    pub fn new(description: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            target: target.into(),
            completed: false,
        }
    }
}

/// Accepted quest tracked by the ledger, independent of the template it was copied from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestRecord {
    pub description: String,
    pub target: String,
    pub completed: bool,
}

impl QuestRecord {
    pub fn from_template(template: &QuestTemplate) -> Self {
        Self {
            description: template.description.clone(),
            target: template.target.clone(),
            completed: false,
        }
    }

    pub fn status_icon(&self) -> &'static str {
        if self.completed {
            "✅"
        } else {
            "❌"
        }
    }

    /// Single quest log line, e.g. `Find and talk to Explorer - ❌`.
    pub fn log_line(&self) -> String {
        format!("{} - {}", self.description, self.status_icon())
    }
}
