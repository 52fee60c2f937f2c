//! Single-slot dialogue state machine: `Hidden` or `Showing` one NPC.
use bevy::prelude::*;

use crate::npc::components::NpcId;

/// Player reply to an open dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueResponse {
    Accept,
    Decline,
}

impl DialogueResponse {
    pub const ACCEPT_KEY: &'static str = "y";
    pub const DECLINE_KEY: &'static str = "n";

    /// Maps a lowercase key label to a response; unrecognized keys yield `None`.
    pub fn from_key_label(label: &str) -> Option<Self> {
        match label {
            Self::ACCEPT_KEY => Some(Self::Accept),
            Self::DECLINE_KEY => Some(Self::Decline),
            _ => None,
        }
    }
}

/// Dialogue currently on screen, with the slot holding the first recognized reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDialogue {
    pub npc: NpcId,
    pub speaker: String,
    pub lines: Vec<String>,
    response: Option<DialogueResponse>,
}

impl ActiveDialogue {
    /// Lines joined for display, one per row.
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogueState {
    #[default]
    Hidden,
    Showing(ActiveDialogue),
}

/// A dialogue that was closed by a player reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueOutcome {
    pub npc: NpcId,
    pub speaker: String,
    pub response: DialogueResponse,
}

#[derive(Resource, Debug, Default)]
pub struct DialoguePresenter {
    state: DialogueState,
}

impl DialoguePresenter {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn state(&self) -> &DialogueState {
        &self.state
    }

    pub fn is_showing(&self) -> bool {
        matches!(self.state, DialogueState::Showing(_))
    }

    pub fn showing(&self) -> Option<&ActiveDialogue> {
        match &self.state {
            DialogueState::Showing(active) => Some(active),
            DialogueState::Hidden => None,
        }
    }

    /// `Hidden -> Showing(npc)`. Returns `false` (and changes nothing) while a dialogue is open.
    pub fn open(&mut self, npc: NpcId, speaker: impl Into<String>, lines: Vec<String>) -> bool {
        if self.is_showing() {
            return false;
        }

        self.state = DialogueState::Showing(ActiveDialogue {
            npc,
            speaker: speaker.into(),
            lines,
            response: None,
        });
        true
    }

    /// Fills the response slot. Only the first reply of an open cycle is kept.
    pub fn submit(&mut self, response: DialogueResponse) -> bool {
        match &mut self.state {
            DialogueState::Showing(active) if active.response.is_none() => {
                active.response = Some(response);
                true
            }
            _ => false,
        }
    }

    /// `Showing(npc) -> Hidden` once the slot holds a reply, returning what was answered.
    pub fn resolve(&mut self) -> Option<DialogueOutcome> {
        let response = match &self.state {
            DialogueState::Showing(active) => active.response?,
            DialogueState::Hidden => return None,
        };

        match std::mem::take(&mut self.state) {
            DialogueState::Showing(active) => Some(DialogueOutcome {
                npc: active.npc,
                speaker: active.speaker,
                response,
            }),
            DialogueState::Hidden => None,
        }
    }
}
