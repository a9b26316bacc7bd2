use std::{
    fmt::Display,
    mem,
};

use itertools::Itertools;
use rift_data::StatusKind;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The kind of event recorded in a [`BattleLogEntry`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum LogKind {
    #[string = "attack"]
    Attack,
    #[string = "defend"]
    Defend,
    #[string = "ability"]
    Ability,
    #[string = "switch"]
    Switch,
    #[string = "item"]
    Item,
    #[string = "escape"]
    Escape,
    /// Residual effect of a status at the start of a round.
    #[string = "residual"]
    Residual,
    /// A combatant could not act due to its status.
    #[string = "immobilized"]
    Immobilized,
    /// A reserve entered the battle to replace a defeated combatant.
    #[string = "enter"]
    Enter,
    /// The battle ended.
    #[string = "end"]
    End,
}

/// A single resolved battle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLogEntry {
    pub round: u64,
    /// Milliseconds, as reported by the battle clock.
    pub timestamp: u128,
    pub kind: LogKind,
    /// Position of the acting combatant.
    pub actor: Option<usize>,
    /// Position of the targeted combatant.
    pub target: Option<usize>,
    #[serde(default)]
    pub damage: u32,
    #[serde(default)]
    pub healing: u32,
    /// Status applied to the target.
    pub status: Option<StatusKind>,
    /// Human-readable description of the event.
    pub message: String,
}

impl BattleLogEntry {
    /// Creates a new entry with no actor, target, or effect.
    pub fn new(round: u64, timestamp: u128, kind: LogKind, message: String) -> Self {
        Self {
            round,
            timestamp,
            kind,
            actor: None,
            target: None,
            damage: 0,
            healing: 0,
            status: None,
            message,
        }
    }

    pub fn with_actor(mut self, actor: usize) -> Self {
        self.actor = Some(actor);
        self
    }

    pub fn with_target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_healing(mut self, healing: u32) -> Self {
        self.healing = healing;
        self
    }

    pub fn with_status(mut self, status: Option<StatusKind>) -> Self {
        self.status = status;
        self
    }
}

/// Compact, machine-readable form of the entry.
///
/// Fields are separated by `|`. Optional fields are omitted when empty.
impl Display for BattleLogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = vec![self.kind.to_string(), format!("round:{}", self.round)];
        if let Some(actor) = self.actor {
            parts.push(format!("actor:{actor}"));
        }
        if let Some(target) = self.target {
            parts.push(format!("target:{target}"));
        }
        if self.damage > 0 {
            parts.push(format!("damage:{}", self.damage));
        }
        if self.healing > 0 {
            parts.push(format!("healing:{}", self.healing));
        }
        if let Some(status) = self.status {
            parts.push(format!("status:{status}"));
        }
        write!(f, "{}", parts.into_iter().join("|"))
    }
}

/// The append-only log of a battle.
#[derive(Debug, Default)]
pub struct BattleLog {
    entries: Vec<BattleLogEntry>,
    last_read: usize,
}

impl BattleLog {
    /// Creates a new battle log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Does the log contain new entries since the last call to [`Self::read_out`]?
    pub fn has_new_entries(&self) -> bool {
        self.last_read < self.entries.len()
    }

    /// Pushes a new entry to the log.
    pub fn push(&mut self, entry: BattleLogEntry) {
        ::log::debug!("{entry}");
        self.entries.push(entry)
    }

    /// Returns an iterator over all entries.
    pub fn entries(&self) -> impl Iterator<Item = &BattleLogEntry> {
        self.entries.iter()
    }

    /// Reads out any new entries that have been added since the last call to [`Self::read_out`].
    pub fn read_out(&mut self) -> impl Iterator<Item = &BattleLogEntry> {
        let i = mem::replace(&mut self.last_read, self.entries.len());
        self.entries[i..].iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total damage dealt over the whole battle, including residual damage.
    pub fn total_damage(&self) -> u64 {
        self.entries.iter().map(|entry| entry.damage as u64).sum()
    }

    /// Elapsed time between the first and last entry.
    pub fn duration(&self) -> u128 {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => last.timestamp.saturating_sub(first.timestamp),
            _ => 0,
        }
    }
}
