use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A persistent status effect that can be inflicted on a combatant.
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
pub enum StatusKind {
    /// Residual damage every round.
    #[string = "burn"]
    #[alias = "brn"]
    Burn,
    /// Residual damage every round.
    #[string = "poison"]
    #[alias = "psn"]
    Poison,
    /// Halves speed.
    #[string = "paralysis"]
    #[alias = "paralyze"]
    #[alias = "par"]
    Paralysis,
    /// Prevents acting.
    #[string = "sleep"]
    #[alias = "slp"]
    Sleep,
    /// Prevents acting.
    #[string = "freeze"]
    #[alias = "frz"]
    Freeze,
}

impl StatusKind {
    /// Number of rounds the status lasts when a move does not say otherwise.
    pub fn default_duration(&self) -> u8 {
        match self {
            Self::Burn | Self::Poison | Self::Paralysis => 5,
            Self::Sleep | Self::Freeze => 3,
        }
    }

    /// Checks if the status prevents the combatant from acting.
    pub fn prevents_action(&self) -> bool {
        matches!(self, Self::Sleep | Self::Freeze)
    }

    /// Checks if the status deals residual damage every round.
    pub fn deals_residual_damage(&self) -> bool {
        matches!(self, Self::Burn | Self::Poison)
    }

    /// The adjective used when describing a combatant with the status.
    pub fn adjective(&self) -> &'static str {
        match self {
            Self::Burn => "burned",
            Self::Poison => "poisoned",
            Self::Paralysis => "paralyzed",
            Self::Sleep => "asleep",
            Self::Freeze => "frozen",
        }
    }
}
