use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// A stat that can be boosted or dropped in stages during battle.
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
pub enum Boost {
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "spatk"]
    #[alias = "Special Attack"]
    SpAtk,
    #[string = "spd"]
    #[alias = "spdef"]
    #[alias = "Special Defense"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
}

impl Boost {
    /// Every boostable stat.
    pub const ALL: [Boost; 5] = [
        Self::Atk,
        Self::Def,
        Self::SpAtk,
        Self::SpDef,
        Self::Spe,
    ];
}

impl From<Boost> for Stat {
    fn from(value: Boost) -> Self {
        match value {
            Boost::Atk => Self::Atk,
            Boost::Def => Self::Def,
            Boost::SpAtk => Self::SpAtk,
            Boost::SpDef => Self::SpDef,
            Boost::Spe => Self::Spe,
        }
    }
}

/// A change of stages for a single boostable stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostChange {
    pub boost: Boost,
    pub stages: i8,
}
