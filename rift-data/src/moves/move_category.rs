use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move, which determines the stats used to calculate damage.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    /// Uses the attacker's Attack and the defender's Defense.
    #[string = "physical"]
    #[default]
    Physical,
    /// Uses the attacker's Special Attack and the defender's Special Defense.
    #[string = "special"]
    Special,
    /// Deals no damage.
    #[string = "status"]
    Status,
}
