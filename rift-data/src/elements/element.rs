use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The element of an Echo or move, which determines its strengths and weaknesses.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Element {
    #[string = "fire"]
    Fire,
    #[string = "water"]
    Water,
    #[string = "wind"]
    #[alias = "air"]
    Wind,
    #[string = "earth"]
    Earth,
    #[string = "light"]
    Light,
    #[string = "dark"]
    #[alias = "shadow"]
    Dark,
    #[string = "neutral"]
    #[alias = "normal"]
    #[default]
    Neutral,
}

impl Element {
    /// Every element, in table order.
    pub const ALL: [Element; 7] = [
        Self::Fire,
        Self::Water,
        Self::Wind,
        Self::Earth,
        Self::Light,
        Self::Dark,
        Self::Neutral,
    ];
}
