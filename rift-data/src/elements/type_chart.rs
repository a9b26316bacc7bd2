use std::fmt;

use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};

use crate::Element;

/// Type effectiveness of one element against another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeEffectiveness {
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// The damage multiplier for this effectiveness.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Weak => 0.5,
            Self::Normal => 1.0,
            Self::Strong => 2.0,
        }
    }

    /// Converts a raw multiplier into the closest effectiveness.
    pub fn from_multiplier(value: f64) -> Self {
        if value <= 0.5 {
            Self::Weak
        } else if value <= 1.0 {
            Self::Normal
        } else {
            Self::Strong
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Weak => serializer.serialize_f64(self.multiplier()),
            Self::Normal | Self::Strong => serializer.serialize_u32(self.multiplier() as u32),
        }
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        self.visit_f64(v as f64)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        self.visit_f64(v as f64)
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if v <= 0.0 {
            return Err(E::invalid_value(serde::de::Unexpected::Float(v), &self));
        }
        Ok(TypeEffectiveness::from_multiplier(v))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(TypeEffectivenessVisitor)
    }
}

/// Effectiveness of every attacking element (rows) against every defending element (columns).
///
/// Both axes follow [`Element::ALL`].
pub const TYPE_CHART: [[TypeEffectiveness; 7]; 7] = {
    use TypeEffectiveness::{
        Normal as N,
        Strong as S,
        Weak as W,
    };
    [
        // fire
        [W, W, S, S, N, N, N],
        // water
        [S, W, W, S, N, N, N],
        // wind
        [W, S, W, W, N, N, N],
        // earth
        [W, W, S, W, N, N, N],
        // light
        [N, N, N, N, W, S, N],
        // dark
        [N, N, N, N, S, W, N],
        // neutral
        [N, N, N, N, N, N, N],
    ]
};

/// Looks up the effectiveness of an attacking element against a defending element.
pub fn effectiveness(attacker: Element, defender: Element) -> TypeEffectiveness {
    TYPE_CHART[attacker as usize][defender as usize]
}
