use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single stat value.
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
pub enum Stat {
    #[string = "hp"]
    HP,
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

impl Stat {
    /// Every stat, in table order.
    pub const ALL: [Stat; 6] = [
        Self::HP,
        Self::Atk,
        Self::Def,
        Self::SpAtk,
        Self::SpDef,
        Self::Spe,
    ];
}

/// Raw stat values of an Echo, as they enter a battle.
///
/// Missing stats deserialize to zero, so validation catches an Echo with no HP.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StatTable {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

impl StatTable {
    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    fn get_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        *self.get_mut(stat) = value;
    }

    /// Every stat paired with its value, in [`Stat::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }
}

impl FromIterator<(Stat, u32)> for StatTable {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (Stat, u32)>,
    {
        iter.into_iter()
            .fold(Self::default(), |mut table, (stat, value)| {
                table.set(stat, value);
                table
            })
    }
}
