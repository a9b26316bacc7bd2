mod ability_data;

pub use ability_data::{
    AbilityData,
    AbilityEffect,
};
