extern crate alloc;

pub mod ai;
pub mod battle;
pub mod common;
pub mod error;
pub mod log;

pub mod rng {
    pub use rift_prng::*;
}

pub use rift_data as data;
