mod status;

pub use status::StatusKind;
