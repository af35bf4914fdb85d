pub mod roster;
pub mod seed;

pub use roster::RosterContext;
