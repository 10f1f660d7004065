pub use remove_critter::*;
pub use spawn_critter::*;

mod remove_critter;
mod spawn_critter;
