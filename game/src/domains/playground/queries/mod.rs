pub use get_critter::*;

mod get_critter;
