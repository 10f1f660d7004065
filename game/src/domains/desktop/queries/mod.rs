pub use get_pet::*;

mod get_pet;
