pub use add_progress::*;
pub use create_egg::*;

mod add_progress;
mod create_egg;
