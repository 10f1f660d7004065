pub use commands::*;
pub use critter::*;
pub use domain::*;
pub use loading::*;
pub use queries::*;
pub use update::*;

mod commands;
mod critter;
mod domain;
mod loading;
mod queries;
mod update;
