pub use collision::*;
pub use random::*;
pub use vector::*;

mod collision;
mod random;
mod vector;
