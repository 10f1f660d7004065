pub use collection::*;
pub use pick::*;

mod collection;
mod pick;
