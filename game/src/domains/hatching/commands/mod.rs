pub use record_input::*;
pub use try_hatch::*;

mod record_input;
mod try_hatch;
