pub use storage::*;

mod storage;
