pub use add_pet::*;
pub use click_pet::*;
pub use configure::*;
pub use drag_pet::*;
pub use remove_pet::*;

mod add_pet;
mod click_pet;
mod configure;
mod drag_pet;
mod remove_pet;
