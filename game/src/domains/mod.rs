pub mod desktop;
pub mod hatching;
pub mod playground;
pub mod progression;
