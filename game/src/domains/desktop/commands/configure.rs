use crate::desktop::{DesktopDomain, MAX_PETS_LIMIT};

impl DesktopDomain {
    /// Clamped to `[1, MAX_PETS_LIMIT]`. Pets above a lowered limit stay until removed.
    pub fn set_max_pets(&mut self, max_pets: usize) {
        self.max_pets = max_pets.clamp(1, MAX_PETS_LIMIT);
    }

    pub fn resize(&mut self, screen: [f32; 2]) {
        self.screen = screen;
    }
}
