use crate::desktop::Desktop::PetStateChanged;
use crate::desktop::{Desktop, DesktopDomain, DesktopError, PetId, PetState, CLICK_DURATION};

impl DesktopDomain {
    /// Plays the click jump unless the pet is being dragged.
    pub fn click_pet(
        &mut self,
        id: PetId,
    ) -> Result<impl FnOnce() -> Vec<Desktop> + '_, DesktopError> {
        let pet = self.get_pet_mut(id)?;
        let command = move || {
            if pet.state == PetState::Dragging {
                return vec![];
            }
            pet.state = PetState::Clicked;
            pet.state_timer = CLICK_DURATION;
            vec![PetStateChanged {
                id,
                state: PetState::Clicked,
            }]
        };
        Ok(command)
    }
}
