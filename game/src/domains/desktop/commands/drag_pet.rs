use log::error;

use crate::desktop::Desktop::{PetPlaced, PetStateChanged};
use crate::desktop::{Desktop, DesktopDomain, DesktopError, PetId, PetState, DRAG_REST_DURATION};

impl DesktopDomain {
    pub fn start_dragging(
        &mut self,
        id: PetId,
    ) -> Result<impl FnOnce() -> Vec<Desktop> + '_, DesktopError> {
        let pet = self.get_pet_mut(id)?;
        let command = move || {
            pet.state = PetState::Dragging;
            vec![PetStateChanged {
                id,
                state: PetState::Dragging,
            }]
        };
        Ok(command)
    }

    /// Follows the pointer, ignored unless the pet is being dragged.
    pub fn drag_pet(&mut self, id: PetId, position: [f32; 2]) -> Result<(), DesktopError> {
        let pet = self.get_pet_mut(id)?;
        if pet.state == PetState::Dragging {
            pet.position = position;
        }
        Ok(())
    }

    /// Drops the pet onto the ground line and persists where it landed.
    pub fn stop_dragging(
        &mut self,
        id: PetId,
    ) -> Result<impl FnOnce() -> Vec<Desktop> + '_, DesktopError> {
        let ground = self.ground_line();
        let right_edge = self.right_edge();
        let index = self
            .pets
            .iter()
            .position(|pet| pet.id == id)
            .ok_or(DesktopError::PetNotFound { id })?;
        let command = move || {
            let pet = &mut self.pets[index];
            if pet.state != PetState::Dragging {
                return vec![];
            }
            pet.state = PetState::Idle;
            pet.state_timer = DRAG_REST_DURATION;
            pet.position = [pet.position[0].clamp(0.0, right_edge), ground];
            let record = pet.record();
            if let Err(error) = self.storage.save_desktop_pet(&record) {
                error!("Unable to save position of desktop pet {:?}, {:?}", id, error);
            }
            vec![
                PetStateChanged {
                    id,
                    state: PetState::Idle,
                },
                PetPlaced {
                    id,
                    position: record.position,
                },
            ]
        };
        Ok(command)
    }
}
