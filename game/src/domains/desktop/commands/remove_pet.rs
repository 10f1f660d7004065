use log::error;

use crate::desktop::Desktop::PetRemoved;
use crate::desktop::{Desktop, DesktopDomain, DesktopError, PetId};

impl DesktopDomain {
    pub fn remove_pet(
        &mut self,
        id: PetId,
    ) -> Result<impl FnOnce() -> Vec<Desktop> + '_, DesktopError> {
        let index = self
            .pets
            .iter()
            .position(|pet| pet.id == id)
            .ok_or(DesktopError::PetNotFound { id })?;
        let command = move || {
            let pet = self.pets.remove(index);
            if let Err(error) = self.storage.delete_desktop_pet(id) {
                error!("Unable to delete desktop pet {:?}, {:?}", id, error);
            }
            vec![PetRemoved {
                id,
                creature: pet.kind.id,
            }]
        };
        Ok(command)
    }
}
