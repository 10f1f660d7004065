use crate::desktop::{DesktopDomain, DesktopError, DesktopPet, PetId};
use crate::hatching::CreatureKey;

impl DesktopDomain {
    pub fn get_pet(&self, id: PetId) -> Result<&DesktopPet, DesktopError> {
        self.pets
            .iter()
            .find(|pet| pet.id == id)
            .ok_or(DesktopError::PetNotFound { id })
    }

    pub fn get_pet_mut(&mut self, id: PetId) -> Result<&mut DesktopPet, DesktopError> {
        self.pets
            .iter_mut()
            .find(|pet| pet.id == id)
            .ok_or(DesktopError::PetNotFound { id })
    }

    pub fn find_pet(&self, creature: CreatureKey) -> Option<&DesktopPet> {
        self.pets.iter().find(|pet| pet.kind.id == creature)
    }

    #[inline]
    pub fn can_add_pet(&self) -> bool {
        self.pets.len() < self.max_pets
    }
}
