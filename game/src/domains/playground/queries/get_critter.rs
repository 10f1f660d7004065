use crate::hatching::CreatureKey;
use crate::playground::{Critter, CritterId, PlaygroundDomain, PlaygroundError};

impl PlaygroundDomain {
    pub fn get_critter(&self, id: CritterId) -> Result<&Critter, PlaygroundError> {
        self.critters
            .iter()
            .find(|critter| critter.id == id)
            .ok_or(PlaygroundError::CritterNotFound { id })
    }

    pub fn get_critter_mut(&mut self, id: CritterId) -> Result<&mut Critter, PlaygroundError> {
        self.critters
            .iter_mut()
            .find(|critter| critter.id == id)
            .ok_or(PlaygroundError::CritterNotFound { id })
    }

    pub fn find_critter(&self, creature: CreatureKey) -> Option<&Critter> {
        self.critters
            .iter()
            .find(|critter| critter.kind.id == creature)
    }
}
