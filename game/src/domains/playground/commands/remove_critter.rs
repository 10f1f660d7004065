use crate::playground::Playground::CritterVanished;
use crate::playground::{CritterId, Playground, PlaygroundDomain, PlaygroundError};

impl PlaygroundDomain {
    pub fn remove_critter(
        &mut self,
        id: CritterId,
    ) -> Result<impl FnOnce() -> Vec<Playground> + '_, PlaygroundError> {
        let index = self
            .critters
            .iter()
            .position(|critter| critter.id == id)
            .ok_or(PlaygroundError::CritterNotFound { id })?;
        let command = move || {
            self.critters.remove(index);
            vec![CritterVanished { id }]
        };
        Ok(command)
    }
}
