use log::{error, warn};
use std::rc::Rc;

use crate::desktop::Desktop::PetAdded;
use crate::desktop::{
    Desktop, DesktopDomain, DesktopError, DesktopPet, PetId, PetState,
};
use crate::hatching::CreatureKind;
use crate::math::Random;

impl DesktopDomain {
    pub fn add_pet(
        &mut self,
        kind: Rc<CreatureKind>,
        random: &mut Random,
    ) -> Result<(PetId, impl FnOnce() -> Vec<Desktop> + '_), DesktopError> {
        if !self.can_add_pet() {
            warn!("Unable to add {}, desktop already has {} pets", kind.name, self.max_pets);
            return Err(DesktopError::PetLimitReached {
                max: self.max_pets,
            });
        }
        if self.find_pet(kind.id).is_some() {
            warn!("Unable to add {}, already on desktop", kind.name);
            return Err(DesktopError::PetAlreadyPresent { creature: kind.id });
        }
        let id = PetId(self.pets_id + 1);
        let x = random.range(100.0, (self.screen[0] - 100.0).max(100.0));
        let position = [x.min(self.right_edge()), self.ground_line()];
        let direction = random.sign();
        let state_timer = random.range(1.0, 3.0);
        let command = move || {
            let pet = DesktopPet {
                id,
                kind,
                position,
                state: PetState::Idle,
                state_timer,
                direction,
                animation: 0.0,
            };
            if let Err(error) = self.storage.save_desktop_pet(&pet.record()) {
                error!("Unable to save desktop pet {:?}, {:?}", id, error);
            }
            let creature = pet.kind.id;
            self.pets.push(pet);
            self.pets_id += 1;
            vec![PetAdded {
                id,
                creature,
                position,
            }]
        };
        Ok((id, command))
    }
}
