use log::info;
use std::rc::Rc;

use crate::desktop::{DesktopDomain, DesktopPet, PetState, DEFAULT_MAX_PETS, DEFAULT_SCREEN};
use crate::hatching::CreatureKind;
use crate::math::Random;
use crate::persistence::{Persistence, PetRecord};

impl DesktopDomain {
    pub fn new(storage: Rc<dyn Persistence>) -> Self {
        Self {
            pets_id: 0,
            pets: vec![],
            max_pets: DEFAULT_MAX_PETS,
            screen: DEFAULT_SCREEN,
            storage,
        }
    }

    /// Restores stored pets at their saved spot, clamped onto the current screen.
    pub fn load_pets(
        &mut self,
        pets: Vec<(PetRecord, Rc<CreatureKind>)>,
        sequence: usize,
        random: &mut Random,
    ) {
        self.pets_id = sequence;
        let right_edge = self.right_edge();
        let ground = self.ground_line();
        for (record, kind) in pets {
            let [x, y] = record.position;
            self.pets.push(DesktopPet {
                id: record.id,
                kind,
                position: [x.clamp(0.0, right_edge), y.clamp(0.0, ground)],
                state: PetState::Idle,
                state_timer: random.range(1.0, 3.0),
                direction: random.sign(),
                animation: 0.0,
            });
        }
        info!("Load {} desktop pets", self.pets.len());
    }
}
