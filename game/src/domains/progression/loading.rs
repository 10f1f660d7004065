use log::{error, info};
use std::rc::Rc;

use crate::math::Random;
use crate::persistence::Persistence;
use crate::progression::{Egg, Progression, ProgressionDomain};

impl ProgressionDomain {
    pub fn new(storage: Rc<dyn Persistence>) -> Self {
        Self {
            egg: Egg::default(),
            ready_announced: false,
            pending_time: 0.0,
            storage,
        }
    }

    /// Restores the stored egg or rolls a fresh one when none can be read.
    pub fn load_egg(&mut self, random: &mut Random) -> Vec<Progression> {
        match self.storage.get_current_egg() {
            Ok(Some(egg)) => {
                info!(
                    "Restore egg {} at {}/{}",
                    egg.name, egg.current_count, egg.required_count
                );
                self.egg = egg;
                self.ready_announced = false;
                self.pending_time = 0.0;
                vec![self.egg_updated()]
            }
            Ok(None) => self.create_new_egg(random),
            Err(error) => {
                error!("Unable to load egg, roll a new one in memory, {:?}", error);
                self.create_new_egg(random)
            }
        }
    }
}
