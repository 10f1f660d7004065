use log::info;

use crate::math::Random;
use crate::progression::Progression::EggCreated;
use crate::progression::{
    Egg, Progression, ProgressionDomain, ELEMENTAL_EGGS, LEGENDARY_EGG, LEGENDARY_EGG_CHANCE,
    MAX_REQUIRED_COUNT, MIN_REQUIRED_COUNT,
};

impl ProgressionDomain {
    pub fn create_new_egg(&mut self, random: &mut Random) -> Vec<Progression> {
        let kind = if random.chance(LEGENDARY_EGG_CHANCE) {
            &LEGENDARY_EGG
        } else {
            random.pick(&ELEMENTAL_EGGS).unwrap_or(&ELEMENTAL_EGGS[0])
        };
        let required_count = random.between(MIN_REQUIRED_COUNT, MAX_REQUIRED_COUNT);
        self.egg = Egg::from_kind(kind, required_count);
        self.ready_announced = false;
        self.pending_time = 0.0;
        self.save_egg();
        info!("Create {} requiring {}", self.egg.name, required_count);
        vec![
            EggCreated {
                name: self.egg.name.clone(),
                element: self.egg.element,
                legendary: self.egg.legendary,
                required_count,
            },
            self.egg_updated(),
        ]
    }
}
