use std::mem::take;
use std::rc::Rc;

use crate::hatching::CreatureKind;
use crate::math::Random;
use crate::playground::Playground::CritterVanished;
use crate::playground::{Bounds, Playground, PlaygroundDomain};

impl PlaygroundDomain {
    /// Drops any previous session and spawns the roster inside a `width` x `height` area.
    pub fn load_critters(
        &mut self,
        width: f32,
        height: f32,
        roster: Vec<Rc<CreatureKind>>,
        random: &mut Random,
    ) -> Vec<Playground> {
        let mut events = self.clear();
        self.bounds = Bounds::from_area(width, height);
        for kind in roster {
            let (_, spawn) = self.spawn_critter(kind, random);
            events.extend(spawn());
        }
        events
    }

    pub fn clear(&mut self) -> Vec<Playground> {
        self.effects.clear();
        take(&mut self.critters)
            .into_iter()
            .map(|critter| CritterVanished { id: critter.id })
            .collect()
    }
}
