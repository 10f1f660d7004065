use std::rc::Rc;

use crate::hatching::CreatureKind;
use crate::math::Random;
use crate::playground::Playground::CritterAppeared;
use crate::playground::{
    Critter, CritterId, Pattern, Playground, PlaygroundDomain, Posture, MOVE_SPEED,
};

impl PlaygroundDomain {
    pub fn spawn_critter(
        &mut self,
        kind: Rc<CreatureKind>,
        random: &mut Random,
    ) -> (CritterId, impl FnOnce() -> Vec<Playground> + '_) {
        let id = CritterId(self.critters_id + 1);
        let span = self.bounds.right_edge() - self.bounds.min_x;
        let position = [
            self.bounds.min_x + random.max(span),
            self.bounds.ground_y,
        ];
        let direction = random.sign();
        let velocity = [direction * random.max(MOVE_SPEED), 0.0];
        let command = move || {
            let creature = kind.id;
            self.critters.push(Critter {
                id,
                kind,
                position,
                velocity,
                direction,
                pattern: Pattern::Walk,
                pattern_timer: 0.0,
                on_ground: true,
                posture: Posture::Upright,
                rotation: 0.0,
                scale_y: 1.0,
                shadow_scale: 1.0,
            });
            self.critters_id += 1;
            vec![CritterAppeared {
                id,
                creature,
                position,
            }]
        };
        (id, command)
    }
}
