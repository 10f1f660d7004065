use crate::math::{horizontal_direction, test_proximity, Random, VectorMath};
use crate::playground::Playground::{Bumped, EffectVanished, Stomped};
use crate::playground::{
    Critter, CritterId, Effect, EffectId, Playground, PlaygroundDomain, COLLISION_THRESHOLD,
    EFFECT_LIFETIME, EFFECT_SIZE, MAX_ELAPSED_TIME, PUSH_APART_SPEED, STOMP_HEIGHT,
};

enum Contact {
    Stomp {
        stomper: CritterId,
        stomped: CritterId,
        position: [f32; 2],
    },
    Bump {
        id: CritterId,
        other: CritterId,
        position: [f32; 2],
    },
}

impl PlaygroundDomain {
    pub fn update(&mut self, time: f32, random: &mut Random) -> Vec<Playground> {
        let time = time.clamp(0.0, MAX_ELAPSED_TIME);
        let bounds = self.bounds;
        for critter in self.critters.iter_mut() {
            critter.update(time, &bounds, random);
        }
        let mut events = self.detect_collisions();
        events.extend(self.update_effects(time));
        events
    }

    /// Resolves every touching pair once, skipping pairs with a knocked over party.
    pub fn detect_collisions(&mut self) -> Vec<Playground> {
        let mut contacts = vec![];
        let right_edge = self.bounds.right_edge();
        let min_x = self.bounds.min_x;
        for j in 1..self.critters.len() {
            let (left, right) = self.critters.split_at_mut(j);
            let b = &mut right[0];
            for a in left.iter_mut() {
                if a.is_knocked_over() || b.is_knocked_over() {
                    continue;
                }
                if !test_proximity(a.center(), b.center(), COLLISION_THRESHOLD) {
                    continue;
                }
                let position = a.center().add(b.center()).mul(0.5);
                if stomps(a, b) {
                    b.squash();
                    a.bounce_up();
                    contacts.push(Contact::Stomp {
                        stomper: a.id,
                        stomped: b.id,
                        position,
                    });
                } else if stomps(b, a) {
                    a.squash();
                    b.bounce_up();
                    contacts.push(Contact::Stomp {
                        stomper: b.id,
                        stomped: a.id,
                        position,
                    });
                } else if a.on_ground && b.on_ground {
                    push_apart(a, b, min_x, right_edge);
                    contacts.push(Contact::Bump {
                        id: a.id,
                        other: b.id,
                        position,
                    });
                }
            }
        }
        contacts
            .into_iter()
            .map(|contact| match contact {
                Contact::Stomp {
                    stomper,
                    stomped,
                    position,
                } => Stomped {
                    stomper,
                    stomped,
                    effect: self.spawn_effect(position),
                    position,
                },
                Contact::Bump {
                    id,
                    other,
                    position,
                } => Bumped {
                    id,
                    other,
                    effect: self.spawn_effect(position),
                    position,
                },
            })
            .collect()
    }

    pub fn update_effects(&mut self, time: f32) -> Vec<Playground> {
        let mut events = vec![];
        for effect in self.effects.iter_mut() {
            effect.lifetime -= time;
            if effect.lifetime <= 0.0 {
                events.push(EffectVanished { id: effect.id });
            }
        }
        self.effects.retain(|effect| effect.lifetime > 0.0);
        events
    }

    fn spawn_effect(&mut self, center: [f32; 2]) -> EffectId {
        self.effects_id += 1;
        let id = EffectId(self.effects_id);
        let half = EFFECT_SIZE / 2.0;
        self.effects.push(Effect {
            id,
            position: center.sub([half, half]),
            lifetime: EFFECT_LIFETIME,
        });
        id
    }
}

fn stomps(stomper: &Critter, other: &Critter) -> bool {
    !stomper.on_ground
        && stomper.velocity[1] > 0.0
        && stomper.center()[1] < other.center()[1] - STOMP_HEIGHT
}

/// Knocks both parties over and moves them away from each other.
fn push_apart(a: &mut Critter, b: &mut Critter, min_x: f32, right_edge: f32) {
    a.knock_over();
    b.knock_over();
    let direction = horizontal_direction(a.position[0], b.position[0]);
    a.velocity[0] = -direction * PUSH_APART_SPEED;
    b.velocity[0] = direction * PUSH_APART_SPEED;
    let distance = (b.center()[0] - a.center()[0]).abs();
    let overlap = (COLLISION_THRESHOLD[0] - distance).max(0.0) / 2.0;
    a.position[0] = (a.position[0] - direction * overlap).clamp(min_x, right_edge);
    b.position[0] = (b.position[0] + direction * overlap).clamp(min_x, right_edge);
}
