use crate::desktop::Desktop::{PetStateChanged, PetsGreeting};
use crate::desktop::{
    Desktop, DesktopDomain, DesktopPet, PetState, ANIMATION_SPEED, EDGE_MARGIN, GREETING_DISTANCE,
    GREETING_DURATION, WALK_SPEED,
};
use crate::math::{horizontal_direction, Random};

impl DesktopDomain {
    pub fn update(&mut self, time: f32, random: &mut Random) -> Vec<Desktop> {
        let mut events = vec![];
        let right_edge = self.right_edge();
        for pet in self.pets.iter_mut() {
            if pet.state == PetState::Dragging {
                continue;
            }
            pet.animation += time * ANIMATION_SPEED;
            if pet.state == PetState::Walking {
                pet.position[0] += pet.direction * WALK_SPEED * time;
                if pet.position[0] <= EDGE_MARGIN {
                    pet.position[0] = EDGE_MARGIN;
                    pet.direction = 1.0;
                } else if pet.position[0] >= right_edge {
                    pet.position[0] = right_edge;
                    pet.direction = -1.0;
                }
            }
            pet.state_timer -= time;
            if pet.state_timer <= 0.0 {
                transition(pet, random);
                events.push(PetStateChanged {
                    id: pet.id,
                    state: pet.state,
                });
            }
        }
        events.extend(self.detect_greetings());
        events
    }

    /// Turns every close pair of free pets towards each other.
    pub fn detect_greetings(&mut self) -> Vec<Desktop> {
        let mut events = vec![];
        for j in 1..self.pets.len() {
            let (left, right) = self.pets.split_at_mut(j);
            let b = &mut right[0];
            for a in left.iter_mut() {
                if !can_greet(a) || !can_greet(b) {
                    continue;
                }
                if (a.position[0] - b.position[0]).abs() >= GREETING_DISTANCE {
                    continue;
                }
                let direction = horizontal_direction(a.position[0], b.position[0]);
                a.direction = direction;
                b.direction = -direction;
                for pet in [&mut *a, &mut *b] {
                    pet.state = PetState::Greeting;
                    pet.state_timer = GREETING_DURATION;
                }
                events.push(PetsGreeting {
                    id: a.id,
                    other: b.id,
                });
            }
        }
        events
    }
}

fn can_greet(pet: &DesktopPet) -> bool {
    !matches!(pet.state, PetState::Dragging | PetState::Greeting)
}

fn transition(pet: &mut DesktopPet, random: &mut Random) {
    if pet.state == PetState::Greeting {
        pet.direction = -pet.direction;
    }
    let roll = random.below(100);
    if roll < 40 {
        pet.state = PetState::Idle;
        pet.state_timer = random.range(2.0, 5.0);
    } else if roll < 80 {
        pet.state = PetState::Walking;
        pet.state_timer = random.range(2.0, 6.0);
        if random.chance(0.5) {
            pet.direction = -pet.direction;
        }
    } else {
        pet.state = PetState::Sitting;
        pet.state_timer = random.range(3.0, 8.0);
    }
}
