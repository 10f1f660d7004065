use crate::math::Random;
use crate::playground::{
    Bounds, Critter, Pattern, Posture, FLOAT_SPEED, GRAVITY, JUMP_VELOCITY, KNOCK_OVER_RECOVERY,
    MOVE_SPEED, SQUASH_RECOVERY, SQUASH_SCALE,
};

/// Reversal chance per 1/60 s of walking.
const WALK_REVERSE_CHANCE: f32 = 0.03;
const SPONTANEOUS_JUMP_CHANCE: f32 = 0.01;
/// Hover target above the ground line.
pub const FLOAT_HEIGHT: f32 = 30.0;
/// Highest a floating critter may rise above the ground line.
pub const FLOAT_RANGE: f32 = 70.0;
const FLOAT_SPRING: f32 = 3.0;
const FLOAT_DAMPING: f32 = 0.98;
const SHADOW_FALLOFF: f32 = 80.0;
const MIN_SHADOW_SCALE: f32 = 0.3;

impl Critter {
    pub fn update(&mut self, time: f32, bounds: &Bounds, random: &mut Random) {
        let ground = bounds.ground_y;
        let recovered = match &mut self.posture {
            Posture::KnockedOver { recovery } | Posture::Squashed { recovery } => {
                *recovery -= time;
                *recovery <= 0.0
            }
            Posture::Upright => false,
        };
        if recovered {
            self.recover();
        }

        if self.is_disabled() {
            self.fall(time, ground);
            self.update_shadow(ground);
            return;
        }

        self.pattern_timer -= time;
        if self.pattern_timer <= 0.0 {
            self.change_pattern(random);
        }

        match self.pattern {
            Pattern::Walk => self.walk(time, ground, random),
            Pattern::Float => self.float(time, ground),
            Pattern::Bounce => self.bounce(time, ground, random),
            Pattern::Idle { jump_timer } => self.idle(time, ground, jump_timer, random),
        }

        self.position[0] += self.velocity[0] * time;
        let right_edge = bounds.right_edge();
        if self.position[0] < bounds.min_x {
            self.position[0] = bounds.min_x;
            self.velocity[0] = self.velocity[0].abs();
            self.direction = 1.0;
        } else if self.position[0] > right_edge {
            self.position[0] = right_edge;
            self.velocity[0] = -self.velocity[0].abs();
            self.direction = -1.0;
        }

        self.update_shadow(ground);
    }

    pub fn change_pattern(&mut self, random: &mut Random) {
        let roll = random.generate();
        let (pattern, speed) = if roll < 0.35 {
            (Pattern::Walk, MOVE_SPEED)
        } else if roll < 0.55 {
            (Pattern::Float, FLOAT_SPEED)
        } else if roll < 0.80 {
            (Pattern::Bounce, MOVE_SPEED * 0.75)
        } else {
            let jump_timer = random.range(0.5, 1.5);
            (Pattern::Idle { jump_timer }, 0.0)
        };
        self.pattern = pattern;
        self.pattern_timer = random.range(2.0, 6.0);
        self.velocity[0] = random.range(-speed, speed);
        self.face_velocity();
    }

    /// No-op unless grounded and upright.
    pub fn jump(&mut self) {
        self.launch(JUMP_VELOCITY);
    }

    pub fn knock_over(&mut self) {
        self.posture = Posture::KnockedOver {
            recovery: KNOCK_OVER_RECOVERY,
        };
        self.rotation = 90.0 * self.direction;
        self.scale_y = 1.0;
    }

    pub fn squash(&mut self) {
        self.posture = Posture::Squashed {
            recovery: SQUASH_RECOVERY,
        };
        self.rotation = 0.0;
        self.scale_y = SQUASH_SCALE;
    }

    pub fn bounce_up(&mut self) {
        self.velocity[1] = JUMP_VELOCITY * 1.2;
        self.on_ground = false;
    }

    fn launch(&mut self, velocity: f32) {
        if self.on_ground && !self.is_disabled() {
            self.velocity[1] = velocity;
            self.on_ground = false;
        }
    }

    fn recover(&mut self) {
        self.posture = Posture::Upright;
        self.rotation = 0.0;
        self.scale_y = 1.0;
    }

    fn face_velocity(&mut self) {
        if self.velocity[0] > 0.0 {
            self.direction = 1.0;
        } else if self.velocity[0] < 0.0 {
            self.direction = -1.0;
        }
    }

    fn fall(&mut self, time: f32, ground: f32) {
        self.velocity[1] += GRAVITY * time;
        self.position[1] += self.velocity[1] * time;
        if self.position[1] >= ground {
            self.position[1] = ground;
            self.velocity[1] = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }
    }

    fn walk(&mut self, time: f32, ground: f32, random: &mut Random) {
        if random.chance(WALK_REVERSE_CHANCE * time * 60.0) {
            self.velocity[0] = -self.velocity[0];
            self.face_velocity();
        }
        self.fall(time, ground);
        if self.on_ground && random.chance(SPONTANEOUS_JUMP_CHANCE) {
            self.jump();
        }
    }

    fn float(&mut self, time: f32, ground: f32) {
        let target = ground - FLOAT_HEIGHT;
        let displacement = target - self.position[1];
        self.velocity[1] += displacement * FLOAT_SPRING * time;
        self.velocity[1] *= FLOAT_DAMPING;
        self.position[1] += self.velocity[1] * time;
        let top = ground - FLOAT_RANGE;
        if self.position[1] <= top {
            self.position[1] = top;
            self.velocity[1] = 0.0;
        } else if self.position[1] >= ground {
            self.position[1] = ground;
            self.velocity[1] = 0.0;
        }
        self.on_ground = false;
    }

    fn bounce(&mut self, time: f32, ground: f32, random: &mut Random) {
        self.fall(time, ground);
        if self.on_ground {
            self.launch(JUMP_VELOCITY * random.range(0.6, 1.0));
        }
    }

    fn idle(&mut self, time: f32, ground: f32, jump_timer: f32, random: &mut Random) {
        self.velocity[0] = 0.0;
        self.fall(time, ground);
        if !self.on_ground {
            return;
        }
        let mut jump_timer = jump_timer - time;
        if jump_timer <= 0.0 {
            self.launch(JUMP_VELOCITY * random.range(0.5, 0.8));
            jump_timer = random.range(0.8, 2.3);
        }
        self.pattern = Pattern::Idle { jump_timer };
    }

    fn update_shadow(&mut self, ground: f32) {
        let height = (ground - self.position[1]).max(0.0);
        self.shadow_scale = (1.0 - height / SHADOW_FALLOFF).max(MIN_SHADOW_SCALE);
    }
}
