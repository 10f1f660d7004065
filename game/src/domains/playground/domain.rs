use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::hatching::{CreatureKey, CreatureKind};

pub const GRAVITY: f32 = 800.0;
pub const JUMP_VELOCITY: f32 = -350.0;
pub const MOVE_SPEED: f32 = 80.0;
pub const FLOAT_SPEED: f32 = 40.0;
pub const CRITTER_SIZE: [f32; 2] = [96.0, 96.0];
/// Largest step the simulation accepts, longer stalls are cut.
pub const MAX_ELAPSED_TIME: f32 = 0.05;
pub const KNOCK_OVER_RECOVERY: f32 = 1.5;
pub const SQUASH_RECOVERY: f32 = 0.4;
pub const SQUASH_SCALE: f32 = 0.8;
pub const EFFECT_LIFETIME: f32 = 0.5;
pub const EFFECT_SIZE: f32 = 64.0;
/// Center distance on both axes below which two critters touch.
pub const COLLISION_THRESHOLD: [f32; 2] = [CRITTER_SIZE[0] * 0.6, CRITTER_SIZE[1] * 0.6];
pub const STOMP_HEIGHT: f32 = 10.0;
pub const PUSH_APART_SPEED: f32 = 50.0;

pub struct PlaygroundDomain {
    pub bounds: Bounds,
    pub critters_id: usize,
    pub critters: Vec<Critter>,
    pub effects_id: usize,
    pub effects: Vec<Effect>,
}

impl Default for PlaygroundDomain {
    fn default() -> Self {
        Self {
            bounds: Bounds::from_area(500.0, 180.0),
            critters_id: 0,
            critters: vec![],
            effects_id: 0,
            effects: vec![],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub ground_y: f32,
}

impl Bounds {
    pub fn from_area(width: f32, height: f32) -> Self {
        Self {
            min_x: 10.0,
            max_x: width - 10.0,
            ground_y: height - 60.0,
        }
    }

    /// Rightmost left edge a critter may occupy.
    #[inline]
    pub fn right_edge(&self) -> f32 {
        (self.max_x - CRITTER_SIZE[0]).max(self.min_x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CritterId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Pattern {
    Walk,
    Float,
    Bounce,
    Idle { jump_timer: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Posture {
    Upright,
    KnockedOver { recovery: f32 },
    Squashed { recovery: f32 },
}

/// Roaming creature, `position` is the left edge and the feet line.
#[derive(Debug, Clone)]
pub struct Critter {
    pub id: CritterId,
    pub kind: Rc<CreatureKind>,
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub direction: f32,
    pub pattern: Pattern,
    pub pattern_timer: f32,
    pub on_ground: bool,
    pub posture: Posture,
    pub rotation: f32,
    pub scale_y: f32,
    pub shadow_scale: f32,
}

impl Critter {
    #[inline]
    pub fn is_knocked_over(&self) -> bool {
        matches!(self.posture, Posture::KnockedOver { .. })
    }

    #[inline]
    pub fn is_squashed(&self) -> bool {
        matches!(self.posture, Posture::Squashed { .. })
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.posture != Posture::Upright
    }

    #[inline]
    pub fn center(&self) -> [f32; 2] {
        let [x, y] = self.position;
        [x + CRITTER_SIZE[0] / 2.0, y - CRITTER_SIZE[1] / 2.0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectId(pub usize);

#[derive(Debug, Clone)]
pub struct Effect {
    pub id: EffectId,
    pub position: [f32; 2],
    pub lifetime: f32,
}

impl Effect {
    #[inline]
    pub fn opacity(&self) -> f32 {
        (self.lifetime / EFFECT_LIFETIME).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Playground {
    CritterAppeared {
        id: CritterId,
        creature: CreatureKey,
        position: [f32; 2],
    },
    CritterVanished {
        id: CritterId,
    },
    Stomped {
        stomper: CritterId,
        stomped: CritterId,
        effect: EffectId,
        position: [f32; 2],
    },
    Bumped {
        id: CritterId,
        other: CritterId,
        effect: EffectId,
        position: [f32; 2],
    },
    EffectVanished {
        id: EffectId,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub enum PlaygroundError {
    CritterNotFound { id: CritterId },
}
