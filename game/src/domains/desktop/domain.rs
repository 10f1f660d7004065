use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::hatching::{CreatureKey, CreatureKind};
use crate::persistence::{Persistence, PetRecord};

pub const PET_SIZE: f32 = 64.0;
pub const GREETING_DISTANCE: f32 = 80.0;
pub const WALK_SPEED: f32 = 30.0;
pub const ANIMATION_SPEED: f32 = 8.0;
pub const GREETING_DURATION: f32 = 1.5;
pub const CLICK_DURATION: f32 = 0.5;
pub const DRAG_REST_DURATION: f32 = 1.0;
pub const EDGE_MARGIN: f32 = 10.0;
/// Distance between the screen bottom and a pet's bottom edge when resting.
pub const GROUND_OFFSET: f32 = 50.0;
pub const DEFAULT_MAX_PETS: usize = 5;
pub const MAX_PETS_LIMIT: usize = 10;
pub const DEFAULT_SCREEN: [f32; 2] = [1920.0, 1080.0];

pub struct DesktopDomain {
    pub pets_id: usize,
    pub pets: Vec<DesktopPet>,
    pub max_pets: usize,
    pub screen: [f32; 2],
    pub(crate) storage: Rc<dyn Persistence>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PetState {
    Idle,
    Walking,
    Sitting,
    Greeting,
    Dragging,
    Clicked,
}

#[derive(Debug, Clone)]
pub struct DesktopPet {
    pub id: PetId,
    pub kind: Rc<CreatureKind>,
    pub position: [f32; 2],
    pub state: PetState,
    pub state_timer: f32,
    pub direction: f32,
    pub animation: f32,
}

impl DesktopPet {
    pub fn record(&self) -> PetRecord {
        PetRecord {
            id: self.id,
            creature: self.kind.id,
            position: self.position,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Desktop {
    PetAdded {
        id: PetId,
        creature: CreatureKey,
        position: [f32; 2],
    },
    PetRemoved {
        id: PetId,
        creature: CreatureKey,
    },
    PetsGreeting {
        id: PetId,
        other: PetId,
    },
    PetStateChanged {
        id: PetId,
        state: PetState,
    },
    PetPlaced {
        id: PetId,
        position: [f32; 2],
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub enum DesktopError {
    PetNotFound { id: PetId },
    PetLimitReached { max: usize },
    PetAlreadyPresent { creature: CreatureKey },
}

impl DesktopDomain {
    /// Vertical resting position for the current screen.
    #[inline]
    pub fn ground_line(&self) -> f32 {
        (self.screen[1] - PET_SIZE - GROUND_OFFSET).max(0.0)
    }

    /// Largest left edge a walking pet may reach.
    #[inline]
    pub fn right_edge(&self) -> f32 {
        (self.screen[0] - PET_SIZE - EDGE_MARGIN).max(EDGE_MARGIN)
    }
}
