use log::error;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::hatching::Element;
use crate::persistence::Persistence;

pub const MIN_REQUIRED_COUNT: u32 = 500;
pub const MAX_REQUIRED_COUNT: u32 = 2000;
pub const LEGENDARY_EGG_CHANCE: f32 = 0.05;
pub const TIME_PROGRESS_PER_SECOND: f64 = 0.025;
/// Elapsed time accumulated before the trickle is applied and written through.
pub const TIME_PROGRESS_INTERVAL: f32 = 1.0;

pub struct ProgressionDomain {
    pub egg: Egg,
    pub(crate) ready_announced: bool,
    pub(crate) pending_time: f32,
    pub(crate) storage: Rc<dyn Persistence>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EggKind {
    pub name: &'static str,
    pub element: Option<Element>,
    pub legendary: bool,
}

pub const ELEMENTAL_EGGS: [EggKind; 5] = [
    EggKind {
        name: "Flame Egg",
        element: Some(Element::Fire),
        legendary: false,
    },
    EggKind {
        name: "Droplet Egg",
        element: Some(Element::Water),
        legendary: false,
    },
    EggKind {
        name: "Breeze Egg",
        element: Some(Element::Wind),
        legendary: false,
    },
    EggKind {
        name: "Terra Egg",
        element: Some(Element::Earth),
        legendary: false,
    },
    EggKind {
        name: "Thunder Egg",
        element: Some(Element::Lightning),
        legendary: false,
    },
];

pub const LEGENDARY_EGG: EggKind = EggKind {
    name: "Golden Egg",
    element: None,
    legendary: true,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Egg {
    pub name: String,
    pub sprite: String,
    pub element: Option<Element>,
    pub legendary: bool,
    pub required_count: u32,
    pub current_count: f64,
}

impl Default for Egg {
    fn default() -> Self {
        Self::from_kind(&ELEMENTAL_EGGS[0], MAX_REQUIRED_COUNT)
    }
}

impl Egg {
    pub fn from_kind(kind: &EggKind, required_count: u32) -> Self {
        Self {
            name: kind.name.to_string(),
            sprite: format!("Eggs/{}.png", kind.name),
            element: kind.element,
            legendary: kind.legendary,
            required_count,
            current_count: 0.0,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.current_count >= self.required_count as f64
    }

    pub fn progress(&self) -> f64 {
        if self.required_count == 0 {
            return 0.0;
        }
        self.current_count / self.required_count as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Progression {
    EggCreated {
        name: String,
        element: Option<Element>,
        legendary: bool,
        required_count: u32,
    },
    EggUpdated {
        current_count: f64,
        required_count: u32,
        progress: f64,
    },
    EggReady {
        name: String,
    },
}

impl ProgressionDomain {
    pub(crate) fn save_egg(&self) {
        if let Err(error) = self.storage.save_current_egg(&self.egg) {
            error!(
                "Unable to save egg {}, keep progress {} in memory, {:?}",
                self.egg.name, self.egg.current_count, error
            );
        }
    }

    pub(crate) fn egg_updated(&self) -> Progression {
        Progression::EggUpdated {
            current_count: self.egg.current_count,
            required_count: self.egg.required_count,
            progress: self.egg.progress(),
        }
    }
}
