use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::collections::Dictionary;
use crate::persistence::Persistence;

/// Combined keystrokes and clicks consumed by one hatch.
pub const HATCH_THRESHOLD: u64 = 500;

pub const TOTAL_CREATURES: usize = 50;

pub struct HatchingDomain {
    pub creatures: Dictionary<CreatureKey, CreatureKind>,
    pub threshold: u64,
    pub(crate) storage: Rc<dyn Persistence>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Maps a roll in `[0, 100)` onto the 50/30/15/5 table.
    pub fn from_roll(roll: u32) -> Rarity {
        match roll {
            0..=49 => Rarity::Common,
            50..=79 => Rarity::Rare,
            80..=94 => Rarity::Epic,
            _ => Rarity::Legendary,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Rarity> {
        Rarity::ALL.get(code as usize).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Wind,
    Earth,
    Lightning,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Fire,
        Element::Water,
        Element::Wind,
        Element::Earth,
        Element::Lightning,
    ];

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Element> {
        Element::ALL.get(code as usize).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CreatureKey(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct CreatureKind {
    pub id: CreatureKey,
    pub name: String,
    pub rarity: Rarity,
    pub element: Option<Element>,
    pub sprite: String,
    pub description: String,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub favorite_food: Option<String>,
    pub dislikes: Option<String>,
    pub background: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    Keystroke,
    Click,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputProgress {
    pub keystrokes: u64,
    pub clicks: u64,
}

impl InputProgress {
    pub fn total(&self) -> u64 {
        self.keystrokes + self.clicks
    }

    /// Takes `amount` from keystrokes first, then clicks. Never goes below zero.
    pub fn consume(&self, amount: u64) -> InputProgress {
        let from_keystrokes = amount.min(self.keystrokes);
        let from_clicks = (amount - from_keystrokes).min(self.clicks);
        InputProgress {
            keystrokes: self.keystrokes - from_keystrokes,
            clicks: self.clicks - from_clicks,
        }
    }
}

/// Per-creature aggregate over the collection log.
#[derive(Debug, Clone)]
pub struct OwnedCreature {
    pub kind: Rc<CreatureKind>,
    pub count: usize,
    pub first_obtained: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Hatching {
    CreatureHatched {
        creature: CreatureKey,
        rarity: Rarity,
        element: Option<Element>,
        obtained_at: DateTime<Utc>,
    },
    ProgressConsumed {
        remaining: InputProgress,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub enum HatchingError {
    RarityNotFound { rarity: Rarity },
    ElementNotFound { element: Element },
    CatalogIncomplete { missing: Vec<Rarity> },
    ElementsMissing { missing: Vec<Element> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_boundaries() {
        assert_eq!(Rarity::from_roll(0), Rarity::Common);
        assert_eq!(Rarity::from_roll(49), Rarity::Common);
        assert_eq!(Rarity::from_roll(50), Rarity::Rare);
        assert_eq!(Rarity::from_roll(79), Rarity::Rare);
        assert_eq!(Rarity::from_roll(80), Rarity::Epic);
        assert_eq!(Rarity::from_roll(94), Rarity::Epic);
        assert_eq!(Rarity::from_roll(95), Rarity::Legendary);
        assert_eq!(Rarity::from_roll(99), Rarity::Legendary);
    }

    #[test]
    fn test_codes_are_stable() {
        for rarity in Rarity::ALL {
            assert_eq!(Rarity::from_code(rarity.code()), Some(rarity));
        }
        for element in Element::ALL {
            assert_eq!(Element::from_code(element.code()), Some(element));
        }
        assert_eq!(Rarity::from_code(4), None);
        assert_eq!(Element::from_code(5), None);
    }

    #[test]
    fn test_consume_takes_keystrokes_first() {
        let progress = InputProgress {
            keystrokes: 400,
            clicks: 150,
        };
        let remaining = progress.consume(500);
        assert_eq!(remaining, InputProgress { keystrokes: 0, clicks: 50 });
        assert_eq!(progress.total() - remaining.total(), 500);
    }

    #[test]
    fn test_consume_floors_at_zero() {
        let progress = InputProgress {
            keystrokes: 100,
            clicks: 20,
        };
        assert_eq!(progress.consume(500), InputProgress::default());
    }
}
