use log::{info, warn};
use std::rc::Rc;

use crate::collections::Dictionary;
use crate::hatching::{CreatureKind, Element, HatchingDomain, HatchingError, Rarity, HATCH_THRESHOLD};
use crate::persistence::Persistence;

impl HatchingDomain {
    pub fn new(storage: Rc<dyn Persistence>) -> Self {
        Self {
            creatures: Dictionary::default(),
            threshold: HATCH_THRESHOLD,
            storage,
        }
    }

    /// Replaces the catalog. Fails when a rarity or an element has no creature at all,
    /// warns for every rarity and element pair the element draw would have to skip.
    pub fn load_creatures(&mut self, creatures: Vec<CreatureKind>) -> Result<(), HatchingError> {
        let missing: Vec<Rarity> = Rarity::ALL
            .into_iter()
            .filter(|rarity| !creatures.iter().any(|creature| creature.rarity == *rarity))
            .collect();
        if !missing.is_empty() {
            return Err(HatchingError::CatalogIncomplete { missing });
        }
        let missing: Vec<Element> = Element::ALL
            .into_iter()
            .filter(|element| !creatures.iter().any(|creature| creature.element == Some(*element)))
            .collect();
        if !missing.is_empty() {
            return Err(HatchingError::ElementsMissing { missing });
        }
        for rarity in Rarity::ALL {
            for element in Element::ALL {
                let covered = creatures
                    .iter()
                    .any(|creature| creature.rarity == rarity && creature.element == Some(element));
                if !covered {
                    warn!("Catalog has no {rarity:?} {element:?} creature, draws fall back to any {element:?}");
                }
            }
        }
        let mut dictionary = Dictionary::default();
        for creature in creatures {
            dictionary.insert(creature.id, creature.name.clone(), creature);
        }
        info!("Load {} creatures", dictionary.len());
        self.creatures = dictionary;
        Ok(())
    }
}
