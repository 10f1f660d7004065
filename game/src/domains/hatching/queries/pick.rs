use std::rc::Rc;

use crate::hatching::{CreatureKind, Element, HatchingDomain, HatchingError, Rarity};
use crate::math::Random;

impl HatchingDomain {
    pub fn roll_rarity(&self, random: &mut Random) -> Rarity {
        Rarity::from_roll(random.below(100))
    }

    pub fn get_random_creature_by_rarity(
        &self,
        rarity: Rarity,
        random: &mut Random,
    ) -> Result<Rc<CreatureKind>, HatchingError> {
        let candidates = self.creatures.filter(|creature| creature.rarity == rarity);
        random
            .pick(&candidates)
            .cloned()
            .ok_or(HatchingError::RarityNotFound { rarity })
    }

    /// Falls back to any creature of the element when the pair is not in the catalog.
    pub fn get_random_creature_by_rarity_and_element(
        &self,
        rarity: Rarity,
        element: Element,
        random: &mut Random,
    ) -> Result<Rc<CreatureKind>, HatchingError> {
        let candidates = self.creatures.filter(|creature| {
            creature.rarity == rarity && creature.element == Some(element)
        });
        if let Some(creature) = random.pick(&candidates) {
            return Ok(creature.clone());
        }
        let candidates = self
            .creatures
            .filter(|creature| creature.element == Some(element));
        random
            .pick(&candidates)
            .cloned()
            .ok_or(HatchingError::ElementNotFound { element })
    }
}
