use chrono::Utc;
use log::{error, info};
use std::rc::Rc;

use crate::hatching::Hatching::{CreatureHatched, ProgressConsumed};
use crate::hatching::{CreatureKind, Element, Hatching, HatchingDomain, HatchingError, Rarity};
use crate::math::Random;

impl HatchingDomain {
    pub fn try_hatch(
        &self,
        random: &mut Random,
    ) -> Result<Option<(Rc<CreatureKind>, Vec<Hatching>)>, HatchingError> {
        self.hatch_with(random, |domain, random| {
            let rarity = domain.roll_rarity(random);
            domain.get_random_creature_by_rarity(rarity, random)
        })
    }

    pub fn try_hatch_by_element(
        &self,
        element: Element,
        random: &mut Random,
    ) -> Result<Option<(Rc<CreatureKind>, Vec<Hatching>)>, HatchingError> {
        self.hatch_with(random, |domain, random| {
            let rarity = domain.roll_rarity(random);
            domain.get_random_creature_by_rarity_and_element(rarity, element, random)
        })
    }

    pub fn try_hatch_legendary(
        &self,
        random: &mut Random,
    ) -> Result<Option<(Rc<CreatureKind>, Vec<Hatching>)>, HatchingError> {
        self.hatch_with(random, |domain, random| {
            domain.get_random_creature_by_rarity(Rarity::Legendary, random)
        })
    }

    fn hatch_with<D>(
        &self,
        random: &mut Random,
        draw: D,
    ) -> Result<Option<(Rc<CreatureKind>, Vec<Hatching>)>, HatchingError>
    where
        D: FnOnce(&Self, &mut Random) -> Result<Rc<CreatureKind>, HatchingError>,
    {
        let progress = match self.storage.get_current_progress() {
            Ok(progress) => progress,
            Err(error) => {
                error!("Unable to read input progress, skip hatch, {:?}", error);
                return Ok(None);
            }
        };
        if progress.total() < self.threshold {
            return Ok(None);
        }
        let creature = draw(self, random)?;
        let remaining = progress.consume(self.threshold);
        if let Err(error) = self.storage.set_current_progress(remaining) {
            error!("Unable to consume input progress {remaining:?}, {:?}", error);
        }
        let obtained_at = Utc::now();
        if let Err(error) = self.storage.append_collection_entry(creature.id, obtained_at) {
            error!("Unable to record {} in collection, {:?}", creature.name, error);
        }
        info!("Hatch {} ({:?})", creature.name, creature.rarity);
        let events = vec![
            CreatureHatched {
                creature: creature.id,
                rarity: creature.rarity,
                element: creature.element,
                obtained_at,
            },
            ProgressConsumed { remaining },
        ];
        Ok(Some((creature, events)))
    }
}
