use log::info;
use std::rc::Rc;

use crate::api::{Event, GameError};
use crate::hatching::{CreatureKey, CreatureKind};
use crate::persistence::{DISPLAY_SLOTS, PLAYGROUND_SLOTS};
use crate::Game;

impl Game {
    /// Puts the creature into the first free display slot or takes it out.
    /// A creature entering the display leaves the playground.
    pub fn toggle_display(&mut self, creature: CreatureKey) -> Result<Vec<Event>, GameError> {
        self.hatching.creatures.get(creature)?;
        if self.storage.get_creature_display_slot(creature)?.is_some() {
            self.storage.remove_creature_from_display(creature)?;
            return Ok(vec![]);
        }
        let slot = match self.storage.get_next_available_slot()? {
            Some(slot) => slot,
            None => return Ok(vec![]),
        };
        self.storage.set_display_slot(slot, creature)?;
        info!("Display {:?} in slot {}", creature, slot);
        if self.storage.is_in_playground(creature)? {
            self.storage.remove_from_playground(creature)?;
            return Ok(self.refresh_playground());
        }
        Ok(vec![])
    }

    /// Sends the creature to the playground or calls it back.
    /// A creature entering the playground leaves the display.
    pub fn toggle_playground(&mut self, creature: CreatureKey) -> Result<Vec<Event>, GameError> {
        self.hatching.creatures.get(creature)?;
        if self.storage.is_in_playground(creature)? {
            self.storage.remove_from_playground(creature)?;
            return Ok(self.refresh_playground());
        }
        if self.storage.get_playground_count()? >= PLAYGROUND_SLOTS {
            return Ok(vec![]);
        }
        self.storage.remove_creature_from_display(creature)?;
        self.storage.add_to_playground(creature)?;
        info!("Send {:?} to playground", creature);
        Ok(self.refresh_playground())
    }

    /// Ignored for out of range or equal indices.
    pub fn swap_display_slots(&mut self, a: usize, b: usize) -> Result<(), GameError> {
        if a == b || a >= DISPLAY_SLOTS || b >= DISPLAY_SLOTS {
            return Ok(());
        }
        let slots = self.storage.get_display_slots()?;
        let occupant = |index| {
            slots
                .iter()
                .find(|(slot, _)| *slot == index)
                .map(|(_, creature)| *creature)
        };
        let (first, second) = (occupant(a), occupant(b));
        self.storage.remove_from_display_slot(a)?;
        self.storage.remove_from_display_slot(b)?;
        if let Some(creature) = second {
            self.storage.set_display_slot(a, creature)?;
        }
        if let Some(creature) = first {
            self.storage.set_display_slot(b, creature)?;
        }
        Ok(())
    }

    /// Display contents indexed by slot, empty slots are `None`.
    pub fn display_slots(&self) -> Result<Vec<Option<Rc<CreatureKind>>>, GameError> {
        let mut slots = vec![None; DISPLAY_SLOTS];
        for (slot, creature) in self.storage.get_display_slots()? {
            if slot < DISPLAY_SLOTS {
                slots[slot] = Some(self.hatching.creatures.get(creature)?);
            }
        }
        Ok(slots)
    }
}
