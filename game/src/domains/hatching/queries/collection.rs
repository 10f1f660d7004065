use log::{error, warn};

use crate::hatching::{HatchingDomain, InputProgress, OwnedCreature, TOTAL_CREATURES};

impl HatchingDomain {
    pub fn get_collection(&self) -> Vec<OwnedCreature> {
        let records = match self.storage.get_collection() {
            Ok(records) => records,
            Err(error) => {
                error!("Unable to read collection, {:?}", error);
                return vec![];
            }
        };
        let mut collection = Vec::with_capacity(records.len());
        for record in records {
            match self.creatures.get(record.creature) {
                Ok(kind) => collection.push(OwnedCreature {
                    kind,
                    count: record.count,
                    first_obtained: record.first_obtained,
                }),
                Err(error) => warn!("Skip collection entry, {:?}", error),
            }
        }
        collection
    }

    pub fn get_owned_creature_count(&self) -> usize {
        self.storage.get_owned_creature_count().unwrap_or_else(|error| {
            error!("Unable to count owned creatures, {:?}", error);
            0
        })
    }

    #[inline]
    pub fn get_total_creature_count(&self) -> usize {
        TOTAL_CREATURES
    }

    pub fn get_current_progress(&self) -> InputProgress {
        self.storage.get_current_progress().unwrap_or_else(|error| {
            error!("Unable to read input progress, {:?}", error);
            InputProgress::default()
        })
    }
}
