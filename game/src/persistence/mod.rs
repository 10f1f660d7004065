use chrono::{DateTime, Utc};

use crate::data::DataError;
use crate::desktop::PetId;
use crate::hatching::{CreatureKey, CreatureKind, InputKind, InputProgress};
use crate::progression::Egg;

pub use sqlite::*;

mod sqlite;

pub const DISPLAY_SLOTS: usize = 10;

pub const PLAYGROUND_SLOTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionRecord {
    pub creature: CreatureKey,
    pub count: usize,
    pub first_obtained: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PetRecord {
    pub id: PetId,
    pub creature: CreatureKey,
    pub position: [f32; 2],
}

/// Record store behind every domain that survives a restart.
///
/// Methods take `&self`, implementations are expected to be cheap and synchronous.
/// Invalid slot indices are ignored, not reported.
pub trait Persistence {
    fn count_creatures(&self) -> Result<usize, DataError>;
    fn insert_creature(&self, creature: &CreatureKind) -> Result<(), DataError>;
    fn get_creatures(&self) -> Result<Vec<CreatureKind>, DataError>;

    fn get_display_slots(&self) -> Result<Vec<(usize, CreatureKey)>, DataError>;
    fn set_display_slot(&self, slot: usize, creature: CreatureKey) -> Result<(), DataError>;
    fn remove_from_display_slot(&self, slot: usize) -> Result<(), DataError>;
    fn remove_creature_from_display(&self, creature: CreatureKey) -> Result<(), DataError>;
    fn get_next_available_slot(&self) -> Result<Option<usize>, DataError>;

    fn get_creature_display_slot(&self, creature: CreatureKey) -> Result<Option<usize>, DataError> {
        let slots = self.get_display_slots()?;
        Ok(slots
            .into_iter()
            .find(|(_, occupant)| *occupant == creature)
            .map(|(slot, _)| slot))
    }

    fn get_playground_creatures(&self) -> Result<Vec<(usize, CreatureKey)>, DataError>;
    fn add_to_playground(&self, creature: CreatureKey) -> Result<(), DataError>;
    fn remove_from_playground(&self, creature: CreatureKey) -> Result<(), DataError>;
    fn is_in_playground(&self, creature: CreatureKey) -> Result<bool, DataError>;
    fn get_playground_count(&self) -> Result<usize, DataError>;

    fn get_current_egg(&self) -> Result<Option<Egg>, DataError>;
    fn save_current_egg(&self, egg: &Egg) -> Result<(), DataError>;

    fn record_input(&self, kind: InputKind, count: u64) -> Result<(), DataError>;
    fn get_current_progress(&self) -> Result<InputProgress, DataError>;
    fn set_current_progress(&self, progress: InputProgress) -> Result<(), DataError>;

    fn append_collection_entry(
        &self,
        creature: CreatureKey,
        obtained_at: DateTime<Utc>,
    ) -> Result<(), DataError>;
    /// Grouped by creature, ordered by rarity descending then name.
    fn get_collection(&self) -> Result<Vec<CollectionRecord>, DataError>;
    fn get_owned_creature_count(&self) -> Result<usize, DataError>;

    fn get_desktop_pets(&self) -> Result<Vec<PetRecord>, DataError>;
    fn save_desktop_pet(&self, pet: &PetRecord) -> Result<(), DataError>;
    fn delete_desktop_pet(&self, id: PetId) -> Result<(), DataError>;
}
