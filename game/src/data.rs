use log::{error, info, warn};
use serde::Deserialize;

use crate::api::{Event, GameError};
use crate::collections::DictionaryError;
use crate::hatching::{CreatureKey, CreatureKind, Element, Rarity};
use crate::Game;

const CATALOG: &str = include_str!("../assets/creatures.json");

#[derive(Debug)]
pub enum DataError {
    Sql(rusqlite::Error),
    Json(serde_json::Error),
    Timestamp(chrono::ParseError),
    Inconsistency(DictionaryError),
    Corrupted(String),
}

impl From<rusqlite::Error> for DataError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sql(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<chrono::ParseError> for DataError {
    fn from(error: chrono::ParseError) -> Self {
        Self::Timestamp(error)
    }
}

impl From<DictionaryError> for DataError {
    fn from(error: DictionaryError) -> Self {
        Self::Inconsistency(error)
    }
}

#[derive(Deserialize)]
struct CatalogEntry {
    name: String,
    rarity: Rarity,
    element: Option<Element>,
    description: String,
    age: Option<String>,
    gender: Option<String>,
    favorite_food: Option<String>,
    dislikes: Option<String>,
    background: Option<String>,
}

/// Parses the bundled creature catalog, keys follow file order starting at 1.
pub fn parse_catalog(json: &str) -> Result<Vec<CreatureKind>, DataError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    let creatures = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let id = index + 1;
            CreatureKind {
                id: CreatureKey(id),
                name: entry.name,
                rarity: entry.rarity,
                element: entry.element,
                sprite: format!("Creatures/{}.png", id),
                description: entry.description,
                age: entry.age,
                gender: entry.gender,
                favorite_food: entry.favorite_food,
                dislikes: entry.dislikes,
                background: entry.background,
            }
        })
        .collect();
    Ok(creatures)
}

pub fn bundled_catalog() -> Result<Vec<CreatureKind>, DataError> {
    parse_catalog(CATALOG)
}

impl Game {
    /// Seeds an empty catalog from the bundled asset, then loads it into hatching.
    pub fn load_game_knowledge(&mut self) -> Result<(), GameError> {
        info!("Begin game knowledge loading");
        if self.storage.count_creatures()? == 0 {
            let catalog = bundled_catalog()?;
            info!("Seed {} creatures into empty catalog", catalog.len());
            for creature in &catalog {
                self.storage.insert_creature(creature)?;
            }
        }
        let creatures = self.storage.get_creatures()?;
        self.hatching.load_creatures(creatures)?;
        info!("End game knowledge loading");
        Ok(())
    }

    /// Restores the egg and the desktop pets. Never fails, unreadable state is rebuilt.
    pub fn load_game_state(&mut self) -> Vec<Event> {
        info!("Begin game state loading");
        let mut events = occur![self.progression.load_egg(&mut self.random)];
        let records = match self.storage.get_desktop_pets() {
            Ok(records) => records,
            Err(error) => {
                error!("Unable to load desktop pets, {:?}", error);
                vec![]
            }
        };
        let sequence = records.iter().map(|record| record.id.0).max().unwrap_or(0);
        let mut pets = vec![];
        for record in records {
            match self.hatching.creatures.get(record.creature) {
                Ok(kind) => pets.push((record, kind)),
                Err(error) => warn!("Skip desktop pet {:?}, {:?}", record.id, error),
            }
        }
        self.desktop.load_pets(pets, sequence, &mut self.random);
        info!("End game state loading");
        events
    }
}
