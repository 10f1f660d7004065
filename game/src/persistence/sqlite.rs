use chrono::{DateTime, SecondsFormat, Utc};
use datamap::Storage;
use log::info;
use rusqlite::params;

use crate::data::DataError;
use crate::desktop::PetId;
use crate::hatching::{CreatureKey, CreatureKind, Element, InputKind, InputProgress, Rarity};
use crate::persistence::{CollectionRecord, Persistence, PetRecord, DISPLAY_SLOTS, PLAYGROUND_SLOTS};
use crate::progression::Egg;

const SCHEMA: &str = include_str!("schema.sql");

pub struct SqlitePersistence {
    storage: Storage,
}

impl SqlitePersistence {
    pub fn new(storage: Storage) -> Result<Self, DataError> {
        storage.setup(SCHEMA)?;
        info!("Storage schema ready");
        Ok(Self { storage })
    }

    pub fn in_memory() -> Result<Self, DataError> {
        Self::new(Storage::in_memory()?)
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DataError> {
    let timestamp = DateTime::parse_from_rfc3339(value)?;
    Ok(timestamp.with_timezone(&Utc))
}

fn parse_rarity(code: u8) -> Result<Rarity, DataError> {
    Rarity::from_code(code).ok_or_else(|| DataError::Corrupted(format!("rarity code {code}")))
}

fn parse_element(code: Option<u8>) -> Result<Option<Element>, DataError> {
    match code {
        None => Ok(None),
        Some(code) => Element::from_code(code)
            .map(Some)
            .ok_or_else(|| DataError::Corrupted(format!("element code {code}"))),
    }
}

fn stat_key(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Keystroke => "keystrokes",
        InputKind::Click => "clicks",
    }
}

impl Persistence for SqlitePersistence {
    fn count_creatures(&self) -> Result<usize, DataError> {
        Ok(self.storage.count("select count(*) from creatures", [])?)
    }

    fn insert_creature(&self, creature: &CreatureKind) -> Result<(), DataError> {
        self.storage.execute(
            "insert or replace into creatures
             (id, name, rarity, element, sprite_path, description, age, gender, favorite_food, dislikes, background)
             values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                creature.id.0 as i64,
                creature.name,
                creature.rarity.code(),
                creature.element.map(|element| element.code()),
                creature.sprite,
                creature.description,
                creature.age,
                creature.gender,
                creature.favorite_food,
                creature.dislikes,
                creature.background,
            ],
        )?;
        Ok(())
    }

    fn get_creatures(&self) -> Result<Vec<CreatureKind>, DataError> {
        type Row = (
            i64,
            String,
            u8,
            Option<u8>,
            String,
            String,
            [Option<String>; 5],
        );
        let rows: Vec<Row> = self.storage.find_all(
            "select id, name, rarity, element, sprite_path, description, age, gender, favorite_food, dislikes, background
             from creatures order by id",
            [],
            |row| {
                Ok((
                    row.get("id")?,
                    row.get("name")?,
                    row.get("rarity")?,
                    row.get("element")?,
                    row.get("sprite_path")?,
                    row.get("description")?,
                    [
                        row.get("age")?,
                        row.get("gender")?,
                        row.get("favorite_food")?,
                        row.get("dislikes")?,
                        row.get("background")?,
                    ],
                ))
            },
        )?;
        let mut creatures = Vec::with_capacity(rows.len());
        for (id, name, rarity, element, sprite, description, details) in rows {
            let [age, gender, favorite_food, dislikes, background] = details;
            creatures.push(CreatureKind {
                id: CreatureKey(id as usize),
                name,
                rarity: parse_rarity(rarity)?,
                element: parse_element(element)?,
                sprite,
                description,
                age,
                gender,
                favorite_food,
                dislikes,
                background,
            });
        }
        Ok(creatures)
    }

    fn get_display_slots(&self) -> Result<Vec<(usize, CreatureKey)>, DataError> {
        let slots = self.storage.find_all(
            "select slot_index, creature_id from display_slots order by slot_index",
            [],
            |row| {
                let slot: i64 = row.get(0)?;
                let creature: i64 = row.get(1)?;
                Ok((slot as usize, CreatureKey(creature as usize)))
            },
        )?;
        Ok(slots)
    }

    fn set_display_slot(&self, slot: usize, creature: CreatureKey) -> Result<(), DataError> {
        if slot >= DISPLAY_SLOTS {
            return Ok(());
        }
        self.storage.execute(
            "insert or replace into display_slots (slot_index, creature_id) values (?, ?)",
            params![slot as i64, creature.0 as i64],
        )?;
        Ok(())
    }

    fn remove_from_display_slot(&self, slot: usize) -> Result<(), DataError> {
        self.storage.execute(
            "delete from display_slots where slot_index = ?",
            params![slot as i64],
        )?;
        Ok(())
    }

    fn remove_creature_from_display(&self, creature: CreatureKey) -> Result<(), DataError> {
        self.storage.execute(
            "delete from display_slots where creature_id = ?",
            params![creature.0 as i64],
        )?;
        Ok(())
    }

    fn get_next_available_slot(&self) -> Result<Option<usize>, DataError> {
        let occupied = self.get_display_slots()?;
        let slot = (0..DISPLAY_SLOTS).find(|slot| !occupied.iter().any(|(index, _)| index == slot));
        Ok(slot)
    }

    fn get_playground_creatures(&self) -> Result<Vec<(usize, CreatureKey)>, DataError> {
        let creatures = self.storage.find_all(
            "select slot, creature_id from playground_creatures order by slot",
            [],
            |row| {
                let slot: i64 = row.get(0)?;
                let creature: i64 = row.get(1)?;
                Ok((slot as usize, CreatureKey(creature as usize)))
            },
        )?;
        Ok(creatures)
    }

    fn add_to_playground(&self, creature: CreatureKey) -> Result<(), DataError> {
        let occupied = self.get_playground_creatures()?;
        if occupied.iter().any(|(_, occupant)| *occupant == creature) {
            return Ok(());
        }
        let slot = (0..PLAYGROUND_SLOTS).find(|slot| !occupied.iter().any(|(index, _)| index == slot));
        if let Some(slot) = slot {
            self.storage.execute(
                "insert into playground_creatures (slot, creature_id) values (?, ?)",
                params![slot as i64, creature.0 as i64],
            )?;
        }
        Ok(())
    }

    fn remove_from_playground(&self, creature: CreatureKey) -> Result<(), DataError> {
        self.storage.execute(
            "delete from playground_creatures where creature_id = ?",
            params![creature.0 as i64],
        )?;
        Ok(())
    }

    fn is_in_playground(&self, creature: CreatureKey) -> Result<bool, DataError> {
        let count = self.storage.count(
            "select count(*) from playground_creatures where creature_id = ?",
            params![creature.0 as i64],
        )?;
        Ok(count > 0)
    }

    fn get_playground_count(&self) -> Result<usize, DataError> {
        Ok(self
            .storage
            .count("select count(*) from playground_creatures", [])?)
    }

    fn get_current_egg(&self) -> Result<Option<Egg>, DataError> {
        let row = self.storage.find_one(
            "select name, sprite_path, element, legendary, required_count, current_count
             from current_egg where id = 1",
            [],
            |row| {
                let element: Option<u8> = row.get("element")?;
                let legendary: bool = row.get("legendary")?;
                let required_count: i64 = row.get("required_count")?;
                Ok((
                    row.get::<_, String>("name")?,
                    row.get::<_, String>("sprite_path")?,
                    element,
                    legendary,
                    required_count,
                    row.get::<_, f64>("current_count")?,
                ))
            },
        )?;
        match row {
            None => Ok(None),
            Some((name, sprite, element, legendary, required_count, current_count)) => {
                Ok(Some(Egg {
                    name,
                    sprite,
                    element: parse_element(element)?,
                    legendary,
                    required_count: required_count.max(0) as u32,
                    current_count: current_count.max(0.0),
                }))
            }
        }
    }

    fn save_current_egg(&self, egg: &Egg) -> Result<(), DataError> {
        self.storage.execute(
            "insert or replace into current_egg
             (id, name, sprite_path, element, legendary, required_count, current_count)
             values (1, ?, ?, ?, ?, ?, ?)",
            params![
                egg.name,
                egg.sprite,
                egg.element.map(|element| element.code()),
                egg.legendary,
                egg.required_count,
                egg.current_count,
            ],
        )?;
        Ok(())
    }

    fn record_input(&self, kind: InputKind, count: u64) -> Result<(), DataError> {
        self.storage.execute(
            "update stats set value = value + ? where key = ?",
            params![count as i64, stat_key(kind)],
        )?;
        Ok(())
    }

    fn get_current_progress(&self) -> Result<InputProgress, DataError> {
        let stats: Vec<(String, i64)> = self.storage.find_all(
            "select key, value from stats",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        let mut progress = InputProgress::default();
        for (key, value) in stats {
            let value = value.max(0) as u64;
            match key.as_str() {
                "keystrokes" => progress.keystrokes = value,
                "clicks" => progress.clicks = value,
                _ => {}
            }
        }
        Ok(progress)
    }

    fn set_current_progress(&self, progress: InputProgress) -> Result<(), DataError> {
        self.storage.transaction(|transaction| {
            let mut statement =
                transaction.prepare_cached("update stats set value = ? where key = ?")?;
            statement.execute(params![progress.keystrokes as i64, "keystrokes"])?;
            statement.execute(params![progress.clicks as i64, "clicks"])?;
            Ok(())
        })?;
        Ok(())
    }

    fn append_collection_entry(
        &self,
        creature: CreatureKey,
        obtained_at: DateTime<Utc>,
    ) -> Result<(), DataError> {
        self.storage.execute(
            "insert into collection (creature_id, obtained_at) values (?, ?)",
            params![creature.0 as i64, format_timestamp(obtained_at)],
        )?;
        Ok(())
    }

    fn get_collection(&self) -> Result<Vec<CollectionRecord>, DataError> {
        let rows: Vec<(i64, i64, String)> = self.storage.find_all(
            "select entry.creature_id, count(*), min(entry.obtained_at)
             from collection entry
             join creatures creature on creature.id = entry.creature_id
             group by entry.creature_id
             order by creature.rarity desc, creature.name",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;
        let mut records = Vec::with_capacity(rows.len());
        for (creature, count, first_obtained) in rows {
            records.push(CollectionRecord {
                creature: CreatureKey(creature as usize),
                count: count as usize,
                first_obtained: parse_timestamp(&first_obtained)?,
            });
        }
        Ok(records)
    }

    fn get_owned_creature_count(&self) -> Result<usize, DataError> {
        Ok(self
            .storage
            .count("select count(distinct creature_id) from collection", [])?)
    }

    fn get_desktop_pets(&self) -> Result<Vec<PetRecord>, DataError> {
        let pets = self.storage.find_all(
            "select id, creature_id, x, y from desktop_pets order by id",
            [],
            |row| {
                let id: i64 = row.get(0)?;
                let creature: i64 = row.get(1)?;
                let x: f64 = row.get(2)?;
                let y: f64 = row.get(3)?;
                Ok(PetRecord {
                    id: PetId(id as usize),
                    creature: CreatureKey(creature as usize),
                    position: [x as f32, y as f32],
                })
            },
        )?;
        Ok(pets)
    }

    fn save_desktop_pet(&self, pet: &PetRecord) -> Result<(), DataError> {
        let [x, y] = pet.position;
        self.storage.execute(
            "insert or replace into desktop_pets (id, creature_id, x, y) values (?, ?, ?, ?)",
            params![pet.id.0 as i64, pet.creature.0 as i64, x as f64, y as f64],
        )?;
        Ok(())
    }

    fn delete_desktop_pet(&self, id: PetId) -> Result<(), DataError> {
        self.storage
            .execute("delete from desktop_pets where id = ?", params![id.0 as i64])?;
        Ok(())
    }
}
