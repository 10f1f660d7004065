use log::{error, info, warn};
use std::collections::HashSet;
use std::mem::take;
use std::rc::Rc;

pub use domains::*;

use crate::api::{Event, GameError};
use crate::desktop::DesktopDomain;
use crate::hatching::{CreatureKey, CreatureKind, HatchingDomain, InputKind};
use crate::math::Random;
use crate::persistence::Persistence;
use crate::playground::{CritterId, PlaygroundDomain};
use crate::progression::ProgressionDomain;

#[macro_use]
pub mod api;
pub mod collections;
pub mod data;
mod domains;
pub mod math;
pub mod persistence;
mod showcase;

/// Desktop pets advance at a fixed 30 Hz regardless of the host tick.
pub const DESKTOP_TICK: f32 = 1.0 / 30.0;

pub struct Game {
    pub progression: ProgressionDomain,
    pub hatching: HatchingDomain,
    pub playground: PlaygroundDomain,
    pub desktop: DesktopDomain,
    pub playground_open: bool,
    storage: Rc<dyn Persistence>,
    random: Random,
    desktop_time: f32,
}

impl Game {
    pub fn new(storage: Rc<dyn Persistence>, random: Random) -> Self {
        Self {
            progression: ProgressionDomain::new(storage.clone()),
            hatching: HatchingDomain::new(storage.clone()),
            playground: PlaygroundDomain::default(),
            desktop: DesktopDomain::new(storage.clone()),
            playground_open: false,
            storage,
            random,
            desktop_time: 0.0,
        }
    }

    pub fn update(&mut self, time: f32) -> Vec<Event> {
        let mut events = occur![self.progression.update(time)];
        events.extend(self.hatch_ready_egg());
        if self.playground_open {
            events.extend(occur![self.playground.update(time, &mut self.random)]);
        }
        self.desktop_time += time;
        if self.desktop_time >= DESKTOP_TICK {
            let elapsed = take(&mut self.desktop_time);
            events.extend(occur![self.desktop.update(elapsed, &mut self.random)]);
        }
        events
    }

    /// Counts input towards both the hatch counters and the active egg.
    pub fn record_input(&mut self, kind: InputKind, count: u64) -> Vec<Event> {
        if count == 0 {
            return vec![];
        }
        self.hatching.record_input(kind, count);
        occur![self.progression.add_progress(count as f64)]
    }

    /// Hatches from the pool the active egg belongs to and rolls its successor.
    pub fn hatch_egg(&mut self) -> Result<Option<(Rc<CreatureKind>, Vec<Event>)>, GameError> {
        let legendary = self.progression.egg.legendary;
        let element = self.progression.egg.element;
        let hatch = if legendary {
            self.hatching.try_hatch_legendary(&mut self.random)?
        } else if let Some(element) = element {
            self.hatching.try_hatch_by_element(element, &mut self.random)?
        } else {
            self.hatching.try_hatch(&mut self.random)?
        };
        let (creature, hatching) = match hatch {
            Some(hatch) => hatch,
            None => return Ok(None),
        };
        let events = occur![hatching, self.progression.create_new_egg(&mut self.random)];
        Ok(Some((creature, events)))
    }

    fn hatch_ready_egg(&mut self) -> Vec<Event> {
        if !self.progression.egg.is_ready() {
            return vec![];
        }
        match self.hatch_egg() {
            Ok(Some((creature, events))) => {
                info!("{} hatched {}", self.progression.egg.name, creature.name);
                events
            }
            Ok(None) => vec![],
            Err(error) => {
                error!(
                    "Unable to hatch {}, {:?}",
                    self.progression.egg.name, error
                );
                vec![]
            }
        }
    }

    pub fn open_playground(&mut self, width: f32, height: f32) -> Vec<Event> {
        let roster = self.playground_roster();
        self.playground_open = true;
        occur![self
            .playground
            .load_critters(width, height, roster, &mut self.random)]
    }

    /// Brings the running session in line with the stored roster.
    pub fn refresh_playground(&mut self) -> Vec<Event> {
        if !self.playground_open {
            return vec![];
        }
        let roster = self.playground_roster();
        let keys: HashSet<CreatureKey> = roster.iter().map(|kind| kind.id).collect();
        let stale: Vec<CritterId> = self
            .playground
            .critters
            .iter()
            .filter(|critter| !keys.contains(&critter.kind.id))
            .map(|critter| critter.id)
            .collect();
        let mut events = vec![];
        for id in stale {
            if let Ok(remove) = self.playground.remove_critter(id) {
                events.extend(remove());
            }
        }
        for kind in roster {
            if self.playground.find_critter(kind.id).is_none() {
                let (_, spawn) = self.playground.spawn_critter(kind, &mut self.random);
                events.extend(spawn());
            }
        }
        occur![events]
    }

    pub fn close_playground(&mut self) -> Vec<Event> {
        self.playground_open = false;
        occur![self.playground.clear()]
    }

    fn playground_roster(&self) -> Vec<Rc<CreatureKind>> {
        let entries = match self.storage.get_playground_creatures() {
            Ok(entries) => entries,
            Err(error) => {
                error!("Unable to read playground roster, {:?}", error);
                return vec![];
            }
        };
        let mut roster = vec![];
        for (_, creature) in entries {
            match self.hatching.creatures.get(creature) {
                Ok(kind) => roster.push(kind),
                Err(error) => warn!("Skip playground creature, {:?}", error),
            }
        }
        roster
    }

    pub fn add_desktop_pet(&mut self, creature: CreatureKey) -> Result<Vec<Event>, GameError> {
        let kind = self.hatching.creatures.get(creature)?;
        let (_, add) = self.desktop.add_pet(kind, &mut self.random)?;
        Ok(occur![add()])
    }

    /// No-op when the creature is not on the desktop.
    pub fn remove_desktop_pet(&mut self, creature: CreatureKey) -> Result<Vec<Event>, GameError> {
        let id = match self.desktop.find_pet(creature) {
            Some(pet) => pet.id,
            None => return Ok(vec![]),
        };
        let remove = self.desktop.remove_pet(id)?;
        Ok(occur![remove()])
    }
}
