#![allow(dead_code)]

use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use game::api::{Event, GameError};
use game::data::DataError;
use game::desktop::{Desktop, DesktopDomain, DesktopError, DesktopPet, PetId, PetState};
use game::hatching::{
    CreatureKey, CreatureKind, Element, HatchingDomain, InputKind, InputProgress, Rarity,
};
use game::math::Random;
use game::persistence::{CollectionRecord, Persistence, PetRecord, SqlitePersistence};
use game::playground::{Critter, CritterId, Pattern, Playground, PlaygroundDomain};
use game::progression::{Egg, ProgressionDomain};
use game::Game;

pub const SEED: u64 = 7;

pub fn at<T>(x: T, y: T) -> [T; 2] {
    [x, y]
}

pub fn creature_kind(id: usize, rarity: Rarity, element: Option<Element>) -> Rc<CreatureKind> {
    Rc::new(CreatureKind {
        id: CreatureKey(id),
        name: format!("Creature {}", id),
        rarity,
        element,
        sprite: format!("Creatures/{}.png", id),
        description: String::new(),
        age: None,
        gender: None,
        favorite_food: None,
        dislikes: None,
        background: None,
    })
}

/// In-memory storage that can be switched to fail every call.
pub struct FlakyStorage {
    inner: SqlitePersistence,
    pub failing: Cell<bool>,
}

impl FlakyStorage {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            inner: SqlitePersistence::in_memory().unwrap(),
            failing: Cell::new(false),
        })
    }

    fn check(&self) -> Result<(), DataError> {
        if self.failing.get() {
            Err(DataError::Corrupted("storage offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Persistence for FlakyStorage {
    fn count_creatures(&self) -> Result<usize, DataError> {
        self.check()?;
        self.inner.count_creatures()
    }

    fn insert_creature(&self, creature: &CreatureKind) -> Result<(), DataError> {
        self.check()?;
        self.inner.insert_creature(creature)
    }

    fn get_creatures(&self) -> Result<Vec<CreatureKind>, DataError> {
        self.check()?;
        self.inner.get_creatures()
    }

    fn get_display_slots(&self) -> Result<Vec<(usize, CreatureKey)>, DataError> {
        self.check()?;
        self.inner.get_display_slots()
    }

    fn set_display_slot(&self, slot: usize, creature: CreatureKey) -> Result<(), DataError> {
        self.check()?;
        self.inner.set_display_slot(slot, creature)
    }

    fn remove_from_display_slot(&self, slot: usize) -> Result<(), DataError> {
        self.check()?;
        self.inner.remove_from_display_slot(slot)
    }

    fn remove_creature_from_display(&self, creature: CreatureKey) -> Result<(), DataError> {
        self.check()?;
        self.inner.remove_creature_from_display(creature)
    }

    fn get_next_available_slot(&self) -> Result<Option<usize>, DataError> {
        self.check()?;
        self.inner.get_next_available_slot()
    }

    fn get_playground_creatures(&self) -> Result<Vec<(usize, CreatureKey)>, DataError> {
        self.check()?;
        self.inner.get_playground_creatures()
    }

    fn add_to_playground(&self, creature: CreatureKey) -> Result<(), DataError> {
        self.check()?;
        self.inner.add_to_playground(creature)
    }

    fn remove_from_playground(&self, creature: CreatureKey) -> Result<(), DataError> {
        self.check()?;
        self.inner.remove_from_playground(creature)
    }

    fn is_in_playground(&self, creature: CreatureKey) -> Result<bool, DataError> {
        self.check()?;
        self.inner.is_in_playground(creature)
    }

    fn get_playground_count(&self) -> Result<usize, DataError> {
        self.check()?;
        self.inner.get_playground_count()
    }

    fn get_current_egg(&self) -> Result<Option<Egg>, DataError> {
        self.check()?;
        self.inner.get_current_egg()
    }

    fn save_current_egg(&self, egg: &Egg) -> Result<(), DataError> {
        self.check()?;
        self.inner.save_current_egg(egg)
    }

    fn record_input(&self, kind: InputKind, count: u64) -> Result<(), DataError> {
        self.check()?;
        self.inner.record_input(kind, count)
    }

    fn get_current_progress(&self) -> Result<InputProgress, DataError> {
        self.check()?;
        self.inner.get_current_progress()
    }

    fn set_current_progress(&self, progress: InputProgress) -> Result<(), DataError> {
        self.check()?;
        self.inner.set_current_progress(progress)
    }

    fn append_collection_entry(
        &self,
        creature: CreatureKey,
        obtained_at: DateTime<Utc>,
    ) -> Result<(), DataError> {
        self.check()?;
        self.inner.append_collection_entry(creature, obtained_at)
    }

    fn get_collection(&self) -> Result<Vec<CollectionRecord>, DataError> {
        self.check()?;
        self.inner.get_collection()
    }

    fn get_owned_creature_count(&self) -> Result<usize, DataError> {
        self.check()?;
        self.inner.get_owned_creature_count()
    }

    fn get_desktop_pets(&self) -> Result<Vec<PetRecord>, DataError> {
        self.check()?;
        self.inner.get_desktop_pets()
    }

    fn save_desktop_pet(&self, pet: &PetRecord) -> Result<(), DataError> {
        self.check()?;
        self.inner.save_desktop_pet(pet)
    }

    fn delete_desktop_pet(&self, id: PetId) -> Result<(), DataError> {
        self.check()?;
        self.inner.delete_desktop_pet(id)
    }
}

pub struct GameTestScenario {
    pub game: Game,
    pub storage: Rc<FlakyStorage>,
    pub events: Vec<Event>,
    pub hatched: Vec<Rc<CreatureKind>>,
    pub error: Option<GameError>,
}

impl GameTestScenario {
    pub fn new() -> Self {
        let storage = FlakyStorage::new();
        let persistence: Rc<dyn Persistence> = storage.clone();
        let mut game = Game::new(persistence, Random::with_seed(SEED));
        game.load_game_knowledge().unwrap();
        let events = game.load_game_state();
        Self {
            game,
            storage,
            events,
            hatched: vec![],
            error: None,
        }
    }

    /// Builds a second game over the same storage, as after a restart.
    pub fn restart(mut self) -> Self {
        let persistence: Rc<dyn Persistence> = self.storage.clone();
        let mut game = Game::new(persistence, Random::with_seed(SEED + 1));
        if let Err(error) = game.load_game_knowledge() {
            self.error = Some(error);
        }
        self.events = game.load_game_state();
        self.game = game;
        self
    }

    pub fn creature(&self, name: &str) -> CreatureKey {
        self.game.hatching.creatures.find(name).unwrap().id
    }

    pub fn given_egg(mut self, egg: Egg) -> Self {
        self.storage.save_current_egg(&egg).unwrap();
        self.game.progression.egg = egg;
        self
    }

    pub fn given_input(self, keystrokes: u64, clicks: u64) -> Self {
        self.storage
            .set_current_progress(InputProgress { keystrokes, clicks })
            .unwrap();
        self
    }

    pub fn given_display(self, slot: usize, name: &str) -> Self {
        let creature = self.creature(name);
        self.storage.set_display_slot(slot, creature).unwrap();
        self
    }

    pub fn given_playground(self, name: &str) -> Self {
        let creature = self.creature(name);
        self.storage.add_to_playground(creature).unwrap();
        self
    }

    pub fn given_storage_failure(self) -> Self {
        self.storage.failing.set(true);
        self
    }

    pub fn given_storage_recovered(self) -> Self {
        self.storage.failing.set(false);
        self
    }

    pub fn when_record_input(mut self, kind: InputKind, count: u64, times: usize) -> Self {
        for _ in 0..times {
            let events = self.game.record_input(kind, count);
            self.events.extend(events);
        }
        self
    }

    pub fn when_update(mut self, ticks: usize, time: f32) -> Self {
        for _ in 0..ticks {
            let events = self.game.update(time);
            self.events.extend(events);
        }
        self
    }

    pub fn when_hatch(mut self) -> Self {
        match self.game.hatch_egg() {
            Ok(Some((creature, events))) => {
                self.hatched.push(creature);
                self.events.extend(events);
            }
            Ok(None) => {}
            Err(error) => self.error = Some(error),
        }
        self
    }

    pub fn when_toggle_display(mut self, name: &str) -> Self {
        let creature = self.creature(name);
        match self.game.toggle_display(creature) {
            Ok(events) => self.events.extend(events),
            Err(error) => self.error = Some(error),
        }
        self
    }

    pub fn when_toggle_playground(mut self, name: &str) -> Self {
        let creature = self.creature(name);
        match self.game.toggle_playground(creature) {
            Ok(events) => self.events.extend(events),
            Err(error) => self.error = Some(error),
        }
        self
    }

    pub fn when_swap_display_slots(mut self, a: usize, b: usize) -> Self {
        if let Err(error) = self.game.swap_display_slots(a, b) {
            self.error = Some(error);
        }
        self
    }

    pub fn when_open_playground(mut self, width: f32, height: f32) -> Self {
        let events = self.game.open_playground(width, height);
        self.events.extend(events);
        self
    }

    pub fn when_add_desktop_pet(mut self, name: &str) -> Self {
        let creature = self.creature(name);
        match self.game.add_desktop_pet(creature) {
            Ok(events) => self.events.extend(events),
            Err(error) => self.error = Some(error),
        }
        self
    }

    pub fn then_egg<F>(self, check: F) -> Self
    where
        F: FnOnce(&Egg),
    {
        check(&self.game.progression.egg);
        self
    }

    pub fn then_progress(self, keystrokes: u64, clicks: u64) -> Self {
        assert_eq!(
            self.storage.get_current_progress().unwrap(),
            InputProgress { keystrokes, clicks }
        );
        self
    }

    pub fn then_display(self, expected: &[(usize, &str)]) -> Self {
        let expected: Vec<(usize, CreatureKey)> = expected
            .iter()
            .map(|(slot, name)| (*slot, self.creature(name)))
            .collect();
        assert_eq!(self.storage.get_display_slots().unwrap(), expected);
        self
    }

    pub fn then_playground(self, expected: &[&str]) -> Self {
        let roster: Vec<CreatureKey> = self
            .storage
            .get_playground_creatures()
            .unwrap()
            .into_iter()
            .map(|(_, creature)| creature)
            .collect();
        let expected: Vec<CreatureKey> = expected.iter().map(|name| self.creature(name)).collect();
        assert_eq!(roster, expected);
        self
    }

    pub fn then_critters(self, expected: &[&str]) -> Self {
        let mut critters: Vec<CreatureKey> = self
            .game
            .playground
            .critters
            .iter()
            .map(|critter| critter.kind.id)
            .collect();
        let mut expected: Vec<CreatureKey> =
            expected.iter().map(|name| self.creature(name)).collect();
        critters.sort();
        expected.sort();
        assert_eq!(critters, expected);
        self
    }

    pub fn then_event<P>(self, description: &str, predicate: P) -> Self
    where
        P: Fn(&Event) -> bool,
    {
        assert!(
            self.events.iter().any(predicate),
            "expected {} in {:#?}",
            description,
            self.events
        );
        self
    }

    pub fn then_no_error(self) -> Self {
        assert!(self.error.is_none(), "unexpected {:?}", self.error);
        self
    }
}

pub struct HatchingTestScenario {
    pub domain: HatchingDomain,
    pub storage: Rc<FlakyStorage>,
    pub random: Random,
}

impl HatchingTestScenario {
    pub fn new() -> Self {
        let storage = FlakyStorage::new();
        let persistence: Rc<dyn Persistence> = storage.clone();
        let mut domain = HatchingDomain::new(persistence);
        domain
            .load_creatures(game::data::bundled_catalog().unwrap())
            .unwrap();
        for creature in domain.creatures.values() {
            storage.insert_creature(creature).unwrap();
        }
        Self {
            domain,
            storage,
            random: Random::with_seed(SEED),
        }
    }

    pub fn given_input(self, keystrokes: u64, clicks: u64) -> Self {
        self.storage
            .set_current_progress(InputProgress { keystrokes, clicks })
            .unwrap();
        self
    }

    pub fn then_progress(self, keystrokes: u64, clicks: u64) -> Self {
        assert_eq!(
            self.domain.get_current_progress(),
            InputProgress { keystrokes, clicks }
        );
        self
    }
}

pub struct ProgressionTestScenario {
    pub domain: ProgressionDomain,
    pub storage: Rc<FlakyStorage>,
    pub random: Random,
}

impl ProgressionTestScenario {
    pub fn new() -> Self {
        let storage = FlakyStorage::new();
        let persistence: Rc<dyn Persistence> = storage.clone();
        let mut domain = ProgressionDomain::new(persistence);
        let mut random = Random::with_seed(SEED);
        domain.load_egg(&mut random);
        Self {
            domain,
            storage,
            random,
        }
    }

    pub fn given_egg(mut self, egg: Egg) -> Self {
        self.storage.save_current_egg(&egg).unwrap();
        self.domain.load_egg(&mut self.random);
        self
    }
}

pub struct PlaygroundTestScenario {
    pub domain: PlaygroundDomain,
    pub random: Random,
    critters: HashMap<String, CritterId>,
    pub events: Vec<Playground>,
}

impl PlaygroundTestScenario {
    pub fn new() -> Self {
        Self {
            domain: PlaygroundDomain::default(),
            random: Random::with_seed(SEED),
            critters: HashMap::new(),
            events: vec![],
        }
    }

    pub fn critter(&self, name: &str) -> &Critter {
        let id = self.critters[name];
        self.domain.get_critter(id).unwrap()
    }

    pub fn ground(&self) -> f32 {
        self.domain.bounds.ground_y
    }

    pub fn given_area(mut self, width: f32, height: f32) -> Self {
        self.domain.load_critters(width, height, vec![], &mut self.random);
        self
    }

    /// Resting critter that keeps idling until the test moves it.
    pub fn given_critter(mut self, name: &str, x: f32) -> Self {
        let kind = creature_kind(self.critters.len() + 1, Rarity::Common, None);
        let (id, spawn) = self.domain.spawn_critter(kind, &mut self.random);
        spawn();
        let ground = self.domain.bounds.ground_y;
        let critter = self.domain.get_critter_mut(id).unwrap();
        critter.position = [x, ground];
        critter.velocity = [0.0, 0.0];
        critter.on_ground = true;
        critter.pattern = Pattern::Idle { jump_timer: 100.0 };
        critter.pattern_timer = 100.0;
        self.critters.insert(name.to_string(), id);
        self
    }

    pub fn given_airborne(mut self, name: &str, position: [f32; 2], velocity: [f32; 2]) -> Self {
        let id = self.critters[name];
        let critter = self.domain.get_critter_mut(id).unwrap();
        critter.position = position;
        critter.velocity = velocity;
        critter.on_ground = false;
        self
    }

    pub fn given_pattern(mut self, name: &str, pattern: Pattern, duration: f32) -> Self {
        let id = self.critters[name];
        let critter = self.domain.get_critter_mut(id).unwrap();
        critter.pattern = pattern;
        critter.pattern_timer = duration;
        self
    }

    pub fn when_knock_over(mut self, name: &str) -> Self {
        let id = self.critters[name];
        self.domain.get_critter_mut(id).unwrap().knock_over();
        self
    }

    pub fn when_squash(mut self, name: &str) -> Self {
        let id = self.critters[name];
        self.domain.get_critter_mut(id).unwrap().squash();
        self
    }

    pub fn when_jump(mut self, name: &str) -> Self {
        let id = self.critters[name];
        self.domain.get_critter_mut(id).unwrap().jump();
        self
    }

    pub fn when_collision_check(mut self) -> Self {
        let events = self.domain.detect_collisions();
        self.events.extend(events);
        self
    }

    pub fn when_update(mut self, ticks: usize, time: f32) -> Self {
        for _ in 0..ticks {
            let events = self.domain.update(time, &mut self.random);
            self.events.extend(events);
        }
        self
    }

    pub fn then_critter<F>(self, name: &str, check: F) -> Self
    where
        F: FnOnce(&Critter),
    {
        check(self.critter(name));
        self
    }
}

pub struct DesktopTestScenario {
    pub domain: DesktopDomain,
    pub storage: Rc<FlakyStorage>,
    pub random: Random,
    pets: HashMap<String, PetId>,
    pub events: Vec<Desktop>,
    pub error: Option<DesktopError>,
}

impl DesktopTestScenario {
    pub fn new() -> Self {
        let storage = FlakyStorage::new();
        let persistence: Rc<dyn Persistence> = storage.clone();
        Self {
            domain: DesktopDomain::new(persistence),
            storage,
            random: Random::with_seed(SEED),
            pets: HashMap::new(),
            events: vec![],
            error: None,
        }
    }

    pub fn pet(&self, name: &str) -> &DesktopPet {
        self.domain.get_pet(self.pets[name]).unwrap()
    }

    pub fn pet_id(&self, name: &str) -> PetId {
        self.pets[name]
    }

    pub fn given_max_pets(mut self, max_pets: usize) -> Self {
        self.domain.set_max_pets(max_pets);
        self
    }

    pub fn given_pet(mut self, name: &str, creature: usize, x: f32, state: PetState) -> Self {
        let kind = creature_kind(creature, Rarity::Common, None);
        let id = match self.domain.add_pet(kind, &mut self.random) {
            Ok((id, add)) => {
                add();
                id
            }
            Err(error) => panic!("unable to add pet {}, {:?}", name, error),
        };
        let pet = self.domain.get_pet_mut(id).unwrap();
        pet.position[0] = x;
        pet.state = state;
        pet.state_timer = 100.0;
        self.pets.insert(name.to_string(), id);
        self
    }

    pub fn when_add_pet(mut self, name: &str, creature: usize) -> Self {
        let kind = creature_kind(creature, Rarity::Common, None);
        match self.domain.add_pet(kind, &mut self.random) {
            Ok((id, add)) => {
                self.events.extend(add());
                self.pets.insert(name.to_string(), id);
            }
            Err(error) => self.error = Some(error),
        }
        self
    }

    pub fn when_update(mut self, ticks: usize, time: f32) -> Self {
        for _ in 0..ticks {
            let events = self.domain.update(time, &mut self.random);
            self.events.extend(events);
        }
        self
    }

    pub fn then_pet<F>(self, name: &str, check: F) -> Self
    where
        F: FnOnce(&DesktopPet),
    {
        check(self.pet(name));
        self
    }
}
