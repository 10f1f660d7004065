use crate::testing::{GameTestScenario, HatchingTestScenario};
use game::api::Event;
use game::hatching::Hatching::{CreatureHatched, ProgressConsumed};
use game::hatching::InputKind::{Click, Keystroke};
use game::hatching::{Element, HatchingError, Rarity, HATCH_THRESHOLD};
use game::persistence::Persistence;
use game::progression::Progression::EggCreated;
use game::progression::{Egg, ELEMENTAL_EGGS, LEGENDARY_EGG};

mod testing;

#[test]
fn test_hatch_after_exact_threshold_of_keystrokes() {
    let scenario = GameTestScenario::new()
        .given_egg(Egg::from_kind(&ELEMENTAL_EGGS[0], 500))
        .when_record_input(Keystroke, 1, 499)
        .then_egg(|egg| assert!(!egg.is_ready()))
        .when_record_input(Keystroke, 1, 1)
        .then_egg(|egg| assert!(egg.is_ready()))
        .when_hatch()
        .then_no_error()
        .then_progress(0, 0)
        .then_egg(|egg| assert_eq!(egg.current_count, 0.0))
        .then_event("new egg", |event| {
            matches!(event, Event::Progression(events) if matches!(events[0], EggCreated { .. }))
        });
    assert_eq!(scenario.hatched.len(), 1);
    assert_eq!(scenario.hatched[0].element, Some(Element::Fire));
    assert_eq!(scenario.game.hatching.get_owned_creature_count(), 1);
}

#[test]
fn test_ready_egg_hatches_on_update() {
    let scenario = GameTestScenario::new()
        .given_egg(Egg::from_kind(&ELEMENTAL_EGGS[1], 500))
        .when_record_input(Keystroke, 10, 40)
        .when_record_input(Click, 10, 10)
        .when_update(1, 0.016)
        .then_progress(0, 0)
        .then_event("hatch", |event| {
            matches!(event, Event::Hatching(events) if matches!(events[0], CreatureHatched { element: Some(Element::Water), .. }))
        });
    let collection = scenario.game.hatching.get_collection();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection[0].kind.element, Some(Element::Water));
}

#[test]
fn test_hatch_requires_threshold() {
    let mut scenario = HatchingTestScenario::new().given_input(HATCH_THRESHOLD - 1, 0);
    let hatch = scenario.domain.try_hatch(&mut scenario.random).unwrap();
    assert!(hatch.is_none());
    scenario.then_progress(HATCH_THRESHOLD - 1, 0);
}

#[test]
fn test_hatch_consumes_threshold_exactly() {
    let mut scenario = HatchingTestScenario::new().given_input(420, 130);
    let (_, events) = scenario
        .domain
        .try_hatch(&mut scenario.random)
        .unwrap()
        .unwrap();
    assert!(matches!(events[1], ProgressConsumed { remaining } if remaining.total() == 50));
    scenario.then_progress(0, 50);
}

#[test]
fn test_element_hatch_stays_in_element() {
    let mut scenario = HatchingTestScenario::new();
    for element in Element::ALL {
        for _ in 0..20 {
            scenario.storage.record_input(Keystroke, HATCH_THRESHOLD).unwrap();
            let (creature, _) = scenario
                .domain
                .try_hatch_by_element(element, &mut scenario.random)
                .unwrap()
                .unwrap();
            assert_eq!(creature.element, Some(element));
        }
    }
}

#[test]
fn test_legendary_hatch_only_legendary() {
    let mut scenario = HatchingTestScenario::new();
    for _ in 0..20 {
        scenario.storage.record_input(Click, HATCH_THRESHOLD).unwrap();
        let (creature, _) = scenario
            .domain
            .try_hatch_legendary(&mut scenario.random)
            .unwrap()
            .unwrap();
        assert_eq!(creature.rarity, Rarity::Legendary);
    }
}

#[test]
fn test_golden_egg_hatches_legendary() {
    let scenario = GameTestScenario::new()
        .given_egg(Egg::from_kind(&LEGENDARY_EGG, 500))
        .when_record_input(Keystroke, 500, 1)
        .when_hatch()
        .then_no_error();
    assert_eq!(scenario.hatched[0].rarity, Rarity::Legendary);
}

#[test]
fn test_rarity_distribution() {
    let mut scenario = HatchingTestScenario::new();
    let rolls = 100_000;
    let mut counts = [0usize; 4];
    for _ in 0..rolls {
        let rarity = scenario.domain.roll_rarity(&mut scenario.random);
        counts[rarity.code() as usize] += 1;
    }
    let expected = [0.50, 0.30, 0.15, 0.05];
    for (count, expected) in counts.iter().zip(expected) {
        let observed = *count as f64 / rolls as f64;
        assert!(
            (observed - expected).abs() < 0.01,
            "observed {} expected {}",
            observed,
            expected
        );
    }
}

#[test]
fn test_rarity_roll_boundaries() {
    let cases = [
        (49, Rarity::Common),
        (50, Rarity::Rare),
        (79, Rarity::Rare),
        (80, Rarity::Epic),
        (94, Rarity::Epic),
        (95, Rarity::Legendary),
        (99, Rarity::Legendary),
    ];
    for (roll, rarity) in cases {
        assert_eq!(Rarity::from_roll(roll), rarity, "roll {}", roll);
    }
}

#[test]
fn test_collection_grouped_and_ordered() {
    let scenario = HatchingTestScenario::new();
    let find = |name: &str| scenario.domain.creatures.find(name).unwrap().id;
    let now = chrono::Utc::now();
    for name in ["Slime", "Flame Fox", "Slime", "Volt Bunny"] {
        scenario.storage.append_collection_entry(find(name), now).unwrap();
    }
    let collection = scenario.domain.get_collection();
    let names: Vec<&str> = collection.iter().map(|owned| owned.kind.name.as_str()).collect();
    assert_eq!(names, vec!["Flame Fox", "Volt Bunny", "Slime"]);
    assert_eq!(collection[2].count, 2);
    assert_eq!(scenario.domain.get_owned_creature_count(), 3);
    assert_eq!(scenario.domain.get_total_creature_count(), 50);
}

#[test]
fn test_unreadable_progress_skips_hatch() {
    let mut scenario = HatchingTestScenario::new().given_input(HATCH_THRESHOLD * 2, 0);
    scenario.storage.failing.set(true);
    let hatch = scenario.domain.try_hatch(&mut scenario.random).unwrap();
    assert!(hatch.is_none());
    scenario.storage.failing.set(false);
    let hatch = scenario.domain.try_hatch(&mut scenario.random).unwrap();
    assert!(hatch.is_some());
    scenario.then_progress(HATCH_THRESHOLD, 0);
}

#[test]
fn test_catalog_without_legendary_rejected() {
    let scenario = HatchingTestScenario::new();
    let mut domain = scenario.domain;
    let creatures = game::data::bundled_catalog()
        .unwrap()
        .into_iter()
        .filter(|creature| creature.rarity != Rarity::Legendary)
        .collect();
    assert!(domain.load_creatures(creatures).is_err());
}

#[test]
fn test_catalog_without_water_creatures_rejected() {
    let scenario = HatchingTestScenario::new();
    let mut domain = scenario.domain;
    let creatures = game::data::bundled_catalog()
        .unwrap()
        .into_iter()
        .filter(|creature| creature.element != Some(Element::Water))
        .collect();
    let error = domain.load_creatures(creatures).err();
    assert!(matches!(
        error,
        Some(HatchingError::ElementsMissing { missing }) if missing == vec![Element::Water]
    ));
}
