use log::warn;
use std::env;

use game::desktop::{DEFAULT_MAX_PETS, DEFAULT_SCREEN, MAX_PETS_LIMIT};

#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub database: String,
    pub seed: Option<u64>,
    pub simulated_input: bool,
    pub screen: [f32; 2],
    pub max_pets: usize,
    pub run_seconds: Option<u64>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            database: "./assets/pets.sqlite".to_string(),
            seed: None,
            simulated_input: false,
            screen: DEFAULT_SCREEN,
            max_pets: DEFAULT_MAX_PETS,
            run_seconds: None,
        }
    }
}

impl Configuration {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Unparsable values are reported and replaced by defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(database) = lookup("TAMAGOTCHI_DATABASE") {
            config.database = database;
        }
        config.seed = parse_var(&lookup, "TAMAGOTCHI_SEED");
        if let Some(value) = lookup("TAMAGOTCHI_SIMULATED_INPUT") {
            config.simulated_input = matches!(value.trim(), "1" | "true" | "yes" | "on");
        }
        if let Some(value) = lookup("TAMAGOTCHI_SCREEN") {
            match parse_screen(&value) {
                Some(screen) => config.screen = screen,
                None => warn!("Unable to parse TAMAGOTCHI_SCREEN '{}', expected WIDTHxHEIGHT", value),
            }
        }
        if let Some(max_pets) = parse_var::<usize, _>(&lookup, "TAMAGOTCHI_MAX_PETS") {
            config.max_pets = max_pets.clamp(1, MAX_PETS_LIMIT);
        }
        config.run_seconds = parse_var(&lookup, "TAMAGOTCHI_RUN_SECONDS");
        config
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Unable to parse {} '{}', use default", key, value);
            None
        }
    }
}

fn parse_screen(value: &str) -> Option<[f32; 2]> {
    let (width, height) = value.trim().split_once(|c: char| c == 'x' || c == 'X')?;
    let width: f32 = width.trim().parse().ok()?;
    let height: f32 = height.trim().parse().ok()?;
    if width > 0.0 && height > 0.0 {
        Some([width, height])
    } else {
        None
    }
}
