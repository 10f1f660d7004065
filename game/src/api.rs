use serde::{Deserialize, Serialize};

use crate::collections::DictionaryError;
use crate::data::DataError;
use crate::desktop::{Desktop, DesktopError};
use crate::hatching::{Hatching, HatchingError};
use crate::playground::{Playground, PlaygroundError};
use crate::progression::Progression;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Progression(Vec<Progression>),
    Hatching(Vec<Hatching>),
    Playground(Vec<Playground>),
    Desktop(Vec<Desktop>),
}

impl Event {
    pub fn is_empty(&self) -> bool {
        match self {
            Event::Progression(events) => events.is_empty(),
            Event::Hatching(events) => events.is_empty(),
            Event::Playground(events) => events.is_empty(),
            Event::Desktop(events) => events.is_empty(),
        }
    }
}

impl From<Vec<Progression>> for Event {
    fn from(events: Vec<Progression>) -> Self {
        Self::Progression(events)
    }
}

impl From<Vec<Hatching>> for Event {
    fn from(events: Vec<Hatching>) -> Self {
        Self::Hatching(events)
    }
}

impl From<Vec<Playground>> for Event {
    fn from(events: Vec<Playground>) -> Self {
        Self::Playground(events)
    }
}

impl From<Vec<Desktop>> for Event {
    fn from(events: Vec<Desktop>) -> Self {
        Self::Desktop(events)
    }
}

/// Collects domain event batches into game events, dropping empty ones.
#[macro_export]
macro_rules! occur {
    () => (Vec::<$crate::api::Event>::new());
    ($($events:expr),+ $(,)?) => {{
        let mut events: Vec<$crate::api::Event> = vec![$($events.into()),+];
        events.retain(|event| !event.is_empty());
        events
    }};
}

#[derive(Debug)]
pub enum GameError {
    Data(DataError),
    Inconsistency(DictionaryError),
    Hatching(HatchingError),
    Playground(PlaygroundError),
    Desktop(DesktopError),
}

impl From<DataError> for GameError {
    fn from(error: DataError) -> Self {
        Self::Data(error)
    }
}

impl From<DictionaryError> for GameError {
    fn from(error: DictionaryError) -> Self {
        Self::Inconsistency(error)
    }
}

impl From<HatchingError> for GameError {
    fn from(error: HatchingError) -> Self {
        Self::Hatching(error)
    }
}

impl From<PlaygroundError> for GameError {
    fn from(error: PlaygroundError) -> Self {
        Self::Playground(error)
    }
}

impl From<DesktopError> for GameError {
    fn from(error: DesktopError) -> Self {
        Self::Desktop(error)
    }
}
