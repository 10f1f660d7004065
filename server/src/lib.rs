use log::{debug, error, info};
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use datamap::Storage;
use game::api::{Event, GameError};
use game::desktop::PetId;
use game::hatching::{CreatureKey, InputKind};
use game::math::Random;
use game::persistence::SqlitePersistence;
use game::Game;

pub use config::*;
pub use input::*;

mod config;
mod input;

pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Requests the interface sends into the host thread.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    ToggleDisplay { creature: CreatureKey },
    TogglePlayground { creature: CreatureKey },
    SwapDisplaySlots { a: usize, b: usize },
    OpenPlayground { width: f32, height: f32 },
    ClosePlayground,
    AddDesktopPet { creature: CreatureKey },
    RemoveDesktopPet { creature: CreatureKey },
    ClickPet { id: PetId },
    StartDragging { id: PetId },
    DragPet { id: PetId, position: [f32; 2] },
    StopDragging { id: PetId },
    SetMaxPets { max_pets: usize },
}

#[derive(Debug)]
pub enum HostError {
    Startup(String),
    ThreadLost,
}

pub struct LocalHostThread {
    pub running: Arc<AtomicBool>,
    pub input: Arc<InputLatch>,
    pub events: Receiver<Vec<Event>>,
    commands: Sender<HostCommand>,
    handle: Option<JoinHandle<()>>,
}

impl LocalHostThread {
    /// Starts the game on its own thread and waits until state is loaded.
    pub fn spawn(config: Configuration) -> Result<Self, HostError> {
        let running = Arc::new(AtomicBool::new(true));
        let input = Arc::new(InputLatch::default());
        let (notify_started, started) = channel();
        let (events_sender, events) = channel();
        let (commands, commands_receiver) = channel::<HostCommand>();
        let running_thread = running.clone();
        let input_thread = input.clone();
        let handle = thread::spawn(move || {
            info!("Start game host thread");
            let mut game = match startup(&config) {
                Ok(game) => game,
                Err(error) => {
                    error!("Unable to start game, {:?}", error);
                    running_thread.store(false, Ordering::Relaxed);
                    let _ = notify_started.send(Err(format!("{:?}", error)));
                    return;
                }
            };
            let initial = game.load_game_state();
            if !initial.is_empty() {
                let _ = events_sender.send(initial);
            }
            let _ = notify_started.send(Ok(()));
            let mut tick = Instant::now();
            while running_thread.load(Ordering::Relaxed) {
                let mut events = vec![];
                for command in commands_receiver.try_iter() {
                    match perform(&mut game, command.clone()) {
                        Ok(command_events) => events.extend(command_events),
                        Err(error) => error!("Unable to perform {:?}, {:?}", command, error),
                    }
                }
                let input = input_thread.take();
                events.extend(game.record_input(InputKind::Keystroke, input.keystrokes));
                events.extend(game.record_input(InputKind::Click, input.clicks));

                let time = tick.elapsed().as_secs_f32();
                tick = Instant::now();
                events.extend(game.update(time));
                if !events.is_empty() && events_sender.send(events).is_err() {
                    debug!("Events receiver dropped");
                }

                thread::sleep(TICK_INTERVAL);
            }
            info!("Stop game host thread");
        });
        match started.recv() {
            Ok(Ok(())) => Ok(Self {
                running,
                input,
                events,
                commands,
                handle: Some(handle),
            }),
            Ok(Err(error)) => {
                let _ = handle.join();
                Err(HostError::Startup(error))
            }
            Err(_) => Err(HostError::ThreadLost),
        }
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    pub fn send(&self, command: HostCommand) -> Result<(), HostError> {
        self.commands
            .send(command)
            .map_err(|_| HostError::ThreadLost)
    }

    pub fn terminate(&mut self) {
        self.running.store(false, Ordering::Relaxed)
    }

    /// Stops the loop and waits for the final write-through.
    pub fn join(mut self) -> Result<(), HostError> {
        self.terminate();
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| HostError::ThreadLost),
            None => Ok(()),
        }
    }
}

fn startup(config: &Configuration) -> Result<Game, GameError> {
    let path = Path::new(&config.database);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(error) = fs::create_dir_all(parent) {
                error!("Unable to create database directory {:?}, {:?}", parent, error);
            }
        }
    }
    let storage = Storage::open(path).map_err(game::data::DataError::from)?;
    let persistence = SqlitePersistence::new(storage)?;
    let random = match config.seed {
        Some(seed) => Random::with_seed(seed),
        None => Random::new(),
    };
    let mut game = Game::new(Rc::new(persistence), random);
    game.desktop.set_max_pets(config.max_pets);
    game.desktop.resize(config.screen);
    game.load_game_knowledge()?;
    Ok(game)
}

pub fn perform(game: &mut Game, command: HostCommand) -> Result<Vec<Event>, GameError> {
    match command {
        HostCommand::ToggleDisplay { creature } => game.toggle_display(creature),
        HostCommand::TogglePlayground { creature } => game.toggle_playground(creature),
        HostCommand::SwapDisplaySlots { a, b } => {
            game.swap_display_slots(a, b)?;
            Ok(vec![])
        }
        HostCommand::OpenPlayground { width, height } => Ok(game.open_playground(width, height)),
        HostCommand::ClosePlayground => Ok(game.close_playground()),
        HostCommand::AddDesktopPet { creature } => game.add_desktop_pet(creature),
        HostCommand::RemoveDesktopPet { creature } => game.remove_desktop_pet(creature),
        HostCommand::ClickPet { id } => {
            let click = game.desktop.click_pet(id)?;
            Ok(game::occur![click()])
        }
        HostCommand::StartDragging { id } => {
            let start = game.desktop.start_dragging(id)?;
            Ok(game::occur![start()])
        }
        HostCommand::DragPet { id, position } => {
            game.desktop.drag_pet(id, position)?;
            Ok(vec![])
        }
        HostCommand::StopDragging { id } => {
            let stop = game.desktop.stop_dragging(id)?;
            Ok(game::occur![stop()])
        }
        HostCommand::SetMaxPets { max_pets } => {
            game.desktop.set_max_pets(max_pets);
            Ok(vec![])
        }
    }
}
