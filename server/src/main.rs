use log::{error, info};
use std::process;
use std::thread;
use std::time::{Duration, Instant};

use server::{spawn_simulated_input, Configuration, LocalHostThread};

fn main() {
    env_logger::init();
    info!("OS: {}", std::env::consts::OS);

    let config = Configuration::from_env();
    info!("Configuration: {:?}", config);
    let mut host = match LocalHostThread::spawn(config.clone()) {
        Ok(host) => host,
        Err(error) => {
            error!("Unable to start tamagotchi, {:?}", error);
            process::exit(1);
        }
    };
    let simulated = if config.simulated_input {
        Some(spawn_simulated_input(host.input.clone(), host.running.clone()))
    } else {
        None
    };

    let started = Instant::now();
    let run_limit = config.run_seconds.map(Duration::from_secs);
    while host.running() {
        for events in host.events.try_iter() {
            for event in events {
                info!("{:?}", event);
            }
        }
        if run_limit.map_or(false, |limit| started.elapsed() >= limit) {
            info!("Run limit reached");
            host.terminate();
        }
        thread::sleep(Duration::from_millis(100));
    }

    if let Err(error) = host.join() {
        error!("Host thread ended abnormally, {:?}", error);
    }
    if let Some(simulated) = simulated {
        let _ = simulated.join();
    }
    info!("Bye");
}
