use log::info;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use game::hatching::{InputKind, InputProgress};

pub const SIMULATED_KEYSTROKE_INTERVAL: Duration = Duration::from_millis(100);
pub const SIMULATED_KEYSTROKES_PER_CLICK: u64 = 10;

/// Input counters shared between input sources and the host tick.
#[derive(Debug, Default)]
pub struct InputLatch {
    keystrokes: AtomicU64,
    clicks: AtomicU64,
}

impl InputLatch {
    pub fn record(&self, kind: InputKind) {
        self.counter(kind).fetch_add(1, Ordering::Relaxed);
    }

    /// Drains everything recorded since the previous call.
    pub fn take(&self) -> InputProgress {
        InputProgress {
            keystrokes: self.keystrokes.swap(0, Ordering::Relaxed),
            clicks: self.clicks.swap(0, Ordering::Relaxed),
        }
    }

    fn counter(&self, kind: InputKind) -> &AtomicU64 {
        match kind {
            InputKind::Keystroke => &self.keystrokes,
            InputKind::Click => &self.clicks,
        }
    }
}

/// Types steadily while `running` holds, for headless runs.
pub fn spawn_simulated_input(latch: Arc<InputLatch>, running: Arc<AtomicBool>) -> JoinHandle<()> {
    thread::spawn(move || {
        info!("Start simulated input thread");
        let mut keystrokes = 0u64;
        while running.load(Ordering::Relaxed) {
            thread::sleep(SIMULATED_KEYSTROKE_INTERVAL);
            latch.record(InputKind::Keystroke);
            keystrokes += 1;
            if keystrokes % SIMULATED_KEYSTROKES_PER_CLICK == 0 {
                latch.record(InputKind::Click);
            }
        }
        info!("Stop simulated input thread after {} keystrokes", keystrokes);
    })
}
