use crate::progression::Progression::EggReady;
use crate::progression::{Progression, ProgressionDomain};

impl ProgressionDomain {
    /// Adds non-negative progress to the active egg and writes it through.
    pub fn add_progress(&mut self, amount: f64) -> Vec<Progression> {
        if amount.is_nan() || amount <= 0.0 {
            return vec![];
        }
        self.egg.current_count += amount;
        self.save_egg();
        let mut events = vec![self.egg_updated()];
        if self.egg.is_ready() && !self.ready_announced {
            self.ready_announced = true;
            events.push(EggReady {
                name: self.egg.name.clone(),
            });
        }
        events
    }
}
