use crate::progression::{
    Progression, ProgressionDomain, TIME_PROGRESS_INTERVAL, TIME_PROGRESS_PER_SECOND,
};

impl ProgressionDomain {
    /// Trickles time based progress into the egg, one write per accumulated interval.
    pub fn update(&mut self, time: f32) -> Vec<Progression> {
        if time <= 0.0 {
            return vec![];
        }
        self.pending_time += time;
        if self.pending_time < TIME_PROGRESS_INTERVAL {
            return vec![];
        }
        let elapsed = self.pending_time as f64;
        self.pending_time = 0.0;
        self.add_progress(elapsed * TIME_PROGRESS_PER_SECOND)
    }
}
