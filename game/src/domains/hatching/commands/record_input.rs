use log::error;

use crate::hatching::{HatchingDomain, InputKind};

impl HatchingDomain {
    pub fn record_input(&self, kind: InputKind, count: u64) {
        if count == 0 {
            return;
        }
        if let Err(error) = self.storage.record_input(kind, count) {
            error!("Unable to record {count} {kind:?} input, {:?}", error);
        }
    }
}
