#![allow(dead_code)]

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use kodomotrip_prompt::{Clock, InstallPrompt};
use kodomotrip_store::KeyValueStore;
use std::sync::{Arc, Mutex};

/// Clock the test advances by hand
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(
                Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap(),
            )),
        }
    }

    pub fn advance(&self, delta: TimeDelta) {
        *self.now.lock().unwrap() += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub fn open_prompt<S: KeyValueStore>(
    store: S,
    clock: &ManualClock,
) -> InstallPrompt<S, ManualClock> {
    let mut prompt = InstallPrompt::new(store).with_clock(clock.clone());
    prompt.initialize();
    prompt
}
