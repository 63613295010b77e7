// src/application/ports/time.rs
use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds since the Unix epoch; used to stamp content names.
    fn epoch_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}
