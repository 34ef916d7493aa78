// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the timestamps written to `Article::last_edited`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
