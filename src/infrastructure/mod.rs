pub mod time;

pub use time::{FixedClock, SystemClock};
