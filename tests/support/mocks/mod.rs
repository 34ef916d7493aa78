// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod time;

pub use time::{fixed_now, DummyClock, SteppingClock};
