#![allow(dead_code)]

pub mod scripted_server;

use refetch_core::sleep::Sleeper;
use std::time::Duration;

/// Sleeper that records requested delays instead of blocking.
#[derive(Debug, Default)]
pub struct RecordingSleeper(pub Vec<Duration>);

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.0.push(duration);
    }
}
