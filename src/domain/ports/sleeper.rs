//! Sleeper port - waits between continuous deployments

use std::time::Duration;

pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}
