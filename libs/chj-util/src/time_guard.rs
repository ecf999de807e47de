//! # Tools for performance debugging.

//! `time_guard!` measures the time until the end of the enclosing
//! scope and reports it at debug level through the `log` facade. It
//! is only enabled if the `TIME_GUARD` env var is set to a truthy
//! value or `enabled_set(true)` was called in the thread.

//! `time_guard!` can also be statically disabled (compiled out
//! completely) by prefixing its name with `no`.

use std::{time::Instant, fmt::Debug, cell::Cell};

use crate::env::parse_bool;

fn time_guard_env_get() -> bool {
    match std::env::var("TIME_GUARD") {
        Ok(v) => parse_bool(&v).unwrap_or(true),
        Err(_) => false
    }
}

thread_local!{
    pub static ENABLED: Cell<bool> = Cell::new(time_guard_env_get());
}

/// Enable `time_guard!`.
pub fn enabled_set(on: bool) {
    ENABLED.with(|cell| cell.set(on))
}

pub fn enabled() -> bool {
    ENABLED.with(|old| old.get())
}


pub enum TimeGuard<S: Debug> {
    Disabled,
    Enabled {
        name: S,
        start: Instant
    },
}

impl<S: Debug> Drop for TimeGuard<S> {
    fn drop(&mut self) {
        match self {
            TimeGuard::Disabled => (),
            TimeGuard::Enabled { name, start } => {
                let elapsed = start.elapsed();
                log::debug!("time {:?}: {:?}", name, elapsed);
            },
        }
    }
}

#[macro_export]
macro_rules! time_guard {
    ($namestr:expr) => {
        let _guard = if $crate::time_guard::enabled() {
            $crate::time_guard::TimeGuard::Enabled {
                name: $namestr,
                start: std::time::Instant::now()
            }
        } else {
            $crate::time_guard::TimeGuard::Disabled
        };
    }
}

#[macro_export]
macro_rules! notime_guard {
    ($namestr:expr) => {}
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_enabled_set() {
        enabled_set(true);
        assert!(enabled());
        {
            crate::time_guard!("t_enabled_set");
        }
        enabled_set(false);
        assert!(!enabled());
    }
}
