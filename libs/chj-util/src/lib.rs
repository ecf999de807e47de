pub mod env;
pub mod time_guard;
