// Library root: re-exports the application modules so integration tests can
// drive a session without the console front end.

pub mod app;
pub mod config;
pub mod present;
pub mod provider;
