pub mod activity;
pub mod config;
pub mod journal;
pub mod log;
pub mod profile;
pub mod progress;
