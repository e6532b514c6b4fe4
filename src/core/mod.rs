pub mod config;
pub mod history;
pub mod session;
pub mod strength;
