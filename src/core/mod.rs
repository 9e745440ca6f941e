//! Configuration, shared models, and deadline racing

pub mod config;
pub mod models;
pub mod timeout;
