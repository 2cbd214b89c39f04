//! Infrastructure layer - config, persistence, HTTP surface

pub mod config;
pub mod http;
pub mod persistence;
pub mod state;
