//! Domain layer - entity records and their schema descriptors

pub mod entities;
pub mod schema;
