//! Application layer - use cases, ports and render payloads

pub mod dto;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
