//! Backend HTTP API contract, record types, and an in-memory adapter.

pub mod memory;
pub mod service;
pub mod types;
