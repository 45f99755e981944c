//! Networking modules for the identity service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` defines the contract the session depends on, `api` implements
//! it over HTTP, and `types` defines the wire schema and boundary records.

pub mod api;
pub mod transport;
pub mod types;
