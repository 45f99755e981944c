//! Browser-facing helpers: key/value storage and route-guard policy.
//!
//! Both keep their decision logic in plain functions so it can be unit tested
//! natively; only the thin browser adapters are gated on `csr`.

pub mod auth;
pub mod storage;
