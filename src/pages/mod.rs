//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the session through `use_session` and applies the shared
//! redirect rules from `util::auth`; none of them touch storage or HTTP.

pub mod favorites;
pub mod home;
pub mod login;
pub mod signup;
