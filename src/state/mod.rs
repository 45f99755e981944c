//! Client-side session state.
//!
//! DESIGN
//! ======
//! `session` is framework-free and owns every rule about tokens, profiles and
//! favorites. `context` adapts it to Leptos for the view layer. `favorites`
//! is the set type both share.

pub mod context;
pub mod favorites;
pub mod session;
