//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and mutate the session through the context handle provided
//! by the root `App`.

pub mod favorite_button;
pub mod nav_bar;
