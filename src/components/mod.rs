//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are mounted into server-rendered pages at optional mount points
//! and read/write shared state from Leptos context providers.

pub mod theme_toggle;
