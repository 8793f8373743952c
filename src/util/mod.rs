//! Utility helpers shared across the page hooks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns behind traits so the
//! theme and message logic stays testable without a DOM.

pub mod dark_mode;
pub mod messages;
pub mod notify;
pub mod page;
pub mod storage;
pub mod theme;
