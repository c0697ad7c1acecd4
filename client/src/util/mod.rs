//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep string templating and browser/environment concerns
//! out of page and component logic so they can be unit tested natively.

pub mod labels;
pub mod matching;
pub mod naming;
pub mod path;
pub mod preferences;
pub mod toast;
