//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`files`, `search`, `browser`, etc.) so each
//! component depends on a small focused model. The renamer page bundles them
//! into one `RenamerContext` of `RwSignal`s.

pub mod browser;
pub mod files;
pub mod search;
pub mod settings;
pub mod toast;
