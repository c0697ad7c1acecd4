//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the renamer panels and modals while reading/writing
//! shared state through the `RenamerContext` provided by the page.

pub mod browser_modal;
pub mod files_panel;
pub mod search_modal;
pub mod settings_panel;
pub mod toast_stack;
