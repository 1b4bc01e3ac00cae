//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome, guards and forms while reading/writing
//! shared state from Leptos context providers.

pub mod chart;
pub mod guard;
pub mod image_uploader;
pub mod main_layout;
pub mod notice;
pub mod question_form;
