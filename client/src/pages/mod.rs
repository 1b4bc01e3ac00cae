//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Guards and the main layout are applied by `app`.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod question_create;
pub mod register;
