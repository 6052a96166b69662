//! State management module
//!
//! This module handles all application state, including:
//! - Shared data structures and wire records (data.rs)
//! - Session token and route gating (session.rs)
//! - Per-view form and list state (login.rs, gallery.rs, create.rs)
//! - List merge rules after mutations (reconcile.rs)
//! - Small UI state machines (drop_zone.rs, typing.rs, view_state.rs)

pub mod create;
pub mod data;
pub mod drop_zone;
pub mod gallery;
pub mod login;
pub mod reconcile;
pub mod session;
pub mod typing;
pub mod view_state;
