//! Sub-reducers called by the root `update.rs`.
//!
//! Each domain (actions, reactions, guest challenge, chat, preferences)
//! lives in its own module and appends the side effects it needs to the
//! shared command list.

pub mod action;
pub mod challenge;
pub mod chat;
pub mod preferences;
pub mod reaction;
