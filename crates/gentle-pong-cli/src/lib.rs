//! Gentle Pong CLI library.
//!
//! This crate provides the sound table, the pack layout and manifest, and
//! the `generate` and `list` commands used by the `gentle-pong` binary.

pub mod commands;
pub mod manifest;
pub mod pack;
pub mod presets;
