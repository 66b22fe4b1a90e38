//! Core types for the nbox layout engine.
//!
//! This crate provides:
//! - Single precision geometry (`Size`, `Position`, `Bounds`)
//! - Axis helpers that map main/cross extents onto width/height
//! - Error types for configuration and container trees

pub mod errors;
pub mod geometry;

pub use errors::{ConfigError, NboxError, TreeError};
pub use geometry::{Axis, Bounds, Position, Size};
