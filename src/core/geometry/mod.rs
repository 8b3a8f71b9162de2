//! # Core Geometry Module
//!
//! This module implements the idealized geometry of secondary structure
//! elements: fixed backbone templates propagated along a guide axis, and the
//! rigid coordinate frame that places and orients one element in space.
//!
//! ## Key Components
//!
//! - [`placement`] - Per-type rise/twist parameters and backbone atom
//!   templates
//! - [`frame`] - The rigid frame of one element, with world-frame and
//!   local-frame transforms

pub mod frame;
pub mod placement;
