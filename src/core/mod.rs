//! # Core Module
//!
//! This module provides the fundamental building blocks for fold topology
//! sketching in TopoForge, serving as the stateless foundation of the library.
//!
//! ## Overview
//!
//! The core module defines what a topology problem *is*: the grid of secondary
//! structure elements to arrange, the rigid geometry of each idealized
//! element, and the configuration that turns a relative grid into world
//! coordinates. Everything here is a value type with no knowledge of the
//! search that runs on top of it.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of the problem description:
//!
//! - **Problem Description** ([`models`]) - Element identifiers, layered
//!   architectures, motifs, and chain orderings
//! - **Idealized Geometry** ([`geometry`]) - Parametric backbone templates and
//!   the rigid coordinate frame of a placed element
//! - **Configuration** ([`config`]) - Spacing defaults, length defaults, and
//!   enumeration limits, loadable from TOML
//!
//! ## Key Capabilities
//!
//! - **Grid-to-world casting** of relative architectures with type-pair
//!   spacing rules
//! - **Parametric backbone generation** for helix variants and strands from
//!   fixed residue templates
//! - **Orientation-aware rigid transforms** that keep local spins and flips
//!   correct after arbitrary tilting

pub mod config;
pub mod geometry;
pub mod models;
