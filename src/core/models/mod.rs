//! # Core Models Module
//!
//! This module contains the fundamental data structures used to describe a
//! fold topology problem in TopoForge.
//!
//! ## Overview
//!
//! The models module defines the vocabulary of a sketch run: which elements
//! exist, where they sit in the layered grid, and in which order a chain may
//! thread them. These models are designed to:
//!
//! - **Describe shape without order** - An [`architecture`](self::architecture)
//!   fixes the spatial arrangement while leaving the chain path open
//! - **Make invalid states unrepresentable** - A
//!   [`Connectivity`](connectivity::Connectivity) can only be produced by the
//!   enumerator or by validating an ordering against the adjacency graph
//! - **Stay declarative** - Elements carry flags and offsets, never derived
//!   geometry
//!
//! ## Key Components
//!
//! - [`ids`] - Compact layer/column/type identifiers such as `B2E`
//! - [`sse`] - Secondary structure types and per-element descriptors
//! - [`architecture`] - The layered grid and its absolute casting
//! - [`connectivity`] - Validated N-to-C chain orderings
//! - [`motif`] - Explicit atom coordinates grafted onto elements

pub mod architecture;
pub mod connectivity;
pub mod ids;
pub mod motif;
pub mod sse;
