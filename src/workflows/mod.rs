//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate complete
//! topology sketch runs in TopoForge.
//!
//! ## Overview
//!
//! Workflows are the top-level API of the library. They encapsulate the whole
//! pipeline from a declarative architecture to a report of evaluated
//! candidates: validation, absolute casting, placement, graph construction,
//! enumeration, and parallel feasibility evaluation.
//!
//! ## Architecture
//!
//! - **Sketch Workflow** ([`sketch`]) - Full enumeration of chain orderings
//!   and feasibility scoring, plus a variant that evaluates caller-supplied
//!   orderings.

pub mod sketch;
