//! # Engine Module
//!
//! This module implements the topology search engine of TopoForge: the
//! computational pipeline that turns a placed architecture into scored chain
//! ordering candidates.
//!
//! ## Overview
//!
//! The engine owns everything between the declarative problem description and
//! the final report. It instantiates geometry for every element, decides which
//! element pairs a loop can plausibly connect, walks every Hamiltonian path
//! over those links, and subjects each path to the feasibility rules that
//! separate realizable folds from impossible ones.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules, one per pipeline
//! stage:
//!
//! - **Placement** ([`scaffold`]) - Coordinate frames for every element,
//!   including motif grafts
//! - **Linkage** ([`graph`]) - The adjacency graph of loop-connectable pairs
//! - **Search** ([`enumerate`]) - Exhaustive Hamiltonian path enumeration
//! - **Scoring** ([`feasibility`]) - The edge, direction, and intersection
//!   rules
//! - **Output** ([`assembler`]) - Backbone sketches with budgeted loop gaps
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! ## Key Capabilities
//!
//! - **Exhaustive ordering search** bounded by an explicit element-count guard
//! - **Per-candidate isolation** so feasibility checks can mutate geometry
//!   freely
//! - **External ordering validation** for callers that bring their own chain
//!   paths

pub mod assembler;
pub mod enumerate;
pub mod error;
pub mod feasibility;
pub mod graph;
pub mod scaffold;
