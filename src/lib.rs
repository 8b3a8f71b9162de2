//! # TopoForge Core Library
//!
//! A library for enumerating and sketching protein fold topologies: given a
//! layered arrangement of secondary structure elements, it decides which chain
//! orderings are geometrically plausible and materializes an idealized
//! backbone sketch for each.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`Architecture`, `Connectivity`), the parametric geometry of idealized
//!   secondary structure (`CoordinateFrame`), and run configuration.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer orchestrates the
//!   search. It builds the adjacency graph over placed elements, enumerates
//!   Hamiltonian chain orderings, evaluates the feasibility rules, and
//!   assembles backbone sketches.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties the `engine` and `core` together to execute a complete
//!   sketch run from an input architecture to a report of scored candidates.

pub mod core;
pub mod engine;
pub mod workflows;
