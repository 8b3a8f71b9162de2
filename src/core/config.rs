use crate::core::models::sse::SseType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Type-pair spacing defaults and distance thresholds for sketch placement.
///
/// Field names follow the pairing they describe: `aa` helix/helix, `ab`
/// helix/strand, `bb_pair` strands paired within a sheet, `bb_stack` strands
/// stacked across layers. `max_loop` is the long-range link threshold of the
/// adjacency graph and `loop_step` the per-residue span assumed for the loop
/// placeholders inserted between consecutive elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceDefaults {
    pub aa: f64,
    pub ab: f64,
    pub bb_pair: f64,
    pub bb_stack: f64,
    pub max_loop: f64,
    pub loop_step: f64,
}

impl Default for DistanceDefaults {
    fn default() -> Self {
        Self {
            aa: 10.0,
            ab: 11.0,
            bb_pair: 4.85,
            bb_stack: 8.0,
            max_loop: 18.97,
            loop_step: 3.2,
        }
    }
}

impl DistanceDefaults {
    /// Spacing along x between an element and its left neighbour in a layer.
    /// The leftmost element of a layer has no neighbour and gets 0.
    pub fn x_distance(&self, left: Option<SseType>, here: SseType) -> f64 {
        let Some(left) = left else { return 0.0 };
        match (left.is_strand(), here.is_strand()) {
            (false, false) => self.aa,
            (true, true) => self.bb_pair,
            _ => self.ab,
        }
    }

    /// Spacing along z between a layer and the one behind it, keyed on the
    /// dominant types of both layers.
    pub fn z_distance(&self, back: Option<SseType>, here: SseType) -> f64 {
        let Some(back) = back else { return 0.0 };
        match (back.is_strand(), here.is_strand()) {
            (false, false) => self.aa,
            (true, true) => self.bb_stack,
            _ => self.ab,
        }
    }
}

/// Residue-count defaults used when a sketch element does not declare its own
/// length. Helix variants share the helix default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthDefaults {
    pub helix: usize,
    pub strand: usize,
}

impl Default for LengthDefaults {
    fn default() -> Self {
        Self {
            helix: 13,
            strand: 7,
        }
    }
}

impl LengthDefaults {
    pub fn for_type(&self, sse_type: SseType) -> usize {
        if sse_type.is_strand() {
            self.strand
        } else {
            self.helix
        }
    }
}

/// Explicit configuration threaded through every stage of a sketch run:
/// absolute casting, graph construction, enumeration and assembly.
///
/// `max_elements` bounds the Hamiltonian-path enumeration, which is
/// exponential in the element count by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub distance: DistanceDefaults,
    pub length: LengthDefaults,
    pub max_elements: usize,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            distance: DistanceDefaults::default(),
            length: LengthDefaults::default(),
            max_elements: 16,
        }
    }
}

impl SketchConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
