use super::ids::SseId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The secondary structure families a sketch element can take.
///
/// Each variant carries the parameters of its idealized backbone: the
/// inter-residue rise along the element axis and the per-residue twist
/// applied to the fixed backbone template when atoms are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SseType {
    /// Standard alpha helix (`H`).
    AlphaHelix,
    /// 3-10 helix (`G`), a tighter helix variant.
    Helix310,
    /// Pi helix (`I`), a looser helix variant.
    PiHelix,
    /// Beta strand (`E`).
    Strand,
}

impl SseType {
    /// Single-letter code used in identifiers and secondary structure strings.
    pub fn code(&self) -> char {
        match self {
            SseType::AlphaHelix => 'H',
            SseType::Helix310 => 'G',
            SseType::PiHelix => 'I',
            SseType::Strand => 'E',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'H' => Some(SseType::AlphaHelix),
            'G' => Some(SseType::Helix310),
            'I' => Some(SseType::PiHelix),
            'E' => Some(SseType::Strand),
            _ => None,
        }
    }

    /// Distance between consecutive guide points along the element axis.
    pub fn rise(&self) -> f64 {
        match self {
            SseType::AlphaHelix => 1.5,
            SseType::Helix310 => 2.0,
            SseType::PiHelix => 1.1,
            SseType::Strand => 3.2,
        }
    }

    /// Per-residue twist (degrees) of the backbone template about the axis.
    ///
    /// The strand value of -180 degrees is what produces the alternating
    /// lateral pleat of an idealized beta backbone.
    pub fn twist_degrees(&self) -> f64 {
        match self {
            SseType::AlphaHelix => 100.0,
            SseType::Helix310 => 120.0,
            SseType::PiHelix => 87.0,
            SseType::Strand => -180.0,
        }
    }

    pub fn is_helix(&self) -> bool {
        matches!(
            self,
            SseType::AlphaHelix | SseType::Helix310 | SseType::PiHelix
        )
    }

    pub fn is_strand(&self) -> bool {
        matches!(self, SseType::Strand)
    }
}

/// A relative x/y/z triple used both for placement offsets and tilt angles.
///
/// In a relative architecture these are deltas on top of the default grid
/// spacing; after [`cast_absolute`](super::architecture::Architecture::cast_absolute)
/// placement coordinates are absolute world values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Reference to a grafted motif segment, written `"motif.segment"`, whose
/// explicit atom coordinates replace parametric generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifRef {
    pub motif: String,
    pub segment: String,
}

impl FromStr for MotifRef {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (motif, segment) = s.split_once('.').ok_or(())?;
        if motif.is_empty() || segment.is_empty() {
            return Err(());
        }
        Ok(Self {
            motif: motif.to_string(),
            segment: segment.to_string(),
        })
    }
}

/// Declarative description of one secondary structure element in the
/// layer/column grid.
///
/// `length` may stay unset in a relative architecture; it is filled from the
/// per-type defaults when the architecture is cast absolute. `edge` marks an
/// element that must sit at a topology boundary, `is_static` pins its up/down
/// direction (typically because a motif was grafted onto it).
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryStructureElement {
    pub id: SseId,
    pub length: Option<usize>,
    pub coordinates: Coordinates,
    pub tilt: Coordinates,
    pub edge: bool,
    pub is_static: bool,
    pub motif_ref: Option<MotifRef>,
}

impl SecondaryStructureElement {
    pub fn new(id: SseId) -> Self {
        Self {
            id,
            length: None,
            coordinates: Coordinates::default(),
            tilt: Coordinates::default(),
            edge: false,
            is_static: false,
            motif_ref: None,
        }
    }

    pub fn sse_type(&self) -> SseType {
        self.id.sse_type
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = coordinates;
        self
    }

    pub fn with_tilt(mut self, tilt: Coordinates) -> Self {
        self.tilt = tilt;
        self
    }

    pub fn with_edge(mut self) -> Self {
        self.edge = true;
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_motif_ref(mut self, motif_ref: MotifRef) -> Self {
        self.motif_ref = Some(motif_ref);
        self.is_static = true;
        self
    }
}
