use super::ids::SseId;
use super::sse::{SecondaryStructureElement, SseType};
use crate::core::config::SketchConfig;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArchitectureError {
    #[error("An empty architecture cannot be cast absolute")]
    Empty,

    #[error("Duplicated secondary structure id '{0}'")]
    DuplicateId(SseId),

    #[error("Requested layer {0} is bigger than any available")]
    LayerOutOfRange(usize),

    #[error("'{0}' is not a layer letter")]
    InvalidLayerLetter(char),

    #[error("Length of '{0}' must be provided in absolute mode")]
    MissingLength(SseId),

    #[error("Architecture defines {0} edge-flagged elements; at most 2 are allowed")]
    TooManyEdges(usize),
}

/// A layer addressed either by 0-based index or by its letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRef {
    Index(usize),
    Letter(char),
}

impl LayerRef {
    fn index(&self) -> Result<usize, ArchitectureError> {
        match *self {
            LayerRef::Index(i) => Ok(i),
            LayerRef::Letter(c) if c.is_ascii_alphabetic() => {
                Ok((c.to_ascii_uppercase() as u8 - b'A') as usize)
            }
            LayerRef::Letter(c) => Err(ArchitectureError::InvalidLayerLetter(c)),
        }
    }
}

impl From<usize> for LayerRef {
    fn from(i: usize) -> Self {
        LayerRef::Index(i)
    }
}

impl From<char> for LayerRef {
    fn from(c: char) -> Self {
        LayerRef::Letter(c)
    }
}

/// The layer/column arrangement of secondary structure elements: shape only,
/// no chain order.
///
/// An architecture starts out `relative` (placements are deltas on the default
/// grid spacing) and becomes absolute through [`cast_absolute`](Self::cast_absolute).
/// Identifiers are unique; the element count is never zero once cast.
#[derive(Debug, Clone, PartialEq)]
pub struct Architecture {
    layers: Vec<Vec<SecondaryStructureElement>>,
    relative: bool,
}

impl Architecture {
    /// Builds a relative architecture from ordered layers, rejecting
    /// duplicated identifiers.
    pub fn from_layers(
        layers: Vec<Vec<SecondaryStructureElement>>,
    ) -> Result<Self, ArchitectureError> {
        let mut seen = HashSet::new();
        for sse in layers.iter().flatten() {
            if !seen.insert(sse.id) {
                return Err(ArchitectureError::DuplicateId(sse.id));
            }
        }
        Ok(Self {
            layers,
            relative: true,
        })
    }

    pub fn layers(&self) -> &[Vec<SecondaryStructureElement>] {
        &self.layers
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }

    pub fn is_absolute(&self) -> bool {
        !self.relative
    }

    pub fn is_empty(&self) -> bool {
        self.sse_count() == 0
    }

    pub fn sse_count(&self) -> usize {
        self.layers.iter().map(|l| l.len()).sum()
    }

    /// Iterates elements in layer-major order together with their grid
    /// position. This order is the canonical node order of the sketch graph.
    pub fn iter_sses(
        &self,
    ) -> impl Iterator<Item = (usize, usize, &SecondaryStructureElement)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| layer.iter().enumerate().map(move |(j, sse)| (i, j, sse)))
    }

    pub fn get_sse_by_id(&self, id: &SseId) -> Option<&SecondaryStructureElement> {
        self.iter_sses().map(|(_, _, sse)| sse).find(|s| s.id == *id)
    }

    pub fn edge_count(&self) -> usize {
        self.iter_sses().filter(|(_, _, sse)| sse.edge).count()
    }

    /// At most two elements may carry the `edge` flag; more is a malformed
    /// specification, not a search outcome.
    pub fn validate_edges(&self) -> Result<(), ArchitectureError> {
        let count = self.edge_count();
        if count > 2 {
            return Err(ArchitectureError::TooManyEdges(count));
        }
        Ok(())
    }

    /// Dominant type of a layer: the type of its first element, or `None` for
    /// an empty layer.
    pub fn get_type_for_layer(
        &self,
        layer: impl Into<LayerRef>,
    ) -> Result<Option<SseType>, ArchitectureError> {
        let index = layer.into().index()?;
        let layer = self
            .layers
            .get(index)
            .ok_or(ArchitectureError::LayerOutOfRange(index))?;
        Ok(layer.first().map(|sse| sse.sse_type()))
    }

    /// Compact `"2H.2E"`-style signature used for logging.
    pub fn architecture_str(&self) -> String {
        self.layers
            .iter()
            .filter(|layer| !layer.is_empty())
            .map(|layer| {
                let code = layer[0].sse_type().code();
                format!("{}{}", layer.len(), code)
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Resolves relative grid offsets into concrete world coordinates.
    ///
    /// Per layer, z is the layer index times the type-pair z spacing keyed on
    /// the previous and current layers' dominant types; within a layer, x
    /// accumulates left to right with the type-pair x spacing and inherits any
    /// explicit shift; y defaults to 0 unless overridden. Missing lengths are
    /// filled from the per-type defaults. Idempotent: casting an absolute
    /// architecture validates it and returns it unchanged.
    pub fn cast_absolute(&self, config: &SketchConfig) -> Result<Self, ArchitectureError> {
        if self.is_absolute() {
            for (_, _, sse) in self.iter_sses() {
                if sse.length.is_none() {
                    return Err(ArchitectureError::MissingLength(sse.id));
                }
            }
            return Ok(self.clone());
        }
        if self.is_empty() {
            return Err(ArchitectureError::Empty);
        }

        let mut cast = self.clone();
        cast.relative = false;

        let mut back: Option<SseType> = None;
        for i in 0..cast.layers.len() {
            let here = cast.layers[i].first().map(|sse| sse.sse_type());
            let z_layer = match here {
                Some(here_type) => config.distance.z_distance(back, here_type) * i as f64,
                None => 0.0,
            };

            let mut x = 0.0;
            let mut left: Option<SseType> = None;
            for sse in cast.layers[i].iter_mut() {
                x += config.distance.x_distance(left, sse.sse_type());
                sse.coordinates.x += x;
                sse.coordinates.z += z_layer;
                if sse.length.is_none() {
                    sse.length = Some(config.length.for_type(sse.sse_type()));
                }
                // Explicit shifts are inherited by the next element.
                x = sse.coordinates.x;
                left = Some(sse.sse_type());
            }

            if here.is_some() {
                back = here;
            }
        }

        Ok(cast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sse::Coordinates;

    fn sse(id: &str) -> SecondaryStructureElement {
        SecondaryStructureElement::new(id.parse().unwrap())
    }

    fn two_layer() -> Architecture {
        Architecture::from_layers(vec![
            vec![sse("A1H"), sse("A2H")],
            vec![sse("B1E"), sse("B2E")],
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Architecture::from_layers(vec![vec![sse("A1H"), sse("A1H")]]);
        assert!(matches!(result, Err(ArchitectureError::DuplicateId(_))));
    }

    #[test]
    fn empty_architecture_cannot_be_cast() {
        let arch = Architecture::from_layers(vec![vec![]]).unwrap();
        assert!(matches!(
            arch.cast_absolute(&SketchConfig::default()),
            Err(ArchitectureError::Empty)
        ));
    }

    #[test]
    fn cast_absolute_places_the_default_grid() {
        let config = SketchConfig::default();
        let abs = two_layer().cast_absolute(&config).unwrap();
        assert!(abs.is_absolute());

        let a1 = abs.get_sse_by_id(&"A1H".parse().unwrap()).unwrap();
        let a2 = abs.get_sse_by_id(&"A2H".parse().unwrap()).unwrap();
        let b1 = abs.get_sse_by_id(&"B1E".parse().unwrap()).unwrap();
        let b2 = abs.get_sse_by_id(&"B2E".parse().unwrap()).unwrap();

        assert_eq!(a1.coordinates, Coordinates::new(0.0, 0.0, 0.0));
        assert_eq!(a2.coordinates, Coordinates::new(10.0, 0.0, 0.0));
        // Second layer: z is the helix/strand spacing, x the strand pairing.
        assert_eq!(b1.coordinates, Coordinates::new(0.0, 0.0, 11.0));
        assert_eq!(b2.coordinates, Coordinates::new(4.85, 0.0, 11.0));

        assert_eq!(a1.length, Some(13));
        assert_eq!(b1.length, Some(7));
    }

    #[test]
    fn cast_absolute_inherits_explicit_shifts() {
        let config = SketchConfig::default();
        let shifted = sse("A2H").with_coordinates(Coordinates::new(2.0, 1.5, 0.0));
        let arch =
            Architecture::from_layers(vec![vec![sse("A1H"), shifted, sse("A3H")]]).unwrap();
        let abs = arch.cast_absolute(&config).unwrap();

        let a2 = abs.get_sse_by_id(&"A2H".parse().unwrap()).unwrap();
        let a3 = abs.get_sse_by_id(&"A3H".parse().unwrap()).unwrap();
        assert_eq!(a2.coordinates, Coordinates::new(12.0, 1.5, 0.0));
        // The next element accumulates from the shifted x, with y reset.
        assert_eq!(a3.coordinates, Coordinates::new(22.0, 0.0, 0.0));
    }

    #[test]
    fn cast_absolute_is_idempotent() {
        let config = SketchConfig::default();
        let once = two_layer().cast_absolute(&config).unwrap();
        let twice = once.cast_absolute(&config).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn layer_type_by_index_and_letter() {
        let arch = two_layer();
        assert_eq!(
            arch.get_type_for_layer(0).unwrap(),
            Some(SseType::AlphaHelix)
        );
        assert_eq!(arch.get_type_for_layer('B').unwrap(), Some(SseType::Strand));
        assert_eq!(arch.get_type_for_layer('b').unwrap(), Some(SseType::Strand));
        assert!(matches!(
            arch.get_type_for_layer(5),
            Err(ArchitectureError::LayerOutOfRange(5))
        ));
        assert!(matches!(
            arch.get_type_for_layer('!'),
            Err(ArchitectureError::InvalidLayerLetter('!'))
        ));

        let with_empty =
            Architecture::from_layers(vec![vec![sse("A1H")], vec![]]).unwrap();
        assert_eq!(with_empty.get_type_for_layer(1).unwrap(), None);
    }

    #[test]
    fn architecture_signature() {
        assert_eq!(two_layer().architecture_str(), "2H.2E");
    }

    #[test]
    fn more_than_two_edges_is_a_configuration_error() {
        let arch = Architecture::from_layers(vec![vec![
            sse("A1E").with_edge(),
            sse("A2E").with_edge(),
            sse("A3E").with_edge(),
        ]])
        .unwrap();
        assert!(matches!(
            arch.validate_edges(),
            Err(ArchitectureError::TooManyEdges(3))
        ));
    }
}
