use super::error::EngineError;
use crate::core::geometry::frame::CoordinateFrame;
use crate::core::models::architecture::Architecture;
use crate::core::models::ids::SseId;
use crate::core::models::motif::Motif;
use nalgebra::Vector3;
use std::collections::HashMap;

/// One placed element: its descriptor flags plus the coordinate frame that
/// realizes it in world space.
#[derive(Debug, Clone)]
pub struct PlacedSse {
    pub id: SseId,
    pub edge: bool,
    pub is_static: bool,
    pub frame: CoordinateFrame,
}

/// All placed elements of one absolute architecture, in layer-major order.
/// Built once per run and then only read; candidate evaluation works on
/// per-candidate clones of the frames.
#[derive(Debug, Clone)]
pub struct Scaffold {
    elements: Vec<PlacedSse>,
    index: HashMap<SseId, usize>,
}

impl Scaffold {
    /// Instantiates a coordinate frame for every element of an absolute
    /// architecture: parametric generation, tilt, then shift into place.
    /// Elements referencing a grafted motif segment install the segment's
    /// explicit atom coordinates instead and skip tilting.
    pub fn build(architecture: &Architecture, motifs: &[Motif]) -> Result<Self, EngineError> {
        if architecture.is_relative() {
            return Err(EngineError::RelativeArchitecture);
        }

        let mut elements = Vec::with_capacity(architecture.sse_count());
        for (_, _, sse) in architecture.iter_sses() {
            let length = sse.length.ok_or_else(|| {
                EngineError::Internal(format!(
                    "element '{}' has no length after absolute cast",
                    sse.id
                ))
            })?;
            let mut frame = CoordinateFrame::new(length, sse.sse_type());

            if let Some(motif_ref) = &sse.motif_ref {
                let segment = motifs
                    .iter()
                    .find(|m| m.id == motif_ref.motif)
                    .and_then(|m| m.segment(&motif_ref.segment))
                    .ok_or_else(|| EngineError::MissingMotif {
                        sse: sse.id,
                        motif: motif_ref.motif.clone(),
                        segment: motif_ref.segment.clone(),
                    })?;
                let want = length * 4;
                if segment.coordinates.len() != want {
                    return Err(EngineError::MotifSizeMismatch {
                        sse: sse.id,
                        motif: motif_ref.motif.clone(),
                        segment: motif_ref.segment.clone(),
                        got: segment.coordinates.len(),
                        want,
                    });
                }
                frame.install_atoms(segment.coordinates.clone());
            } else {
                frame.tilt_degrees(sse.tilt.x, sse.tilt.y, sse.tilt.z);
            }

            frame.shift(&Vector3::new(
                sse.coordinates.x,
                sse.coordinates.y,
                sse.coordinates.z,
            ));

            elements.push(PlacedSse {
                id: sse.id,
                edge: sse.edge,
                is_static: sse.is_static,
                frame,
            });
        }

        let index = elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id, i))
            .collect();
        Ok(Self { elements, index })
    }

    pub fn elements(&self) -> &[PlacedSse] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: &SseId) -> Option<&PlacedSse> {
        self.index.get(id).map(|&i| &self.elements[i])
    }

    /// As-placed up/down orientation of every element, in layer-major order,
    /// before any ordering-specific direction resolution.
    pub fn directionality_profile(&self) -> Vec<(SseId, bool)> {
        self.elements
            .iter()
            .map(|e| (e.id, e.frame.goes_up()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SketchConfig;
    use crate::core::models::motif::MotifSegment;
    use crate::core::models::sse::SecondaryStructureElement;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn sse(id: &str) -> SecondaryStructureElement {
        SecondaryStructureElement::new(id.parse().unwrap())
    }

    fn absolute(layers: Vec<Vec<SecondaryStructureElement>>) -> Architecture {
        Architecture::from_layers(layers)
            .unwrap()
            .cast_absolute(&SketchConfig::default())
            .unwrap()
    }

    #[test]
    fn frames_land_on_their_cast_coordinates() {
        let arch = absolute(vec![vec![sse("A1H"), sse("A2H")]]);
        let scaffold = Scaffold::build(&arch, &[]).unwrap();
        assert_eq!(scaffold.len(), 2);

        let a2 = scaffold.get(&"A2H".parse().unwrap()).unwrap();
        assert_relative_eq!(a2.frame.center().x, 10.0, epsilon = 1e-9);
        assert_eq!(a2.frame.residues(), 13);
    }

    #[test]
    fn directionality_profile_reports_as_placed_orientation() {
        let arch = absolute(vec![vec![sse("A1H"), sse("A2H")]]);
        let scaffold = Scaffold::build(&arch, &[]).unwrap();
        let profile = scaffold.directionality_profile();
        assert_eq!(profile.len(), 2);
        // Untilted frames are generated top-down.
        assert!(profile.iter().all(|(_, up)| !up));
    }

    #[test]
    fn missing_motif_reference_is_fatal() {
        let grafted = sse("A1H").with_motif_ref("mtf.seg".parse().unwrap());
        let arch = absolute(vec![vec![grafted]]);
        assert!(matches!(
            Scaffold::build(&arch, &[]),
            Err(EngineError::MissingMotif { .. })
        ));
    }

    #[test]
    fn grafted_segment_replaces_parametric_atoms() {
        let grafted = sse("A1H")
            .with_length(2)
            .with_motif_ref("mtf.seg".parse().unwrap());
        let arch = absolute(vec![vec![grafted]]);
        let motif = Motif::new(
            "mtf",
            vec![MotifSegment::new(
                "seg",
                vec![Point3::origin(); 8],
            )],
        );
        let scaffold = Scaffold::build(&arch, &[motif]).unwrap();
        let placed = scaffold.get(&"A1H".parse().unwrap()).unwrap();
        assert!(placed.is_static);
        assert_eq!(placed.frame.atoms().len(), 8);
        // Grafted atoms are shifted into place with the element.
        assert_relative_eq!(placed.frame.atoms()[0].x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn wrong_sized_segment_is_rejected() {
        let grafted = sse("A1H")
            .with_length(3)
            .with_motif_ref("mtf.seg".parse().unwrap());
        let arch = absolute(vec![vec![grafted]]);
        let motif = Motif::new("mtf", vec![MotifSegment::new("seg", vec![Point3::origin(); 8])]);
        assert!(matches!(
            Scaffold::build(&arch, &[motif]),
            Err(EngineError::MotifSizeMismatch { want: 12, got: 8, .. })
        ));
    }
}
