use super::error::EngineError;
use super::feasibility::CandidateForm;
use super::scaffold::Scaffold;
use crate::core::config::SketchConfig;
use crate::core::geometry::frame::CoordinateFrame;
use crate::core::models::ids::SseId;
use nalgebra::Point3;

/// One residue slot of an assembled backbone sketch: either a placed residue
/// of a secondary structure element with its four backbone atoms, or an
/// unplaced loop gap to be closed later.
#[derive(Debug, Clone)]
pub enum SketchResidue {
    Sse {
        id: SseId,
        atoms: [Point3<f64>; 4],
    },
    Gap,
}

/// A linear backbone sketch for one accepted candidate: the elements of its
/// connectivity traversed N to C, with loop gaps budgeted between them and a
/// single gap at each terminus.
#[derive(Debug, Clone)]
pub struct BackboneSketch {
    residues: Vec<SketchResidue>,
}

impl BackboneSketch {
    pub fn residues(&self) -> &[SketchResidue] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// All placed backbone atoms in chain order, skipping gaps.
    pub fn atoms(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.residues.iter().flat_map(|r| match r {
            SketchResidue::Sse { atoms, .. } => atoms.as_slice(),
            SketchResidue::Gap => &[],
        })
    }

    /// Per-residue secondary structure string, one code per slot: the element
    /// type code for placed residues and `L` for gaps.
    pub fn secondary_structure(&self) -> String {
        self.residues
            .iter()
            .map(|r| match r {
                SketchResidue::Sse { id, .. } => id.sse_type.code(),
                SketchResidue::Gap => 'L',
            })
            .collect()
    }
}

/// Materializes the backbone sketch of one candidate.
///
/// Each element's frame is cloned from the scaffold and flipped when its
/// as-placed direction disagrees with the candidate's resolved `runs_up`
/// assignment. The gap budget between two consecutive elements is the
/// CA-to-CA distance from the first element's last residue to the second
/// element's first residue, divided by the configured loop step and rounded
/// up.
pub fn assemble(
    candidate: &CandidateForm,
    scaffold: &Scaffold,
    config: &SketchConfig,
) -> Result<BackboneSketch, EngineError> {
    let order = candidate.connectivity.order();
    if order.len() != candidate.runs_up.len() {
        return Err(EngineError::Internal(format!(
            "candidate '{}' has {} direction entries for {} elements",
            candidate.connectivity,
            candidate.runs_up.len(),
            order.len()
        )));
    }

    let mut frames: Vec<(SseId, CoordinateFrame)> = Vec::with_capacity(order.len());
    for (id, &runs_up) in order.iter().zip(&candidate.runs_up) {
        let placed = scaffold
            .get(id)
            .ok_or(EngineError::UnknownElement(*id))?;
        let mut frame = placed.frame.clone();
        if frame.goes_up() != runs_up {
            frame.invert_direction();
        }
        frames.push((*id, frame));
    }

    let mut residues = vec![SketchResidue::Gap];
    for (i, (id, frame)) in frames.iter().enumerate() {
        if i > 0 {
            let previous = &frames[i - 1].1;
            for _ in 0..gap_budget(previous, frame, config) {
                residues.push(SketchResidue::Gap);
            }
        }
        for atoms in frame.atoms().chunks_exact(4) {
            residues.push(SketchResidue::Sse {
                id: *id,
                atoms: [atoms[0], atoms[1], atoms[2], atoms[3]],
            });
        }
    }
    residues.push(SketchResidue::Gap);

    Ok(BackboneSketch { residues })
}

/// Number of gap residues budgeted for the loop from `from` to `to`, judged
/// from the straight-line distance between the flanking alpha carbons.
fn gap_budget(from: &CoordinateFrame, to: &CoordinateFrame, config: &SketchConfig) -> usize {
    let (Some(exit), Some(entry)) = (from.ca_atoms().last(), to.ca_atoms().next()) else {
        return 0;
    };
    let distance = (exit - entry).norm();
    (distance / config.distance.loop_step).ceil() as usize
}
