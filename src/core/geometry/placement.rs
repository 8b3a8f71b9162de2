use crate::core::models::sse::SseType;
use nalgebra::{Point3, Rotation3, Vector3};

/// Backbone atom names of one idealized residue, in template order.
pub const BACKBONE_ATOMS: [&str; 4] = ["N", "CA", "C", "O"];

// Local backbone templates, one residue centered on its guide point.
// The helix template is shared by the alpha, 3-10 and pi variants; what
// distinguishes them is the rise and per-residue twist carried by `SseType`.
const HELIX_TEMPLATE: [[f64; 3]; 4] = [
    [1.321, 0.841, -0.711], // N
    [2.300, 0.000, 0.000],  // CA
    [1.576, -1.029, 0.870], // C
    [1.911, -2.248, 0.871], // O
];

const STRAND_TEMPLATE: [[f64; 3]; 4] = [
    [-0.440, -1.200, 0.330], // N
    [0.000, 0.000, 1.210],   // CA
    [-0.550, 1.200, 0.330],  // C
    [-2.090, 1.300, 0.220],  // O
];

/// Parametric placement rule for one secondary structure family: given a
/// guide point and the residue index, produce the four backbone atoms.
#[derive(Debug, Clone, Copy)]
pub struct PlacementRule {
    pub rise: f64,
    pub twist_degrees: f64,
    template: [[f64; 3]; 4],
}

impl PlacementRule {
    /// Enum-keyed lookup of the rule for a structure type.
    pub fn for_type(sse_type: SseType) -> Self {
        let template = if sse_type.is_strand() {
            STRAND_TEMPLATE
        } else {
            HELIX_TEMPLATE
        };
        Self {
            rise: sse_type.rise(),
            twist_degrees: sse_type.twist_degrees(),
            template,
        }
    }

    /// Places the backbone template at guide point `guide` for residue
    /// `index`, twisted about the local long axis by `twist * index`.
    ///
    /// For strands the -180 degree twist alternates the template's lateral
    /// pleat from residue to residue.
    pub fn residue_atoms(&self, index: usize, guide: &Point3<f64>) -> [Point3<f64>; 4] {
        let angle = (self.twist_degrees * index as f64).to_radians();
        let twist = Rotation3::from_axis_angle(&Vector3::y_axis(), angle);
        self.template
            .map(|[x, y, z]| guide + twist * Vector3::new(x, y, z))
    }
}
