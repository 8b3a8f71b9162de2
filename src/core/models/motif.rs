use nalgebra::Point3;

/// Backbone coordinates supplied for one segment of an externally grafted
/// structural motif. Coordinates are four backbone atoms (N, CA, C, O) per
/// residue, already in world placement.
#[derive(Debug, Clone, PartialEq)]
pub struct MotifSegment {
    pub id: String,
    pub coordinates: Vec<Point3<f64>>,
}

impl MotifSegment {
    pub fn new(id: &str, coordinates: Vec<Point3<f64>>) -> Self {
        Self {
            id: id.to_string(),
            coordinates,
        }
    }
}

/// A grafted motif: a named collection of coordinate segments that sketch
/// elements can reference instead of generating parametric backbones.
#[derive(Debug, Clone, PartialEq)]
pub struct Motif {
    pub id: String,
    pub segments: Vec<MotifSegment>,
}

impl Motif {
    pub fn new(id: &str, segments: Vec<MotifSegment>) -> Self {
        Self {
            id: id.to_string(),
            segments,
        }
    }

    pub fn segment(&self, id: &str) -> Option<&MotifSegment> {
        self.segments.iter().find(|s| s.id == id)
    }
}
