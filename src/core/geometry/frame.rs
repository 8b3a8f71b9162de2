use super::placement::PlacementRule;
use crate::core::models::sse::SseType;
use nalgebra::{Point3, Rotation3, Vector3};

/// Builds the composed elementary rotation used for tilting: y first, then x,
/// then z (`Rz * Rx * Ry` on column vectors).
fn euler_zxy(x_degrees: f64, y_degrees: f64, z_degrees: f64) -> Rotation3<f64> {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), x_degrees.to_radians());
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), y_degrees.to_radians());
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), z_degrees.to_radians());
    rz * rx * ry
}

/// The rigid local frame of one sketch element: a guide axis of evenly spaced
/// points, the backbone atoms derived from it, and the accumulated world
/// rotation that separates placement from orientation.
///
/// The guide axis runs along local y, centered at the origin at construction.
/// World-frame operations ([`shift`](Self::shift), [`tilt_degrees`](Self::tilt_degrees),
/// [`rotate_world`](Self::rotate_world)) accumulate into the stored
/// orientation; local-frame operations ([`spin_degrees`](Self::spin_degrees),
/// [`invert_direction`](Self::invert_direction)) are conjugated through it, so
/// they act about the element's own axes no matter how it has been tilted.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateFrame {
    sse_type: SseType,
    residues: usize,
    center: Point3<f64>,
    axis_ends: [Point3<f64>; 2],
    guide_points: Vec<Point3<f64>>,
    atoms: Vec<Point3<f64>>,
    orientation: Rotation3<f64>,
    inverted: bool,
}

impl CoordinateFrame {
    /// Builds the idealized frame for `residues` residues of the given type,
    /// centered at the origin. Guide points are spaced by the type rise; the
    /// backbone atoms are derived through the type's placement rule.
    pub fn new(residues: usize, sse_type: SseType) -> Self {
        let rule = PlacementRule::for_type(sse_type);
        let half_span = rule.rise * residues as f64 / 2.0;
        let top = rule.rise * residues.saturating_sub(1) as f64 / 2.0;

        let guide_points: Vec<Point3<f64>> = (0..residues)
            .map(|i| Point3::new(0.0, top - rule.rise * i as f64, 0.0))
            .collect();
        let atoms: Vec<Point3<f64>> = guide_points
            .iter()
            .enumerate()
            .flat_map(|(i, guide)| rule.residue_atoms(i, guide))
            .collect();

        Self {
            sse_type,
            residues,
            center: Point3::origin(),
            axis_ends: [
                Point3::new(0.0, half_span, 0.0),
                Point3::new(0.0, -half_span, 0.0),
            ],
            guide_points,
            atoms,
            orientation: Rotation3::identity(),
            inverted: false,
        }
    }

    pub fn sse_type(&self) -> SseType {
        self.sse_type
    }

    pub fn residues(&self) -> usize {
        self.residues
    }

    pub fn center(&self) -> &Point3<f64> {
        &self.center
    }

    pub fn guide_points(&self) -> &[Point3<f64>] {
        &self.guide_points
    }

    /// All backbone atoms, four per residue in N, CA, C, O order.
    pub fn atoms(&self) -> &[Point3<f64>] {
        &self.atoms
    }

    pub fn ca_atoms(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.atoms.iter().skip(1).step_by(4)
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Replaces the derived atoms with externally supplied coordinates, as
    /// when a structural motif is grafted onto the element. The guide axis is
    /// rebuilt from the grafted alpha carbons, so orientation queries
    /// ([`goes_up`](Self::goes_up), [`top_point`](Self::top_point)) follow the
    /// motif's actual geometry rather than the parametric axis it replaces.
    pub fn install_atoms(&mut self, atoms: Vec<Point3<f64>>) {
        self.atoms = atoms;
        let cas: Vec<Point3<f64>> = self.ca_atoms().copied().collect();
        if let (Some(first), Some(last)) = (cas.first(), cas.last()) {
            self.axis_ends = [*first, *last];
            self.center = Point3::from((first.coords + last.coords) * 0.5);
            self.guide_points = cas;
        }
    }

    /// Translates the whole frame. Composable and exactly invertible:
    /// `shift(v)` then `shift(-v)` restores the original coordinates.
    pub fn shift(&mut self, v: &Vector3<f64>) {
        self.center += v;
        for p in self.axis_ends.iter_mut() {
            *p += v;
        }
        for p in self.guide_points.iter_mut() {
            *p += v;
        }
        for p in self.atoms.iter_mut() {
            *p += v;
        }
    }

    fn apply_rotation(&mut self, r: &Rotation3<f64>, pivot: &Point3<f64>) {
        self.center = pivot + r * (self.center - pivot);
        for p in self.axis_ends.iter_mut() {
            *p = pivot + r * (*p - pivot);
        }
        for p in self.guide_points.iter_mut() {
            *p = pivot + r * (*p - pivot);
        }
        for p in self.atoms.iter_mut() {
            *p = pivot + r * (*p - pivot);
        }
    }

    /// Applies a world-frame rotation about `pivot` and accumulates it in the
    /// stored orientation.
    pub fn rotate_world(&mut self, r: &Rotation3<f64>, pivot: &Point3<f64>) {
        self.apply_rotation(r, pivot);
        self.orientation = r * self.orientation;
    }

    /// Applies a rotation expressed in the element's own local frame, about
    /// its center. The local rotation is conjugated through the accumulated
    /// orientation (`A * R * A^-1`); the stored orientation itself is left
    /// unchanged.
    pub fn rotate_local(&mut self, r: &Rotation3<f64>) {
        let world = self.orientation * r * self.orientation.inverse();
        let pivot = self.center;
        self.apply_rotation(&world, &pivot);
    }

    /// Tilts about the frame center by elementary rotations applied y, x, z.
    pub fn tilt_degrees(&mut self, x: f64, y: f64, z: f64) {
        if x == 0.0 && y == 0.0 && z == 0.0 {
            return;
        }
        let r = euler_zxy(x, y, z);
        let pivot = self.center;
        self.rotate_world(&r, &pivot);
    }

    /// Rotates about the element's own long axis.
    pub fn spin_degrees(&mut self, angle: f64) {
        let r = Rotation3::from_axis_angle(&Vector3::y_axis(), angle.to_radians());
        self.rotate_local(&r);
    }

    /// Flips which end of the element is "up". An involution: applying it
    /// twice restores orientation and atom coordinates.
    pub fn invert_direction(&mut self) {
        let r = euler_zxy(180.0, 180.0, 0.0);
        self.rotate_local(&r);
        self.inverted = !self.inverted;
    }

    /// Whether the chain climbs along the world y axis, judged from the guide
    /// points nearest the two ends of the axis.
    pub fn goes_up(&self) -> bool {
        match (self.guide_points.first(), self.guide_points.last()) {
            (Some(first), Some(last)) => first.y < last.y,
            _ => false,
        }
    }

    pub fn goes_down(&self) -> bool {
        !self.goes_up()
    }

    /// The axis end currently highest along world y.
    pub fn top_point(&self) -> Point3<f64> {
        if self.axis_ends[0].y >= self.axis_ends[1].y {
            self.axis_ends[0]
        } else {
            self.axis_ends[1]
        }
    }

    /// The axis end currently lowest along world y.
    pub fn bottom_point(&self) -> Point3<f64> {
        if self.axis_ends[0].y >= self.axis_ends[1].y {
            self.axis_ends[1]
        } else {
            self.axis_ends[0]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn helix(residues: usize) -> CoordinateFrame {
        CoordinateFrame::new(residues, SseType::AlphaHelix)
    }

    #[test]
    fn construction_centers_the_axis() {
        let frame = helix(5);
        assert_eq!(frame.guide_points().len(), 5);
        assert_eq!(frame.atoms().len(), 20);
        assert_relative_eq!(*frame.center(), Point3::origin());
        // 5 residues at rise 1.5: symmetric span of 6.0.
        assert_relative_eq!(frame.guide_points()[0].y, 3.0, epsilon = 1e-12);
        assert_relative_eq!(frame.guide_points()[4].y, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn shift_round_trip_restores_coordinates() {
        let mut frame = helix(7);
        let original = frame.clone();
        let v = Vector3::new(3.0, -12.5, 6.25);
        frame.shift(&v);
        assert_relative_eq!(frame.center().y, -12.5, epsilon = 1e-12);
        frame.shift(&-v);
        for (a, b) in frame.atoms().iter().zip(original.atoms()) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }
        assert_relative_eq!(frame.center(), original.center(), epsilon = 1e-9);
    }

    #[test]
    fn default_frame_goes_down() {
        // Guide points are generated from the top of the axis downwards.
        let frame = helix(5);
        assert!(frame.goes_down());
    }

    #[test]
    fn invert_direction_is_an_involution() {
        let mut frame = helix(6);
        frame.tilt_degrees(25.0, 0.0, 40.0);
        let reference = frame.clone();
        let up = frame.goes_up();

        frame.invert_direction();
        assert_eq!(frame.goes_up(), !up);
        assert!(frame.is_inverted());

        frame.invert_direction();
        assert_eq!(frame.goes_up(), up);
        assert!(!frame.is_inverted());
        for (a, b) in frame.atoms().iter().zip(reference.atoms()) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn tilt_z_90_lays_the_axis_along_x() {
        let mut frame = helix(5);
        frame.tilt_degrees(0.0, 0.0, 90.0);
        // Rotating +90 about z sends +y to -x.
        assert_relative_eq!(frame.guide_points()[0].x, -3.0, epsilon = 1e-9);
        assert_relative_eq!(frame.guide_points()[0].y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn tilt_pivots_about_the_center_not_the_origin() {
        let mut frame = helix(5);
        frame.shift(&Vector3::new(10.0, 0.0, 0.0));
        frame.tilt_degrees(0.0, 0.0, 90.0);
        assert_relative_eq!(frame.center().x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(frame.guide_points()[0].x, 7.0, epsilon = 1e-9);
        assert_relative_eq!(frame.guide_points()[0].y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn spin_turns_about_the_elements_own_axis_after_tilting() {
        let mut frame = helix(5);
        frame.tilt_degrees(0.0, 0.0, 90.0);
        let guides_before: Vec<_> = frame.guide_points().to_vec();
        frame.spin_degrees(100.0);
        // The guide axis is the spin axis, so it must not move.
        for (a, b) in frame.guide_points().iter().zip(&guides_before) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }
        // Atoms off the axis do move.
        let ca0 = frame.atoms()[1];
        let mut untouched = helix(5);
        untouched.tilt_degrees(0.0, 0.0, 90.0);
        assert!((ca0 - untouched.atoms()[1]).norm() > 1e-3);
    }

    #[test]
    fn top_and_bottom_track_the_world_y_axis() {
        let mut frame = helix(4);
        let top = frame.top_point();
        let bottom = frame.bottom_point();
        assert!(top.y > bottom.y);
        frame.invert_direction();
        assert_relative_eq!(frame.top_point().y, top.y, epsilon = 1e-9);
        assert!(frame.top_point().y > frame.bottom_point().y);
    }

    #[test]
    fn install_atoms_replaces_the_parametric_backbone() {
        let mut frame = CoordinateFrame::new(2, SseType::Strand);
        let grafted = vec![Point3::new(1.0, 2.0, 3.0); 8];
        frame.install_atoms(grafted.clone());
        assert_eq!(frame.atoms(), grafted.as_slice());
        // Subsequent shifts still move the grafted atoms.
        frame.shift(&Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(frame.atoms()[0].x, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn grafted_atoms_drive_orientation() {
        let mut frame = CoordinateFrame::new(2, SseType::Strand);
        assert!(frame.goes_down());

        // Two residues whose alpha carbons climb along y.
        let ascending: Vec<_> = (0..8)
            .map(|i| Point3::new(0.0, i as f64, 0.0))
            .collect();
        frame.install_atoms(ascending);
        assert!(frame.goes_up());
        // Axis endpoints come from the grafted alpha carbons (indices 1, 5).
        assert_relative_eq!(frame.top_point().y, 5.0, epsilon = 1e-12);
        assert_relative_eq!(frame.bottom_point().y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.center().y, 3.0, epsilon = 1e-12);

        // Inversion still flips the grafted direction.
        frame.invert_direction();
        assert!(frame.goes_down());
    }
}
