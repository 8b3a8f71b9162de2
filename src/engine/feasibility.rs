use super::error::EngineError;
use super::scaffold::{PlacedSse, Scaffold};
use crate::core::geometry::frame::CoordinateFrame;
use crate::core::models::connectivity::Connectivity;
use serde::Serialize;

/// One realized connectivity with its resolved per-element direction and the
/// verdict of each feasibility rule.
///
/// All three rules are always evaluated, so the record is fully populated
/// even for rejected candidates; `runs_up` carries the last-computed
/// direction assignment whether or not the direction rule passed, so
/// downstream consumers (visualization, assembly) can still use it.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateForm {
    pub connectivity: Connectivity,
    pub runs_up: Vec<bool>,
    pub edge_ok: bool,
    pub direction_ok: bool,
    pub intersection_ok: bool,
    pub accepted: bool,
}

/// Per-candidate working copy of one element. The frames are clones: the
/// direction rule flips them in place while it resolves the assignment.
struct Element {
    edge: bool,
    is_static: bool,
    frame: CoordinateFrame,
}

/// Evaluates the three feasibility rules for one candidate ordering.
///
/// Architecture-level contract violations (more than two edge-flagged
/// elements) are checked before enumeration, not here; a failed rule is a
/// normal negative result recorded on the candidate.
pub fn evaluate(
    connectivity: &Connectivity,
    scaffold: &Scaffold,
) -> Result<CandidateForm, EngineError> {
    let mut elements = Vec::with_capacity(connectivity.len());
    for id in connectivity.order() {
        let placed: &PlacedSse = scaffold
            .get(id)
            .ok_or(EngineError::UnknownElement(*id))?;
        elements.push(Element {
            edge: placed.edge,
            is_static: placed.is_static,
            frame: placed.frame.clone(),
        });
    }

    let edge_ok = expected_edges(&elements);
    let (direction_ok, mut runs_up) = expected_directions(&mut elements);
    if !direction_ok {
        runs_up = alternate_regardless(&mut elements);
    }
    let intersection_ok = expected_intersections(&elements);

    let accepted = edge_ok && direction_ok && intersection_ok;
    Ok(CandidateForm {
        connectivity: connectivity.clone(),
        runs_up,
        edge_ok,
        direction_ok,
        intersection_ok,
        accepted,
    })
}

/// Edge rule: if any element carries the `edge` flag, the two string termini
/// must jointly carry all of them.
fn expected_edges(elements: &[Element]) -> bool {
    let total = elements.iter().filter(|e| e.edge).count();
    if total == 0 {
        return true;
    }
    let Some(first) = elements.first() else {
        return true;
    };
    let Some(last) = elements.last() else {
        return true;
    };
    let at_termini = first.edge as usize + last.edge as usize;
    at_termini == total
}

enum Pass {
    Done,
    /// Alternation hit a static element; retry with the seed flipped.
    Blocked,
    /// No assignment exists on this attempt (e.g. two consecutive statics).
    Failed,
}

/// Direction rule: seed from the first element's current orientation and
/// alternate down the ordering. A static element cannot be flipped; when
/// alternation is blocked at one, the whole pass is retried once with the
/// starting element flipped. Returns the verdict and the directions as
/// resolved so far.
///
/// With several non-adjacent static elements this single retry is known to
/// be incomplete; the behavior is kept as-is.
fn expected_directions(elements: &mut [Element]) -> (bool, Vec<bool>) {
    if elements.is_empty() {
        return (true, Vec::new());
    }
    let mut directions: Vec<bool> = elements.iter().map(|e| e.frame.goes_up()).collect();

    match alternate_pass(elements, &mut directions) {
        Pass::Done => (true, directions),
        Pass::Failed => (false, directions),
        Pass::Blocked => {
            if elements[0].is_static {
                return (false, directions);
            }
            elements[0].frame.invert_direction();
            directions[0] = elements[0].frame.goes_up();
            match alternate_pass(elements, &mut directions) {
                Pass::Done => (true, directions),
                _ => (false, directions),
            }
        }
    }
}

fn alternate_pass(elements: &mut [Element], directions: &mut [bool]) -> Pass {
    let mut previous = directions[0];
    let mut previous_static = elements[0].is_static;
    for x in 1..elements.len() {
        if directions[x] == previous {
            // Two consecutive pinned elements in the same direction can
            // never alternate, on any seed.
            if previous_static && elements[x].is_static {
                return Pass::Failed;
            }
            if elements[x].is_static {
                return Pass::Blocked;
            }
            elements[x].frame.invert_direction();
            directions[x] = elements[x].frame.goes_up();
        }
        previous = directions[x];
        previous_static = elements[x].is_static;
    }
    Pass::Done
}

/// Best-effort assignment when the direction rule failed: alternate strictly,
/// ignoring pinning, so downstream visualization still gets a usable sketch.
fn alternate_regardless(elements: &mut [Element]) -> Vec<bool> {
    let mut directions: Vec<bool> = elements.iter().map(|e| e.frame.goes_up()).collect();
    for x in 1..elements.len() {
        if directions[x] == directions[x - 1] {
            elements[x].frame.invert_direction();
            directions[x] = elements[x].frame.goes_up();
        }
    }
    directions
}

/// Non-self-intersection rule: consecutive element pairs are split into
/// climbing and descending legs (alternating, seeded by the first element's
/// orientation). Within each group, the 2-D projected segments between the
/// members' canonical up (climbing) or down (descending) reference points
/// must not properly cross.
fn expected_intersections(elements: &[Element]) -> bool {
    let mut climbing: Vec<[[f64; 2]; 2]> = Vec::new();
    let mut descending: Vec<[[f64; 2]; 2]> = Vec::new();

    let Some(first) = elements.first() else {
        return true;
    };
    let mut up = first.frame.goes_up();
    for pair in elements.windows(2) {
        if up {
            climbing.push([planar_top(&pair[0]), planar_top(&pair[1])]);
        } else {
            descending.push([planar_bottom(&pair[0]), planar_bottom(&pair[1])]);
        }
        up = !up;
    }

    for group in [&climbing, &descending] {
        for (i, a) in group.iter().enumerate() {
            for b in group.iter().skip(i + 1) {
                if segments_properly_cross(a[0], a[1], b[0], b[1]) {
                    return false;
                }
            }
        }
    }
    true
}

fn planar_top(element: &Element) -> [f64; 2] {
    let p = element.frame.top_point();
    [p.x, p.z]
}

fn planar_bottom(element: &Element) -> [f64; 2] {
    let p = element.frame.bottom_point();
    [p.x, p.z]
}

const CROSS_EPSILON: f64 = 1e-9;

/// Strict proper-crossing test for two 2-D segments: the line-line
/// intersection point must lie strictly between both segments' endpoints.
/// Parallel and collinear segments do not cross, and segments that share
/// only an endpoint do not cross.
pub(crate) fn segments_properly_cross(
    p1: [f64; 2],
    p2: [f64; 2],
    p3: [f64; 2],
    p4: [f64; 2],
) -> bool {
    let r = [p2[0] - p1[0], p2[1] - p1[1]];
    let s = [p4[0] - p3[0], p4[1] - p3[1]];
    let denominator = r[0] * s[1] - r[1] * s[0];
    if denominator.abs() < CROSS_EPSILON {
        return false;
    }

    let q = [p3[0] - p1[0], p3[1] - p1[1]];
    let t = (q[0] * s[1] - q[1] * s[0]) / denominator;
    let u = (q[0] * r[1] - q[1] * r[0]) / denominator;

    t > CROSS_EPSILON
        && t < 1.0 - CROSS_EPSILON
        && u > CROSS_EPSILON
        && u < 1.0 - CROSS_EPSILON
}
