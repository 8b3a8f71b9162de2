use super::ids::SseId;
use serde::{Serialize, Serializer};
use std::fmt;

/// One N-to-C ordering of all elements of an architecture.
///
/// A connectivity can only be obtained from the enumerator or by securing an
/// external ordering against the adjacency graph, so every consecutive pair
/// is guaranteed to be a graph edge by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connectivity {
    order: Vec<SseId>,
}

impl Connectivity {
    pub(crate) fn from_path(order: Vec<SseId>) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &[SseId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The same chain read C-to-N. A polypeptide has a direction, so the
    /// reverse is a distinct candidate.
    pub fn reversed(&self) -> Self {
        let mut order = self.order.clone();
        order.reverse();
        Self { order }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

impl Serialize for Connectivity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_dotted_ordering() {
        let conn = Connectivity::from_path(vec![
            "A1H".parse().unwrap(),
            "B1E".parse().unwrap(),
            "B2E".parse().unwrap(),
        ]);
        assert_eq!(conn.to_string(), "A1H.B1E.B2E");
    }

    #[test]
    fn reversal_is_an_involution() {
        let conn = Connectivity::from_path(vec![
            "A1H".parse().unwrap(),
            "A2H".parse().unwrap(),
        ]);
        assert_eq!(conn.reversed().reversed(), conn);
        assert_eq!(conn.reversed().to_string(), "A2H.A1H");
    }
}
