use serde::Serialize;

/// One node record from a Euclidean-2D instance file.
///
/// `idx` is the declared index read from the source line, kept verbatim; it
/// is not required to be contiguous, 0-based, or unique. Position in
/// `Graph::nodes` is what identifies a node during edge building.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Node {
    pub idx: i64,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(idx: i64, x: f64, y: f64) -> Self {
        Self { idx, x, y }
    }

    /// Euclidean distance to `rhs`.
    ///
    /// Non-finite coordinates are not rejected; they propagate into the
    /// result the way IEEE 754 arithmetic dictates.
    pub fn dist(self, rhs: &Self) -> f64 {
        let dx = self.x - rhs.x;
        let dy = self.y - rhs.y;
        (dx * dx + dy * dy).sqrt()
    }
}
