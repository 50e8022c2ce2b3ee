use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// dense vertex identifier of the contracted graph, assigned from 0 in the
/// order intersections are first seen during contraction.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
#[serde(transparent)]
pub struct CompactId(pub usize);

impl Display for CompactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
