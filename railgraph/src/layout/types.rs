use serde::Serialize;
use smallvec::SmallVec;

use super::palette::RailColor;

/// A column is a vertical visual track, indexed left to right from 0.
pub type ColumnIdx = usize;

/// How a node connects down to one of its parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    /// Parent sits in the same column
    Straight,
    /// Parent sits in a column further left
    MergeLeft,
    /// Parent sits in a column further right
    MergeRight,
}

/// One resolved edge from a commit to a parent inside the fetched window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentConnection {
    pub parent_id: String,
    pub parent_column: ColumnIdx,
    pub parent_row: usize,
    pub kind: ConnectionKind,
}

/// Positioned counterpart of one input commit.
///
/// Carries the commit id as a back-reference; display metadata stays on the
/// commit record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub column: ColumnIdx,
    /// Matches the commit's position in the input sequence
    pub row: usize,
    /// One entry per parent found in the fetched window, in parent order
    pub parent_connections: SmallVec<[ParentConnection; 2]>,
}

/// A rail backs one column in use, carrying its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rail {
    pub index: ColumnIdx,
    pub color: RailColor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphLayout {
    /// One node per input commit, in row order
    pub nodes: Vec<GraphNode>,
    /// One rail per column in use, indices contiguous from 0
    pub rails: Vec<Rail>,
}
