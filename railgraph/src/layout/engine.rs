use std::cmp::Ordering;
use std::collections::HashMap;

use smallvec::SmallVec;
use tracing::debug;

use crate::core::Commit;
use crate::layout::lanes::LaneTracker;
use crate::layout::palette::rail_color;
use crate::layout::types::{
    ColumnIdx, ConnectionKind, GraphLayout, GraphNode, ParentConnection, Rail,
};

/// Lay the given commits out onto rows and rails.
///
/// Each commit gets a row equal to its input index and a column chosen so
/// that a single lineage keeps one vertical lane: a commit claims the lane
/// a prior child reserved for it, otherwise the lowest free lane. The first
/// parent of a commit inherits its lane, further parents fan out into the
/// first free lanes to the right. Freed lanes are reused opportunistically,
/// which can hand a lane's color to an unrelated branch later on; that is
/// accepted behavior, not something to correct here.
///
/// The result is rebuilt from scratch on every call and is identical for
/// identical input. Callers feeding a sequence that is not newest-first
/// topological still get a terminating, well-formed result, but lane
/// continuity is no longer guaranteed.
pub fn layout_graph(commits: &[Commit]) -> GraphLayout {
    let mut tracker = LaneTracker::new();
    let mut columns: Vec<ColumnIdx> = Vec::with_capacity(commits.len());
    let mut column_of: HashMap<&str, ColumnIdx> = HashMap::with_capacity(commits.len());
    let mut row_of: HashMap<&str, usize> = HashMap::with_capacity(commits.len());

    // Pass 1: columns. A lane is reserved the moment a child names a parent
    // and released when that parent (or a root) shows up in the stream.
    for (row, commit) in commits.iter().enumerate() {
        let column = tracker.assign(&commit.id);
        columns.push(column);
        column_of.insert(commit.id.as_str(), column);
        row_of.insert(commit.id.as_str(), row);
        tracker.advance(&commit.id, column, &commit.parents);
    }

    // Pass 2: connections. Parents outside the fetched window have no
    // position, so they get no connection.
    let mut nodes = Vec::with_capacity(commits.len());
    for (row, (commit, &column)) in commits.iter().zip(&columns).enumerate() {
        let mut connections: SmallVec<[ParentConnection; 2]> = SmallVec::new();
        for parent_id in &commit.parents {
            let (parent_column, parent_row) = match (
                column_of.get(parent_id.as_str()),
                row_of.get(parent_id.as_str()),
            ) {
                (Some(&parent_column), Some(&parent_row)) => (parent_column, parent_row),
                _ => continue,
            };
            let kind = match parent_column.cmp(&column) {
                Ordering::Equal => ConnectionKind::Straight,
                Ordering::Less => ConnectionKind::MergeLeft,
                Ordering::Greater => ConnectionKind::MergeRight,
            };
            connections.push(ParentConnection {
                parent_id: parent_id.clone(),
                parent_column,
                parent_row,
                kind,
            });
        }
        nodes.push(GraphNode {
            id: commit.id.clone(),
            column,
            row,
            parent_connections: connections,
        });
    }

    // Rails cover every column that received a commit; columns reserved for
    // parents that never arrived inside the window do not count.
    let rail_count = columns.iter().map(|&column| column + 1).max().unwrap_or(0);
    let rails = (0..rail_count)
        .map(|index| Rail {
            index,
            color: rail_color(index),
        })
        .collect();

    debug!(commits = commits.len(), rails = rail_count, "computed graph layout");

    GraphLayout { nodes, rails }
}
