pub mod core;
pub mod git_backend;
pub mod layout;

pub use crate::core::Commit;
pub use git_backend::HistoryWalker;
pub use layout::{
    layout_graph, ColumnIdx, ConnectionKind, GraphLayout, GraphNode, ParentConnection, Rail,
    RailColor, RAIL_PALETTE,
};
