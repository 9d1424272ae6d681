pub mod engine;
mod lanes;
pub mod palette;
pub mod types;

pub use engine::layout_graph;
pub use palette::{rail_color, RailColor, RAIL_PALETTE};
pub use types::{ColumnIdx, ConnectionKind, GraphLayout, GraphNode, ParentConnection, Rail};
