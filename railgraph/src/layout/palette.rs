use serde::Serialize;

/// Rail color as a plain RGB triple. The rendering side converts it into
/// whatever color type its toolkit uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RailColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fixed palette cycled round-robin as columns grow, so colors repeat once
/// a layout uses more columns than the palette has entries.
pub const RAIL_PALETTE: [RailColor; 8] = [
    RailColor { r: 0x4e, g: 0x79, b: 0xa7 },
    RailColor { r: 0xf2, g: 0x8e, b: 0x2b },
    RailColor { r: 0x59, g: 0xa1, b: 0x4f },
    RailColor { r: 0xe1, g: 0x57, b: 0x59 },
    RailColor { r: 0xb0, g: 0x7a, b: 0xa1 },
    RailColor { r: 0x76, g: 0xb7, b: 0xb2 },
    RailColor { r: 0xed, g: 0xc9, b: 0x48 },
    RailColor { r: 0x9c, g: 0x75, b: 0x5f },
];

/// Color for the rail backing the given column.
pub fn rail_color(column: usize) -> RailColor {
    RAIL_PALETTE[column % RAIL_PALETTE.len()]
}
