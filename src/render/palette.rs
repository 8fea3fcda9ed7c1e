use plotters::style::RGBColor;

/// Band color for labels outside the table
pub const DEFAULT_COLOR: RGBColor = RGBColor(0x88, 0x88, 0x88);

/// A legend entry: state label and its band color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    /// State label, matched case-sensitively
    pub label: &'static str,
    /// Band color
    pub color: RGBColor,
}

const ENTRIES: [PaletteEntry; 3] = [
    PaletteEntry {
        label: "Idle",
        color: RGBColor(0x1f, 0x77, 0xb4),
    },
    PaletteEntry {
        label: "Running",
        color: RGBColor(0x2c, 0xa0, 0x2c),
    },
    PaletteEntry {
        label: "Error",
        color: RGBColor(0xd6, 0x27, 0x28),
    },
];

/// Fixed state → color table
#[derive(Debug, Clone, Copy, Default)]
pub struct StatePalette;

impl StatePalette {
    /// Color for a state label
    pub fn color_for(&self, state: &str) -> RGBColor {
        ENTRIES
            .iter()
            .find(|entry| entry.label == state)
            .map(|entry| entry.color)
            .unwrap_or(DEFAULT_COLOR)
    }

    /// All table entries in legend order
    pub fn entries(&self) -> &'static [PaletteEntry] {
        &ENTRIES
    }
}
