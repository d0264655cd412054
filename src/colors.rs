// Fixed category -> color palette for the DOTA class set

use image::Rgb;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Stroke/text color for categories not in the palette.
pub const FALLBACK: Rgb<u8> = Rgb([255, 255, 255]);

/// Start-vertex marker color, independent of the category palette.
pub const START_MARKER: Rgb<u8> = Rgb([255, 255, 0]);

static PALETTE: Lazy<HashMap<&'static str, Rgb<u8>>> = Lazy::new(|| {
    HashMap::from([
        ("plane", Rgb([255, 255, 0])),             // yellow
        ("ship", Rgb([0, 0, 255])),                // blue
        ("storage-tank", Rgb([255, 0, 0])),        // red
        ("baseball-diamond", Rgb([255, 0, 255])),  // magenta
        ("tennis-court", Rgb([0, 255, 0])),        // green
        ("basketball-court", Rgb([0, 0, 128])),    // navy
        ("ground-track-field", Rgb([128, 128, 0])), // olive
        ("harbor", Rgb([0, 128, 128])),            // teal
        ("bridge", Rgb([128, 0, 0])),              // maroon
        ("large-vehicle", Rgb([255, 165, 0])),     // orange
        ("small-vehicle", Rgb([255, 192, 203])),   // pink
        ("helicopter", Rgb([75, 0, 130])),         // indigo
        ("roundabout", Rgb([255, 20, 147])),       // deep pink
        ("soccer-ball-field", Rgb([0, 255, 127])), // spring green
        ("swimming-pool", Rgb([240, 230, 140])),   // khaki
    ])
});

/// Look up the stroke color for a category, falling back to white for
/// anything not in the fixed palette.
pub fn class_color(category: &str) -> Rgb<u8> {
    PALETTE.get(category).copied().unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_map_to_their_colors() {
        assert_eq!(class_color("plane"), Rgb([255, 255, 0]));
        assert_eq!(class_color("ship"), Rgb([0, 0, 255]));
        assert_eq!(class_color("swimming-pool"), Rgb([240, 230, 140]));
    }

    #[test]
    fn unknown_categories_fall_back_to_white() {
        assert_eq!(class_color("unknown-class-xyz"), FALLBACK);
        assert_eq!(class_color(""), FALLBACK);
        // Lookup is case-sensitive, same as the label convention.
        assert_eq!(class_color("Plane"), FALLBACK);
    }
}
