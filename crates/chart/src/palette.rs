//! Team colours.

use serde::{Deserialize, Serialize};

/// Line and fill colours, picked by team index modulo palette length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPalette {
    /// Line and point colours
    pub border: Vec<String>,

    /// Area fill colours
    pub background: Vec<String>,
}

const RGB: [(u8, u8, u8); 7] = [
    (156, 99, 169),
    (151, 187, 205),
    (230, 22, 22),
    (22, 230, 57),
    (230, 22, 210),
    (220, 220, 220),
    (204, 104, 0),
];

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            border: RGB
                .iter()
                .map(|(r, g, b)| format!("rgba({},{},{},1)", r, g, b))
                .collect(),
            background: RGB
                .iter()
                .map(|(r, g, b)| format!("rgba({},{},{},0.2)", r, g, b))
                .collect(),
        }
    }
}

impl ChartPalette {
    /// Whether both colour lists have at least one entry.
    pub fn is_usable(&self) -> bool {
        !self.border.is_empty() && !self.background.is_empty()
    }

    /// Border colour for team `index`.
    pub fn border_for(&self, index: usize) -> &str {
        pick(&self.border, index)
    }

    /// Background colour for team `index`.
    pub fn background_for(&self, index: usize) -> &str {
        pick(&self.background, index)
    }
}

fn pick(colours: &[String], index: usize) -> &str {
    if colours.is_empty() {
        return "";
    }
    &colours[index % colours.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = ChartPalette::default();
        assert_eq!(palette.border.len(), 7);
        assert_eq!(palette.border_for(0), "rgba(156,99,169,1)");
        assert_eq!(palette.background_for(6), "rgba(204,104,0,0.2)");
    }

    #[test]
    fn test_colours_wrap_around() {
        let palette = ChartPalette::default();
        assert_eq!(palette.border_for(7), palette.border_for(0));
        assert_eq!(palette.background_for(9), palette.background_for(2));
    }

    #[test]
    fn test_empty_palette_unusable() {
        let palette = ChartPalette {
            border: vec![],
            background: vec!["red".to_string()],
        };
        assert!(!palette.is_usable());
        assert_eq!(palette.border_for(3), "");
    }
}
