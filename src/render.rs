//! Visualization interface
//!
//! Renderers consume a volume and produce a displayable form. Plotting
//! backends live outside this crate; the text renderer covers terminals.

use std::fmt::Write;

use crate::grid::{GridVolume, Plane};

/// Something that turns a volume into displayable output
pub trait MazeRenderer {
    fn render(&self, volume: &GridVolume) -> String;
}

/// Layout of layer grids in text output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerLayout {
    /// One grid under the next
    #[default]
    Stacked,
    /// All grids on the same lines
    SideBySide,
}

/// Plain-text layer grids: rows as lines, columns as characters
#[derive(Debug, Clone)]
pub struct TextRenderer {
    pub open: char,
    pub empty: char,
    pub layout: LayerLayout,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            open: '#',
            empty: '.',
            layout: LayerLayout::Stacked,
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side_by_side(mut self) -> Self {
        self.layout = LayerLayout::SideBySide;
        self
    }

    fn grid_lines(&self, plane: &Plane<u8>) -> Vec<String> {
        let (columns, rows) = plane.shape();
        (0..rows)
            .map(|r| {
                (0..columns)
                    .map(|c| match plane.get(c, r) {
                        Some(1) => self.open,
                        _ => self.empty,
                    })
                    .collect()
            })
            .collect()
    }

    fn layer_blocks(&self, volume: &GridVolume) -> Vec<(String, Vec<String>)> {
        (0..volume.layers())
            .filter_map(|l| volume.layer(l).ok().map(|plane| (l, plane)))
            .map(|(l, plane)| (format!("Layer {}", l), self.grid_lines(&plane)))
            .collect()
    }
}

impl MazeRenderer for TextRenderer {
    fn render(&self, volume: &GridVolume) -> String {
        let blocks = self.layer_blocks(volume);
        let mut out = String::new();

        match self.layout {
            LayerLayout::Stacked => {
                for (i, (title, lines)) in blocks.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    let _ = writeln!(out, "{}", title);
                    for line in lines {
                        let _ = writeln!(out, "{}", line);
                    }
                }
            }
            LayerLayout::SideBySide => {
                let width = blocks
                    .iter()
                    .map(|(title, _)| title.len())
                    .max()
                    .unwrap_or(0)
                    .max(volume.columns());
                let titles: Vec<String> = blocks
                    .iter()
                    .map(|(title, _)| format!("{:<width$}", title, width = width))
                    .collect();
                let _ = writeln!(out, "{}", titles.join("  ").trim_end());
                for r in 0..volume.rows() {
                    let cells: Vec<String> = blocks
                        .iter()
                        .map(|(_, lines)| format!("{:<width$}", lines[r], width = width))
                        .collect();
                    let _ = writeln!(out, "{}", cells.join("  ").trim_end());
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Point;

    #[test]
    fn test_stacked_render() {
        let volume =
            GridVolume::from_points(3, 2, 2, [Point::new(0, 0, 0), Point::new(2, 1, 1)]).unwrap();
        let text = TextRenderer::new().render(&volume);
        assert_eq!(text, "Layer 0\n#..\n...\n\nLayer 1\n...\n..#\n");
    }

    #[test]
    fn test_side_by_side_render() {
        let volume = GridVolume::from_points(2, 1, 2, [Point::new(1, 0, 1)]).unwrap();
        let text = TextRenderer::new().side_by_side().render(&volume);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Layer 0"));
        assert!(lines[0].contains("Layer 1"));
        assert_eq!(lines[1], "..        .#");
    }

    #[test]
    fn test_side_by_side_wide_titles_stay_aligned() {
        let volume = GridVolume::from_points(1, 1, 101, [Point::new(0, 0, 100)]).unwrap();
        let text = TextRenderer::new().side_by_side().render(&volume);
        let lines: Vec<&str> = text.lines().collect();
        // Every block is "Layer 100".len() wide plus a two-space gap.
        assert_eq!(lines[0].find("Layer 100"), Some(100 * 11));
        assert_eq!(lines[1].find('#'), Some(100 * 11));
    }

    #[test]
    fn test_custom_glyphs() {
        let volume = GridVolume::from_points(1, 1, 1, [Point::new(0, 0, 0)]).unwrap();
        let renderer = TextRenderer {
            open: 'o',
            ..TextRenderer::default()
        };
        assert_eq!(renderer.render(&volume), "Layer 0\no\n");
    }
}
