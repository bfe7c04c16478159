//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::{info, warn};

use crate::analysis;
use crate::cli::GenerateArgs;
use crate::config::MazeConfig;
use crate::error::Result;
use crate::grid::{self, Axis, Cell, Plane, Point};
use crate::maze::LayeredMaze;
use crate::render::{MazeRenderer, TextRenderer};

/// Merge the optional config file with command-line overrides.
pub fn resolve_config(args: &GenerateArgs) -> Result<MazeConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config: {}", path.display());
            MazeConfig::load(path)?
        }
        None => MazeConfig::default(),
    };

    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(layers) = args.layers {
        config.layers = layers;
    }
    if let Some(paths) = args.paths {
        config.num_paths = paths;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config.validate()?;
    Ok(config)
}

/// Generate a maze, optionally saving and printing it.
pub fn generate(args: &GenerateArgs) -> Result<()> {
    let config = resolve_config(args)?;
    info!(
        "Generating {}x{}x{} maze with {} path(s)",
        config.columns, config.rows, config.layers, config.num_paths
    );

    let maze = LayeredMaze::from_config(&config)?;

    println!(
        "Generated maze: {} columns, {} rows, {} layers",
        config.columns, config.rows, config.layers
    );
    println!("Occupied cells: {}", maze.volume().count_occupied());
    let sources: Vec<String> = maze.source_points().iter().map(Cell::to_string).collect();
    println!("Sources: {}", sources.join(" "));

    let reachable = maze.reachable_sources()?;
    if reachable.is_empty() {
        warn!("No source has a straight corridor through every layer");
    }
    println!("Sources with a full corridor: {}", reachable.len());

    if let Some(output) = &args.output {
        grid::save_volume(output, maze.volume())?;
        println!("Saved: {}", output.display());
    }

    if args.show {
        println!();
        print!("{}", TextRenderer::new().render(maze.volume()));
    }

    Ok(())
}

/// Print every layer of a saved maze.
pub fn show(path: &Path, side_by_side: bool) -> Result<()> {
    info!("Showing maze: {}", path.display());

    let volume = grid::load_volume(path)?;
    let renderer = if side_by_side {
        TextRenderer::new().side_by_side()
    } else {
        TextRenderer::new()
    };
    print!("{}", renderer.render(&volume));

    Ok(())
}

/// Report whether a straight corridor runs below a source.
pub fn reach(path: &Path, column: usize, row: usize) -> Result<()> {
    let volume = grid::load_volume(path)?;
    let source = Cell::new(column, row);
    info!("Checking corridor from {} in {}", source, path.display());

    if analysis::is_reachable(&volume, source)? {
        println!("Corridor found from {} through all {} layers", source, volume.layers());
    } else {
        println!("No straight corridor from {}", source);
    }

    Ok(())
}

/// Collapse a saved maze along an axis.
pub fn collapse(path: &Path, axis: Axis, json: bool) -> Result<()> {
    info!("Collapsing {} along {}", path.display(), axis);

    let volume = grid::load_volume(path)?;
    let collapsed = analysis::collapse(&volume, axis)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&collapsed.to_nested())?);
    } else {
        print!("{}", format_table(&collapsed));
    }

    Ok(())
}

/// Print every accessible point of a saved maze as JSON `[column, row, layer]` triples.
pub fn points(path: &Path) -> Result<()> {
    let volume = grid::load_volume(path)?;
    let points = volume.occupied();
    info!("{} accessible points in {}", points.len(), path.display());

    println!("{}", points_json(&points)?);

    Ok(())
}

fn points_json(points: &[Point]) -> Result<String> {
    let triples: Vec<[usize; 3]> = points.iter().map(Point::to_array).collect();
    Ok(serde_json::to_string(&triples)?)
}

/// One line per second index, values separated by spaces.
fn format_table(plane: &Plane<u32>) -> String {
    let (width, height) = plane.shape();
    let mut out = String::new();
    for j in 0..height {
        let line: Vec<String> = (0..width)
            .map(|i| plane.get(i, j).unwrap_or(0).to_string())
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridVolume;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_config_overrides() {
        let args = GenerateArgs {
            layers: Some(6),
            seed: Some(3),
            ..GenerateArgs::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.layers, 6);
        assert_eq!(config.columns, 5);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_resolve_config_file_then_flags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        MazeConfig::new(8, 8, 4, 2).with_seed(1).save(&path).unwrap();

        let args = GenerateArgs {
            config: Some(path),
            rows: Some(3),
            ..GenerateArgs::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!((config.columns, config.rows, config.layers), (8, 3, 4));
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn test_resolve_config_rejects_zero_paths() {
        let args = GenerateArgs {
            paths: Some(0),
            ..GenerateArgs::default()
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_generate_writes_dump() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("maze.lmz");
        let args = GenerateArgs {
            seed: Some(10),
            output: Some(output.clone()),
            ..GenerateArgs::default()
        };

        generate(&args).unwrap();

        let volume = grid::load_volume(&output).unwrap();
        assert_eq!(volume.shape(), (5, 5, 3));
        reach(&output, 0, 0).unwrap();
        points(&output).unwrap();
        collapse(&output, Axis::Layer, true).unwrap();
    }

    #[test]
    fn test_points_json_is_triples() {
        let points = [Point::new(0, 2, 1), Point::new(3, 1, 0)];
        assert_eq!(points_json(&points).unwrap(), "[[0,2,1],[3,1,0]]");
    }

    #[test]
    fn test_format_table() {
        let volume =
            GridVolume::from_points(2, 2, 2, [Point::new(1, 0, 0), Point::new(1, 0, 1)]).unwrap();
        let collapsed = analysis::collapse(&volume, Axis::Layer).unwrap();
        assert_eq!(format_table(&collapsed), "0 1\n0 0\n");
    }
}
