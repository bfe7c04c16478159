//! Generation Property Tests
//!
//! Structural guarantees of generated mazes over a spread of seeds and shapes.

use layermaze::generate::{movement_axis, Direction, EventRecorder, PathGenerator};
use layermaze::grid::{Axis, Point};
use test_case::test_case;

const SEEDS: [u64; 8] = [0, 1, 2, 3, 17, 99, 1234, 987_654];

// === Shape & Registry ===

#[test_case(5, 5, 3, 1 ; "small cube")]
#[test_case(10, 4, 7, 3 ; "wide and deep")]
#[test_case(1, 1, 4, 1 ; "single column")]
#[test_case(3, 8, 2, 5 ; "tall two layers")]
fn test_shape_and_registry(columns: usize, rows: usize, layers: usize, num_paths: usize) {
    for seed in SEEDS {
        let (volume, registry) = PathGenerator::seeded(seed)
            .generate(columns, rows, layers, num_paths)
            .unwrap();

        assert_eq!(volume.shape(), (columns, rows, layers));
        assert_eq!(registry.cells(0).unwrap().len(), num_paths);

        for (layer, cells) in registry.iter() {
            assert!(!cells.is_empty(), "seed {} layer {} is empty", seed, layer);
            for cell in cells {
                assert!(volume.is_open(Point::new(cell.column, cell.row, layer)));
            }
        }
    }
}

// === Overlap ===

#[test]
fn test_anchor_comes_from_layer_above() {
    for seed in SEEDS {
        let mut recorder = EventRecorder::new();
        let (_, registry) = PathGenerator::seeded(seed)
            .generate_observed(7, 6, 6, 3, &mut recorder)
            .unwrap();

        for path in 0..3 {
            let anchors = recorder.anchors(path);
            assert_eq!(anchors.len(), 5);
            for (layer, cell) in anchors {
                assert!(
                    registry.contains(layer - 1, cell),
                    "seed {} path {} anchor {} on layer {} not registered above",
                    seed,
                    path,
                    cell,
                    layer
                );
            }
        }
    }
}

#[test]
fn test_every_layer_overlaps_the_one_above() {
    for seed in SEEDS {
        let (volume, _) = PathGenerator::seeded(seed).generate(6, 6, 8, 2).unwrap();
        for layer in 1..volume.layers() {
            let overlap = volume
                .layer(layer)
                .unwrap()
                .and(&volume.layer(layer - 1).unwrap())
                .unwrap();
            assert!(overlap.any(), "seed {} layer {} has no overlap", seed, layer);
        }
    }
}

// === Movement Axis ===

#[test]
fn test_runs_follow_layer_axis() {
    for seed in SEEDS {
        let mut recorder = EventRecorder::new();
        PathGenerator::seeded(seed)
            .generate_observed(9, 9, 7, 4, &mut recorder)
            .unwrap();

        for path in 0..4 {
            for layer in 1..7 {
                let cells = recorder.run_cells(path, layer);
                let anchor = cells[0];
                for cell in &cells {
                    match movement_axis(layer) {
                        Axis::Row => assert_eq!(cell.column, anchor.column),
                        _ => assert_eq!(cell.row, anchor.row),
                    }
                }
            }
        }
    }
}

#[test]
fn test_runs_are_contiguous_from_anchor() {
    for seed in SEEDS {
        let mut recorder = EventRecorder::new();
        PathGenerator::seeded(seed)
            .generate_observed(8, 8, 5, 2, &mut recorder)
            .unwrap();

        for path in 0..2 {
            for layer in 1..5 {
                let cells = recorder.run_cells(path, layer);
                if recorder.direction(path, layer) == Some(Direction::Stay) {
                    continue;
                }
                let axis = movement_axis(layer);
                let anchor = cells[0].along(axis).unwrap();
                for (offset, cell) in cells.iter().enumerate() {
                    assert_eq!(anchor.abs_diff(cell.along(axis).unwrap()), offset);
                }
            }
        }
    }
}

// === Determinism ===

#[test]
fn test_generator_sequence_is_reproducible() {
    let mut a = PathGenerator::seeded(55);
    let mut b = PathGenerator::seeded(55);
    for _ in 0..3 {
        assert_eq!(
            a.generate(6, 5, 4, 2).unwrap(),
            b.generate(6, 5, 4, 2).unwrap()
        );
    }
}

#[test]
fn test_single_layer_has_only_seeds() {
    for seed in SEEDS {
        let (volume, registry) = PathGenerator::seeded(seed).generate(5, 5, 1, 3).unwrap();
        assert_eq!(volume.count_occupied(), 3);
        assert_eq!(registry.total_entries(), 3);
    }
}
