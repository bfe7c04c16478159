//! Generation events
//!
//! Structured narration of a generation run. Observers receive each event as
//! it happens; the default observer discards them.

use serde::{Deserialize, Serialize};

use crate::grid::{Axis, Cell};

/// Direction of a run along the layer's movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward index 0
    Negative,
    /// No run; the anchor is registered again
    Stay,
    /// Toward the far edge
    Positive,
}

impl Direction {
    /// Map a uniform draw from `0..3` onto a direction
    pub(crate) fn from_draw(draw: u32) -> Self {
        match draw {
            0 => Direction::Negative,
            1 => Direction::Stay,
            _ => Direction::Positive,
        }
    }
}

/// One step of a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GenerationEvent {
    /// A path attempt's starting cell was placed on layer 0
    StartSeeded { path: usize, cell: Cell },
    /// A path attempt picked its anchor on `layer` from the layer above
    AnchorChosen { path: usize, layer: usize, cell: Cell },
    /// A run direction and length were drawn (length is 0 for `Stay`)
    DirectionDrawn {
        path: usize,
        layer: usize,
        axis: Axis,
        direction: Direction,
        length: usize,
    },
    /// A run cell was appended to a layer's registry, or the anchor was
    /// registered a second time on `Stay`
    CellRegistered { path: usize, layer: usize, cell: Cell },
    /// A path attempt reached the last layer
    PathCompleted { path: usize },
}

/// Receiver for generation events
pub trait GenerationObserver {
    fn on_event(&mut self, event: &GenerationEvent);
}

impl<F: FnMut(&GenerationEvent)> GenerationObserver for F {
    fn on_event(&mut self, event: &GenerationEvent) {
        self(event)
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_event(&mut self, _event: &GenerationEvent) {}
}

/// Observer that keeps every event in order
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Vec<GenerationEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GenerationEvent] {
        &self.events
    }

    /// Anchors chosen by one path attempt, as `(layer, cell)` pairs
    pub fn anchors(&self, path: usize) -> Vec<(usize, Cell)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GenerationEvent::AnchorChosen {
                    path: p,
                    layer,
                    cell,
                } if *p == path => Some((*layer, *cell)),
                _ => None,
            })
            .collect()
    }

    /// Cells registered by one attempt on one layer, anchor first
    pub fn run_cells(&self, path: usize, layer: usize) -> Vec<Cell> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GenerationEvent::AnchorChosen {
                    path: p,
                    layer: l,
                    cell,
                }
                | GenerationEvent::CellRegistered {
                    path: p,
                    layer: l,
                    cell,
                } if *p == path && *l == layer => Some(*cell),
                _ => None,
            })
            .collect()
    }

    /// Direction drawn by one attempt on one layer
    pub fn direction(&self, path: usize, layer: usize) -> Option<Direction> {
        self.events.iter().find_map(|event| match event {
            GenerationEvent::DirectionDrawn {
                path: p,
                layer: l,
                direction,
                ..
            } if *p == path && *l == layer => Some(*direction),
            _ => None,
        })
    }
}

impl GenerationObserver for EventRecorder {
    fn on_event(&mut self, event: &GenerationEvent) {
        self.events.push(event.clone());
    }
}
