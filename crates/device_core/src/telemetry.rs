//! Telemetry: the moisture history consumed by the chart and the latest
//! snapshot consumed by the readings panel. Observers only ever receive
//! copies; nothing here mutates device state.

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;

use crate::device::{Mode, PumpState};

/// One point on the moisture timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPoint {
    pub timestamp_secs: u64,
    pub moisture: u8,
}

/// Append-only moisture timeline with strictly increasing timestamps.
/// With `max_points` set the buffer becomes a front-evicting ring; by default
/// it grows for the lifetime of the run.
#[derive(Debug, Default, Resource)]
pub struct MoistureHistory {
    pub points: VecDeque<HistoryPoint>,
    pub max_points: Option<usize>,
}

impl MoistureHistory {
    pub fn with_capacity_limit(max_points: Option<usize>) -> Self {
        Self {
            points: VecDeque::new(),
            max_points,
        }
    }

    pub fn push(&mut self, point: HistoryPoint) {
        debug_assert!(
            self.points
                .back()
                .map(|last| point.timestamp_secs > last.timestamp_secs)
                .unwrap_or(true),
            "history timestamps must strictly increase"
        );
        self.points.push_back(point);
        if let Some(max) = self.max_points {
            while self.points.len() > max.max(1) {
                self.points.pop_front();
            }
        }
    }

    pub fn latest(&self) -> Option<HistoryPoint> {
        self.points.back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Full device reading at a point in time, published after every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceSnapshot {
    pub timestamp_secs: u64,
    pub moisture: u8,
    pub pump: PumpState,
    pub mode: Mode,
}

/// Holds the most recent snapshot for display observers.
#[derive(Debug, Default, Resource)]
pub struct DeviceSnapshots {
    pub latest: Option<DeviceSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_history_keeps_every_point() {
        let mut history = MoistureHistory::default();
        for i in 0..50 {
            history.push(HistoryPoint {
                timestamp_secs: i * 10,
                moisture: 50,
            });
        }
        assert_eq!(history.len(), 50);
    }

    #[test]
    fn capped_history_evicts_oldest_points() {
        let mut history = MoistureHistory::with_capacity_limit(Some(3));
        for i in 1..=5u64 {
            history.push(HistoryPoint {
                timestamp_secs: i * 10,
                moisture: i as u8,
            });
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.points.front().map(|p| p.timestamp_secs), Some(30));
        assert_eq!(history.latest().map(|p| p.timestamp_secs), Some(50));
    }
}
