//! Stats sink boundary
//!
//! The external HUD is a black-box consumer that receives a small stats
//! snapshot. Consumers must tolerate repeated identical snapshots; the
//! emitter here merely keeps the boundary quiet between changes.

use crate::sim::StatsSnapshot;

/// External consumer of stats snapshots (the HUD)
pub trait StatsSink {
    fn publish(&mut self, snapshot: &StatsSnapshot);
}

/// Forwards snapshots to a sink, suppressing consecutive snapshots whose
/// HUD-visible fields are unchanged
#[derive(Debug, Default)]
pub struct HudEmitter {
    last: Option<StatsSnapshot>,
}

impl HudEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `snapshot` unless it repeats the last published HUD fields.
    /// Returns whether the sink was invoked.
    pub fn emit(&mut self, snapshot: StatsSnapshot, sink: &mut dyn StatsSink) -> bool {
        let repeat = self
            .last
            .as_ref()
            .is_some_and(|prev| prev.same_hud_fields(&snapshot));
        if repeat {
            return false;
        }
        sink.publish(&snapshot);
        self.last = Some(snapshot);
        true
    }
}

/// Sink that records everything published to it; test double for hosts
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub published: Vec<StatsSnapshot>,
}

impl StatsSink for RecordingSink {
    fn publish(&mut self, snapshot: &StatsSnapshot) {
        self.published.push(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(score: u64, time_secs: f32) -> StatsSnapshot {
        StatsSnapshot {
            score,
            coins: 0,
            lives: 3,
            time_secs,
            level: 1,
            won: false,
        }
    }

    #[test]
    fn test_first_snapshot_always_publishes() {
        let mut emitter = HudEmitter::new();
        let mut sink = RecordingSink::default();
        assert!(emitter.emit(snap(0, 0.0), &mut sink));
        assert_eq!(sink.published.len(), 1);
    }

    #[test]
    fn test_repeats_are_suppressed_time_ignored() {
        let mut emitter = HudEmitter::new();
        let mut sink = RecordingSink::default();
        emitter.emit(snap(0, 0.0), &mut sink);
        // same HUD fields, only time moved: suppressed
        assert!(!emitter.emit(snap(0, 1.5), &mut sink));
        // a score change publishes again
        assert!(emitter.emit(snap(100, 2.0), &mut sink));
        assert_eq!(sink.published.len(), 2);
        assert_eq!(sink.published[1].score, 100);
    }

    #[test]
    fn test_sink_tolerates_identical_snapshots() {
        // the trait contract: publishing the same snapshot twice is legal
        let mut sink = RecordingSink::default();
        sink.publish(&snap(0, 0.0));
        sink.publish(&snap(0, 0.0));
        assert_eq!(sink.published.len(), 2);
    }
}
