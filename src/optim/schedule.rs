use serde::{Deserialize, Serialize};

use crate::format::{join_numeric, real};

/// One entry of a step schedule: at iteration `step` the learning rate is
/// multiplied by `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStep {
    pub step: u64,
    pub scale: f64,
}

/// Step-decay learning rate schedule.
///
/// Keeps insertion order: `steps` and `scales` are rendered as two parallel
/// lists that must line up position by position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LrSchedule {
    entries: Vec<ScheduleStep>,
}

impl LrSchedule {
    pub fn new() -> LrSchedule {
        LrSchedule::default()
    }

    /// Sets the scale applied at `step`. Re-inserting an existing step
    /// replaces its scale in place.
    pub fn insert(&mut self, step: u64, scale: f64) {
        match self.entries.iter_mut().find(|e| e.step == step) {
            Some(entry) => entry.scale = scale,
            None => self.entries.push(ScheduleStep { step, scale }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduleStep> {
        self.entries.iter()
    }

    /// Comma-joined step list, e.g. `400000,450000`.
    pub fn steps(&self) -> String {
        join_numeric(self.entries.iter().map(|e| e.step), false)
    }

    /// Comma-joined scale list, positionally aligned with `steps()`.
    pub fn scales(&self) -> String {
        join_numeric(self.entries.iter().map(|e| real(e.scale)), false)
    }
}

impl FromIterator<(u64, f64)> for LrSchedule {
    fn from_iter<I: IntoIterator<Item = (u64, f64)>>(iter: I) -> Self {
        let mut schedule = LrSchedule::new();
        for (step, scale) in iter {
            schedule.insert(step, scale);
        }
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let schedule: LrSchedule = [(5000, 0.001), (2000, 0.01)].into_iter().collect();
        assert_eq!(schedule.steps(), "5000,2000");
        assert_eq!(schedule.scales(), "0.001,0.01");
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut schedule = LrSchedule::new();
        schedule.insert(100, 0.1);
        schedule.insert(200, 0.1);
        schedule.insert(100, 0.5);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.steps(), "100,200");
        assert_eq!(schedule.scales(), "0.5,0.1");
    }

    #[test]
    fn serializes_as_a_list() {
        let schedule: LrSchedule = [(10, 0.1)].into_iter().collect();
        let json = serde_json::to_string(&schedule).unwrap();
        assert_eq!(json, r#"[{"step":10,"scale":0.1}]"#);
    }
}
