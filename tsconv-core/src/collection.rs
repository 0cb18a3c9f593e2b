// ============================================================================
// tsconv-core/src/collection.rs
// ============================================================================
//
// TIMESTAMP COLLECTION: Ordered Markers with a Name-Group Index
//
// The collection keeps two views over the same markers:
// - the sequence, in caller-controlled order, used for display and output
// - the name groups, one bucket per distinct name, each sorted by time
//
// Both views reference records in a single arena by stable id, and every
// mutation goes through this type so the views cannot drift apart.
//
// INVARIANTS:
// - every id in the sequence appears in exactly one bucket, the one keyed by
//   the marker's current name
// - no bucket is ever empty
// - buckets are sorted by time ascending (ties keep insertion order)
//
// AI-ASSISTANT-INFO: Marker collection with consistent dual indexing

use crate::error::{CoreError, CoreResult};
use crate::timestamp::{MarkerColor, Timestamp};
use log::debug;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MarkerId(usize);

/// Ordered set of markers with a name-keyed grouping index.
#[derive(Debug, Clone, Default)]
pub struct TimestampCollection {
    slots: Vec<Option<Timestamp>>,
    sequence: Vec<MarkerId>,
    groups: HashMap<String, Vec<MarkerId>>,
    // Group names in first-seen order.
    group_order: Vec<String>,
}

impl TimestampCollection {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns the marker at `index` in sequence order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Timestamp> {
        self.sequence.get(index).and_then(|id| self.marker(*id))
    }

    /// Iterates markers in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &Timestamp> + '_ {
        self.sequence.iter().filter_map(|id| self.marker(*id))
    }

    /// Appends a marker at the end of the sequence and returns its index.
    pub fn push(&mut self, timestamp: Timestamp) -> usize {
        let id = self.alloc(timestamp);
        self.sequence.push(id);
        self.attach(id);
        self.sequence.len() - 1
    }

    /// Inserts a marker at `index`, shifting later markers back.
    pub fn insert(&mut self, index: usize, timestamp: Timestamp) -> CoreResult<()> {
        if index > self.sequence.len() {
            return Err(CoreError::Validation(format!(
                "Insert position {} is past the end of {} timestamps",
                index,
                self.sequence.len()
            )));
        }
        let id = self.alloc(timestamp);
        self.sequence.insert(index, id);
        self.attach(id);
        Ok(())
    }

    /// Removes and returns the marker at `index`.
    pub fn remove(&mut self, index: usize) -> CoreResult<Timestamp> {
        self.check_index(index)?;
        let id = self.sequence.remove(index);
        self.detach(id);
        self.slots[id.0]
            .take()
            .ok_or_else(|| CoreError::OperationFailed(format!("Marker slot {} is vacant", id.0)))
    }

    /// Renames the marker at `index`, moving it to its new name group while
    /// keeping its position in the sequence.
    pub fn rename(&mut self, index: usize, new_name: impl Into<String>) -> CoreResult<()> {
        let id = self.id_at(index)?;
        let new_name = new_name.into();
        if self.marker(id).is_some_and(|t| t.name == new_name) {
            return Ok(());
        }

        self.detach(id);
        if let Some(marker) = self.slots[id.0].as_mut() {
            debug!("Renaming timestamp {} from '{}' to '{}'", index + 1, marker.name, new_name);
            marker.name = new_name;
        }
        self.attach(id);
        Ok(())
    }

    /// Sets the color of the marker at `index`.
    pub fn set_color(&mut self, index: usize, color: MarkerColor) -> CoreResult<()> {
        let id = self.id_at(index)?;
        if let Some(marker) = self.slots[id.0].as_mut() {
            marker.color = color;
        }
        Ok(())
    }

    /// Sets the color of every marker named `group`. Returns how many markers
    /// were updated.
    pub fn set_group_color(&mut self, group: &str, color: MarkerColor) -> CoreResult<usize> {
        let ids = self
            .groups
            .get(group)
            .ok_or_else(|| CoreError::Validation(format!("Unknown name group '{}'", group)))?;
        for id in ids {
            if let Some(marker) = self.slots[id.0].as_mut() {
                marker.color = color;
            }
        }
        debug!("Set color {} on {} timestamps named '{}'", color, ids.len(), group);
        Ok(ids.len())
    }

    /// Moves every marker by `delta_seconds`. Fails without changing anything
    /// when a marker would end up before zero.
    pub fn shift_all(&mut self, delta_seconds: i64) -> CoreResult<()> {
        for id in &self.sequence {
            if let Some(marker) = self.marker(*id) {
                if marker.time_seconds.checked_add_signed(delta_seconds).is_none() {
                    return Err(CoreError::Validation(format!(
                        "Shifting by {} seconds would move '{}' ({} s) out of range",
                        delta_seconds, marker.name, marker.time_seconds
                    )));
                }
            }
        }

        // A uniform shift keeps every bucket sorted.
        for marker in self.slots.iter_mut().flatten() {
            if let Some(shifted) = marker.time_seconds.checked_add_signed(delta_seconds) {
                marker.time_seconds = shifted;
            }
        }
        Ok(())
    }

    /// Number of distinct marker names.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.group_order.len()
    }

    /// Distinct marker names in the order they were first seen.
    pub fn group_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.group_order.iter().map(String::as_str)
    }

    /// Markers named `name`, sorted by time.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<Vec<&Timestamp>> {
        self.groups
            .get(name)
            .map(|ids| ids.iter().filter_map(|id| self.marker(*id)).collect())
    }

    fn marker(&self, id: MarkerId) -> Option<&Timestamp> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn alloc(&mut self, timestamp: Timestamp) -> MarkerId {
        self.slots.push(Some(timestamp));
        MarkerId(self.slots.len() - 1)
    }

    fn check_index(&self, index: usize) -> CoreResult<()> {
        if index < self.sequence.len() {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "Timestamp index {} is out of range (1-{})",
                index + 1,
                self.sequence.len()
            )))
        }
    }

    fn id_at(&self, index: usize) -> CoreResult<MarkerId> {
        self.check_index(index)?;
        Ok(self.sequence[index])
    }

    fn attach(&mut self, id: MarkerId) {
        let Some((name, time)) = self.marker(id).map(|t| (t.name.clone(), t.time_seconds)) else {
            return;
        };
        let slots = &self.slots;
        let group_order = &mut self.group_order;
        let bucket = self.groups.entry(name).or_insert_with_key(|key| {
            group_order.push(key.clone());
            Vec::new()
        });
        let position = bucket.partition_point(|other| {
            slots[other.0].as_ref().map_or(0, |t| t.time_seconds) <= time
        });
        bucket.insert(position, id);
    }

    fn detach(&mut self, id: MarkerId) {
        let Some(name) = self.marker(id).map(|t| t.name.clone()) else {
            return;
        };
        let now_empty = match self.groups.get_mut(&name) {
            Some(bucket) => {
                bucket.retain(|other| *other != id);
                bucket.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.groups.remove(&name);
            self.group_order.retain(|n| *n != name);
        }
    }
}

impl FromIterator<Timestamp> for TimestampCollection {
    fn from_iter<I: IntoIterator<Item = Timestamp>>(iter: I) -> Self {
        let mut collection = TimestampCollection::new();
        for timestamp in iter {
            collection.push(timestamp);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(c: &TimestampCollection) {
        let mut seen = 0;
        for name in c.group_names() {
            let group = c.group(name).expect("listed group exists");
            assert!(!group.is_empty(), "group '{}' is empty", name);
            assert!(group.iter().all(|t| t.name == name));
            assert!(group.windows(2).all(|w| w[0].time_seconds <= w[1].time_seconds));
            seen += group.len();
        }
        assert_eq!(seen, c.len());
        assert_eq!(c.group_count(), c.groups.len());
    }

    fn sample() -> TimestampCollection {
        [
            Timestamp::new("Goal", 300),
            Timestamp::new("Save", 120),
            Timestamp::new("Goal", 60),
            Timestamp::new("Foul", 400),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_push_keeps_sequence_order_and_sorted_groups() {
        let c = sample();
        let names: Vec<_> = c.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Goal", "Save", "Goal", "Foul"]);

        let goals: Vec<_> = c.group("Goal").unwrap().iter().map(|t| t.time_seconds).collect();
        assert_eq!(goals, [60, 300]);
        assert_eq!(c.group_names().collect::<Vec<_>>(), ["Goal", "Save", "Foul"]);
        assert_consistent(&c);
    }

    #[test]
    fn test_insert_at_position() {
        let mut c = sample();
        c.insert(1, Timestamp::new("Intro", 0)).unwrap();
        assert_eq!(c.get(1).unwrap().name, "Intro");
        assert_eq!(c.len(), 5);
        c.insert(5, Timestamp::new("Outro", 999)).unwrap();
        assert_eq!(c.get(5).unwrap().name, "Outro");
        assert!(matches!(
            c.insert(7, Timestamp::new("x", 1)),
            Err(CoreError::Validation(_))
        ));
        assert_consistent(&c);
    }

    #[test]
    fn test_rename_moves_group_and_keeps_position() {
        let mut c = TimestampCollection::new();
        c.push(Timestamp::new("A", 10));
        c.push(Timestamp::new("X", 20));
        c.push(Timestamp::new("B", 30));

        c.rename(1, "Y").unwrap();

        assert_eq!(c.get(1).unwrap().name, "Y");
        assert_eq!(c.get(1).unwrap().time_seconds, 20);
        assert!(c.group("X").is_none());
        assert_eq!(c.group("Y").unwrap().len(), 1);
        assert_consistent(&c);
    }

    #[test]
    fn test_rename_into_existing_group_sorts_by_time() {
        let mut c = sample();
        c.rename(3, "Goal").unwrap();
        let goals: Vec<_> = c.group("Goal").unwrap().iter().map(|t| t.time_seconds).collect();
        assert_eq!(goals, [60, 300, 400]);
        assert!(c.group("Foul").is_none());
        assert_consistent(&c);
    }

    #[test]
    fn test_remove_last_in_group_drops_group() {
        let mut c = sample();
        let removed = c.remove(1).unwrap();
        assert_eq!(removed.name, "Save");
        assert!(c.group("Save").is_none());
        assert_eq!(c.group_names().collect::<Vec<_>>(), ["Goal", "Foul"]);
        assert_eq!(c.len(), 3);
        assert_consistent(&c);

        c.remove(0).unwrap();
        assert_eq!(c.group("Goal").unwrap().len(), 1);
        assert_consistent(&c);
    }

    #[test]
    fn test_out_of_range_index_is_validation_error() {
        let mut c = sample();
        assert!(matches!(c.remove(4), Err(CoreError::Validation(_))));
        assert!(matches!(c.rename(10, "x"), Err(CoreError::Validation(_))));
        assert!(matches!(
            c.set_color(4, MarkerColor::Red),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn test_set_color_single_and_group() {
        let mut c = sample();
        c.set_color(1, MarkerColor::Green).unwrap();
        assert_eq!(c.get(1).unwrap().color, MarkerColor::Green);

        assert_eq!(c.set_group_color("Goal", MarkerColor::Red).unwrap(), 2);
        assert_eq!(c.get(0).unwrap().color, MarkerColor::Red);
        assert_eq!(c.get(2).unwrap().color, MarkerColor::Red);
        assert_eq!(c.get(3).unwrap().color, MarkerColor::Blue);

        assert!(matches!(
            c.set_group_color("Nope", MarkerColor::Red),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_shift_all_forward_and_back() {
        let mut c = sample();
        c.shift_all(100).unwrap();
        let times: Vec<_> = c.iter().map(|t| t.time_seconds).collect();
        assert_eq!(times, [400, 220, 160, 500]);
        assert_consistent(&c);

        c.shift_all(-160).unwrap();
        let times: Vec<_> = c.iter().map(|t| t.time_seconds).collect();
        assert_eq!(times, [240, 60, 0, 340]);
        assert_consistent(&c);
    }

    #[test]
    fn test_shift_below_zero_changes_nothing() {
        let mut c = sample();
        assert!(matches!(c.shift_all(-61), Err(CoreError::Validation(_))));
        let times: Vec<_> = c.iter().map(|t| t.time_seconds).collect();
        assert_eq!(times, [300, 120, 60, 400]);
    }

    #[test]
    fn test_group_reappears_at_end_after_removal() {
        let mut c = sample();
        c.remove(1).unwrap();
        c.push(Timestamp::new("Save", 10));
        assert_eq!(c.group_names().collect::<Vec<_>>(), ["Goal", "Foul", "Save"]);
        assert_consistent(&c);
    }
}
