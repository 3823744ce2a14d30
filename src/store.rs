use crate::models::{Entry, LogStore, Subject};
use chrono::{DateTime, Utc};
use tracing::warn;

impl LogStore {
    pub fn log(&self, subject: Subject) -> &[Entry] {
        match subject {
            Subject::Subject1 => &self.subject1,
            Subject::Subject2 => &self.subject2,
        }
    }

    fn log_mut(&mut self, subject: Subject) -> &mut Vec<Entry> {
        match subject {
            Subject::Subject1 => &mut self.subject1,
            Subject::Subject2 => &mut self.subject2,
        }
    }

    /// Total entries across both subjects.
    pub fn len(&self) -> usize {
        self.subject1.len() + self.subject2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records `behavior` for `subject`, stamped with the current time.
    pub fn append(&mut self, subject: Subject, behavior: &str, together: bool, note: &str) -> usize {
        self.append_at(subject, behavior, together, note, Utc::now())
    }

    /// Records `behavior` at a fixed time. A joint event is written as two
    /// separate entries, one per subject. Returns how many entries were written.
    pub fn append_at(
        &mut self,
        subject: Subject,
        behavior: &str,
        together: bool,
        note: &str,
        timestamp: DateTime<Utc>,
    ) -> usize {
        let entry = Entry {
            behavior: behavior.to_string(),
            timestamp,
            together,
            note: note.to_string(),
        };

        if together {
            let partner = entry.clone();
            self.log_mut(subject).push(entry);
            self.log_mut(subject.other()).push(partner);
            2
        } else {
            self.log_mut(subject).push(entry);
            1
        }
    }

    /// Empties both logs when `confirmed`; otherwise leaves the store untouched.
    pub fn reset_all(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        *self = LogStore::default();
        true
    }

    pub fn serialize(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }

    /// Rebuilds a store from a persisted blob. Absent or unreadable input
    /// yields two empty logs.
    pub fn deserialize(blob: Option<&[u8]>) -> LogStore {
        let Some(bytes) = blob else {
            return LogStore::default();
        };

        match serde_json::from_slice(bytes) {
            Ok(store) => store,
            Err(err) => {
                warn!("discarding malformed behavior log: {err}");
                LogStore::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, hour, 30, 0).unwrap()
    }

    #[test]
    fn joint_append_writes_both_logs() {
        let mut store = LogStore::default();
        let written = store.append_at(Subject::Subject1, "Eating", true, "", at(9));

        assert_eq!(written, 2);
        let first = &store.log(Subject::Subject1)[0];
        let second = &store.log(Subject::Subject2)[0];
        assert_eq!(store.log(Subject::Subject1).len(), 1);
        assert_eq!(store.log(Subject::Subject2).len(), 1);
        assert!(first.together && second.together);
        assert_eq!(first.behavior, second.behavior);
        assert_eq!(first.timestamp, second.timestamp);
    }

    #[test]
    fn joint_entries_are_independent() {
        let mut store = LogStore::default();
        store.append_at(Subject::Subject2, "Grooming", true, "calm", at(10));

        store.subject1[0].note.push_str(" and sleepy");

        assert_eq!(store.subject1[0].note, "calm and sleepy");
        assert_eq!(store.subject2[0].note, "calm");
    }

    #[test]
    fn solo_append_leaves_partner_alone() {
        let mut store = LogStore::default();
        store.append_at(Subject::Subject2, "Sleeping", true, "", at(8));
        let before = store.log(Subject::Subject2).len();

        let written = store.append_at(Subject::Subject1, "Digging", false, "", at(9));

        assert_eq!(written, 1);
        assert_eq!(store.log(Subject::Subject2).len(), before);
        assert_eq!(store.log(Subject::Subject1).len(), 2);
        assert!(!store.log(Subject::Subject1)[1].together);
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = LogStore::default();
        for (hour, behavior) in [(7, "Eating"), (8, "Digging"), (9, "Eating")] {
            store.append_at(Subject::Subject1, behavior, false, "", at(hour));
        }
        let behaviors: Vec<_> = store
            .log(Subject::Subject1)
            .iter()
            .map(|entry| entry.behavior.as_str())
            .collect();
        assert_eq!(behaviors, ["Eating", "Digging", "Eating"]);
    }

    #[test]
    fn reset_requires_confirmation() {
        let mut store = LogStore::default();
        store.append_at(Subject::Subject1, "Eating", true, "", at(9));
        let snapshot = store.clone();

        assert!(!store.reset_all(false));
        assert_eq!(store, snapshot);

        assert!(store.reset_all(true));
        assert!(store.log(Subject::Subject1).is_empty());
        assert!(store.log(Subject::Subject2).is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn serialize_round_trip_preserves_entries() {
        let mut store = LogStore::default();
        store.append_at(Subject::Subject1, "Eating", true, "He said \"hi\"", at(9));
        store.append_at(Subject::Subject2, "Digging", false, "", at(11));

        let blob = store.serialize().unwrap();
        let restored = LogStore::deserialize(Some(blob.as_slice()));

        assert_eq!(restored, store);
    }

    #[test]
    fn deserialize_falls_back_to_default() {
        assert_eq!(LogStore::deserialize(None), LogStore::default());
        assert_eq!(LogStore::deserialize(Some(&b"{not json"[..])), LogStore::default());
        assert_eq!(
            LogStore::deserialize(Some(&br#"{"subject1": 12}"#[..])),
            LogStore::default()
        );
    }

    #[test]
    fn deserialize_fills_missing_subject() {
        let blob = br#"{"subject1":[{"behavior":"Eating","timestamp":"2026-03-14T09:30:00Z","together":false,"note":""}]}"#;
        let store = LogStore::deserialize(Some(&blob[..]));
        assert_eq!(store.log(Subject::Subject1).len(), 1);
        assert!(store.log(Subject::Subject2).is_empty());
    }
}
