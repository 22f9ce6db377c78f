use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::{Booking, Profile, RecordId};
use std::collections::HashSet;
use thiserror::Error;

use super::traits::KeyValueStore;

/// One of the two persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Bookings,
    Profiles,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Bookings, Slot::Profiles];

    pub fn name(self) -> &'static str {
        match self {
            Slot::Bookings => "bookings",
            Slot::Profiles => "profiles",
        }
    }

    /// Fixed key in origin-scoped storage
    pub fn storage_key(self) -> &'static str {
        match self {
            Slot::Bookings => "nexus_vault_data",
            Slot::Profiles => "nexus_patient_data",
        }
    }
}

/// A record type that lives in exactly one slot
pub trait Record: Serialize + DeserializeOwned + Clone {
    const SLOT: Slot;

    fn id(&self) -> RecordId;
}

impl Record for Booking {
    const SLOT: Slot = Slot::Bookings;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Profile {
    const SLOT: Slot = Slot::Profiles;

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{slot} slot holds malformed data: {source}")]
    Corrupt {
        slot: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{slot} slot holds a JSON {found} instead of a list")]
    NotAList { slot: &'static str, found: &'static str },
    #[error("failed to serialize {slot}: {source}")]
    Serialize {
        slot: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    /// Stored text can't be trusted; the recovery policy wipes every slot
    pub fn is_corruption(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. } | StoreError::NotAList { .. })
    }
}

/// Both collections as read at page-ready time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub bookings: Vec<Booking>,
    pub profiles: Vec<Profile>,
}

/// Typed facade over a [`KeyValueStore`] holding the bookings and profiles slots
#[derive(Debug)]
pub struct RecordStore<S> {
    backend: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load one collection, never failing.
    ///
    /// Malformed stored text in this slot wipes both slots and yields an
    /// empty collection. A read failure of the substrate yields an empty
    /// collection but leaves storage alone.
    pub fn load<R: Record>(&self) -> Vec<R> {
        let result = self.try_load::<R>();
        if matches!(&result, Err(e) if e.is_corruption()) {
            self.reset_after(result.err());
            return Vec::new();
        }
        self.or_empty(R::SLOT, result)
    }

    /// Load both collections; corruption in either empties both
    pub fn load_snapshot(&self) -> Snapshot {
        let bookings = self.try_load::<Booking>();
        let profiles = self.try_load::<Profile>();

        if let Some(e) = [bookings.as_ref().err(), profiles.as_ref().err()]
            .into_iter()
            .flatten()
            .find(|e| e.is_corruption())
        {
            warn!("{}", e);
            self.clear_all();
            return Snapshot::default();
        }

        let snapshot = Snapshot {
            bookings: self.or_empty(Slot::Bookings, bookings),
            profiles: self.or_empty(Slot::Profiles, profiles),
        };
        info!(
            "Loaded {} bookings and {} profiles",
            snapshot.bookings.len(),
            snapshot.profiles.len()
        );
        snapshot
    }

    /// Load one collection, reporting what went wrong.
    ///
    /// Entries that parse as JSON but not as `R`, and entries repeating an
    /// earlier id, are dropped with a warning rather than failing the slot.
    pub fn try_load<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        let slot = R::SLOT;
        let Some(text) = self.backend.get(slot.storage_key())? else {
            return Ok(Vec::new());
        };

        let value: Value = serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            slot: slot.name(),
            source,
        })?;

        let entries = match value {
            Value::Array(entries) => entries,
            other => {
                return Err(StoreError::NotAList {
                    slot: slot.name(),
                    found: json_kind(&other),
                })
            }
        };

        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<R>(entry) {
                Ok(record) if seen.insert(record.id()) => records.push(record),
                Ok(record) => warn!("Dropping duplicate {} id {}", slot.name(), record.id()),
                Err(e) => warn!("Dropping malformed {} entry at index {}: {}", slot.name(), index, e),
            }
        }

        Ok(records)
    }

    /// Replace the stored collection with `records`
    pub fn save<R: Record>(&self, records: &[R]) -> Result<(), StoreError> {
        let slot = R::SLOT;
        let text = serde_json::to_string(records).map_err(|source| StoreError::Serialize {
            slot: slot.name(),
            source,
        })?;
        self.backend.set(slot.storage_key(), &text)?;
        debug!("Saved {} {}", records.len(), slot.name());
        Ok(())
    }

    /// Remove both slots
    pub fn clear_all(&self) {
        for slot in Slot::ALL {
            if let Err(e) = self.backend.remove(slot.storage_key()) {
                warn!("Failed to clear {} slot: {}", slot.name(), e);
            }
        }
    }

    fn reset_after(&self, error: Option<StoreError>) {
        if let Some(e) = error {
            warn!("{}; resetting all local records", e);
        }
        self.clear_all();
    }

    fn or_empty<R>(&self, slot: Slot, result: Result<Vec<R>, StoreError>) -> Vec<R> {
        result.unwrap_or_else(|e| {
            warn!("Failed to read {} slot: {}", slot.name(), e);
            Vec::new()
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use anyhow::anyhow;
    use shared::ProfileDetails;

    fn booking(id: u64, service: &str) -> Booking {
        Booking {
            id: RecordId(id),
            service: service.to_string(),
            price: "$95".to_string(),
            date: "Nov 3".to_string(),
            time: "Morning".to_string(),
        }
    }

    fn patient(id: u64, name: &str) -> Profile {
        Profile {
            id: RecordId(id),
            name: name.to_string(),
            details: ProfileDetails::Patient { concern: "Whitening".to_string() },
            notes: String::new(),
        }
    }

    #[test]
    fn test_absent_slot_loads_empty() {
        let store = RecordStore::new(MemoryStore::new());
        assert!(store.load::<Booking>().is_empty());
        assert!(store.load::<Profile>().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = RecordStore::new(MemoryStore::new());
        let bookings = vec![booking(2, "Full Grooming"), booking(1, "Nail Trim")];

        store.save(&bookings).unwrap();
        assert_eq!(store.load::<Booking>(), bookings);

        store.save::<Booking>(&[]).unwrap();
        assert!(store.load::<Booking>().is_empty());
        assert_eq!(store.backend().raw("nexus_vault_data"), Some("[]".to_string()));
    }

    #[test]
    fn test_slots_are_independent() {
        let store = RecordStore::new(MemoryStore::new());
        store.save(&[booking(1, "Full Grooming")]).unwrap();
        store.save(&[patient(5, "Jane Doe")]).unwrap();

        assert_eq!(store.load::<Booking>().len(), 1);
        assert_eq!(store.load::<Profile>()[0].name, "Jane Doe");
    }

    #[test]
    fn test_malformed_slot_clears_both_slots() {
        let store = RecordStore::new(MemoryStore::with_entries([
            ("nexus_vault_data", "{not json"),
            (
                "nexus_patient_data",
                r#"[{"id":1,"name":"Jane Doe","concern":"Veneers","notes":""}]"#,
            ),
        ]));

        assert!(store.load::<Booking>().is_empty());
        assert!(store.load::<Profile>().is_empty());
        assert!(!store.backend().contains_key("nexus_vault_data"));
        assert!(!store.backend().contains_key("nexus_patient_data"));

        // The reset was persisted, not just reported once
        assert!(store.load::<Booking>().is_empty());
        assert!(store.load::<Profile>().is_empty());
    }

    #[test]
    fn test_non_list_json_counts_as_corruption() {
        let store = RecordStore::new(MemoryStore::with_entries([
            ("nexus_patient_data", r#"{"id":1}"#),
            ("nexus_vault_data", "[]"),
        ]));

        let err = store.try_load::<Profile>().unwrap_err();
        assert!(err.is_corruption());
        assert!(err.to_string().contains("object"));

        assert!(store.load::<Profile>().is_empty());
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_snapshot_corruption_in_second_slot_empties_first() {
        let store = RecordStore::new(MemoryStore::new());
        store.save(&[booking(1, "Full Grooming")]).unwrap();
        store.backend().set("nexus_patient_data", "undefined").unwrap();

        let snapshot = store.load_snapshot();
        assert_eq!(snapshot, Snapshot::default());
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_snapshot_loads_both() {
        let store = RecordStore::new(MemoryStore::new());
        store.save(&[booking(1, "Full Grooming")]).unwrap();
        store.save(&[patient(2, "Jane Doe")]).unwrap();

        let snapshot = store.load_snapshot();
        assert_eq!(snapshot.bookings.len(), 1);
        assert_eq!(snapshot.profiles.len(), 1);
    }

    #[test]
    fn test_malformed_entries_are_dropped_not_fatal() {
        let store = RecordStore::new(MemoryStore::with_entries([(
            "nexus_vault_data",
            r#"[
                {"id":3,"service":"Full Grooming","price":"$95","date":"Nov 3","time":"09:00"},
                {"id":"oops","service":"Nail Trim"},
                42,
                {"id":1,"service":"Bath & Brush","price":"$55","date":"Nov 4","time":"12:00"}
            ]"#,
        )]));

        let bookings = store.load::<Booking>();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].service, "Full Grooming");
        assert_eq!(bookings[1].service, "Bath & Brush");
        assert!(store.backend().contains_key("nexus_vault_data"));
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let store = RecordStore::new(MemoryStore::new());
        store.save(&[booking(1, "Full Grooming"), booking(1, "Nail Trim")]).unwrap();

        let bookings = store.load::<Booking>();
        assert_eq!(bookings, vec![booking(1, "Full Grooming")]);
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Err(anyhow!("storage disabled"))
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow!("quota exceeded"))
        }

        fn remove(&self, _key: &str) -> anyhow::Result<()> {
            Err(anyhow!("storage disabled"))
        }
    }

    #[test]
    fn test_backend_failures() {
        let store = RecordStore::new(BrokenStore);
        assert!(store.load::<Booking>().is_empty());
        assert_eq!(store.load_snapshot(), Snapshot::default());

        let err = store.save(&[booking(1, "Full Grooming")]).unwrap_err();
        assert!(matches!(err, StoreError::Backend(_)));
        assert!(!err.is_corruption());
    }
}
