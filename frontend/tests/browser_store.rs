use backend::storage::{KeyValueStore, RecordStore, Slot};
use portal_frontend::services::browser_store::BrowserStore;
use shared::{Booking, RecordId};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn local_store() -> BrowserStore {
    let store = BrowserStore::local().expect("localStorage available in test browser");
    for slot in Slot::ALL {
        store.remove(slot.storage_key()).unwrap();
    }
    store
}

#[wasm_bindgen_test]
fn test_bookings_survive_a_fresh_store_handle() {
    let booking = Booking {
        id: RecordId(1_762_100_000_000),
        service: "Nail Trim".to_string(),
        price: "$20".to_string(),
        date: "Nov 3".to_string(),
        time: "09:00".to_string(),
    };
    RecordStore::new(local_store()).save(&[booking.clone()]).unwrap();

    let reopened = RecordStore::new(BrowserStore::local().unwrap());
    assert_eq!(reopened.load::<Booking>(), vec![booking]);
}

#[wasm_bindgen_test]
fn test_corrupt_local_storage_is_cleared() {
    let store = local_store();
    store.set(Slot::Bookings.storage_key(), "{not json").unwrap();
    store.set(Slot::Profiles.storage_key(), "[]").unwrap();

    let records = RecordStore::new(store);
    let snapshot = records.load_snapshot();

    assert!(snapshot.bookings.is_empty());
    assert_eq!(records.backend().get(Slot::Bookings.storage_key()).unwrap(), None);
    assert_eq!(records.backend().get(Slot::Profiles.storage_key()).unwrap(), None);
}
