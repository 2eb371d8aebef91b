use scavenger_hunt_core::{ContentStore, EntryDraft, KeyValueStore, StoreConfig};
use scavenger_hunt_yew::{BrowserStorage, LocalStorage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn isolated_config(prefix: &str) -> StoreConfig {
    StoreConfig::default().with_key_prefix(prefix)
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let mut storage = LocalStorage::new().unwrap();

    storage.set("hunt-test-key", "value").unwrap();
    assert_eq!(
        storage.get("hunt-test-key").unwrap().as_deref(),
        Some("value")
    );

    storage.remove("hunt-test-key").unwrap();
    assert_eq!(storage.get("hunt-test-key").unwrap(), None);
}

#[wasm_bindgen_test]
fn detect_prefers_local_storage() {
    assert!(BrowserStorage::detect().is_persistent());
}

#[wasm_bindgen_test]
fn store_survives_a_reload() {
    let config = isolated_config("reload-test");

    let mut store = ContentStore::builder(LocalStorage::new().unwrap())
        .config(config.clone())
        .build();
    let id = store
        .add_leaderboard_entry(EntryDraft::parse("Browser Team", "42"))
        .id;

    let reopened = ContentStore::builder(LocalStorage::new().unwrap())
        .config(config.clone())
        .build();
    let entry = reopened.leaderboard_entry(id).unwrap();
    assert_eq!(entry.name, "Browser Team");
    assert_eq!(entry.score, 42);

    let mut storage = reopened.into_storage();
    storage.remove(&config.posts_key).unwrap();
    storage.remove(&config.leaderboard_key).unwrap();
}
