use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Draft {
    name: String,
}

#[test]
fn json_values_survive_save_and_load() {
    let store = MemoryStore::default();
    save_json(&store, "draft", &Draft { name: "Spring".into() });
    assert_eq!(load_json::<Draft>(&store, "draft"), Some(Draft { name: "Spring".into() }));
}

#[test]
fn malformed_json_reads_as_absent() {
    let store = MemoryStore::with(&[("draft", "{not json")]);
    assert_eq!(load_json::<Draft>(&store, "draft"), None);
}

#[test]
fn clear_drops_every_key() {
    let store = MemoryStore::with(&[("a", "1"), ("b", "2")]);
    store.clear();
    assert_eq!(store.len(), 0);
}

#[test]
fn browser_storage_is_empty_outside_the_browser() {
    assert_eq!(BrowserStorage.get_item("access_token"), None);
}
