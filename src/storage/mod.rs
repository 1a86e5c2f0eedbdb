use crate::models::Note;
use crate::state::NoteStore;
use serde::{Deserialize, Serialize};

/// Single slot holding the serialized note collection.
pub(crate) const NOTES_KEY: &str = "jotpad_notes_v1";

/// Persisted theme preference ("light" / "dark").
pub(crate) const THEME_KEY: &str = "jotpad_theme";

pub(crate) fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let storage = local_storage()?;
    let json = storage.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, &json);
        }
    }
}

/// Decode a persisted collection blob. Anything unreadable yields an empty
/// collection — best-effort parse, discard on failure.
pub(crate) fn decode_notes(raw: &str) -> Vec<Note> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// localStorage-backed implementation of the persistence port.
///
/// Stateless by design: the controller owns the canonical collection and
/// this adapter is a read/write conduit for the single `NOTES_KEY` slot.
pub(crate) struct LocalNoteStore;

impl NoteStore for LocalNoteStore {
    fn load(&self) -> Vec<Note> {
        let Some(storage) = local_storage() else {
            return Vec::new();
        };
        let Ok(Some(raw)) = storage.get_item(NOTES_KEY) else {
            return Vec::new();
        };
        decode_notes(&raw)
    }

    fn save(&self, notes: &[Note]) {
        save_json_to_storage(NOTES_KEY, &notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_garbage_as_empty() {
        assert!(decode_notes("").is_empty());
        assert!(decode_notes("not json at all").is_empty());
        assert!(decode_notes("{\"id\": 1}").is_empty());
        assert!(decode_notes("[{\"id\": \"a\"}]").is_empty());
    }

    #[test]
    fn decode_reads_the_camel_case_blob_layout() {
        let raw = r#"[
            {"id": "a1", "title": "Groceries", "content": "milk", "lastModified": 1700000000000}
        ]"#;
        let notes = decode_notes(raw);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "a1");
        assert_eq!(notes[0].last_modified, 1_700_000_000_000);
    }

    #[test]
    fn encode_round_trips_through_decode() {
        let notes = vec![Note {
            id: "a1".to_string(),
            title: "Groceries".to_string(),
            content: "milk, eggs".to_string(),
            last_modified: 42,
        }];
        let raw = serde_json::to_string(&notes).unwrap();
        assert!(raw.contains("\"lastModified\":42"));
        assert_eq!(decode_notes(&raw), notes);
    }
}

// Browser-backed tests (run with `cargo test --target wasm32-unknown-unknown`
// + wasm-bindgen-test-runner): exercise the real localStorage slot.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_note_store_roundtrip() {
        let storage = local_storage().expect("browser test needs localStorage");
        let _ = storage.remove_item(NOTES_KEY);

        let store = LocalNoteStore;
        assert!(store.load().is_empty());

        let notes = vec![Note {
            id: "a1".to_string(),
            title: "Groceries".to_string(),
            content: "milk".to_string(),
            last_modified: 1,
        }];
        store.save(&notes);
        assert_eq!(store.load(), notes);

        let _ = storage.remove_item(NOTES_KEY);
    }

    #[wasm_bindgen_test]
    fn test_corrupt_slot_loads_as_empty() {
        let storage = local_storage().expect("browser test needs localStorage");
        let _ = storage.set_item(NOTES_KEY, "{{{ definitely not json");

        let store = LocalNoteStore;
        assert!(store.load().is_empty());

        let _ = storage.remove_item(NOTES_KEY);
    }
}
