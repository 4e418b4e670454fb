//! Progress tests - save files across store instances

use std::fs;
use std::path::PathBuf;

use tui_circuit::progress::{ProgressStore, SaveData};

fn temp_save(tag: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("tui-circuit-test-{}-{}.json", tag, std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_missing_file_starts_fresh() {
    let path = temp_save("missing");
    let store = ProgressStore::open(path.clone());
    assert_eq!(store.data(), &SaveData::default());
    assert!(store.is_unlocked(0));
    assert!(!store.is_unlocked(1));
}

#[test]
fn test_progress_survives_reopen() {
    let path = temp_save("reopen");

    let mut store = ProgressStore::open(path.clone());
    store.complete_level(0, 100);
    store.complete_level(1, 100);
    store.save().unwrap();

    let reopened = ProgressStore::open(path.clone());
    assert!(reopened.is_completed(0));
    assert!(reopened.is_completed(1));
    assert!(reopened.is_unlocked(2));
    assert!(!reopened.is_unlocked(3));
    assert_eq!(reopened.score(1), 100);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_better_score_wins_across_sessions() {
    let path = temp_save("score");

    let mut store = ProgressStore::open(path.clone());
    store.complete_level(0, 250);
    store.save().unwrap();

    let mut again = ProgressStore::open(path.clone());
    again.complete_level(0, 100);
    again.save().unwrap();

    let last = ProgressStore::open(path.clone());
    assert_eq!(last.score(0), 250);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_save_file_is_plain_json() {
    let path = temp_save("shape");

    let mut store = ProgressStore::open(path.clone());
    store.complete_level(0, 100);
    store.save().unwrap();

    // The file stays hand-editable: top-level object with the three
    // progress fields.
    let text = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["highest_unlocked"], 2);
    assert_eq!(json["completion"][0], true);
    assert_eq!(json["scores"][0], 100);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_corrupt_file_resets_instead_of_crashing() {
    let path = temp_save("corrupt");
    fs::write(&path, "{ this is not json").unwrap();

    let store = ProgressStore::open(path.clone());
    assert_eq!(store.data(), &SaveData::default());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_save_creates_parent_directories() {
    let mut dir = std::env::temp_dir();
    dir.push(format!("tui-circuit-test-nest-{}", std::process::id()));
    let path = dir.join("deeper").join("progress.json");
    let _ = fs::remove_dir_all(&dir);

    let mut store = ProgressStore::open(path.clone());
    store.complete_level(0, 100);
    store.save().unwrap();
    assert!(path.exists());

    let _ = fs::remove_dir_all(&dir);
}
