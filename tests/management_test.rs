use std::fs;
use std::path::Path;

use lessoncli::config::{LEDGER_FILE, URL_STORE_FILE};
use lessoncli::management::*;
use lessoncli::types::{CleanupOutcome, LessonPeriod};
use tempfile::tempdir;

fn period(year: i32, quarter: u32, week: u32) -> LessonPeriod {
    LessonPeriod {
        year,
        quarter,
        week,
    }
}

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"x").unwrap();
}

#[test]
fn test_parse_lesson_file() {
    assert_eq!(
        parse_lesson_file("2025 Q1 Lesson 5 – Living by Faith – Audio by Percy Harrold.m4a"),
        Some(period(2025, 1, 5))
    );
    assert_eq!(
        parse_lesson_file("Sabbath School - 2024 Q4 Lesson 13: Rest.mp3"),
        Some(period(2024, 4, 13))
    );
    assert_eq!(
        parse_lesson_file("2025Q2Lesson10.mp3"),
        Some(period(2025, 2, 10))
    );
    assert_eq!(parse_lesson_file("Lesson 5 - Faith.mp3"), None);
    assert_eq!(parse_lesson_file("2025 q1 lesson 5.mp3"), None);
}

#[test]
fn test_is_audio_file() {
    assert!(is_audio_file("2025-01-04.mp3"));
    assert!(is_audio_file("2025 Q1 Lesson 5.m4a"));
    assert!(!is_audio_file("urls.txt"));
    assert!(!is_audio_file("Lesson.webm"));
}

#[tokio::test]
async fn test_url_store_append_read_reset() {
    let dir = tempdir().unwrap();
    let store = UrlStore::new(dir.path().join(URL_STORE_FILE));

    assert!(!store.reset().await.unwrap());
    assert!(store.read_all().await.is_err());

    store.append("https://www.youtube.com/watch?v=a").await.unwrap();
    store.append("https://www.youtube.com/watch?v=b").await.unwrap();
    store.append("https://www.youtube.com/watch?v=a").await.unwrap();

    assert_eq!(
        store.read_all().await.unwrap(),
        vec![
            "https://www.youtube.com/watch?v=a",
            "https://www.youtube.com/watch?v=b",
            "https://www.youtube.com/watch?v=a",
        ]
    );

    assert!(store.reset().await.unwrap());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_url_store_rejects_line_breaks() {
    let dir = tempdir().unwrap();
    let store = UrlStore::new(dir.path().join(URL_STORE_FILE));

    let result = store.append("https://a\nhttps://b").await;
    assert!(matches!(result, Err(StoreError::CriticalError(_))));
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_ledger_is_append_only() {
    let dir = tempdir().unwrap();
    let ledger = DownloadLedger::new(dir.path().join(LEDGER_FILE));

    ledger.ensure_exists().await.unwrap();
    assert!(ledger.path().exists());
    assert!(ledger.load().await.unwrap().is_empty());

    ledger.record("https://www.youtube.com/watch?v=a").await.unwrap();
    ledger.record("https://www.youtube.com/watch?v=a").await.unwrap();
    ledger.record("https://www.youtube.com/watch?v=b").await.unwrap();

    // no uniqueness on write, the set collapses duplicates on read
    let content = fs::read_to_string(ledger.path()).unwrap();
    assert_eq!(content.lines().count(), 3);

    let set = ledger.load().await.unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.contains("https://www.youtube.com/watch?v=b"));

    // an existing ledger is left untouched
    ledger.ensure_exists().await.unwrap();
    assert_eq!(ledger.load().await.unwrap().len(), 2);

    assert!(ledger.clear().await.unwrap());
    assert!(!ledger.clear().await.unwrap());
}

#[tokio::test]
async fn test_cleanup_without_lesson_files() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "2025-01-04.mp3");
    touch(dir.path(), URL_STORE_FILE);

    let outcome = LessonFileManager::new(dir.path())
        .cleanup_if_stale(period(2025, 1, 10))
        .await
        .unwrap();

    assert_eq!(outcome, CleanupOutcome::NoPreviousFiles);
    assert!(dir.path().join("2025-01-04.mp3").exists());
    assert!(dir.path().join(URL_STORE_FILE).exists());
}

#[tokio::test]
async fn test_cleanup_purges_everything_on_stale_file() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "2025 Q1 Lesson 5 – EGW Notes – Faith.m4a");
    touch(dir.path(), "Sabbath School - 2025 Q1 Lesson 3: Rest.mp3");
    touch(dir.path(), "2025-01-04.mp3");
    touch(dir.path(), URL_STORE_FILE);
    touch(dir.path(), LEDGER_FILE);
    touch(dir.path(), "notes.txt");

    let outcome = LessonFileManager::new(dir.path())
        .cleanup_if_stale(period(2025, 1, 10))
        .await
        .unwrap();

    assert_eq!(outcome, CleanupOutcome::Purged { removed: 5 });

    let remaining: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(remaining, vec!["notes.txt"]);
}

#[tokio::test]
async fn test_cleanup_keeps_current_files() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "2025 Q1 Lesson 10 – Faith.m4a");
    touch(dir.path(), LEDGER_FILE);

    let outcome = LessonFileManager::new(dir.path())
        .cleanup_if_stale(period(2025, 1, 10))
        .await
        .unwrap();

    assert_eq!(outcome, CleanupOutcome::UpToDate);
    assert!(dir.path().join("2025 Q1 Lesson 10 – Faith.m4a").exists());
    assert!(dir.path().join(LEDGER_FILE).exists());
}

#[tokio::test]
async fn test_cleanup_skips_unparseable_lesson_names() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Lesson 5 - Faith.mp3");

    let outcome = LessonFileManager::new(dir.path())
        .cleanup_if_stale(period(2025, 1, 10))
        .await
        .unwrap();

    assert_eq!(outcome, CleanupOutcome::UpToDate);
    assert!(dir.path().join("Lesson 5 - Faith.mp3").exists());
}

#[tokio::test]
async fn test_cleanup_compares_year_first() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "2024 Q4 Lesson 14 – Panel.m4a");

    let outcome = LessonFileManager::new(dir.path())
        .cleanup_if_stale(period(2025, 1, 1))
        .await
        .unwrap();

    assert_eq!(outcome, CleanupOutcome::Purged { removed: 1 });
}

#[tokio::test]
async fn test_cleanup_on_missing_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    let result = LessonFileManager::new(&missing)
        .cleanup_if_stale(period(2025, 1, 1))
        .await;

    assert!(matches!(result, Err(StoreError::IoError(_))));
}
