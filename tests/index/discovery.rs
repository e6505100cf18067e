//! Release discovery through the orchestrator

use crate::common::{FixtureTagReader, Library, UNREADABLE};
use releasedex::index::{IndexOrchestrator, RunOptions};
use releasedex::scanner::MediaType;

#[test]
fn test_many_tracks_make_one_release() {
    let lib = Library::new();
    for n in 1..=5 {
        lib.track(
            &format!("Artist-Album-GRP/{n:02}.mp3"),
            &format!("genre=Genre{n}\nyear=200{n}"),
        );
    }
    lib.track("Artist-Album-GRP/CD2/01.mp3", "genre=Other");
    let mut config = lib.config();
    config.enabled_types = vec![MediaType::Mp3];

    let reports = IndexOrchestrator::new(&config, &FixtureTagReader)
        .run(&RunOptions::default())
        .unwrap();

    assert_eq!(reports[0].stats.files_seen, 6);
    assert_eq!(reports[0].stats.releases_indexed, 1);
    let genres: Vec<_> = lib
        .links()
        .into_keys()
        .filter(|p| p.starts_with("mp3/genre"))
        .collect();
    assert_eq!(genres.len(), 1);
}

#[test]
fn test_release_depth_two() {
    let lib = Library::new();
    lib.track("Label/Artist-One-GRP/01.flac", "genre=Rock");
    lib.track("Label/Artist-Two-GRP/01.flac", "genre=Rock");
    let mut config = lib.config();
    config.enabled_types = vec![MediaType::Flac];
    config.flac.release_depth = 2;

    let reports = IndexOrchestrator::new(&config, &FixtureTagReader)
        .run(&RunOptions::default())
        .unwrap();

    assert_eq!(reports[0].stats.releases_indexed, 2);
    assert!(lib.index.join("flac/genre/Rock/Artist-One-GRP").exists());
    assert!(lib.index.join("flac/genre/Rock/Artist-Two-GRP").exists());
    assert!(!lib.index.join("flac/genre/Rock/Label").exists());
}

#[test]
fn test_unreadable_tracks_are_skipped() {
    let lib = Library::new();
    lib.track("Broken-Release-GRP/01.mp3", UNREADABLE);
    lib.track("Mixed-Release-GRP/01.mp3", UNREADABLE);
    lib.track("Mixed-Release-GRP/02.mp3", "genre=Ambient");
    let mut config = lib.config();
    config.enabled_types = vec![MediaType::Mp3];

    let reports = IndexOrchestrator::new(&config, &FixtureTagReader)
        .run(&RunOptions::default())
        .unwrap();

    let stats = &reports[0].stats;
    assert_eq!(stats.files_seen, 3);
    assert_eq!(stats.releases_indexed, 1);
    // the mixed release's unreadable track is only read if walked first
    assert!((1..=2).contains(&stats.unreadable_tags));
    assert!(lib.index.join("mp3/genre/Ambient/Mixed-Release-GRP").exists());
    assert!(!lib.index.join("mp3/alpha/B").exists());
}

#[test]
fn test_type_roots_take_precedence_and_missing_roots_are_skipped() {
    let lib = Library::new();
    lib.track("shared/Shared-Release-GRP/01.mp3", "genre=Rock");
    lib.track("own/Own-Release-GRP/01.mp3", "genre=Rock");
    let mut config = lib.config();
    config.music_dirs = vec![lib.music.join("shared")];
    config.mp3.roots = vec![lib.music.join("missing"), lib.music.join("own")];

    let reports = IndexOrchestrator::new(&config, &FixtureTagReader)
        .run(&RunOptions::default())
        .unwrap();

    assert_eq!(reports[0].stats.roots_missing, 1);
    assert_eq!(reports[0].stats.releases_indexed, 1);
    let genre = lib.index.join("mp3/genre/Rock");
    assert!(genre.join("Own-Release-GRP").exists());
    assert!(!genre.join("Shared-Release-GRP").exists());
}

#[test]
fn test_overlapping_roots_index_release_once() {
    let lib = Library::new();
    lib.track("Artist-Album-GRP/01.mp3", "genre=Rock");
    let mut config = lib.config();
    config.enabled_types = vec![MediaType::Mp3];
    config.mp3.roots = vec![lib.music.clone(), lib.music.join(".")];

    let reports = IndexOrchestrator::new(&config, &FixtureTagReader)
        .run(&RunOptions::default())
        .unwrap();

    assert_eq!(reports[0].stats.files_seen, 2);
    assert_eq!(reports[0].stats.releases_indexed, 1);
}
