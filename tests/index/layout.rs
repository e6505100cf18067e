//! Produced layout and link targets

use crate::common::{FixtureTagReader, Library};
use releasedex::index::{Category, IndexOrchestrator, RunOptions};
use releasedex::scanner::MediaType;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_every_category_gets_a_bucket() {
    let lib = Library::new();
    lib.track(
        "Some Artist-Album-2024-GRP/01.mp3",
        "artist=Some Artist\nalbum=Live: Part 1/2\ngenre=Post  Rock\nyear=2024",
    );
    let mut config = lib.config();
    config.enabled_types = vec![MediaType::Mp3];
    config.mp3.categories = vec![
        Category::Alpha,
        Category::Genre,
        Category::Year,
        Category::Artist,
        Category::Album,
        Category::Groups,
    ];

    IndexOrchestrator::new(&config, &FixtureTagReader)
        .run(&RunOptions::default())
        .unwrap();

    let release = "Some Artist-Album-2024-GRP";
    let expected: Vec<PathBuf> = [
        "mp3/album/Live_Part 1_2",
        "mp3/alpha/S",
        "mp3/artist/Some Artist",
        "mp3/genre/Post Rock",
        "mp3/groups/GRP",
        "mp3/year/2024",
    ]
    .iter()
    .map(|bucket| PathBuf::from(bucket).join(release))
    .collect();
    let links: Vec<PathBuf> = lib.links().into_keys().collect();
    assert_eq!(links, expected);
}

#[test]
fn test_absolute_links_by_default() {
    let lib = Library::new();
    lib.track("Artist-Album-GRP/01.flac", "genre=Rock");
    let config = lib.config();

    IndexOrchestrator::new(&config, &FixtureTagReader)
        .run(&RunOptions::default())
        .unwrap();

    let target = fs::read_link(lib.index.join("flac/genre/Rock/Artist-Album-GRP")).unwrap();
    assert!(target.is_absolute());
    assert_eq!(target, lib.music.join("Artist-Album-GRP"));
}

#[test]
fn test_relative_links_resolve_to_release() {
    let lib = Library::new();
    lib.track("Artist-Album-GRP/01.flac", "genre=Rock");
    let mut config = lib.config();
    config.relative_symlinks = true;

    IndexOrchestrator::new(&config, &FixtureTagReader)
        .run(&RunOptions::default())
        .unwrap();

    let link = lib.index.join("flac/genre/Rock/Artist-Album-GRP");
    let target = fs::read_link(&link).unwrap();
    assert!(target.is_relative());
    assert_eq!(
        fs::canonicalize(&link).unwrap(),
        fs::canonicalize(lib.music.join("Artist-Album-GRP")).unwrap()
    );
}
