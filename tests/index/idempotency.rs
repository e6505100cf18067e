//! Repeated runs over an unchanged library

use crate::common::{FixtureTagReader, Library};
use releasedex::index::{IndexOrchestrator, RunOptions};

fn populated() -> Library {
    let lib = Library::new();
    lib.track("Artist-First-2020-GRP/01.mp3", "artist=Artist\ngenre=Rock\nyear=2020");
    lib.track("Artist-First-2020-GRP/02.mp3", "artist=Artist\ngenre=Rock\nyear=2020");
    lib.track("Other-Second-XYZ/01.flac", "artist=Other\ngenre=Jazz\nyear=1999");
    lib
}

#[test]
fn test_second_run_leaves_identical_link_set() {
    let lib = populated();
    let config = lib.config();
    let orchestrator = IndexOrchestrator::new(&config, &FixtureTagReader);

    orchestrator.run(&RunOptions::default()).unwrap();
    let first = lib.links();
    let reports = orchestrator.run(&RunOptions::default()).unwrap();

    assert_eq!(lib.links(), first);
    assert_eq!(first.len(), 8);
    assert!(reports.iter().all(|r| r.links.created == 0 && r.links.replaced == 0));
    assert_eq!(reports.iter().map(|r| r.links.kept).sum::<usize>(), 8);
}

#[test]
fn test_force_replaces_every_link() {
    let lib = populated();
    let config = lib.config();
    let orchestrator = IndexOrchestrator::new(&config, &FixtureTagReader);
    orchestrator.run(&RunOptions::default()).unwrap();
    let first = lib.links();

    let options = RunOptions {
        force: true,
        ..RunOptions::default()
    };
    let reports = orchestrator.run(&options).unwrap();

    assert_eq!(lib.links(), first);
    assert_eq!(reports.iter().map(|r| r.links.replaced).sum::<usize>(), 8);
}

#[test]
fn test_dry_run_reports_without_writing() {
    let lib = populated();
    let config = lib.config();
    let options = RunOptions {
        dry_run: true,
        ..RunOptions::default()
    };

    let reports = IndexOrchestrator::new(&config, &FixtureTagReader)
        .run(&options)
        .unwrap();

    assert_eq!(reports.iter().map(|r| r.links.created).sum::<usize>(), 8);
    assert!(!lib.index.exists());
}
