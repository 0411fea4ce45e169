use chrono::{Duration, TimeZone, Utc};
use slidemaster::{
    Clock, DeckGenerator, ManualClock, PresentationStore, SlideError, SlideKind, SortKey,
};
use std::collections::HashSet;
use std::sync::Arc;

fn manual_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 11, 10, 8, 30, 0).unwrap(),
    ))
}

fn empty_store(clock: Arc<ManualClock>) -> PresentationStore {
    PresentationStore::new(clock, DeckGenerator::default())
}

#[test]
fn test_create_builds_title_then_content_slides() {
    let clock = manual_clock();
    let mut store = empty_store(clock.clone());

    let deck = store
        .create("A 10 slide intro to the water cycle for 5th graders")
        .expect("create should succeed");

    assert!(deck.slides.len() >= 2);
    assert_eq!(deck.slides[0].kind, SlideKind::Title);
    assert!(deck.slides[1..]
        .iter()
        .all(|s| s.kind == SlideKind::Content));
    assert_eq!(deck.last_edited, clock.now());
    assert!(deck.title.ends_with("..."));
    assert_eq!(deck.title.chars().count(), 33);
}

#[test]
fn test_create_short_prompt_keeps_full_title() {
    let mut store = empty_store(manual_clock());
    let deck = store.create("Fractions").unwrap();
    assert_eq!(deck.title, "Fractions");
}

#[test]
fn test_create_rejects_blank_prompt() {
    let mut store = empty_store(manual_clock());
    let result = store.create("   ");
    assert!(matches!(result, Err(SlideError::ValidationError(_))));
    assert!(store.is_empty());
}

#[test]
fn test_create_inserts_most_recent_first() {
    let mut store = empty_store(manual_clock());
    let first = store.create("First topic").unwrap();
    let second = store.create("Second topic").unwrap();

    let ids: Vec<_> = store.list().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[test]
fn test_create_assigns_unique_ids() {
    let mut store = empty_store(manual_clock());
    let a = store.create("Same prompt").unwrap();
    let b = store.create("Same prompt").unwrap();
    assert_ne!(a.id, b.id);
    assert_ne!(a.slides[0].id, b.slides[0].id);
}

#[test]
fn test_duplicate_is_a_deep_independent_copy() {
    let clock = manual_clock();
    let mut store = PresentationStore::with_samples(clock.clone(), DeckGenerator::default());
    let original = store.list().into_iter().next().unwrap();

    clock.advance(Duration::hours(1));
    let mut copy = store.duplicate(&original);

    assert_ne!(copy.id, original.id);
    assert_eq!(copy.title, format!("{} (Copy)", original.title));
    assert_eq!(copy.last_edited, clock.now());
    assert_eq!(copy.slides.len(), original.slides.len());

    for (a, b) in copy.slides.iter().zip(&original.slides) {
        assert_ne!(a.id, b.id, "slide ids are regenerated");
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.title, b.title);
        assert_eq!(a.content, b.content);
        assert_eq!(a.notes, b.notes);
    }

    // Mutating the copy must not reach the original
    copy.slides[0].title = "Changed".to_string();
    assert_eq!(store.get(&original.id).unwrap(), original);

    // The copy sits at the head of the store
    assert_eq!(store.list()[0].id, copy.id);
    assert_eq!(store.len(), 4);
}

#[test]
fn test_duplicate_slide_ids_never_collide_across_store() {
    let mut store = PresentationStore::with_samples(manual_clock(), DeckGenerator::default());
    let original = store.list()[1].clone();
    store.duplicate(&original);
    store.duplicate(&original);

    let mut seen = HashSet::new();
    for p in store.list() {
        for s in p.slides {
            assert!(seen.insert(s.id), "slide id reused across presentations");
        }
    }
}

#[test]
fn test_delete_removes_and_ignores_unknown_ids() {
    let mut store = PresentationStore::with_samples(manual_clock(), DeckGenerator::default());
    let before = store.list();

    store.delete("no-such-id");
    assert_eq!(store.list(), before);

    store.delete(&before[1].id);
    let after = store.list();
    assert_eq!(after.len(), 2);
    assert_eq!(after[0].id, before[0].id);
    assert_eq!(after[1].id, before[2].id);
}

#[test]
fn test_update_replaces_in_place_without_reordering() {
    let mut store = PresentationStore::with_samples(manual_clock(), DeckGenerator::default());
    let before = store.list();

    let mut changed = before[2].clone();
    changed.title = "Grammar Basics".to_string();
    store.update(changed.clone());

    let after = store.list();
    assert_eq!(after[2], changed);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[1]);
}

#[test]
fn test_update_unknown_id_is_noop() {
    let mut store = PresentationStore::with_samples(manual_clock(), DeckGenerator::default());
    let before = store.list();

    let mut stranger = before[0].clone();
    stranger.id = "not-stored".to_string();
    stranger.title = "Stranger".to_string();
    store.update(stranger);

    assert_eq!(store.list(), before);
}

#[test]
fn test_list_snapshot_is_unaffected_by_later_mutations() {
    let mut store = PresentationStore::with_samples(manual_clock(), DeckGenerator::default());
    let snapshot = store.list();
    store.create("Brand new").unwrap();
    store.delete(&snapshot[0].id);

    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[0].title, "The Water Cycle");
}

#[test]
fn test_query_through_store() {
    let store = PresentationStore::with_samples(manual_clock(), DeckGenerator::default());
    let titles: Vec<_> = store
        .query("", SortKey::TitleAsc)
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(
        titles,
        vec!["Parts of Speech", "Solar System Basics", "The Water Cycle"]
    );

    let found = store.query("SOLAR", SortKey::default());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Solar System Basics");
}
