use chrono::{TimeZone, Utc};
use slidemaster::languages;
use slidemaster::samples::sample_presentations;
use slidemaster::{
    Config, DeckGenerator, ExportFormat, ManualClock, PresentationStore, RecordingNotifier,
    Simulator, SimulatorConfig, SlideEditor, SlideError, SlideKind, SortKey, Workspace,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn instant_simulator() -> Simulator {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 11, 10, 9, 0, 0).unwrap(),
    ));
    Simulator::new(SimulatorConfig::instant(), DeckGenerator::default(), clock)
}

#[test]
fn test_generation_resolves_with_a_deck() {
    let simulator = instant_simulator();
    let deck = simulator
        .generate("An interactive lesson on photosynthesis with diagrams")
        .wait()
        .expect("generation succeeds");

    assert_eq!(deck.slides.len(), 3);
    assert_eq!(deck.slides[0].kind, SlideKind::Title);
    assert_eq!(deck.title, "An interactive lesson on photo...");
}

#[test]
fn test_generation_rejects_blank_prompt() {
    let simulator = instant_simulator();
    let result = simulator.generate("  ").wait();
    assert!(matches!(result, Err(SlideError::ValidationError(_))));
}

#[test]
fn test_generation_waits_for_its_delay() {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 11, 10, 9, 0, 0).unwrap(),
    ));
    let config = SimulatorConfig {
        generation_delay: Duration::from_millis(150),
        ..SimulatorConfig::instant()
    };
    let simulator = Simulator::new(config, DeckGenerator::default(), clock);

    let started = Instant::now();
    let task = simulator.generate("Rocks and minerals");
    assert!(task.try_result().unwrap().is_none(), "should still be running");

    let deck = task.wait().unwrap();
    assert!(started.elapsed() >= Duration::from_millis(150));
    assert_eq!(deck.title, "Rocks and minerals");
}

#[test]
fn test_wait_timeout_reports_pending() {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 11, 10, 9, 0, 0).unwrap(),
    ));
    let config = SimulatorConfig {
        export_delay: Duration::from_millis(500),
        ..SimulatorConfig::instant()
    };
    let simulator = Simulator::new(config, DeckGenerator::default(), clock);
    let decks = sample_presentations();
    let deck = &decks[0];

    let task = simulator.export(deck, ExportFormat::Pdf);
    assert_eq!(task.label(), "export");
    assert!(task.wait_timeout(Duration::from_millis(10)).unwrap().is_none());
    let artifact = task.wait_timeout(Duration::from_secs(5)).unwrap().unwrap();
    assert_eq!(artifact.file_name, "The_Water_Cycle.pdf");
}

#[test]
fn test_export_describes_artifact() {
    let simulator = instant_simulator();
    let decks = sample_presentations();
    let deck = &decks[1];

    let artifact = simulator.export(deck, ExportFormat::Pptx).wait().unwrap();
    assert_eq!(artifact.file_name, "Solar_System_Basics.pptx");
    assert_eq!(artifact.format, ExportFormat::Pptx);
    assert_eq!(artifact.slide_count, 2);
}

#[test]
fn test_audio_captions_come_from_notes() {
    let simulator = instant_simulator();
    let decks = sample_presentations();
    let deck = &decks[0];
    let slide = &deck.slides[1];

    let clip = simulator.synthesize_audio(slide).wait().unwrap();
    assert_eq!(clip.slide_id, slide.id);
    assert_eq!(
        clip.captions,
        "Explain that water is constantly moving in nature."
    );
}

#[test]
fn test_media_fetch_returns_six_placeholders() {
    let simulator = instant_simulator();
    let decks = sample_presentations();
    let slide = &decks[0].slides[0];

    let media = simulator.fetch_media(slide).wait().unwrap();
    assert_eq!(media.len(), 6);
    assert!(media.iter().all(|m| m.slide_id == slide.id));
    assert_eq!(media[0].caption, "The Water Cycle image 1");
}

#[test]
fn test_translation_leaves_content_alone() {
    let simulator = instant_simulator();
    let deck = sample_presentations().remove(2);
    let tamil = languages::lookup("ta").unwrap();

    let translation = simulator.translate(&deck, tamil).wait().unwrap();
    assert_eq!(translation.presentation_id, deck.id);
    assert_eq!(translation.language.english, "Tamil");
}

#[test]
fn test_generated_deck_is_folded_into_workspace() {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 11, 10, 9, 0, 0).unwrap(),
    ));
    let notifier = Arc::new(RecordingNotifier::new());
    let mut workspace = Workspace::new(
        PresentationStore::with_samples(clock.clone(), DeckGenerator::default()),
        SlideEditor::new(clock),
        Box::new(notifier.clone()),
    );
    let simulator = Config {
        generation_delay_ms: 0,
        ..Config::new()
    }
    .get_simulator(Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 11, 12, 9, 0, 0).unwrap(),
    )));

    let deck = simulator.generate("Weather and climate").wait().unwrap();
    workspace.accept_generated(deck.clone());

    let newest = workspace.list("", SortKey::DateDesc);
    assert_eq!(newest[0].id, deck.id);
    assert_eq!(workspace.store().list()[0].id, deck.id);
    assert_eq!(notifier.last().unwrap().message, "Presentation generated");
}

#[test]
fn test_workspace_reports_translation_and_export() {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 11, 10, 9, 0, 0).unwrap(),
    ));
    let notifier = Arc::new(RecordingNotifier::new());
    let workspace = Workspace::new(
        PresentationStore::with_samples(clock.clone(), DeckGenerator::default()),
        SlideEditor::new(clock),
        Box::new(notifier.clone()),
    );
    let simulator = instant_simulator();
    let deck = workspace.store().list().remove(0);
    let hindi = languages::lookup("hi").unwrap();

    workspace.begin_translation(hindi);
    let translation = simulator.translate(&deck, hindi).wait().unwrap();
    workspace.accept_translation(&translation);
    let artifact = simulator.export(&deck, ExportFormat::Pdf).wait().unwrap();
    workspace.accept_export(&artifact);
    workspace.report_failure(
        "Audio generation",
        &SlideError::SimulationError("no voice".to_string()),
    );

    let messages: Vec<_> = notifier
        .notifications()
        .into_iter()
        .map(|n| n.message)
        .collect();
    assert_eq!(
        messages,
        vec![
            "Translating to Hindi...",
            "Translated to Hindi",
            "Exported The_Water_Cycle.pdf",
            "Audio generation failed: Simulated task failed: no voice",
        ]
    );
    // Translation does not rewrite the stored deck
    assert_eq!(workspace.store().list()[0], deck);
}
