// ABOUTME: Seed data for the slidemaster library
// ABOUTME: The starter presentations shown on a fresh dashboard

use crate::models::{Presentation, Slide};
use chrono::{DateTime, TimeZone, Utc};

fn edited_on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Three sample lessons, most recently edited first
pub fn sample_presentations() -> Vec<Presentation> {
    vec![
        Presentation::new(
            "The Water Cycle",
            vec![
                Slide::title_slide("The Water Cycle")
                    .with_notes("Welcome students to today's lesson about the water cycle."),
                Slide::content_slide(
                    "What is the Water Cycle?",
                    [
                        "Continuous movement of water",
                        "On, above, and below Earth's surface",
                        "Water changes between states",
                    ],
                )
                .with_notes("Explain that water is constantly moving in nature."),
                Slide::content_slide(
                    "Key Stages",
                    ["Evaporation", "Condensation", "Precipitation", "Collection"],
                )
                .with_notes("Discuss each stage in detail with examples."),
            ],
            edited_on(2025, 11, 8),
        ),
        Presentation::new(
            "Solar System Basics",
            vec![
                Slide::title_slide("Solar System Basics")
                    .with_notes("Introduction to our solar system."),
                Slide::content_slide(
                    "The Sun",
                    [
                        "Center of our solar system",
                        "A giant star",
                        "Provides heat and light",
                    ],
                )
                .with_notes("The Sun is the most important object in our solar system."),
            ],
            edited_on(2025, 11, 6),
        ),
        Presentation::new(
            "Parts of Speech",
            vec![
                Slide::title_slide("Parts of Speech")
                    .with_notes("Learn about the building blocks of sentences."),
                Slide::content_slide(
                    "Nouns",
                    [
                        "Person, place, or thing",
                        "Common and proper nouns",
                        "Examples: cat, London, happiness",
                    ],
                )
                .with_notes("Start with nouns as they are fundamental."),
            ],
            edited_on(2025, 11, 5),
        ),
    ]
}
