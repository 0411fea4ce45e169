// ABOUTME: Configuration module for the slidemaster library
// ABOUTME: Provides configuration settings and environment variable handling

use crate::clock::SharedClock;
use crate::generator::DeckGenerator;
use crate::query::SortKey;
use crate::simulate::{Simulator, SimulatorConfig};
use crate::utils;
use log::warn;
use std::env;
use std::time::Duration;

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub generation_delay_ms: u64,
    pub translation_delay_ms: u64,
    pub audio_delay_ms: u64,
    pub media_delay_ms: u64,
    pub export_delay_ms: u64,
    pub title_limit: usize,
    pub slide_title_limit: usize,
    pub default_sort: SortKey,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation_delay_ms: 2000,
            translation_delay_ms: 2000,
            audio_delay_ms: 1500,
            media_delay_ms: 1000,
            export_delay_ms: 1500,
            title_limit: 30,
            slide_title_limit: 50,
            default_sort: SortKey::default(),
        }
    }
}

fn delay_from_env(name: &str, default: u64) -> u64 {
    match env::var(name) {
        Ok(value) => value.trim().parse::<u64>().unwrap_or_else(|_| {
            warn!("Ignoring {}={:?}, expected milliseconds", name, value);
            default
        }),
        Err(_) => default,
    }
}

fn limit_from_env(name: &str, default: usize) -> usize {
    match env::var(name) {
        Ok(value) => utils::parse_positive(name, &value).unwrap_or_else(|e| {
            warn!("{}", e);
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let default_sort = match env::var("SLIDEMASTER_DEFAULT_SORT") {
            Ok(value) => value.parse::<SortKey>().unwrap_or_else(|e| {
                warn!("{}", e);
                defaults.default_sort
            }),
            Err(_) => defaults.default_sort,
        };

        Self {
            generation_delay_ms: delay_from_env(
                "SLIDEMASTER_GENERATION_DELAY_MS",
                defaults.generation_delay_ms,
            ),
            translation_delay_ms: delay_from_env(
                "SLIDEMASTER_TRANSLATION_DELAY_MS",
                defaults.translation_delay_ms,
            ),
            audio_delay_ms: delay_from_env("SLIDEMASTER_AUDIO_DELAY_MS", defaults.audio_delay_ms),
            media_delay_ms: delay_from_env("SLIDEMASTER_MEDIA_DELAY_MS", defaults.media_delay_ms),
            export_delay_ms: delay_from_env(
                "SLIDEMASTER_EXPORT_DELAY_MS",
                defaults.export_delay_ms,
            ),
            title_limit: limit_from_env("SLIDEMASTER_TITLE_LIMIT", defaults.title_limit),
            slide_title_limit: limit_from_env(
                "SLIDEMASTER_SLIDE_TITLE_LIMIT",
                defaults.slide_title_limit,
            ),
            default_sort,
        }
    }

    /// Get a deck generator using the configured truncation limits
    pub fn get_generator(&self) -> DeckGenerator {
        DeckGenerator::new(self.title_limit, self.slide_title_limit)
    }

    /// Get the simulator delays
    pub fn get_simulator_config(&self) -> SimulatorConfig {
        SimulatorConfig {
            generation_delay: Duration::from_millis(self.generation_delay_ms),
            translation_delay: Duration::from_millis(self.translation_delay_ms),
            audio_delay: Duration::from_millis(self.audio_delay_ms),
            media_delay: Duration::from_millis(self.media_delay_ms),
            export_delay: Duration::from_millis(self.export_delay_ms),
        }
    }

    /// Get a simulator wired to this configuration
    pub fn get_simulator(&self, clock: SharedClock) -> Simulator {
        Simulator::new(self.get_simulator_config(), self.get_generator(), clock)
    }
}
