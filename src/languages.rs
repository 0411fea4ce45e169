// ABOUTME: Translation language catalogue for the slidemaster library
// ABOUTME: Maps language codes to their native and English display names

use crate::errors::{Result, SlideError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    /// Short label in the language's own script
    pub native: &'static str,
    pub english: &'static str,
}

pub const ENGLISH: Language = Language {
    code: "en",
    native: "EN",
    english: "English",
};

pub const LANGUAGES: &[Language] = &[
    ENGLISH,
    Language {
        code: "hi",
        native: "हिं",
        english: "Hindi",
    },
    Language {
        code: "mr",
        native: "मर",
        english: "Marathi",
    },
    Language {
        code: "ta",
        native: "த",
        english: "Tamil",
    },
    Language {
        code: "te",
        native: "తె",
        english: "Telugu",
    },
    Language {
        code: "bn",
        native: "বা",
        english: "Bengali",
    },
    Language {
        code: "gu",
        native: "ગુ",
        english: "Gujarati",
    },
    Language {
        code: "kn",
        native: "ಕ",
        english: "Kannada",
    },
    Language {
        code: "ml",
        native: "മ",
        english: "Malayalam",
    },
    Language {
        code: "pa",
        native: "ਪੰ",
        english: "Punjabi",
    },
    Language {
        code: "or",
        native: "ଓ",
        english: "Odia",
    },
    Language {
        code: "es",
        native: "ES",
        english: "Spanish",
    },
    Language {
        code: "fr",
        native: "FR",
        english: "French",
    },
    Language {
        code: "de",
        native: "DE",
        english: "German",
    },
    Language {
        code: "zh",
        native: "中",
        english: "Chinese",
    },
    Language {
        code: "ja",
        native: "日",
        english: "Japanese",
    },
    Language {
        code: "ko",
        native: "한",
        english: "Korean",
    },
    Language {
        code: "ar",
        native: "ع",
        english: "Arabic",
    },
    Language {
        code: "ru",
        native: "РУ",
        english: "Russian",
    },
    Language {
        code: "pt",
        native: "PT",
        english: "Portuguese",
    },
    Language {
        code: "it",
        native: "IT",
        english: "Italian",
    },
];

/// Look up a language by its code, ignoring case
pub fn find(code: &str) -> Option<Language> {
    let code = code.trim().to_lowercase();
    LANGUAGES.iter().copied().find(|lang| lang.code == code)
}

pub fn lookup(code: &str) -> Result<Language> {
    find(code).ok_or_else(|| SlideError::ValidationError(format!("Unknown language: {}", code)))
}

/// The language a toggle switches to: back to English, or out to the regional language
pub fn toggle_target(current: Language, regional: Language) -> Language {
    if current == ENGLISH {
        regional
    } else {
        ENGLISH
    }
}
