//! Languages the phonetic model is loaded for.
//!
//! The set is compiled in and never changes for the life of the process.

/// A language the transliteration path can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedLanguage {
    /// ISO 639-1 code (e.g. "hi", "ta")
    pub code: &'static str,
    /// English name (e.g. "Hindi")
    pub name: &'static str,
    /// Name in the language's own script
    pub native_name: &'static str,
}

const SUPPORTED_LANGUAGES: &[SupportedLanguage] = &[
    SupportedLanguage {
        code: "hi",
        name: "Hindi",
        native_name: "हिन्दी",
    },
    SupportedLanguage {
        code: "bn",
        name: "Bengali",
        native_name: "বাংলা",
    },
    SupportedLanguage {
        code: "ta",
        name: "Tamil",
        native_name: "தமிழ்",
    },
    SupportedLanguage {
        code: "te",
        name: "Telugu",
        native_name: "తెలుగు",
    },
    SupportedLanguage {
        code: "mr",
        name: "Marathi",
        native_name: "मराठी",
    },
    SupportedLanguage {
        code: "gu",
        name: "Gujarati",
        native_name: "ગુજરાતી",
    },
    SupportedLanguage {
        code: "kn",
        name: "Kannada",
        native_name: "ಕನ್ನಡ",
    },
    SupportedLanguage {
        code: "ml",
        name: "Malayalam",
        native_name: "മലയാളം",
    },
    SupportedLanguage {
        code: "pa",
        name: "Punjabi",
        native_name: "ਪੰਜਾਬੀ",
    },
    SupportedLanguage {
        code: "ur",
        name: "Urdu",
        native_name: "اردو",
    },
];

/// Read-only lookup over the compiled-in language set.
#[derive(Debug, Clone, Copy)]
pub struct LanguageRegistry {
    languages: &'static [SupportedLanguage],
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LanguageRegistry {
    pub const fn builtin() -> Self {
        Self {
            languages: SUPPORTED_LANGUAGES,
        }
    }

    /// Exact, case-sensitive match against the supported codes.
    pub fn is_supported(&self, code: &str) -> bool {
        self.languages.iter().any(|lang| lang.code == code)
    }

    /// Codes in registry order; sent to the model sidecar at load time.
    pub fn codes(&self) -> Vec<&'static str> {
        self.languages.iter().map(|lang| lang.code).collect()
    }

    /// "Hindi (हिन्दी), Bengali (বাংলা), ..." for startup logging.
    pub fn describe(&self) -> String {
        self.languages
            .iter()
            .map(|lang| format!("{} ({})", lang.name, lang.native_name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
