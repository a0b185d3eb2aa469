//! Font system management and font loading.

use std::path::Path;

/// Configuration for initializing the font system.
#[derive(Debug, Clone)]
pub struct FontSystemConfig {
    /// Whether to load system fonts on initialization.
    pub load_system_fonts: bool,
    /// Locale string for text shaping (e.g., "en-US").
    pub locale: String,
    /// Default serif font family name.
    pub serif_family: Option<String>,
    /// Default sans-serif font family name.
    pub sans_serif_family: Option<String>,
    /// Default monospace font family name.
    pub monospace_family: Option<String>,
}

impl Default for FontSystemConfig {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            locale: sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string()),
            serif_family: None,
            sans_serif_family: None,
            monospace_family: None,
        }
    }
}

impl FontSystemConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to load system fonts on initialization.
    pub fn load_system_fonts(mut self, load: bool) -> Self {
        self.load_system_fonts = load;
        self
    }

    /// Set the locale for text shaping.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn serif_family(mut self, family: impl Into<String>) -> Self {
        self.serif_family = Some(family.into());
        self
    }

    pub fn sans_serif_family(mut self, family: impl Into<String>) -> Self {
        self.sans_serif_family = Some(family.into());
        self
    }

    pub fn monospace_family(mut self, family: impl Into<String>) -> Self {
        self.monospace_family = Some(family.into());
        self
    }
}

/// Owns the font database used for measuring text.
///
/// Wraps cosmic-text's `FontSystem`. It is not `Sync`;
/// [`FontMetricsProvider`](crate::FontMetricsProvider) keeps it behind a
/// mutex.
pub struct FontSystem {
    inner: cosmic_text::FontSystem,
}

impl FontSystem {
    /// Create a font system that loads all system fonts.
    ///
    /// Loading system fonts may take around a second.
    pub fn new() -> Self {
        Self::with_config(FontSystemConfig::default())
    }

    /// Create a font system with custom configuration.
    pub fn with_config(config: FontSystemConfig) -> Self {
        let mut inner = if config.load_system_fonts {
            cosmic_text::FontSystem::new()
        } else {
            let db = fontdb::Database::new();
            cosmic_text::FontSystem::new_with_locale_and_db(config.locale.clone(), db)
        };

        let db = inner.db_mut();
        if let Some(ref family) = config.serif_family {
            db.set_serif_family(family);
        }
        if let Some(ref family) = config.sans_serif_family {
            db.set_sans_serif_family(family);
        }
        if let Some(ref family) = config.monospace_family {
            db.set_monospace_family(family);
        }

        tracing::debug!(faces = inner.db().len(), "font system initialized");
        Self { inner }
    }

    /// Get a mutable reference to the underlying cosmic-text font system.
    pub fn inner_mut(&mut self) -> &mut cosmic_text::FontSystem {
        &mut self.inner
    }

    /// Load a font file from disk.
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<(), FontLoadError> {
        let path = path.as_ref();
        self.inner
            .db_mut()
            .load_font_file(path)
            .map_err(|e| FontLoadError::IoError(format!("{}: {e}", path.display())))
    }

    /// Load font data from memory.
    ///
    /// The data should be the raw contents of a TTF, OTF, TTC, or OTC file.
    /// Fails if no face could be parsed from it.
    pub fn load_font_data(&mut self, data: Vec<u8>) -> Result<(), FontLoadError> {
        let before = self.face_count();
        self.inner.db_mut().load_font_data(data);
        if self.face_count() == before {
            return Err(FontLoadError::InvalidFormat(
                "no font faces found in data".to_string(),
            ));
        }
        Ok(())
    }

    /// Load all fonts from a directory, recursively.
    pub fn load_fonts_dir(&mut self, path: impl AsRef<Path>) {
        self.inner.db_mut().load_fonts_dir(path);
    }

    /// Get the number of loaded font faces.
    pub fn face_count(&self) -> usize {
        self.inner.db().len()
    }

    /// Check if a font family exists in the database.
    pub fn has_family(&self, family: &str) -> bool {
        self.inner
            .db()
            .faces()
            .any(|face| face.families.iter().any(|(name, _)| name == family))
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSystem")
            .field("face_count", &self.face_count())
            .finish()
    }
}

/// Error type for font loading operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FontLoadError {
    /// An I/O error occurred while loading the font.
    #[error("I/O error: {0}")]
    IoError(String),
    /// The font file format is invalid or unsupported.
    #[error("Invalid font format: {0}")]
    InvalidFormat(String),
}
