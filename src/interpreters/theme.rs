use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::KritaTheme;
use crate::util::read_json_document;
use crate::validation::{DocumentValidator, ThemeValidator, ValidationIssue};

static THEME_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("theme id pattern compiles"));

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeLookup {
    Found(KritaTheme),
    NotFound,
    Invalid(Vec<ValidationIssue>),
    Unavailable(String),
}

/// Where the Krita planner finds style themes.
pub trait ThemeSource {
    fn lookup(&self, id: &str) -> ThemeLookup;
}

/// Themes stored as `<themes_dir>/<id>/theme.json`.
#[derive(Debug, Clone)]
pub struct FsThemeSource {
    themes_dir: PathBuf,
}

impl FsThemeSource {
    pub fn new(themes_dir: impl Into<PathBuf>) -> Self {
        Self {
            themes_dir: themes_dir.into(),
        }
    }
}

impl ThemeSource for FsThemeSource {
    fn lookup(&self, id: &str) -> ThemeLookup {
        // Ids become path components.
        if !THEME_ID.is_match(id) {
            return ThemeLookup::NotFound;
        }

        let path = self.themes_dir.join(id).join("theme.json");
        if !path.is_file() {
            debug!(path = %path.display(), "theme file missing");
            return ThemeLookup::NotFound;
        }

        match read_json_document(&path) {
            Ok(document) => match ThemeValidator.validate(&document) {
                Ok(theme) => ThemeLookup::Found(theme),
                Err(issues) => ThemeLookup::Invalid(issues),
            },
            Err(err) => ThemeLookup::Unavailable(err.to_string()),
        }
    }
}

/// Theme source with no themes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoThemes;

impl ThemeSource for NoThemes {
    fn lookup(&self, _id: &str) -> ThemeLookup {
        ThemeLookup::NotFound
    }
}
