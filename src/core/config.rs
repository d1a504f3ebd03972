//! Indicator column configuration.
//!
//! The configuration is a JSON file holding one glyph (and optional terminal color) per
//! [`IndicatorCategory`], the column width and whether ignored entries are queried.
//! The indicator table has a fixed key set: unknown category names are rejected when
//! parsing, missing ones take their defaults, and the whole table is validated on load.

use crate::core::colors::parse_color;
use crate::core::dirs::get_config_directory;
use crate::core::error::{GitTreeStatusError, Result};
use crate::core::indicator::IndicatorCategory;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IndicatorStyle {
    pub glyph: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl IndicatorStyle {
    fn new(glyph: &str, color: Option<&str>) -> Self {
        IndicatorStyle {
            glyph: glyph.to_string(),
            color: color.map(str::to_string),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "PascalCase", deny_unknown_fields)]
pub struct Indicators {
    pub modified: IndicatorStyle,
    pub staged: IndicatorStyle,
    pub untracked: IndicatorStyle,
    pub renamed: IndicatorStyle,
    pub unmerged: IndicatorStyle,
    pub ignored: IndicatorStyle,
    pub unknown: IndicatorStyle,
}

impl Indicators {
    pub fn get(&self, category: IndicatorCategory) -> &IndicatorStyle {
        match category {
            IndicatorCategory::Modified => &self.modified,
            IndicatorCategory::Staged => &self.staged,
            IndicatorCategory::Untracked => &self.untracked,
            IndicatorCategory::Renamed => &self.renamed,
            IndicatorCategory::Unmerged => &self.unmerged,
            IndicatorCategory::Ignored => &self.ignored,
            IndicatorCategory::Unknown => &self.unknown,
        }
    }
}

impl Default for Indicators {
    fn default() -> Self {
        Self {
            modified: IndicatorStyle::new("✹", Some("yellow")),
            staged: IndicatorStyle::new("✚", Some("green")),
            untracked: IndicatorStyle::new("✭", None),
            renamed: IndicatorStyle::new("➜", Some("yellow")),
            unmerged: IndicatorStyle::new("═", Some("red")),
            ignored: IndicatorStyle::new("☒", None),
            unknown: IndicatorStyle::new("?", None),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub indicators: Indicators,
    /// Width of the indicator column in characters
    pub column_length: usize,
    /// Also query ignored entries (`git status --ignored`)
    pub show_ignored: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indicators: Indicators::default(),
            column_length: 1,
            show_ignored: false,
        }
    }
}

impl Config {
    /// Location of the user configuration file
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE))
    }

    /// Load the user configuration file, or the defaults when there is none
    pub fn load_or_default() -> Result<Self> {
        let config_file = Self::default_path()?;

        if config_file.exists() {
            Self::load(&config_file)
        } else {
            log::debug!(
                "No config file at {}, using defaults",
                config_file.display()
            );
            Ok(Self::default())
        }
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GitTreeStatusError::config_read_failed(path, e))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| GitTreeStatusError::config_parse_failed(path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Check every glyph fits the column and every color is a known terminal color
    pub fn validate(&self) -> Result<()> {
        for category in IndicatorCategory::ALL {
            let style = self.indicators.get(category);

            let width = style.glyph.chars().count();
            if width == 0 {
                return Err(GitTreeStatusError::EmptyGlyph { category });
            }
            if width > self.column_length {
                return Err(GitTreeStatusError::glyph_too_wide(
                    category,
                    width,
                    self.column_length,
                ));
            }

            if let Some(color) = &style.color {
                if parse_color(color).is_none() {
                    return Err(GitTreeStatusError::invalid_color(category, color));
                }
            }
        }

        Ok(())
    }

    pub fn style(&self, category: IndicatorCategory) -> &IndicatorStyle {
        self.indicators.get(category)
    }
}
