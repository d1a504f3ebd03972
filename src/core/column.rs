//! The indicator column of a file tree.
//!
//! [`IndicatorColumn`] is what a tree renderer talks to: it owns the resolver and the
//! configuration and turns each [`Candidate`] into a fixed-width, left-justified
//! [`Label`] holding either the category glyph or blanks.

use crate::core::colors::paint;
use crate::core::config::Config;
use crate::core::git::{GitRunner, SystemGit};
use crate::core::indicator::IndicatorCategory;
use crate::core::resolver::{Candidate, IndicatorResolver};
use colored::ColoredString;

/// Rendered cell of the indicator column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Glyph or empty, padded to the column width
    pub text: String,
    pub category: Option<IndicatorCategory>,
}

impl Label {
    /// The label text in the category's configured color
    pub fn paint(&self, config: &Config) -> ColoredString {
        let color = self
            .category
            .and_then(|category| config.style(category).color.as_deref());
        paint(&self.text, color)
    }
}

pub struct IndicatorColumn<G = SystemGit> {
    resolver: IndicatorResolver<G>,
    config: Config,
}

impl<G: GitRunner + Clone> IndicatorColumn<G> {
    pub fn new(git: G, config: Config) -> Self {
        IndicatorColumn {
            resolver: IndicatorResolver::new(git, config.show_ignored),
            config,
        }
    }
}

impl<G: GitRunner> IndicatorColumn<G> {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn length(&self) -> usize {
        self.config.column_length
    }

    pub fn label(&mut self, candidate: &Candidate) -> Label {
        let category = self.resolver.resolve(candidate);
        let glyph = category
            .map(|category| self.config.style(category).glyph.as_str())
            .unwrap_or("");

        Label {
            text: format!("{glyph:<width$}", width = self.config.column_length),
            category,
        }
    }
}
