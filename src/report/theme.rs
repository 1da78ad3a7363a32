//! Report styling.

use console::Style;

use crate::evaluator::{Classification, Outcome};

/// Styles used by the human-readable formatters.
#[derive(Debug, Clone)]
pub struct ReportTheme {
    /// Passed checks and the `Good` classification (green).
    pub success: Style,
    /// Recommended failures (orange).
    pub warning: Style,
    /// Critical failures (red bold).
    pub error: Style,
    /// Secondary text (dim).
    pub dim: Style,
    /// Headers (magenta bold).
    pub header: Style,
    /// Check titles (bold).
    pub title: Style,
    /// Inline names and values (italic).
    pub code: Style,
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
            title: Style::new().bold(),
            code: Style::new().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            title: Style::new(),
            code: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Style for a classification headline.
    pub fn classification(&self, classification: Classification) -> &Style {
        match classification {
            Classification::NeedsImprovement => &self.error,
            Classification::GoodWithRecommendations => &self.warning,
            Classification::Good | Classification::NoChecksConfigured => &self.success,
        }
    }

    /// Icon and style for a single result.
    pub fn outcome(&self, outcome: Outcome) -> (&'static str, &Style) {
        match outcome {
            Outcome::Good => ("✓", &self.success),
            Outcome::Critical => ("✗", &self.error),
            Outcome::Recommended => ("!", &self.warning),
        }
    }
}

/// Whether colors should be used for the current stdout.
pub fn should_use_colors(no_color_flag: bool) -> bool {
    // NO_COLOR convention (https://no-color.org/)
    if no_color_flag || std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    console::Term::stdout().is_term()
}
