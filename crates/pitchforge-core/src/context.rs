//! The user-supplied startup description.
//!
//! Seven fields are required before a full deck can be generated or exported;
//! the optional fields enrich prompts and the title slide when present.

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

/// Names of the required context fields, in canonical field order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "startup_name",
    "problem",
    "solution",
    "target_audience",
    "industry",
    "revenue_model",
    "stage",
];

/// Tagline used on the title slide when the context does not provide one.
pub const DEFAULT_TAGLINE: &str = "Transforming Ideas into Reality";

/// Structured description of the startup being pitched.
///
/// Deserializes from the flat JSON object the API receives; unknown optional
/// fields simply stay `None`, and missing required fields deserialize as
/// empty strings so that [`validate`](StartupContext::validate) can report
/// them all at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupContext {
    /// Company name.
    pub startup_name: String,
    /// The problem the company solves.
    pub problem: String,
    /// The company's solution.
    pub solution: String,
    /// Who the product serves.
    pub target_audience: String,
    /// Industry or market vertical.
    pub industry: String,
    /// How the company makes money.
    pub revenue_model: String,
    /// Current stage (idea, MVP, growth, ...).
    pub stage: String,

    /// One-line tagline for the title slide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Founding team summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Long-term vision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    /// Unique selling proposition. Accepts the legacy `USP` spelling.
    #[serde(alias = "USP", skip_serializing_if = "Option::is_none")]
    pub usp: Option<String>,
    /// Known competitors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition: Option<String>,
}

impl StartupContext {
    /// Create a context with only the startup name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            startup_name: name.into(),
            ..Self::default()
        }
    }

    /// Required fields that are missing or blank, in canonical field order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.required_values()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Check that every required field is present and non-blank.
    ///
    /// Reports every offender at once rather than stopping at the first.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DeckError::MissingFields {
                fields: missing.into_iter().map(String::from).collect(),
            })
        }
    }

    /// Tagline for the title slide, falling back to [`DEFAULT_TAGLINE`].
    pub fn tagline_or_default(&self) -> &str {
        self.tagline
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_TAGLINE)
    }

    /// Render the context as a `Label: value` block for prompts.
    ///
    /// Required fields are always rendered; optional fields are omitted
    /// entirely when absent or blank. Every line ends with a newline.
    pub fn prompt_block(&self) -> String {
        let mut block = String::new();
        for (label, value) in self.required_values_labeled() {
            push_field(&mut block, label, value);
        }
        for (label, value) in [
            ("Tagline", &self.tagline),
            ("Team", &self.team),
            ("Vision", &self.vision),
            ("USP", &self.usp),
            ("Competition", &self.competition),
        ] {
            if let Some(value) = value {
                if !value.trim().is_empty() {
                    push_field(&mut block, label, value);
                }
            }
        }
        block
    }

    fn required_values(&self) -> [(&'static str, &str); 7] {
        [
            ("startup_name", self.startup_name.as_str()),
            ("problem", self.problem.as_str()),
            ("solution", self.solution.as_str()),
            ("target_audience", self.target_audience.as_str()),
            ("industry", self.industry.as_str()),
            ("revenue_model", self.revenue_model.as_str()),
            ("stage", self.stage.as_str()),
        ]
    }

    fn required_values_labeled(&self) -> [(&'static str, &str); 7] {
        [
            ("Startup Name", self.startup_name.as_str()),
            ("Problem", self.problem.as_str()),
            ("Solution", self.solution.as_str()),
            ("Target Audience", self.target_audience.as_str()),
            ("Industry", self.industry.as_str()),
            ("Revenue Model", self.revenue_model.as_str()),
            ("Stage", self.stage.as_str()),
        ]
    }
}

fn push_field(block: &mut String, label: &str, value: &str) {
    block.push_str(label);
    block.push_str(": ");
    block.push_str(value);
    block.push('\n');
}
