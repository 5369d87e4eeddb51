//! The ten canonical pitch-deck sections.
//!
//! Everything that varies per section is derived from this module: the wire
//! name used in API payloads and deck JSON keys, the human-readable slide
//! title, and the rule for laying out the slide body. Keeping the table in
//! one place means the generation loop, the renderer and the HTTP layer can
//! never disagree about what a deck contains.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeckError;

/// How a section's text is laid out on its slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    /// Each non-blank line of content becomes one level-0 bullet.
    Bulleted,
    /// The content is rendered as a single text block; embedded newlines
    /// become line breaks.
    Paragraph,
}

/// Identifier for one of the ten fixed deck sections.
///
/// Declaration order is the canonical deck order. `Ord` follows it, so a
/// `BTreeMap` keyed by `Section` iterates in slide order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Opening slide: startup name plus a tagline.
    Cover,
    /// The problem being solved.
    Problem,
    /// The proposed solution.
    Solution,
    /// Size and shape of the market opportunity.
    Market,
    /// What the product actually is.
    Product,
    /// How the company makes money.
    BusinessModel,
    /// Competitive landscape and differentiation.
    Competition,
    /// The founding team.
    Team,
    /// Traction and milestones to date.
    Traction,
    /// The funding ask.
    FundingNeeds,
}

impl Section {
    /// All sections in canonical deck order.
    pub const ALL: [Section; 10] = [
        Section::Cover,
        Section::Problem,
        Section::Solution,
        Section::Market,
        Section::Product,
        Section::BusinessModel,
        Section::Competition,
        Section::Team,
        Section::Traction,
        Section::FundingNeeds,
    ];

    /// Wire name used in API payloads and as the deck JSON key.
    pub fn wire_name(self) -> &'static str {
        match self {
            Section::Cover => "cover",
            Section::Problem => "problem",
            Section::Solution => "solution",
            Section::Market => "market",
            Section::Product => "product",
            Section::BusinessModel => "business_model",
            Section::Competition => "competition",
            Section::Team => "team",
            Section::Traction => "traction",
            Section::FundingNeeds => "funding_needs",
        }
    }

    /// Human-readable title shown on the section's slide.
    pub fn title(self) -> &'static str {
        match self {
            Section::Cover => "Cover Slide",
            Section::Problem => "The Problem",
            Section::Solution => "Our Solution",
            Section::Market => "Market Opportunity",
            Section::Product => "Product Overview",
            Section::BusinessModel => "Business Model",
            Section::Competition => "Competitive Advantage",
            Section::Team => "Our Team",
            Section::Traction => "Traction & Milestones",
            Section::FundingNeeds => "Investment Opportunity",
        }
    }

    /// How the section's slide body is rendered.
    pub fn body_format(self) -> BodyFormat {
        match self {
            Section::Problem | Section::Solution | Section::Market => BodyFormat::Bulleted,
            _ => BodyFormat::Paragraph,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Section {
    type Err = DeckError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.wire_name() == s)
            .ok_or_else(|| DeckError::UnknownSection {
                name: s.to_string(),
            })
    }
}
