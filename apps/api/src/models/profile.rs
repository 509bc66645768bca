use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Industries offered by the assessment form. The profile itself keeps the
/// industry as free text so older saved profiles keep loading.
pub const INDUSTRIES: &[&str] = &[
    "technology",
    "finance",
    "healthcare",
    "education",
    "marketing",
    "consulting",
];

/// Years of professional experience, as picked in the assessment form.
/// Unknown values are preserved verbatim and count as non-senior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperienceBand {
    ZeroToOne,
    TwoToThree,
    FourToFive,
    SixToTen,
    TenPlus,
    Other(String),
}

impl ExperienceBand {
    pub fn as_str(&self) -> &str {
        match self {
            ExperienceBand::ZeroToOne => "0-1",
            ExperienceBand::TwoToThree => "2-3",
            ExperienceBand::FourToFive => "4-5",
            ExperienceBand::SixToTen => "6-10",
            ExperienceBand::TenPlus => "10+",
            ExperienceBand::Other(raw) => raw,
        }
    }

    /// 4+ years. Drives the first fallback milestone.
    pub fn is_senior(&self) -> bool {
        matches!(
            self,
            ExperienceBand::FourToFive | ExperienceBand::SixToTen | ExperienceBand::TenPlus
        )
    }
}

impl From<String> for ExperienceBand {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "0-1" => ExperienceBand::ZeroToOne,
            "2-3" => ExperienceBand::TwoToThree,
            "4-5" => ExperienceBand::FourToFive,
            "6-10" => ExperienceBand::SixToTen,
            "10+" => ExperienceBand::TenPlus,
            _ => ExperienceBand::Other(raw),
        }
    }
}

impl From<ExperienceBand> for String {
    fn from(band: ExperienceBand) -> Self {
        band.as_str().to_string()
    }
}

impl fmt::Display for ExperienceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target timeframe for the transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Timeframe {
    ThreeMonths,
    SixMonths,
    OneYear,
    TwoYears,
    Other(String),
}

impl Timeframe {
    pub fn as_str(&self) -> &str {
        match self {
            Timeframe::ThreeMonths => "3-months",
            Timeframe::SixMonths => "6-months",
            Timeframe::OneYear => "1-year",
            Timeframe::TwoYears => "2-years",
            Timeframe::Other(raw) => raw,
        }
    }

    /// Human-readable timeline shown on a roadmap. Unknown values pass through.
    pub fn timeline_label(&self) -> &str {
        match self {
            Timeframe::ThreeMonths => "3 months",
            Timeframe::SixMonths => "6 months",
            Timeframe::OneYear => "12 months",
            Timeframe::TwoYears => "24 months",
            Timeframe::Other(raw) => raw,
        }
    }

    pub fn is_compressed(&self) -> bool {
        *self == Timeframe::ThreeMonths
    }
}

impl From<String> for Timeframe {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "3-months" => Timeframe::ThreeMonths,
            "6-months" => Timeframe::SixMonths,
            "1-year" => Timeframe::OneYear,
            "2-years" => Timeframe::TwoYears,
            _ => Timeframe::Other(raw),
        }
    }
}

impl From<Timeframe> for String {
    fn from(timeframe: Timeframe) -> Self {
        timeframe.as_str().to_string()
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LearningStyle {
    Structured,
    HandsOn,
    Mentorship,
    SelfPaced,
    Other(String),
}

impl LearningStyle {
    pub fn as_str(&self) -> &str {
        match self {
            LearningStyle::Structured => "structured",
            LearningStyle::HandsOn => "hands-on",
            LearningStyle::Mentorship => "mentorship",
            LearningStyle::SelfPaced => "self-paced",
            LearningStyle::Other(raw) => raw,
        }
    }
}

impl From<String> for LearningStyle {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "structured" => LearningStyle::Structured,
            "hands-on" => LearningStyle::HandsOn,
            "mentorship" => LearningStyle::Mentorship,
            "self-paced" => LearningStyle::SelfPaced,
            _ => LearningStyle::Other(raw),
        }
    }
}

impl From<LearningStyle> for String {
    fn from(style: LearningStyle) -> Self {
        style.as_str().to_string()
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the assessment wizard collects about the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub current_role: String,
    pub experience: ExperienceBand,
    pub target_role: String,
    pub industry: String,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    pub timeframe: Timeframe,
    pub learning_style: LearningStyle,
}
