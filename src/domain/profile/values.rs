//! Categorical team inputs.
//!
//! Every input type has a lenient `parse_lenient` constructor: unknown labels
//! resolve to the neutral default instead of failing, so callers holding
//! arbitrary form values can always be scored.

use serde::{Deserialize, Serialize};

/// Raw categorical input as it arrives from a caller. Anything that is not a
/// number or a string lands in `Other` and resolves to the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Number(f64),
    Label(String),
    Other(serde_json::Value),
}

impl RawInput {
    /// Numeric reading of the input: finite numbers and numeric strings.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawInput::Number(n) if n.is_finite() => Some(*n),
            RawInput::Label(label) => parse_number(label),
            _ => None,
        }
    }
}

impl From<&str> for RawInput {
    fn from(label: &str) -> Self {
        RawInput::Label(label.to_string())
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Number(value)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Team size
// ════════════════════════════════════════════════════════════════════════════════

/// Team size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TeamSizeBucket {
    #[serde(rename = "1")]
    Solo,
    #[serde(rename = "2")]
    Pair,
    #[default]
    #[serde(rename = "3-5")]
    Small,
    #[serde(rename = "6-10")]
    Medium,
    #[serde(rename = "11-20")]
    Large,
    #[serde(rename = "20+")]
    Enterprise,
}

impl TeamSizeBucket {
    pub const ALL: [TeamSizeBucket; 6] = [
        TeamSizeBucket::Solo,
        TeamSizeBucket::Pair,
        TeamSizeBucket::Small,
        TeamSizeBucket::Medium,
        TeamSizeBucket::Large,
        TeamSizeBucket::Enterprise,
    ];

    /// Returns the wire label for this bucket.
    pub fn label(&self) -> &'static str {
        match self {
            TeamSizeBucket::Solo => "1",
            TeamSizeBucket::Pair => "2",
            TeamSizeBucket::Small => "3-5",
            TeamSizeBucket::Medium => "6-10",
            TeamSizeBucket::Large => "11-20",
            TeamSizeBucket::Enterprise => "20+",
        }
    }

    /// Parses a bucket label, returning `None` for unknown labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label.trim())
    }

    /// Maps a raw headcount to the bucket that contains it.
    pub fn from_headcount(headcount: f64) -> Self {
        if headcount <= 1.0 {
            TeamSizeBucket::Solo
        } else if headcount <= 2.0 {
            TeamSizeBucket::Pair
        } else if headcount <= 5.0 {
            TeamSizeBucket::Small
        } else if headcount <= 10.0 {
            TeamSizeBucket::Medium
        } else if headcount <= 20.0 {
            TeamSizeBucket::Large
        } else {
            TeamSizeBucket::Enterprise
        }
    }

    /// Resolves any raw input, falling back to the default bucket.
    pub fn parse_lenient(raw: &RawInput) -> Self {
        match raw {
            RawInput::Number(n) if n.is_finite() => Self::from_headcount(*n),
            RawInput::Label(label) => Self::from_label(label)
                .or_else(|| parse_number(label).map(Self::from_headcount))
                .unwrap_or_else(|| fallback("team_size", label, Self::default())),
            RawInput::Number(n) => fallback("team_size", &n.to_string(), Self::default()),
            RawInput::Other(value) => fallback("team_size", &value.to_string(), Self::default()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Experience
// ════════════════════════════════════════════════════════════════════════════════

/// Team experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    #[default]
    Mixed,
    Senior,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Junior,
        ExperienceLevel::Mixed,
        ExperienceLevel::Senior,
        ExperienceLevel::Expert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mixed => "mixed",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Expert => "expert",
        }
    }

    /// Human readable description used in narratives.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior (0-2 years)",
            ExperienceLevel::Mixed => "Mixed Experience",
            ExperienceLevel::Senior => "Senior (5+ years)",
            ExperienceLevel::Expert => "Expert/Architect Level",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|e| e.label() == label)
    }

    pub fn parse_lenient(raw: &RawInput) -> Self {
        match raw {
            RawInput::Label(label) => Self::from_label(label)
                .unwrap_or_else(|| fallback("experience", label, Self::default())),
            RawInput::Number(n) => fallback("experience", &n.to_string(), Self::default()),
            RawInput::Other(value) => fallback("experience", &value.to_string(), Self::default()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Timeline
// ════════════════════════════════════════════════════════════════════════════════

/// Delivery timeline bucket in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimelineBucket {
    #[serde(rename = "1")]
    OneMonth,
    #[serde(rename = "3")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6")]
    SixMonths,
    #[serde(rename = "12")]
    TwelveMonths,
    #[serde(rename = "18+")]
    EighteenPlus,
}

impl TimelineBucket {
    pub const ALL: [TimelineBucket; 5] = [
        TimelineBucket::OneMonth,
        TimelineBucket::ThreeMonths,
        TimelineBucket::SixMonths,
        TimelineBucket::TwelveMonths,
        TimelineBucket::EighteenPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimelineBucket::OneMonth => "1",
            TimelineBucket::ThreeMonths => "3",
            TimelineBucket::SixMonths => "6",
            TimelineBucket::TwelveMonths => "12",
            TimelineBucket::EighteenPlus => "18+",
        }
    }

    /// Pressure label shown alongside the bucket.
    pub fn pressure_name(&self) -> &'static str {
        match self {
            TimelineBucket::OneMonth => "Crisis Mode",
            TimelineBucket::ThreeMonths => "High Pressure",
            TimelineBucket::SixMonths => "Balanced",
            TimelineBucket::TwelveMonths => "Strategic",
            TimelineBucket::EighteenPlus => "Long-term Planning",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label.trim())
    }

    /// Maps a month count to the largest bucket whose lower bound it reaches.
    pub fn from_months(months: f64) -> Self {
        if months < 3.0 {
            TimelineBucket::OneMonth
        } else if months < 6.0 {
            TimelineBucket::ThreeMonths
        } else if months < 12.0 {
            TimelineBucket::SixMonths
        } else if months < 18.0 {
            TimelineBucket::TwelveMonths
        } else {
            TimelineBucket::EighteenPlus
        }
    }

    pub fn parse_lenient(raw: &RawInput) -> Self {
        match raw {
            RawInput::Number(n) if n.is_finite() => Self::from_months(*n),
            RawInput::Label(label) => Self::from_label(label)
                .or_else(|| parse_number(label).map(Self::from_months))
                .unwrap_or_else(|| fallback("timeline", label, Self::default())),
            RawInput::Number(n) => fallback("timeline", &n.to_string(), Self::default()),
            RawInput::Other(value) => fallback("timeline", &value.to_string(), Self::default()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Scale
// ════════════════════════════════════════════════════════════════════════════════

/// Scale ambition of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleCategory {
    Utility,
    #[default]
    Saas,
    Consumer,
    Platform,
}

impl ScaleCategory {
    pub const ALL: [ScaleCategory; 4] = [
        ScaleCategory::Utility,
        ScaleCategory::Saas,
        ScaleCategory::Consumer,
        ScaleCategory::Platform,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScaleCategory::Utility => "utility",
            ScaleCategory::Saas => "saas",
            ScaleCategory::Consumer => "consumer",
            ScaleCategory::Platform => "platform",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScaleCategory::Utility => "Enterprise Utility (1K-100K users)",
            ScaleCategory::Saas => "SaaS Product (10K-1M users)",
            ScaleCategory::Consumer => "Consumer App (100K-10M users)",
            ScaleCategory::Platform => "Platform/Marketplace (1M+ users)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Maps an expected user count to a scale category.
    pub fn from_user_count(users: f64) -> Self {
        if users < 100_000.0 {
            ScaleCategory::Utility
        } else if users < 1_000_000.0 {
            ScaleCategory::Saas
        } else if users < 10_000_000.0 {
            ScaleCategory::Consumer
        } else {
            ScaleCategory::Platform
        }
    }

    pub fn parse_lenient(raw: &RawInput) -> Self {
        match raw {
            RawInput::Number(n) if n.is_finite() => Self::from_user_count(*n),
            RawInput::Label(label) => Self::from_label(label)
                .or_else(|| parse_number(label).map(Self::from_user_count))
                .unwrap_or_else(|| fallback("scale", label, Self::default())),
            RawInput::Number(n) => fallback("scale", &n.to_string(), Self::default()),
            RawInput::Other(value) => fallback("scale", &value.to_string(), Self::default()),
        }
    }
}

/// Workload shape inferred from scale ambitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadType {
    Steady,
    Mixed,
    Bursty,
}

impl WorkloadType {
    pub fn label(&self) -> &'static str {
        match self {
            WorkloadType::Steady => "steady",
            WorkloadType::Mixed => "mixed",
            WorkloadType::Bursty => "bursty",
        }
    }
}

fn parse_number(label: &str) -> Option<f64> {
    label.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn fallback<T: std::fmt::Debug>(field: &'static str, raw: &str, default: T) -> T {
    tracing::debug!(field, raw, ?default, "unrecognized input, using neutral default");
    default
}
