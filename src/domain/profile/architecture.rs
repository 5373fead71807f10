//! Architecture styles under evaluation.

use serde::{Deserialize, Serialize};

use super::RawInput;

/// One of the four architecture styles the engine compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchitectureStyle {
    #[default]
    Monolith,
    Serverless,
    Microservices,
    Hybrid,
}

impl ArchitectureStyle {
    /// All styles in canonical evaluation order.
    pub const ALL: [ArchitectureStyle; 4] = [
        ArchitectureStyle::Monolith,
        ArchitectureStyle::Serverless,
        ArchitectureStyle::Microservices,
        ArchitectureStyle::Hybrid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ArchitectureStyle::Monolith => "monolith",
            ArchitectureStyle::Serverless => "serverless",
            ArchitectureStyle::Microservices => "microservices",
            ArchitectureStyle::Hybrid => "hybrid",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ArchitectureStyle::Monolith => "Monolith",
            ArchitectureStyle::Serverless => "Serverless",
            ArchitectureStyle::Microservices => "Microservices",
            ArchitectureStyle::Hybrid => "Hybrid",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|a| a.label() == label)
    }

    /// Resolves any raw input; unknown styles score as a monolith.
    pub fn parse_lenient(raw: &RawInput) -> Self {
        let parsed = match raw {
            RawInput::Label(label) => Self::from_label(label),
            RawInput::Number(_) | RawInput::Other(_) => None,
        };
        parsed.unwrap_or_else(|| {
            tracing::debug!(?raw, "unrecognized architecture, using monolith");
            Self::default()
        })
    }
}

impl std::fmt::Display for ArchitectureStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
