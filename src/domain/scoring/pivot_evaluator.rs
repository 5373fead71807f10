//! Pivot Point Evaluator - ratio, risk tier and complexity tax.

use serde::{Deserialize, Serialize};

/// Pivot Point below which an architecture is disqualified.
pub const DISQUALIFY_THRESHOLD: f64 = 0.5;

/// Pivot Point at which an architecture becomes viable.
pub const VIABLE_THRESHOLD: f64 = 1.0;

/// Risk tier derived from the Pivot Point. Ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Critical,
    Warning,
    Caution,
    Good,
    Excellent,
}

impl RiskTier {
    /// Classifies a Pivot Point. Intervals are half-open, lower bound inclusive.
    pub fn from_pivot_point(pivot_point: f64) -> Self {
        if pivot_point < 0.5 {
            RiskTier::Critical
        } else if pivot_point < 0.8 {
            RiskTier::Warning
        } else if pivot_point < 1.0 {
            RiskTier::Caution
        } else if pivot_point < 1.5 {
            RiskTier::Good
        } else {
            RiskTier::Excellent
        }
    }

    /// Cost inflation applied as a penalty for a low Pivot Point.
    pub fn complexity_tax(&self) -> f64 {
        match self {
            RiskTier::Critical => 2.5,
            RiskTier::Warning => 1.8,
            RiskTier::Caution => 1.3,
            RiskTier::Good | RiskTier::Excellent => 1.0,
        }
    }

    /// Delivery timeline inflation. Has its own table, separate from cost.
    pub fn timeline_tax(&self) -> f64 {
        match self {
            RiskTier::Critical => 2.0,
            RiskTier::Warning => 1.5,
            RiskTier::Caution => 1.2,
            RiskTier::Good | RiskTier::Excellent => 1.0,
        }
    }

    pub fn persona(&self) -> Persona {
        match self {
            RiskTier::Critical | RiskTier::Warning => Persona::Architect,
            RiskTier::Caution | RiskTier::Good => Persona::Consultant,
            RiskTier::Excellent => Persona::Cto,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Critical => "critical",
            RiskTier::Warning => "warning",
            RiskTier::Caution => "caution",
            RiskTier::Good => "good",
            RiskTier::Excellent => "excellent",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "critical" => Some(RiskTier::Critical),
            "warning" => Some(RiskTier::Warning),
            "caution" => Some(RiskTier::Caution),
            "good" => Some(RiskTier::Good),
            "excellent" => Some(RiskTier::Excellent),
            _ => None,
        }
    }
}

/// Voice the advisory output is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Architect,
    Consultant,
    Cto,
}

/// Ratio, tier and tax for one (TCS, ACI) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotEvaluation {
    pub raw_pivot_point: f64,
    pub cnf: f64,
    pub pivot_point: f64,
    pub risk_tier: RiskTier,
    pub complexity_tax_multiplier: f64,
}

pub struct PivotPointEvaluator;

impl PivotPointEvaluator {
    /// Computes `(tcs / aci) × cnf` and classifies it.
    ///
    /// Pass `cnf = 1.0` for the unnormalized ratio.
    pub fn evaluate(tcs: f64, aci: f64, cnf: f64) -> PivotEvaluation {
        let raw_pivot_point = tcs / aci;
        let pivot_point = raw_pivot_point * cnf;
        let risk_tier = RiskTier::from_pivot_point(pivot_point);

        PivotEvaluation {
            raw_pivot_point,
            cnf,
            pivot_point,
            risk_tier,
            complexity_tax_multiplier: risk_tier.complexity_tax(),
        }
    }

    /// Cost tax for a Pivot Point.
    pub fn complexity_tax(pivot_point: f64) -> f64 {
        RiskTier::from_pivot_point(pivot_point).complexity_tax()
    }

    /// Timeline tax for a Pivot Point.
    pub fn timeline_tax(pivot_point: f64) -> f64 {
        RiskTier::from_pivot_point(pivot_point).timeline_tax()
    }
}
