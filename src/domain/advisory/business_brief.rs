//! Persona-based business brief for a known Pivot Point.
//!
//! The brief is written in the voice of the tier's persona: an architect for
//! critical and warning tiers, a consultant for caution and good, a CTO for
//! excellent.

use serde::{Deserialize, Serialize};

use crate::domain::profile::ArchitectureStyle;
use crate::domain::scoring::{Persona, RiskTier};

/// Monthly cost of one developer used as the cost baseline.
pub const MONTHLY_COST_PER_DEVELOPER: f64 = 10_000.0;

/// Inputs for a brief. Team size and timeline are numeric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BriefRequest {
    pub pivot_point: f64,
    pub headcount: f64,
    pub timeline_months: u32,
    pub architecture: ArchitectureStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAnalysis {
    pub monthly_cost: u64,
    pub yearly_impact: u64,
    pub alternative_savings: u64,
    pub reinvestment_opportunities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessBrief {
    pub risk_tier: RiskTier,
    pub persona: Persona,
    pub primary: String,
    pub alternatives: Vec<String>,
    pub migration_path: Vec<String>,
    pub business_impact: String,
    pub timeline: String,
    pub cost_analysis: CostAnalysis,
}

pub struct BusinessBriefWriter;

impl BusinessBriefWriter {
    /// Writes the brief. The tier is always derived from the Pivot Point.
    pub fn write(request: &BriefRequest) -> BusinessBrief {
        let tier = RiskTier::from_pivot_point(request.pivot_point);
        let tax = tier.complexity_tax();
        let pivot = format!("{:.2}", request.pivot_point);

        let (primary, alternatives, migration_path, business_impact) = match tier {
            RiskTier::Critical => {
                let first_phase_end = request.timeline_months.min(6);
                (
                    format!(
                        "MATHEMATICAL REALITY CHECK: Your Pivot Point of {pivot} indicates severe architectural overload. {} will cost you {tax}x in development time and budget.",
                        request.architecture.display_name()
                    ),
                    strings(&[
                        "Start with a well-structured monolith",
                        "Build modular boundaries for future extraction",
                        "Focus on business logic over infrastructure complexity",
                    ]),
                    vec![
                        format!(
                            "Phase 1 (Months 1-{first_phase_end}): Build monolith with clear service boundaries"
                        ),
                        format!(
                            "Phase 2 (Month {}+): Extract first service when team > 8 developers",
                            first_phase_end + 1
                        ),
                        "Phase 3: Full migration when Pivot Point > 1.5".to_string(),
                    ],
                    "While competitors ship features weekly, your team will struggle with monthly releases. This architectural choice could delay your MVP by 4-6 months.".to_string(),
                )
            }
            RiskTier::Warning | RiskTier::Caution => (
                format!(
                    "COMPLEXITY TAX APPLIES: Your choice incurs a {tax}x development multiplier. Proceed with caution and strong monitoring."
                ),
                strings(&[
                    "Consider hybrid approach with gradual complexity",
                    "Invest in team training and tooling",
                    "Establish clear operational procedures",
                ]),
                Vec::new(),
                format!(
                    "Feature velocity will decrease by ~{}%. Budget an additional {} developer-months for the first year.",
                    Self::velocity_loss_percent(tax),
                    (request.headcount * 2.0 * tax).round()
                ),
            ),
            RiskTier::Good | RiskTier::Excellent => (
                format!(
                    "SUSTAINABLE CHOICE: Your Pivot Point of {pivot} indicates your team can handle this architecture effectively."
                ),
                strings(&[
                    "Establish monitoring and success metrics",
                    "Plan for scaling triggers",
                    "Document architectural decisions",
                ]),
                Vec::new(),
                "This choice supports your business goals with manageable complexity. Expected feature delivery remains on target.".to_string(),
            ),
        };

        BusinessBrief {
            risk_tier: tier,
            persona: tier.persona(),
            primary,
            alternatives,
            migration_path,
            business_impact,
            timeline: Self::timeline(request.timeline_months, tax),
            cost_analysis: Self::cost_analysis(request.headcount, tax),
        }
    }

    /// Velocity loss is half the tax overhead: 40% at warning, 15% at caution.
    pub fn velocity_loss_percent(tax: f64) -> u32 {
        ((tax - 1.0) * 50.0).round().max(0.0) as u32
    }

    /// Monthly and yearly cost at the given tax, and what the overhead could
    /// fund instead.
    pub fn cost_analysis(headcount: f64, tax: f64) -> CostAnalysis {
        let base = headcount * MONTHLY_COST_PER_DEVELOPER;
        let overhead = tax - 1.0;

        CostAnalysis {
            monthly_cost: (base * tax).round() as u64,
            yearly_impact: (base * tax * 12.0).round() as u64,
            alternative_savings: (base * overhead * 12.0).round() as u64,
            reinvestment_opportunities: vec![
                format!(
                    "{} additional developer-months",
                    (overhead * headcount * 2.0).round()
                ),
                format!("${} for customer acquisition", (base * overhead * 6.0).round()),
                format!(
                    "{} major features that could be built instead",
                    (overhead * 4.0).round()
                ),
            ],
        }
    }

    pub fn timeline(months: u32, tax: f64) -> String {
        let adjusted = (months as f64 * tax).round() as u32;
        format!(
            "Expected delivery: {adjusted} months ({} month delay due to complexity)",
            adjusted.saturating_sub(months)
        )
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(pivot_point: f64) -> BriefRequest {
        BriefRequest {
            pivot_point,
            headcount: 4.0,
            timeline_months: 6,
            architecture: ArchitectureStyle::Microservices,
        }
    }

    #[test]
    fn critical_brief_has_migration_path() {
        let brief = BusinessBriefWriter::write(&request(0.15));
        assert_eq!(brief.risk_tier, RiskTier::Critical);
        assert_eq!(brief.persona, Persona::Architect);
        assert!(brief.primary.contains("0.15"));
        assert_eq!(brief.alternatives.len(), 3);
        assert_eq!(
            brief.migration_path,
            vec![
                "Phase 1 (Months 1-6): Build monolith with clear service boundaries".to_string(),
                "Phase 2 (Month 7+): Extract first service when team > 8 developers".to_string(),
                "Phase 3: Full migration when Pivot Point > 1.5".to_string(),
            ]
        );
    }

    #[test]
    fn short_timeline_shortens_first_phase() {
        let brief = BusinessBriefWriter::write(&BriefRequest {
            timeline_months: 3,
            ..request(0.1)
        });
        assert!(brief.migration_path[0].starts_with("Phase 1 (Months 1-3)"));
        assert!(brief.migration_path[1].starts_with("Phase 2 (Month 4+)"));
    }

    #[test]
    fn critical_cost_analysis() {
        let brief = BusinessBriefWriter::write(&request(0.15));
        let cost = &brief.cost_analysis;
        assert_eq!(cost.monthly_cost, 100_000);
        assert_eq!(cost.yearly_impact, 1_200_000);
        assert_eq!(cost.alternative_savings, 720_000);
        assert_eq!(
            cost.reinvestment_opportunities,
            vec![
                "12 additional developer-months".to_string(),
                "$360000 for customer acquisition".to_string(),
                "6 major features that could be built instead".to_string(),
            ]
        );
        assert_eq!(
            brief.timeline,
            "Expected delivery: 15 months (9 month delay due to complexity)"
        );
    }

    #[test]
    fn warning_brief_budgets_extra_developer_months() {
        let brief = BusinessBriefWriter::write(&request(0.6));
        assert_eq!(brief.risk_tier, RiskTier::Warning);
        assert!(brief.primary.contains("1.8x"));
        assert!(brief.business_impact.contains("decrease by ~40%"));
        assert!(brief.business_impact.contains("14 developer-months"));
        assert!(brief.migration_path.is_empty());
    }

    #[test]
    fn caution_uses_its_own_tax() {
        let brief = BusinessBriefWriter::write(&request(0.9));
        assert_eq!(brief.risk_tier, RiskTier::Caution);
        assert_eq!(brief.persona, Persona::Consultant);
        assert!(brief.primary.contains("1.3x"));
        assert_eq!(brief.cost_analysis.monthly_cost, 52_000);
        assert!(brief.business_impact.contains("decrease by ~15%"));
    }

    #[test]
    fn velocity_loss_is_half_the_overhead() {
        assert_eq!(BusinessBriefWriter::velocity_loss_percent(1.8), 40);
        assert_eq!(BusinessBriefWriter::velocity_loss_percent(1.3), 15);
        assert_eq!(BusinessBriefWriter::velocity_loss_percent(1.0), 0);
    }

    #[test]
    fn sustainable_choice_has_no_overhead() {
        let brief = BusinessBriefWriter::write(&request(2.0));
        assert_eq!(brief.risk_tier, RiskTier::Excellent);
        assert_eq!(brief.persona, Persona::Cto);
        assert_eq!(brief.cost_analysis.monthly_cost, 40_000);
        assert_eq!(brief.cost_analysis.alternative_savings, 0);
        assert_eq!(
            brief.timeline,
            "Expected delivery: 6 months (0 month delay due to complexity)"
        );
    }
}
