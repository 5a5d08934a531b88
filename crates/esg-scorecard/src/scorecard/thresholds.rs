use serde::{Deserialize, Serialize};

/// Industries with calibrated workforce thresholds. `Other` scores against the default record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    FinancialServices,
    Manufacturing,
    Construction,
    EnergyAndUtilities,
    Healthcare,
    Retail,
    Other,
}

impl Industry {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Technology,
            Self::FinancialServices,
            Self::Manufacturing,
            Self::Construction,
            Self::EnergyAndUtilities,
            Self::Healthcare,
            Self::Retail,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::FinancialServices => "Financial Services",
            Self::Manufacturing => "Manufacturing",
            Self::Construction => "Construction",
            Self::EnergyAndUtilities => "Energy & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Retail => "Retail",
            Self::Other => "Other",
        }
    }

    /// Matches a display label (case-insensitive) or the snake_case wire name.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ordered().into_iter().find(|industry| {
            industry.label().eq_ignore_ascii_case(trimmed)
                || industry.wire_name().eq_ignore_ascii_case(trimmed)
        })
    }

    const fn wire_name(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::FinancialServices => "financial_services",
            Self::Manufacturing => "manufacturing",
            Self::Construction => "construction",
            Self::EnergyAndUtilities => "energy_and_utilities",
            Self::Healthcare => "healthcare",
            Self::Retail => "retail",
            Self::Other => "other",
        }
    }
}

pub const DEFAULT_THRESHOLD_KEY: &str = "DEFAULT";

/// Prompt entry shown before an industry is picked.
pub const INDUSTRY_PLACEHOLDER: &str = "Select Industry...";

/// True for blank input and for the selection prompt itself.
pub fn is_unselected(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(INDUSTRY_PLACEHOLDER)
}

/// Workforce cutoffs that vary by industry. Ratios are fractions, not percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndustryThresholds {
    pub div_high: f64,
    pub div_medium: f64,
    pub pay_gap_low: f64,
    pub pay_gap_medium: f64,
    pub attrition_gap_low: f64,
    pub attrition_gap_medium: f64,
}

impl IndustryThresholds {
    pub const fn default_record() -> Self {
        Self {
            div_high: 0.40,
            div_medium: 0.25,
            pay_gap_low: 0.10,
            pay_gap_medium: 0.25,
            attrition_gap_low: 0.05,
            attrition_gap_medium: 0.12,
        }
    }

    /// Calibrated record for the industry, or `None` for industries without one.
    pub const fn for_industry(industry: Industry) -> Option<Self> {
        let record = match industry {
            Industry::Technology => Self {
                div_high: 0.35,
                div_medium: 0.20,
                pay_gap_low: 0.08,
                pay_gap_medium: 0.20,
                attrition_gap_low: 0.04,
                attrition_gap_medium: 0.10,
            },
            Industry::FinancialServices => Self {
                div_high: 0.45,
                div_medium: 0.30,
                pay_gap_low: 0.10,
                pay_gap_medium: 0.22,
                attrition_gap_low: 0.06,
                attrition_gap_medium: 0.12,
            },
            Industry::Manufacturing => Self {
                div_high: 0.20,
                div_medium: 0.10,
                pay_gap_low: 0.12,
                pay_gap_medium: 0.28,
                attrition_gap_low: 0.08,
                attrition_gap_medium: 0.15,
            },
            Industry::Construction => Self {
                div_high: 0.15,
                div_medium: 0.08,
                pay_gap_low: 0.15,
                pay_gap_medium: 0.30,
                attrition_gap_low: 0.10,
                attrition_gap_medium: 0.20,
            },
            Industry::EnergyAndUtilities => Self {
                div_high: 0.25,
                div_medium: 0.15,
                pay_gap_low: 0.10,
                pay_gap_medium: 0.25,
                attrition_gap_low: 0.07,
                attrition_gap_medium: 0.14,
            },
            Industry::Healthcare => Self {
                div_high: 0.55,
                div_medium: 0.40,
                pay_gap_low: 0.05,
                pay_gap_medium: 0.15,
                attrition_gap_low: 0.03,
                attrition_gap_medium: 0.08,
            },
            Industry::Retail => Self {
                div_high: 0.50,
                div_medium: 0.35,
                pay_gap_low: 0.08,
                pay_gap_medium: 0.20,
                attrition_gap_low: 0.05,
                attrition_gap_medium: 0.12,
            },
            Industry::Other => return None,
        };
        Some(record)
    }

    /// Looks up thresholds by industry name, falling back to the default record.
    pub fn resolve(name: &str) -> ResolvedThresholds {
        match Industry::parse(name) {
            Some(industry) => Self::resolve_industry(industry),
            None => ResolvedThresholds::fallback(),
        }
    }

    pub fn resolve_industry(industry: Industry) -> ResolvedThresholds {
        match Self::for_industry(industry) {
            Some(thresholds) => ResolvedThresholds {
                key: industry.label(),
                thresholds,
            },
            None => ResolvedThresholds::fallback(),
        }
    }
}

/// Threshold record paired with the table key it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedThresholds {
    pub key: &'static str,
    pub thresholds: IndustryThresholds,
}

impl ResolvedThresholds {
    fn fallback() -> Self {
        Self {
            key: DEFAULT_THRESHOLD_KEY,
            thresholds: IndustryThresholds::default_record(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.key == DEFAULT_THRESHOLD_KEY
    }
}

/// Global environmental and CSR cutoffs.
///
/// `water_high` and `waste_haz_high` hold the *lower* cutoff: values at or below
/// them reach the best tier. `ghg_high` is the upper cutoff, above which the
/// metric scores zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceThresholds {
    pub ghg_high: f64,
    pub ghg_medium: f64,
    pub water_high: f64,
    pub water_medium: f64,
    pub waste_haz_high: f64,
    pub waste_haz_medium: f64,
    pub renew_high: f64,
    pub renew_medium: f64,
    pub csr_high: f64,
    pub csr_medium: f64,
}

impl PerformanceThresholds {
    pub const fn standard() -> Self {
        Self {
            ghg_high: 500.0,
            ghg_medium: 150.0,
            water_high: 10_000.0,
            water_medium: 50_000.0,
            waste_haz_high: 10.0,
            waste_haz_medium: 50.0,
            renew_high: 0.50,
            renew_medium: 0.20,
            csr_high: 1.10,
            csr_medium: 1.00,
        }
    }
}

impl Default for PerformanceThresholds {
    fn default() -> Self {
        Self::standard()
    }
}
