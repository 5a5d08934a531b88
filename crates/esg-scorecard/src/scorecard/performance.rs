use serde::{Deserialize, Serialize};

use super::thresholds::{IndustryThresholds, PerformanceThresholds};
use super::validation::ValidationError;

/// Quantitative workforce, environmental, and governance inputs for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInputs {
    pub male_employees: u32,
    pub female_employees: u32,
    pub male_attrition: u32,
    pub female_attrition: u32,
    pub avg_male_pay: f64,
    pub avg_female_pay: f64,
    pub women_in_management_pct: f64,
    pub employee_turnover_pct: f64,
    pub ghg_emissions_tonnes: f64,
    pub water_consumption_kl: f64,
    pub hazardous_waste_tonnes: f64,
    pub renewable_energy_pct: f64,
    pub workplace_injuries: u32,
    pub csr_utilisation_pct: f64,
    pub whistleblower_resolved: u32,
    pub regulatory_incidents: u32,
}

impl CompanyInputs {
    /// Rejects negative or non-finite values and percentages outside 0..=100.
    ///
    /// CSR utilisation is only bounded below: overspending the mandate is the best tier.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let non_negative = [
            ("avg_male_pay", self.avg_male_pay),
            ("avg_female_pay", self.avg_female_pay),
            ("ghg_emissions_tonnes", self.ghg_emissions_tonnes),
            ("water_consumption_kl", self.water_consumption_kl),
            ("hazardous_waste_tonnes", self.hazardous_waste_tonnes),
            ("csr_utilisation_pct", self.csr_utilisation_pct),
        ];
        let percentages = [
            ("women_in_management_pct", self.women_in_management_pct),
            ("employee_turnover_pct", self.employee_turnover_pct),
            ("renewable_energy_pct", self.renewable_energy_pct),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidMetric { field, value });
            }
        }
        for (field, value) in percentages {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ValidationError::InvalidMetric { field, value });
            }
        }
        Ok(())
    }

    pub fn total_employees(&self) -> u64 {
        u64::from(self.male_employees) + u64::from(self.female_employees)
    }
}

/// The twelve performance metrics in their fixed definition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceMetric {
    GenderDiversity,
    PayEquity,
    AttritionEquality,
    GhgEmissions,
    RenewableEnergy,
    HazardousWaste,
    WaterConsumption,
    CsrUtilisation,
    RegulatoryCompliance,
    WorkplaceInjury,
    EmployeeTurnover,
    Whistleblower,
}

impl PerformanceMetric {
    pub const COUNT: usize = 12;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::GenderDiversity,
            Self::PayEquity,
            Self::AttritionEquality,
            Self::GhgEmissions,
            Self::RenewableEnergy,
            Self::HazardousWaste,
            Self::WaterConsumption,
            Self::CsrUtilisation,
            Self::RegulatoryCompliance,
            Self::WorkplaceInjury,
            Self::EmployeeTurnover,
            Self::Whistleblower,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::GenderDiversity => "Gender Diversity",
            Self::PayEquity => "Pay Equity",
            Self::AttritionEquality => "Attrition Equality",
            Self::GhgEmissions => "GHG Emissions",
            Self::RenewableEnergy => "Renewable Energy",
            Self::HazardousWaste => "Hazardous Waste",
            Self::WaterConsumption => "Water Consumption",
            Self::CsrUtilisation => "CSR Utilisation",
            Self::RegulatoryCompliance => "Regulatory Compliance",
            Self::WorkplaceInjury => "Workplace Injury",
            Self::EmployeeTurnover => "Employee Turnover",
            Self::Whistleblower => "Whistleblower",
        }
    }
}

/// Three-level outcome of a threshold test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Weak,
    Partial,
    Strong,
}

impl Tier {
    pub const fn value(self) -> f64 {
        match self {
            Self::Weak => 0.0,
            Self::Partial => 0.5,
            Self::Strong => 1.0,
        }
    }

    /// Lower observed values are better; both bounds are inclusive.
    fn at_most(observed: f64, strong: f64, partial: f64) -> Self {
        if observed <= strong {
            Self::Strong
        } else if observed <= partial {
            Self::Partial
        } else {
            Self::Weak
        }
    }

    /// Higher observed values are better; both bounds are inclusive.
    fn at_least(observed: f64, strong: f64, partial: f64) -> Self {
        if observed >= strong {
            Self::Strong
        } else if observed >= partial {
            Self::Partial
        } else {
            Self::Weak
        }
    }

    fn incident_count(count: u32) -> Self {
        match count {
            0 => Self::Strong,
            1..=2 => Self::Partial,
            _ => Self::Weak,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricScore {
    pub metric: PerformanceMetric,
    pub tier: Tier,
    pub score: f64,
    /// The ratio, rate, or raw amount the tier was derived from.
    pub observed: f64,
}

impl MetricScore {
    fn new(metric: PerformanceMetric, tier: Tier, observed: f64) -> Self {
        Self {
            metric,
            tier,
            score: tier.value(),
            observed,
        }
    }

    pub fn percent(&self) -> f64 {
        self.score * 100.0
    }
}

/// Workforce figures surfaced alongside the scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkforceKpis {
    pub gender_diversity_pct: f64,
    pub pay_gap_pct: f64,
    pub attrition_gap: f64,
    pub total_attrition_rate_pct: f64,
    pub women_in_management_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceScores {
    pub metrics: Vec<MetricScore>,
    pub kpis: WorkforceKpis,
    /// Fraction, e.g. 0.13 for a 13 % gap. Zero when male pay is zero.
    pub pay_gap: f64,
    pub renewable_ratio: f64,
}

impl PerformanceScores {
    pub fn get(&self, metric: PerformanceMetric) -> Option<&MetricScore> {
        self.metrics.iter().find(|entry| entry.metric == metric)
    }

    pub fn score(&self, metric: PerformanceMetric) -> f64 {
        self.get(metric).map(|entry| entry.score).unwrap_or(0.0)
    }
}

pub struct PerformanceScorer<'a> {
    industry: &'a IndustryThresholds,
    global: &'a PerformanceThresholds,
}

impl<'a> PerformanceScorer<'a> {
    pub fn new(industry: &'a IndustryThresholds, global: &'a PerformanceThresholds) -> Self {
        Self { industry, global }
    }

    /// Scores all twelve metrics. Total for any validated input: zero denominators score zero.
    pub fn score(&self, inputs: &CompanyInputs, mechanism_disclosed: bool) -> PerformanceScores {
        let th = self.industry;
        let pt = self.global;

        let total_employees = inputs.total_employees();
        let diversity = if total_employees > 0 {
            let ratio = f64::from(inputs.female_employees) / total_employees as f64;
            let tier = if ratio > th.div_high {
                Tier::Strong
            } else if ratio >= th.div_medium {
                Tier::Partial
            } else {
                Tier::Weak
            };
            MetricScore::new(PerformanceMetric::GenderDiversity, tier, ratio)
        } else {
            MetricScore::new(PerformanceMetric::GenderDiversity, Tier::Weak, 0.0)
        };

        let (pay_gap, pay_equity) = if inputs.avg_male_pay > 0.0 {
            let gap = (inputs.avg_male_pay - inputs.avg_female_pay) / inputs.avg_male_pay;
            let tier = Tier::at_most(gap, th.pay_gap_low, th.pay_gap_medium);
            (gap, MetricScore::new(PerformanceMetric::PayEquity, tier, gap))
        } else {
            (
                0.0,
                MetricScore::new(PerformanceMetric::PayEquity, Tier::Weak, 0.0),
            )
        };

        // A gap needs both genders on the payroll; otherwise the comparison is undefined.
        let (attrition_gap, attrition) =
            if inputs.male_employees > 0 && inputs.female_employees > 0 {
                let male_rate = rate(inputs.male_attrition, inputs.male_employees);
                let female_rate = rate(inputs.female_attrition, inputs.female_employees);
                let gap = (male_rate - female_rate).abs();
                let tier = Tier::at_most(gap, th.attrition_gap_low, th.attrition_gap_medium);
                (
                    gap,
                    MetricScore::new(PerformanceMetric::AttritionEquality, tier, gap),
                )
            } else {
                (
                    0.0,
                    MetricScore::new(PerformanceMetric::AttritionEquality, Tier::Weak, 0.0),
                )
            };

        let ghg = MetricScore::new(
            PerformanceMetric::GhgEmissions,
            Tier::at_most(inputs.ghg_emissions_tonnes, pt.ghg_medium, pt.ghg_high),
            inputs.ghg_emissions_tonnes,
        );

        let renewable_ratio = inputs.renewable_energy_pct / 100.0;
        let renewable = MetricScore::new(
            PerformanceMetric::RenewableEnergy,
            Tier::at_least(renewable_ratio, pt.renew_high, pt.renew_medium),
            renewable_ratio,
        );

        let waste = MetricScore::new(
            PerformanceMetric::HazardousWaste,
            Tier::at_most(
                inputs.hazardous_waste_tonnes,
                pt.waste_haz_high,
                pt.waste_haz_medium,
            ),
            inputs.hazardous_waste_tonnes,
        );

        let water = MetricScore::new(
            PerformanceMetric::WaterConsumption,
            Tier::at_most(inputs.water_consumption_kl, pt.water_high, pt.water_medium),
            inputs.water_consumption_kl,
        );

        let csr_ratio = inputs.csr_utilisation_pct / 100.0;
        let csr = MetricScore::new(
            PerformanceMetric::CsrUtilisation,
            Tier::at_least(csr_ratio, pt.csr_high, pt.csr_medium),
            csr_ratio,
        );

        let compliance = MetricScore::new(
            PerformanceMetric::RegulatoryCompliance,
            Tier::incident_count(inputs.regulatory_incidents),
            f64::from(inputs.regulatory_incidents),
        );

        let injury = MetricScore::new(
            PerformanceMetric::WorkplaceInjury,
            Tier::incident_count(inputs.workplace_injuries),
            f64::from(inputs.workplace_injuries),
        );

        let turnover = MetricScore::new(
            PerformanceMetric::EmployeeTurnover,
            Tier::at_most(inputs.employee_turnover_pct, 10.0, 20.0),
            inputs.employee_turnover_pct,
        );

        let whistleblower_tier = match (mechanism_disclosed, inputs.whistleblower_resolved) {
            (true, resolved) if resolved > 0 => Tier::Strong,
            (true, _) => Tier::Partial,
            (false, _) => Tier::Weak,
        };
        let whistleblower = MetricScore::new(
            PerformanceMetric::Whistleblower,
            whistleblower_tier,
            f64::from(inputs.whistleblower_resolved),
        );

        let total_attrition =
            u64::from(inputs.male_attrition) + u64::from(inputs.female_attrition);
        let total_attrition_rate_pct = if total_employees > 0 {
            total_attrition as f64 / total_employees as f64 * 100.0
        } else {
            0.0
        };

        let kpis = WorkforceKpis {
            gender_diversity_pct: diversity.observed * 100.0,
            pay_gap_pct: pay_gap * 100.0,
            attrition_gap,
            total_attrition_rate_pct,
            women_in_management_pct: inputs.women_in_management_pct,
        };

        PerformanceScores {
            metrics: vec![
                diversity,
                pay_equity,
                attrition,
                ghg,
                renewable,
                waste,
                water,
                csr,
                compliance,
                injury,
                turnover,
                whistleblower,
            ],
            kpis,
            pay_gap,
            renewable_ratio,
        }
    }
}

fn rate(count: u32, headcount: u32) -> f64 {
    f64::from(count) / f64::from(headcount)
}
