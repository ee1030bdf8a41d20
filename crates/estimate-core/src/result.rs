//! Calculation result types.

use serde::{Deserialize, Serialize};

use crate::request::CalculationKind;

/// Production estimate returned for solar and wind requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionEstimate {
    pub annual_production_kwh: f64,
    pub co2_reduction_tons: f64,
    pub savings_estimate_usd: f64,
    pub payback_period_years: f64,
}

impl ProductionEstimate {
    /// Create a production estimate.
    pub fn new(
        annual_production_kwh: f64,
        co2_reduction_tons: f64,
        savings_estimate_usd: f64,
        payback_period_years: f64,
    ) -> Self {
        Self {
            annual_production_kwh,
            co2_reduction_tons,
            savings_estimate_usd,
            payback_period_years,
        }
    }

    /// Name of the first field that is negative or not finite.
    pub fn invalid_field(&self) -> Option<&'static str> {
        [
            ("annualProductionKwh", self.annual_production_kwh),
            ("co2ReductionTons", self.co2_reduction_tons),
            ("savingsEstimateUsd", self.savings_estimate_usd),
            ("paybackPeriodYears", self.payback_period_years),
        ]
        .into_iter()
        .find(|(_, value)| !non_negative(*value))
        .map(|(name, _)| name)
    }
}

/// Efficiency estimate returned for efficiency requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyEstimate {
    pub potential_savings_usd: f64,
    pub co2_reduction_tons: f64,
    pub recommendations: Vec<String>,
}

impl EfficiencyEstimate {
    /// Create an efficiency estimate.
    pub fn new(
        potential_savings_usd: f64,
        co2_reduction_tons: f64,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            potential_savings_usd,
            co2_reduction_tons,
            recommendations,
        }
    }

    /// Name of the first field that breaks the result's invariants.
    pub fn invalid_field(&self) -> Option<&'static str> {
        if !non_negative(self.potential_savings_usd) {
            return Some("potentialSavingsUsd");
        }
        if !non_negative(self.co2_reduction_tons) {
            return Some("co2ReductionTons");
        }
        if self.recommendations.is_empty() {
            return Some("recommendations");
        }
        None
    }
}

/// The result of one calculation, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalculationResult {
    Solar(ProductionEstimate),
    Wind(ProductionEstimate),
    Efficiency(EfficiencyEstimate),
}

impl CalculationResult {
    /// The kind of calculation that produced this result.
    pub fn kind(&self) -> CalculationKind {
        match self {
            Self::Solar(_) => CalculationKind::Solar,
            Self::Wind(_) => CalculationKind::Wind,
            Self::Efficiency(_) => CalculationKind::Efficiency,
        }
    }

    /// Estimated CO2 reduction, shared by every kind.
    pub fn co2_reduction_tons(&self) -> f64 {
        match self {
            Self::Solar(estimate) | Self::Wind(estimate) => estimate.co2_reduction_tons,
            Self::Efficiency(estimate) => estimate.co2_reduction_tons,
        }
    }

    /// Name of the first field that breaks the result's invariants.
    pub fn invalid_field(&self) -> Option<&'static str> {
        match self {
            Self::Solar(estimate) | Self::Wind(estimate) => estimate.invalid_field(),
            Self::Efficiency(estimate) => estimate.invalid_field(),
        }
    }
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
