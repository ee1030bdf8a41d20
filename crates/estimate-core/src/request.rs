//! Calculation request types and validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EstimationError;

/// Minimum accepted panel efficiency, in percent.
pub const MIN_PANEL_EFFICIENCY_PCT: f64 = 1.0;

/// Maximum accepted panel efficiency, in percent.
pub const MAX_PANEL_EFFICIENCY_PCT: f64 = 30.0;

/// Minimum accepted turbine hub height, in metres.
pub const MIN_TURBINE_HEIGHT_M: f64 = 5.0;

/// The calculator kinds. Selects the estimator and the required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationKind {
    Solar,
    Wind,
    Efficiency,
}

impl CalculationKind {
    /// Every supported kind.
    pub const ALL: [CalculationKind; 3] = [Self::Solar, Self::Wind, Self::Efficiency];

    /// Wire name of the kind, as stored in history.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::Wind => "wind",
            Self::Efficiency => "efficiency",
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationKind {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solar" => Ok(Self::Solar),
            "wind" => Ok(Self::Wind),
            "efficiency" => Ok(Self::Efficiency),
            _ => Err(EstimationError::InvalidRequestKind(s.to_string())),
        }
    }
}

/// Turbine class for wind estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurbineModel {
    Residential,
    Commercial,
    Industrial,
}

impl FromStr for TurbineModel {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "residential" => Ok(Self::Residential),
            "commercial" => Ok(Self::Commercial),
            "industrial" => Ok(Self::Industrial),
            _ => Err(EstimationError::InvalidField("turbineModel")),
        }
    }
}

/// Inputs for a rooftop solar estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarRequest {
    pub location: String,
    pub roof_area_sqm: f64,
    pub panel_efficiency_pct: f64,
}

/// Inputs for a wind turbine estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindRequest {
    pub location: String,
    pub turbine_height_m: f64,
    pub turbine_model: TurbineModel,
}

/// Inputs for a household efficiency estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyRequest {
    pub location: String,
    pub monthly_consumption_kwh: f64,
}

/// A validated calculation request.
///
/// Each variant carries only the fields its estimator reads, so a request
/// can never smuggle fields belonging to another kind into dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalculationRequest {
    Solar(SolarRequest),
    Wind(WindRequest),
    Efficiency(EfficiencyRequest),
}

impl CalculationRequest {
    /// The kind of this request.
    pub fn kind(&self) -> CalculationKind {
        match self {
            Self::Solar(_) => CalculationKind::Solar,
            Self::Wind(_) => CalculationKind::Wind,
            Self::Efficiency(_) => CalculationKind::Efficiency,
        }
    }

    /// The free-text location of the request.
    pub fn location(&self) -> &str {
        match self {
            Self::Solar(req) => &req.location,
            Self::Wind(req) => &req.location,
            Self::Efficiency(req) => &req.location,
        }
    }

    /// Check every field the kind requires against its documented range.
    ///
    /// Kind-specific fields are checked before the location, so a request
    /// with several problems reports the numeric field first.
    pub fn validate(&self) -> Result<(), EstimationError> {
        match self {
            Self::Solar(req) => {
                positive(req.roof_area_sqm, "roofAreaSqm")?;
                within(
                    req.panel_efficiency_pct,
                    MIN_PANEL_EFFICIENCY_PCT,
                    MAX_PANEL_EFFICIENCY_PCT,
                    "panelEfficiencyPct",
                )?;
            }
            Self::Wind(req) => {
                at_least(req.turbine_height_m, MIN_TURBINE_HEIGHT_M, "turbineHeightM")?;
            }
            Self::Efficiency(req) => {
                positive(req.monthly_consumption_kwh, "monthlyConsumptionKwh")?;
            }
        }

        if self.location().trim().is_empty() {
            return Err(EstimationError::InvalidField("location"));
        }

        Ok(())
    }
}

/// A calculator form submission before validation.
///
/// Mirrors what a browser form posts: a string calculator type and a bag of
/// optional fields, only some of which apply to the chosen type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationForm {
    pub calculator_type: String,
    #[serde(default, alias = "address")]
    pub location: String,
    #[serde(default)]
    pub roof_area_sqm: Option<f64>,
    #[serde(default)]
    pub panel_efficiency_pct: Option<f64>,
    #[serde(default)]
    pub turbine_height_m: Option<f64>,
    #[serde(default)]
    pub turbine_model: Option<String>,
    #[serde(default)]
    pub monthly_consumption_kwh: Option<f64>,
}

impl TryFrom<CalculationForm> for CalculationRequest {
    type Error = EstimationError;

    fn try_from(form: CalculationForm) -> Result<Self, Self::Error> {
        let kind: CalculationKind = form.calculator_type.parse()?;
        let location = form.location.trim().to_string();

        let request = match kind {
            CalculationKind::Solar => Self::Solar(SolarRequest {
                location,
                roof_area_sqm: require(form.roof_area_sqm, "roofAreaSqm")?,
                panel_efficiency_pct: require(form.panel_efficiency_pct, "panelEfficiencyPct")?,
            }),
            CalculationKind::Wind => Self::Wind(WindRequest {
                location,
                turbine_height_m: require(form.turbine_height_m, "turbineHeightM")?,
                turbine_model: form
                    .turbine_model
                    .as_deref()
                    .ok_or(EstimationError::InvalidField("turbineModel"))?
                    .parse()?,
            }),
            CalculationKind::Efficiency => Self::Efficiency(EfficiencyRequest {
                location,
                monthly_consumption_kwh: require(
                    form.monthly_consumption_kwh,
                    "monthlyConsumptionKwh",
                )?,
            }),
        };

        request.validate()?;
        Ok(request)
    }
}

fn require(value: Option<f64>, field: &'static str) -> Result<f64, EstimationError> {
    value.ok_or(EstimationError::InvalidField(field))
}

fn positive(value: f64, field: &'static str) -> Result<(), EstimationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EstimationError::InvalidField(field))
    }
}

fn at_least(value: f64, min: f64, field: &'static str) -> Result<(), EstimationError> {
    if value.is_finite() && value >= min {
        Ok(())
    } else {
        Err(EstimationError::InvalidField(field))
    }
}

fn within(value: f64, min: f64, max: f64, field: &'static str) -> Result<(), EstimationError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(EstimationError::InvalidField(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar_form() -> CalculationForm {
        CalculationForm {
            calculator_type: "solar".to_string(),
            location: "Austin".to_string(),
            roof_area_sqm: Some(100.0),
            panel_efficiency_pct: Some(20.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_solar_form_to_request() {
        let request = CalculationRequest::try_from(solar_form()).unwrap();
        assert_eq!(
            request,
            CalculationRequest::Solar(SolarRequest {
                location: "Austin".to_string(),
                roof_area_sqm: 100.0,
                panel_efficiency_pct: 20.0,
            })
        );
        assert_eq!(request.kind(), CalculationKind::Solar);
    }

    #[test]
    fn test_unknown_kind() {
        let form = CalculationForm {
            calculator_type: "geothermal".to_string(),
            ..solar_form()
        };
        assert_eq!(
            CalculationRequest::try_from(form),
            Err(EstimationError::InvalidRequestKind("geothermal".to_string()))
        );
    }

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!("Wind".parse::<CalculationKind>(), Ok(CalculationKind::Wind));
        assert_eq!(" EFFICIENCY ".parse::<CalculationKind>(), Ok(CalculationKind::Efficiency));
    }

    #[test]
    fn test_missing_required_field() {
        let form = CalculationForm {
            roof_area_sqm: None,
            ..solar_form()
        };
        assert_eq!(
            CalculationRequest::try_from(form),
            Err(EstimationError::InvalidField("roofAreaSqm"))
        );
    }

    #[test]
    fn test_panel_efficiency_range() {
        for (pct, ok) in [(0.5, false), (1.0, true), (30.0, true), (30.5, false), (f64::NAN, false)] {
            let form = CalculationForm {
                panel_efficiency_pct: Some(pct),
                ..solar_form()
            };
            let result = CalculationRequest::try_from(form);
            if ok {
                assert!(result.is_ok(), "{pct} should be accepted");
            } else {
                assert_eq!(result, Err(EstimationError::InvalidField("panelEfficiencyPct")));
            }
        }
    }

    #[test]
    fn test_wind_below_minimum_height() {
        // No location either: the numeric field is reported first.
        let form = CalculationForm {
            calculator_type: "wind".to_string(),
            turbine_height_m: Some(3.0),
            turbine_model: Some("residential".to_string()),
            ..Default::default()
        };
        assert_eq!(
            CalculationRequest::try_from(form),
            Err(EstimationError::InvalidField("turbineHeightM"))
        );
    }

    #[test]
    fn test_wind_unknown_turbine_model() {
        let form = CalculationForm {
            calculator_type: "wind".to_string(),
            location: "Denver".to_string(),
            turbine_height_m: Some(20.0),
            turbine_model: Some("offshore".to_string()),
            ..Default::default()
        };
        assert_eq!(
            CalculationRequest::try_from(form),
            Err(EstimationError::InvalidField("turbineModel"))
        );
    }

    #[test]
    fn test_blank_location() {
        let form = CalculationForm {
            location: "   ".to_string(),
            ..solar_form()
        };
        assert_eq!(
            CalculationRequest::try_from(form),
            Err(EstimationError::InvalidField("location"))
        );
    }

    #[test]
    fn test_fields_of_other_kinds_are_ignored() {
        let form = CalculationForm {
            calculator_type: "efficiency".to_string(),
            location: "Austin".to_string(),
            monthly_consumption_kwh: Some(500.0),
            // Out of range for solar, irrelevant here
            panel_efficiency_pct: Some(99.0),
            turbine_height_m: Some(-1.0),
            ..Default::default()
        };
        let request = CalculationRequest::try_from(form).unwrap();
        assert_eq!(
            request,
            CalculationRequest::Efficiency(EfficiencyRequest {
                location: "Austin".to_string(),
                monthly_consumption_kwh: 500.0,
            })
        );
    }

    #[test]
    fn test_form_accepts_address_alias() {
        let form: CalculationForm = serde_json::from_str(
            r#"{"calculatorType":"efficiency","address":"Austin","monthlyConsumptionKwh":500}"#,
        )
        .unwrap();
        assert_eq!(form.location, "Austin");
    }

    #[test]
    fn test_request_json_is_tagged_by_kind() {
        let request = CalculationRequest::try_from(solar_form()).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["kind"], "solar");
        assert_eq!(json["roofAreaSqm"], 100.0);
        assert_eq!(json["panelEfficiencyPct"], 20.0);
    }
}
