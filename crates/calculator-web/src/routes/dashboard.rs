//! Dashboard routes.

use axum::extract::State;
use axum::Json;
use estimate_core::CalculationKind;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Dashboard snapshot.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub solar_production: Metric,
    pub wind_production: Metric,
    pub carbon_offset: Metric,
    pub energy_mix: Vec<EnergyShare>,
    pub usage: Usage,
}

/// A headline figure with its monthly series.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub value: String,
    pub trend: Trend,
    pub change: String,
    pub monthly: Vec<MonthlyPoint>,
}

/// Direction of a month-over-month change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// One month of a series.
#[derive(Clone, Serialize)]
pub struct MonthlyPoint {
    pub month: &'static str,
    pub value: f64,
}

/// Share of one source in the energy mix, in percent.
#[derive(Clone, Serialize)]
pub struct EnergyShare {
    pub source: &'static str,
    pub percent: u8,
}

/// Calculator usage recorded in history.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub calculation_count: i64,
    pub by_type: Vec<TypeCount>,
}

/// Calculation count for a single calculator kind.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    pub calculation_type: String,
    pub count: i64,
}

/// Get the dashboard snapshot as JSON.
pub async fn dashboard_api(State(state): State<AppState>) -> Result<Json<Dashboard>> {
    let usage = get_usage(&state).await?;

    Ok(Json(Dashboard {
        solar_production: metric(
            "14,285 kWh",
            Trend::Up,
            "12% from last month",
            [
                890.0, 950.0, 1100.0, 1250.0, 1350.0, 1450.0, 1500.0, 1420.0, 1300.0, 1150.0,
                950.0, 875.0,
            ],
        ),
        wind_production: metric(
            "8,756 kWh",
            Trend::Down,
            "8% from last month",
            [
                720.0, 650.0, 700.0, 680.0, 720.0, 780.0, 820.0, 900.0, 850.0, 750.0, 680.0,
                650.0,
            ],
        ),
        carbon_offset: metric(
            "16.2 tons",
            Trend::Up,
            "5% from last month",
            [1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.5, 1.4, 1.3, 1.2, 1.1],
        ),
        energy_mix: energy_mix(),
        usage,
    }))
}

fn metric(value: &str, trend: Trend, change: &str, series: [f64; 12]) -> Metric {
    Metric {
        value: value.to_string(),
        trend,
        change: change.to_string(),
        monthly: MONTHS
            .into_iter()
            .zip(series)
            .map(|(month, value)| MonthlyPoint { month, value })
            .collect(),
    }
}

fn energy_mix() -> Vec<EnergyShare> {
    [
        ("Solar", 42),
        ("Wind", 28),
        ("Hydro", 15),
        ("Biomass", 8),
        ("Geothermal", 5),
        ("Other", 2),
    ]
    .into_iter()
    .map(|(source, percent)| EnergyShare { source, percent })
    .collect()
}

/// Fetch usage counts from the database.
async fn get_usage(state: &AppState) -> Result<Usage> {
    let pool = state.db.pool();

    let calculation_count = database::calculation_history::count_calculations(pool).await?;
    let counts = database::calculation_history::count_by_type(pool).await?;

    // Every kind is listed, including ones never calculated.
    let by_type = CalculationKind::ALL
        .into_iter()
        .map(|kind| TypeCount {
            calculation_type: kind.to_string(),
            count: counts
                .iter()
                .find(|(stored, _)| stored == kind.as_str())
                .map_or(0, |(_, count)| *count),
        })
        .collect();

    Ok(Usage {
        calculation_count,
        by_type,
    })
}
