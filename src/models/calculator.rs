use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::CalculatorError;

// ─── Input enumerations ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HouseholdSize {
    Small,
    Medium,
    Large,
}

impl HouseholdSize {
    pub const ALL: [HouseholdSize; 3] = [HouseholdSize::Small, HouseholdSize::Medium, HouseholdSize::Large];
}

/// Catalogue solar system sizes. Only these sizes are priced, so the wire
/// format is the nameplate kW and anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum SystemSize {
    Kw6_6,
    Kw10,
    Kw13,
}

impl SystemSize {
    pub const ALL: [SystemSize; 3] = [SystemSize::Kw6_6, SystemSize::Kw10, SystemSize::Kw13];

    pub fn kw(self) -> f64 {
        match self {
            SystemSize::Kw6_6 => 6.6,
            SystemSize::Kw10 => 10.0,
            SystemSize::Kw13 => 13.0,
        }
    }
}

impl TryFrom<f64> for SystemSize {
    type Error = CalculatorError;

    fn try_from(kw: f64) -> Result<Self, Self::Error> {
        SystemSize::ALL
            .into_iter()
            .find(|s| (s.kw() - kw).abs() < 1e-9)
            .ok_or(CalculatorError::UnknownSystemSize(kw))
    }
}

impl From<SystemSize> for f64 {
    fn from(s: SystemSize) -> f64 {
        s.kw()
    }
}

/// Catalogue home battery capacities, serialised as usable kWh.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum BatterySize {
    Kwh10,
    #[default]
    Kwh13_5,
    Kwh20,
}

impl BatterySize {
    pub const ALL: [BatterySize; 3] = [BatterySize::Kwh10, BatterySize::Kwh13_5, BatterySize::Kwh20];

    pub fn kwh(self) -> f64 {
        match self {
            BatterySize::Kwh10 => 10.0,
            BatterySize::Kwh13_5 => 13.5,
            BatterySize::Kwh20 => 20.0,
        }
    }
}

impl TryFrom<f64> for BatterySize {
    type Error = CalculatorError;

    fn try_from(kwh: f64) -> Result<Self, Self::Error> {
        BatterySize::ALL
            .into_iter()
            .find(|b| (b.kwh() - kwh).abs() < 1e-9)
            .ok_or(CalculatorError::UnknownBatterySize(kwh))
    }
}

impl From<BatterySize> for f64 {
    fn from(b: BatterySize) -> f64 {
        b.kwh()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RoofDirection {
    North,
    NorthEast,
    NorthWest,
    East,
    West,
}

impl RoofDirection {
    pub const ALL: [RoofDirection; 5] = [
        RoofDirection::North,
        RoofDirection::NorthEast,
        RoofDirection::NorthWest,
        RoofDirection::East,
        RoofDirection::West,
    ];
}

// ─── Estimator input / output ────────────────────────────────────────────────

/// One evaluation's worth of calculator settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculatorInputs {
    /// Current quarterly electricity bill ($)
    pub quarterly_bill: f64,
    pub household_size: HouseholdSize,
    /// Household consumption (kWh/day)
    pub daily_usage: f64,
    #[schema(value_type = f64, example = 6.6)]
    pub system_size: SystemSize,
    pub roof_direction: RoofDirection,
    pub include_battery: bool,
    /// Only consulted when `include_battery` is set.
    #[schema(value_type = f64, example = 13.5)]
    pub battery_size: BatterySize,
}

/// Inclusive numeric range; costs in $, payback in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const ZERO: ValueRange = ValueRange { min: 0.0, max: 0.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl std::ops::Add for ValueRange {
    type Output = ValueRange;

    fn add(self, rhs: ValueRange) -> ValueRange {
        ValueRange::new(self.min + rhs.min, self.max + rhs.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CalculatorResults {
    // ── Bill ─────────────────────────────────────────────────────────────────
    pub current_annual_bill: f64,

    // ── Generation ───────────────────────────────────────────────────────────
    pub daily_generation_kwh: f64,
    pub annual_generation_kwh: f64,

    // ── Self-consumption split ───────────────────────────────────────────────
    /// Fraction of generation used on site [0..1]
    pub self_consumption_rate: f64,
    pub daily_self_consumed_kwh: f64,
    pub annual_self_consumed_kwh: f64,
    pub annual_exported_kwh: f64,
    pub annual_usage_kwh: f64,
    pub remaining_grid_usage_kwh: f64,

    // ── Financials ($/year) ──────────────────────────────────────────────────
    pub savings_from_self_consumption: f64,
    pub feed_in_income: f64,
    pub new_annual_bill: f64,
    /// `current_annual_bill - new_annual_bill`; negative when solar does not
    /// bring the bill below the entered amount.
    pub annual_savings: f64,

    // ── Costs ($) ────────────────────────────────────────────────────────────
    pub solar_cost: ValueRange,
    pub battery_cost: ValueRange,
    pub total_cost: ValueRange,

    // ── Return on investment ─────────────────────────────────────────────────
    /// `None` when the system never pays for itself.
    pub payback_years: Option<ValueRange>,
    pub ten_year_savings: ValueRange,
    pub twenty_five_year_savings: ValueRange,

    // ── Environment (per year) ───────────────────────────────────────────────
    pub co2_offset_tonnes: f64,
    pub trees_equivalent: f64,
    pub cars_off_road: f64,

    /// Share of the current bill removed, 0..=100
    pub bill_reduction_percent: u8,
}

// ─── REST API types ──────────────────────────────────────────────────────────

/// Calculator form as posted by the site. `daily_usage` falls back to the
/// household default when omitted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EstimateRequest {
    #[schema(example = 400.0)]
    pub quarterly_bill: f64,
    pub household_size: HouseholdSize,
    pub daily_usage: Option<f64>,
    #[schema(value_type = f64, example = 6.6)]
    pub system_size: SystemSize,
    pub roof_direction: RoofDirection,
    #[serde(default)]
    pub include_battery: bool,
    #[serde(default)]
    #[schema(value_type = f64, example = 13.5)]
    pub battery_size: BatterySize,
}

/// Display strings for the results panel.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EstimateSummary {
    pub annual_savings: String,
    pub new_annual_bill: String,
    pub total_cost: String,
    pub payback: String,
    pub ten_year_savings: String,
    pub twenty_five_year_savings: String,
    pub bill_reduction: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EstimateResponse {
    pub inputs: CalculatorInputs,
    pub results: CalculatorResults,
    pub summary: EstimateSummary,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SystemOption {
    #[schema(value_type = f64)]
    pub size: SystemSize,
    pub panels: u32,
    pub cost: ValueRange,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BatteryOption {
    #[schema(value_type = f64)]
    pub size: BatterySize,
    pub cost: ValueRange,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RoofOption {
    pub direction: RoofDirection,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HouseholdOption {
    pub size: HouseholdSize,
    pub default_daily_usage: f64,
}

/// Everything the calculator controls need to render their choices.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CalculatorCatalog {
    pub quarterly_bill: ValueRange,
    pub households: Vec<HouseholdOption>,
    pub systems: Vec<SystemOption>,
    pub batteries: Vec<BatteryOption>,
    pub roof_directions: Vec<RoofOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_size_round_trips_through_kw() {
        assert_eq!(SystemSize::try_from(6.6), Ok(SystemSize::Kw6_6));
        assert_eq!(SystemSize::try_from(13.0), Ok(SystemSize::Kw13));
        assert_eq!(SystemSize::try_from(8.0), Err(CalculatorError::UnknownSystemSize(8.0)));
    }

    #[test]
    fn unknown_battery_size_is_rejected() {
        assert_eq!(BatterySize::try_from(13.5), Ok(BatterySize::Kwh13_5));
        assert_eq!(BatterySize::try_from(0.0), Err(CalculatorError::UnknownBatterySize(0.0)));
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let raw = r#"{
            "quarterly_bill": 400,
            "household_size": "medium",
            "system_size": 10,
            "roof_direction": "north-west"
        }"#;
        let req: EstimateRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.system_size, SystemSize::Kw10);
        assert_eq!(req.roof_direction, RoofDirection::NorthWest);
        assert_eq!(req.daily_usage, None);
        assert!(!req.include_battery);
        assert_eq!(req.battery_size, BatterySize::Kwh13_5);
    }

    #[test]
    fn off_catalogue_size_fails_deserialization() {
        let raw = r#"{
            "quarterly_bill": 400,
            "household_size": "small",
            "system_size": 7.5,
            "roof_direction": "north"
        }"#;
        let err = serde_json::from_str::<EstimateRequest>(raw).unwrap_err();
        assert!(err.to_string().contains("unknown system size"));
    }

    #[test]
    fn sizes_serialize_as_numbers() {
        let json = serde_json::to_value(SystemSize::Kw6_6).unwrap();
        assert_eq!(json, serde_json::json!(6.6));
        let json = serde_json::to_value(BatterySize::Kwh20).unwrap();
        assert_eq!(json, serde_json::json!(20.0));
    }
}
