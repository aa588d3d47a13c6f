//! Tariff, sizing and pricing tables behind the savings estimator.
//!
//! Costs are installed prices with the STC rebate already deducted.

use crate::models::calculator::{BatterySize, HouseholdSize, RoofDirection, SystemSize, ValueRange};

// ─── Tariffs ─────────────────────────────────────────────────
/// Retail import price ($/kWh)
pub const ELECTRICITY_RATE: f64 = 0.30;
/// Export credit ($/kWh)
pub const FEED_IN_TARIFF: f64 = 0.05;
/// Fixed network charge ($/day)
pub const DAILY_SUPPLY_CHARGE: f64 = 1.10;

// ─── Generation ──────────────────────────────────────────────
pub const PEAK_SUN_HOURS: f64 = 4.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const QUARTERS_PER_YEAR: f64 = 4.0;

/// Share of generation used on site without storage.
pub const SELF_CONSUMPTION_NO_BATTERY: f64 = 0.35;
/// Share of generation used on site when a battery shifts midday surplus.
pub const SELF_CONSUMPTION_WITH_BATTERY: f64 = 0.80;

// ─── Environment ─────────────────────────────────────────────
/// Annual CO2 avoided per installed kW (tonnes)
pub const CO2_TONNES_PER_KW: f64 = 1.2;
pub const TREES_PER_TONNE_CO2: f64 = 45.0;
/// Annual emissions of an average passenger car (tonnes)
pub const TONNES_CO2_PER_CAR: f64 = 4.6;

// ─── Calculator bounds ───────────────────────────────────────
pub const QUARTERLY_BILL_MIN: f64 = 200.0;
pub const QUARTERLY_BILL_MAX: f64 = 600.0;

pub const SHORT_ROI_YEARS: f64 = 10.0;
pub const LONG_ROI_YEARS: f64 = 25.0;

// ─── Catalogue tables ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemSpec {
    pub size: SystemSize,
    pub panels: u32,
    pub cost: ValueRange,
}

pub const SYSTEM_TABLE: [SystemSpec; 3] = [
    SystemSpec { size: SystemSize::Kw6_6, panels: 15, cost: ValueRange::new(5_500.0, 7_500.0) },
    SystemSpec { size: SystemSize::Kw10, panels: 23, cost: ValueRange::new(8_000.0, 11_000.0) },
    SystemSpec { size: SystemSize::Kw13, panels: 30, cost: ValueRange::new(10_500.0, 14_000.0) },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatterySpec {
    pub size: BatterySize,
    pub cost: ValueRange,
}

pub const BATTERY_TABLE: [BatterySpec; 3] = [
    BatterySpec { size: BatterySize::Kwh10, cost: ValueRange::new(9_000.0, 11_000.0) },
    BatterySpec { size: BatterySize::Kwh13_5, cost: ValueRange::new(12_500.0, 15_000.0) },
    BatterySpec { size: BatterySize::Kwh20, cost: ValueRange::new(17_000.0, 21_000.0) },
];

pub fn system_spec(size: SystemSize) -> &'static SystemSpec {
    match size {
        SystemSize::Kw6_6 => &SYSTEM_TABLE[0],
        SystemSize::Kw10 => &SYSTEM_TABLE[1],
        SystemSize::Kw13 => &SYSTEM_TABLE[2],
    }
}

pub fn battery_spec(size: BatterySize) -> &'static BatterySpec {
    match size {
        BatterySize::Kwh10 => &BATTERY_TABLE[0],
        BatterySize::Kwh13_5 => &BATTERY_TABLE[1],
        BatterySize::Kwh20 => &BATTERY_TABLE[2],
    }
}

/// Fraction of a north-facing array's output for each roof aspect.
pub fn roof_multiplier(direction: RoofDirection) -> f64 {
    match direction {
        RoofDirection::North => 1.0,
        RoofDirection::NorthEast | RoofDirection::NorthWest => 0.95,
        RoofDirection::East | RoofDirection::West => 0.85,
    }
}

/// Typical consumption (kWh/day) used until the visitor enters their own.
pub fn default_daily_usage(household: HouseholdSize) -> f64 {
    match household {
        HouseholdSize::Small => 12.0,
        HouseholdSize::Medium => 20.0,
        HouseholdSize::Large => 30.0,
    }
}
