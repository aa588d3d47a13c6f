// ============================================================
//  Solar Savings Estimator
//
//  Pipeline (single pass, no I/O):
//   1. Validate inputs      – usage > 0, bill inside slider range
//   2. Generation           – kW × peak sun hours × roof multiplier
//   3. Self-consumption     – capped by demand and capture ceiling
//   4. Grid split           – exported / remaining grid import
//   5. Financials           – new bill, annual savings
//   6. Costs & ROI          – catalogue cost ranges, payback, net savings
//   7. Environment          – CO2, trees, cars
// ============================================================

use crate::error::CalculatorError;
use crate::models::calculator::{
    BatteryOption, CalculatorCatalog, CalculatorInputs, CalculatorResults, EstimateRequest,
    HouseholdOption, HouseholdSize, RoofDirection, RoofOption, SystemOption, ValueRange,
};
use crate::services::constants::*;

impl EstimateRequest {
    /// Resolve optional form fields into a complete input set.
    pub fn into_inputs(self) -> CalculatorInputs {
        CalculatorInputs {
            quarterly_bill: self.quarterly_bill,
            household_size: self.household_size,
            daily_usage: self
                .daily_usage
                .unwrap_or_else(|| default_daily_usage(self.household_size)),
            system_size: self.system_size,
            roof_direction: self.roof_direction,
            include_battery: self.include_battery,
            battery_size: self.battery_size,
        }
    }
}

pub fn validate(inputs: &CalculatorInputs) -> Result<(), CalculatorError> {
    if !inputs.daily_usage.is_finite() || inputs.daily_usage <= 0.0 {
        return Err(CalculatorError::InvalidDailyUsage(inputs.daily_usage));
    }
    let bill = inputs.quarterly_bill;
    if !bill.is_finite() || !(QUARTERLY_BILL_MIN..=QUARTERLY_BILL_MAX).contains(&bill) {
        return Err(CalculatorError::QuarterlyBillOutOfRange {
            value: bill,
            min: QUARTERLY_BILL_MIN,
            max: QUARTERLY_BILL_MAX,
        });
    }
    Ok(())
}

pub fn self_consumption_rate(inputs: &CalculatorInputs) -> f64 {
    if inputs.include_battery && inputs.battery_size.kwh() > 0.0 {
        SELF_CONSUMPTION_WITH_BATTERY
    } else {
        SELF_CONSUMPTION_NO_BATTERY
    }
}

/// Main entry point – recompute the whole result bundle for one input set.
pub fn calculate(inputs: &CalculatorInputs) -> Result<CalculatorResults, CalculatorError> {
    validate(inputs)?;

    // ── 1. Bill ────────────────────────────────────────────────
    let current_annual_bill = inputs.quarterly_bill * QUARTERS_PER_YEAR;

    // ── 2. Generation ──────────────────────────────────────────
    let daily_generation_kwh =
        inputs.system_size.kw() * PEAK_SUN_HOURS * roof_multiplier(inputs.roof_direction);
    let annual_generation_kwh = daily_generation_kwh * DAYS_PER_YEAR;

    // ── 3. Self-consumption ────────────────────────────────────
    // Cannot use more than the household demands nor more than
    // the share of generation that is captured on site.
    let rate = self_consumption_rate(inputs);
    let daily_self_consumed_kwh = inputs.daily_usage.min(daily_generation_kwh * rate);
    let annual_self_consumed_kwh = daily_self_consumed_kwh * DAYS_PER_YEAR;

    // ── 4. Grid split ──────────────────────────────────────────
    let annual_usage_kwh = inputs.daily_usage * DAYS_PER_YEAR;
    let annual_exported_kwh = (annual_generation_kwh - annual_self_consumed_kwh).max(0.0);
    let remaining_grid_usage_kwh = (annual_usage_kwh - annual_self_consumed_kwh).max(0.0);

    // ── 5. Financials ──────────────────────────────────────────
    let savings_from_self_consumption = annual_self_consumed_kwh * ELECTRICITY_RATE;
    let feed_in_income = annual_exported_kwh * FEED_IN_TARIFF;
    let annual_supply_charge = DAILY_SUPPLY_CHARGE * DAYS_PER_YEAR;
    let new_annual_bill =
        (remaining_grid_usage_kwh * ELECTRICITY_RATE + annual_supply_charge - feed_in_income).max(0.0);
    // Signed: negative when the new bill stays above the entered one.
    let annual_savings = current_annual_bill - new_annual_bill;

    // ── 6. Costs & ROI ─────────────────────────────────────────
    let solar_cost = system_spec(inputs.system_size).cost;
    let battery_cost = if inputs.include_battery {
        battery_spec(inputs.battery_size).cost
    } else {
        ValueRange::ZERO
    };
    let total_cost = solar_cost + battery_cost;

    let payback_years = payback(total_cost, annual_savings);
    let ten_year_savings = net_savings(total_cost, annual_savings, SHORT_ROI_YEARS);
    let twenty_five_year_savings = net_savings(total_cost, annual_savings, LONG_ROI_YEARS);

    // ── 7. Environment ─────────────────────────────────────────
    let co2_offset_tonnes = inputs.system_size.kw() * CO2_TONNES_PER_KW;
    let trees_equivalent = co2_offset_tonnes * TREES_PER_TONNE_CO2;
    let cars_off_road = co2_offset_tonnes / TONNES_CO2_PER_CAR;

    let bill_reduction_percent = bill_reduction(current_annual_bill, new_annual_bill);

    Ok(CalculatorResults {
        current_annual_bill,
        daily_generation_kwh,
        annual_generation_kwh,
        self_consumption_rate: rate,
        daily_self_consumed_kwh,
        annual_self_consumed_kwh,
        annual_exported_kwh,
        annual_usage_kwh,
        remaining_grid_usage_kwh,
        savings_from_self_consumption,
        feed_in_income,
        new_annual_bill,
        annual_savings,
        solar_cost,
        battery_cost,
        total_cost,
        payback_years,
        ten_year_savings,
        twenty_five_year_savings,
        co2_offset_tonnes,
        trees_equivalent,
        cars_off_road,
        bill_reduction_percent,
    })
}

/// Cheapest install pays back soonest: min cost → min years.
fn payback(total_cost: ValueRange, annual_savings: f64) -> Option<ValueRange> {
    if annual_savings <= 0.0 {
        return None;
    }
    Some(ValueRange::new(
        total_cost.min / annual_savings,
        total_cost.max / annual_savings,
    ))
}

/// Best case pairs with the cheapest install: max savings ← min cost.
fn net_savings(total_cost: ValueRange, annual_savings: f64, years: f64) -> ValueRange {
    let gross = annual_savings * years;
    ValueRange::new(gross - total_cost.max, gross - total_cost.min)
}

fn bill_reduction(current_annual_bill: f64, new_annual_bill: f64) -> u8 {
    if current_annual_bill <= 0.0 {
        return 0;
    }
    let pct = (current_annual_bill - new_annual_bill) / current_annual_bill * 100.0;
    pct.clamp(0.0, 100.0).round() as u8
}

/// Option tables for the calculator controls.
pub fn catalog() -> CalculatorCatalog {
    CalculatorCatalog {
        quarterly_bill: ValueRange::new(QUARTERLY_BILL_MIN, QUARTERLY_BILL_MAX),
        households: HouseholdSize::ALL
            .into_iter()
            .map(|size| HouseholdOption { size, default_daily_usage: default_daily_usage(size) })
            .collect(),
        systems: SYSTEM_TABLE
            .iter()
            .map(|s| SystemOption { size: s.size, panels: s.panels, cost: s.cost })
            .collect(),
        batteries: BATTERY_TABLE
            .iter()
            .map(|b| BatteryOption { size: b.size, cost: b.cost })
            .collect(),
        roof_directions: RoofDirection::ALL
            .into_iter()
            .map(|direction| RoofOption { direction, multiplier: roof_multiplier(direction) })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calculator::{BatterySize, SystemSize};
    use crate::services::constants::*;

    const EPS: f64 = 1e-6;

    fn scenario_one() -> CalculatorInputs {
        CalculatorInputs {
            quarterly_bill: 400.0,
            household_size: HouseholdSize::Medium,
            daily_usage: 20.0,
            system_size: SystemSize::Kw6_6,
            roof_direction: RoofDirection::North,
            include_battery: false,
            battery_size: BatterySize::Kwh13_5,
        }
    }

    fn all_inputs() -> Vec<CalculatorInputs> {
        let mut out = Vec::new();
        for bill in [QUARTERLY_BILL_MIN, 400.0, QUARTERLY_BILL_MAX] {
            for household in HouseholdSize::ALL {
                for system in SystemSize::ALL {
                    for roof in RoofDirection::ALL {
                        for battery in BatterySize::ALL {
                            for include_battery in [false, true] {
                                out.push(CalculatorInputs {
                                    quarterly_bill: bill,
                                    household_size: household,
                                    daily_usage: default_daily_usage(household),
                                    system_size: system,
                                    roof_direction: roof,
                                    include_battery,
                                    battery_size: battery,
                                });
                            }
                        }
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_scenario_one_no_battery() {
        let r = calculate(&scenario_one()).unwrap();
        assert_eq!(r.current_annual_bill, 1600.0);
        assert!((r.daily_generation_kwh - 6.6 * PEAK_SUN_HOURS).abs() < EPS);
        assert_eq!(r.self_consumption_rate, SELF_CONSUMPTION_NO_BATTERY);
        assert!(r.annual_savings > 0.0);
        assert!(r.annual_savings < r.current_annual_bill);
        assert!((r.new_annual_bill - (r.current_annual_bill - r.annual_savings)).abs() < EPS);
        assert_eq!(r.battery_cost, ValueRange::ZERO);
        assert_eq!(r.total_cost, ValueRange::new(5_500.0, 7_500.0));
    }

    #[test]
    fn test_battery_raises_rate_and_savings() {
        let solar_only = calculate(&scenario_one()).unwrap();
        let with_battery = calculate(&CalculatorInputs {
            include_battery: true,
            battery_size: BatterySize::Kwh13_5,
            ..scenario_one()
        })
        .unwrap();
        assert!(with_battery.self_consumption_rate > solar_only.self_consumption_rate);
        assert!(with_battery.annual_savings > solar_only.annual_savings);
        assert_eq!(with_battery.battery_cost, ValueRange::new(12_500.0, 15_000.0));
        assert_eq!(with_battery.total_cost, ValueRange::new(18_000.0, 22_500.0));
    }

    #[test]
    fn test_west_roof_generates_less_than_north() {
        let north = calculate(&scenario_one()).unwrap();
        let west = calculate(&CalculatorInputs {
            roof_direction: RoofDirection::West,
            ..scenario_one()
        })
        .unwrap();
        assert!(west.daily_generation_kwh < north.daily_generation_kwh);
        assert!(west.annual_savings <= north.annual_savings);
    }

    #[test]
    fn test_self_consumption_capped_by_demand_and_capture() {
        for inputs in all_inputs() {
            let r = calculate(&inputs).unwrap();
            assert!(r.daily_self_consumed_kwh <= inputs.daily_usage);
            assert!(r.daily_self_consumed_kwh <= r.daily_generation_kwh * r.self_consumption_rate);
            assert!(
                r.daily_self_consumed_kwh == inputs.daily_usage
                    || r.daily_self_consumed_kwh == r.daily_generation_kwh * r.self_consumption_rate
            );
        }
    }

    #[test]
    fn test_floors_and_percent_bounds_hold() {
        for inputs in all_inputs() {
            let r = calculate(&inputs).unwrap();
            assert!(r.annual_exported_kwh >= 0.0);
            assert!(r.remaining_grid_usage_kwh >= 0.0);
            assert!(r.new_annual_bill >= 0.0);
            assert!((r.new_annual_bill - (r.current_annual_bill - r.annual_savings)).abs() < EPS);
            assert!(r.bill_reduction_percent <= 100);
        }
    }

    #[test]
    fn test_idempotent() {
        let a = calculate(&scenario_one()).unwrap();
        let b = calculate(&scenario_one()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.annual_savings.to_bits(), b.annual_savings.to_bits());
    }

    #[test]
    fn test_monotonic_in_system_size_and_battery() {
        for inputs in all_inputs() {
            let r = calculate(&inputs).unwrap();
            if let Some(next) = SystemSize::ALL.into_iter().find(|s| *s > inputs.system_size) {
                let bigger = calculate(&CalculatorInputs { system_size: next, ..inputs }).unwrap();
                assert!(bigger.annual_generation_kwh >= r.annual_generation_kwh);
            }
            if !inputs.include_battery {
                let with_battery =
                    calculate(&CalculatorInputs { include_battery: true, ..inputs }).unwrap();
                assert!(with_battery.self_consumption_rate >= r.self_consumption_rate);
                assert!(with_battery.annual_savings >= r.annual_savings);
            }
        }
    }

    #[test]
    fn test_payback_pairs_min_cost_with_shorter_years() {
        let r = calculate(&scenario_one()).unwrap();
        let p = r.payback_years.unwrap();
        assert!((p.min - r.total_cost.min / r.annual_savings).abs() < EPS);
        assert!((p.max - r.total_cost.max / r.annual_savings).abs() < EPS);
        assert!(p.min < p.max);

        let gross = r.annual_savings * 10.0;
        assert!((r.ten_year_savings.max - (gross - r.total_cost.min)).abs() < EPS);
        assert!((r.ten_year_savings.min - (gross - r.total_cost.max)).abs() < EPS);
        assert!(r.twenty_five_year_savings.min > r.ten_year_savings.min);
    }

    #[test]
    fn test_no_savings_means_no_payback() {
        // Large usage on a small bill: solar cannot beat the entered bill.
        let inputs = CalculatorInputs {
            quarterly_bill: QUARTERLY_BILL_MIN,
            daily_usage: 40.0,
            ..scenario_one()
        };
        let r = calculate(&inputs).unwrap();
        assert!(r.annual_savings < 0.0);
        assert!((r.new_annual_bill - (r.current_annual_bill - r.annual_savings)).abs() < EPS);
        assert!(r.payback_years.is_none());
        assert_eq!(r.bill_reduction_percent, 0);

        // Negative savings keep accruing over the horizon, on top of the cost.
        let gross = r.annual_savings * 10.0;
        assert!((r.ten_year_savings.min - (gross - 7_500.0)).abs() < EPS);
        assert!((r.ten_year_savings.max - (gross - 5_500.0)).abs() < EPS);
        assert!(r.ten_year_savings.max < -5_500.0);
        assert!(r.twenty_five_year_savings.max < r.ten_year_savings.max);
    }

    #[test]
    fn test_bill_slider_bounds_are_finite() {
        for bill in [QUARTERLY_BILL_MIN, QUARTERLY_BILL_MAX] {
            let r = calculate(&CalculatorInputs { quarterly_bill: bill, ..scenario_one() }).unwrap();
            for v in [
                r.current_annual_bill,
                r.annual_generation_kwh,
                r.new_annual_bill,
                r.feed_in_income,
                r.co2_offset_tonnes,
            ] {
                assert!(v.is_finite() && v >= 0.0, "bill {bill}: {v}");
            }
            assert!(r.annual_savings.is_finite());
            assert!(r.ten_year_savings.min.is_finite() && r.twenty_five_year_savings.max.is_finite());
            if let Some(p) = r.payback_years {
                assert!(p.min.is_finite() && p.max.is_finite() && p.min > 0.0);
            }
        }
    }

    #[test]
    fn test_environment_scales_with_system_size_only() {
        let small = calculate(&scenario_one()).unwrap();
        let west = calculate(&CalculatorInputs { roof_direction: RoofDirection::West, ..scenario_one() }).unwrap();
        assert_eq!(small.co2_offset_tonnes, west.co2_offset_tonnes);
        assert!((small.co2_offset_tonnes - 6.6 * CO2_TONNES_PER_KW).abs() < EPS);
        assert!((small.trees_equivalent - small.co2_offset_tonnes * TREES_PER_TONNE_CO2).abs() < EPS);
        assert!((small.cars_off_road - small.co2_offset_tonnes / TONNES_CO2_PER_CAR).abs() < EPS);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let bad_usage = CalculatorInputs { daily_usage: 0.0, ..scenario_one() };
        assert_eq!(calculate(&bad_usage), Err(CalculatorError::InvalidDailyUsage(0.0)));

        let nan_usage = CalculatorInputs { daily_usage: f64::NAN, ..scenario_one() };
        assert!(matches!(calculate(&nan_usage), Err(CalculatorError::InvalidDailyUsage(_))));

        let low_bill = CalculatorInputs { quarterly_bill: 150.0, ..scenario_one() };
        assert!(matches!(
            calculate(&low_bill),
            Err(CalculatorError::QuarterlyBillOutOfRange { value, .. }) if value == 150.0
        ));
    }

    #[test]
    fn test_request_defaults_usage_from_household() {
        let req = EstimateRequest {
            quarterly_bill: 300.0,
            household_size: HouseholdSize::Large,
            daily_usage: None,
            system_size: SystemSize::Kw10,
            roof_direction: RoofDirection::East,
            include_battery: false,
            battery_size: BatterySize::Kwh10,
        };
        assert_eq!(req.clone().into_inputs().daily_usage, 30.0);
        let overridden = EstimateRequest { daily_usage: Some(17.5), ..req };
        assert_eq!(overridden.into_inputs().daily_usage, 17.5);
    }

    #[test]
    fn test_catalog_lists_every_option() {
        let c = catalog();
        assert_eq!(c.systems.len(), SystemSize::ALL.len());
        assert_eq!(c.batteries.len(), BatterySize::ALL.len());
        assert_eq!(c.roof_directions.len(), RoofDirection::ALL.len());
        assert_eq!(c.households[1].default_daily_usage, 20.0);
        assert_eq!(c.quarterly_bill, ValueRange::new(200.0, 600.0));
    }
}
