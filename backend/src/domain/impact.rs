//! Environmental Impact Estimates
//!
//! Illustrative estimates from the total tracked quantity. The coefficients
//! are policy constants, not measurements.

use serde::{Deserialize, Serialize};

use super::item::GroceryItem;

/// Linear coefficients behind the impact estimates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactCoefficients {
    /// Food waste prevented per tracked unit, kg
    pub waste_kg_per_item: f64,
    /// CO2 avoided per kg of food waste prevented, kg
    pub co2_kg_per_waste_kg: f64,
    /// Money saved per tracked unit, USD
    pub money_usd_per_item: f64,
}

impl Default for ImpactCoefficients {
    fn default() -> Self {
        Self {
            waste_kg_per_item: 0.1,
            co2_kg_per_waste_kg: 0.5,
            money_usd_per_item: 0.8,
        }
    }
}

/// Car distance with the same emissions as one kg of CO2
pub const CAR_KM_PER_CO2_KG: f64 = 5.0;
/// Savings are reported per month
pub const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMetrics {
    pub food_waste_prevented_kg: f64,
    pub co2_saved_kg: f64,
    pub money_saved_usd: f64,
    pub items_tracked: u64,
    /// Derived from the rounded CO2 figure
    pub car_km_equivalent: f64,
    /// Derived from the rounded money figure
    pub projected_yearly_savings_usd: f64,
}

pub fn aggregate_impact(items: &[GroceryItem], coefficients: &ImpactCoefficients) -> ImpactMetrics {
    let total_quantity: u64 = items.iter().map(|item| u64::from(item.quantity)).sum();
    let total = total_quantity as f64;

    let waste_kg = total * coefficients.waste_kg_per_item;
    // chained from the unrounded waste figure
    let co2_kg = waste_kg * coefficients.co2_kg_per_waste_kg;
    let money_usd = total * coefficients.money_usd_per_item;

    let co2_saved_kg = round_to(co2_kg, 1);
    let money_saved_usd = round_to(money_usd, 2);

    ImpactMetrics {
        food_waste_prevented_kg: round_to(waste_kg, 1),
        co2_saved_kg,
        money_saved_usd,
        items_tracked: total_quantity,
        car_km_equivalent: round_to(co2_saved_kg * CAR_KM_PER_CO2_KG, 1),
        projected_yearly_savings_usd: round_to(money_saved_usd * MONTHS_PER_YEAR, 2),
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
