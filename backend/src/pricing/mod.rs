//! Line-item pricing
//!
//! Typed dispatch over the kinds of price a line item can carry. Rental
//! prices are forecast with the optimizer; sale prices are a flat unit cost.
//!
//! # Example
//!
//! ```rust
//! use rental_pricing_core_rs::pricing::{calculate_sub_total, LineItem, Price, RentalPrice};
//! use rental_pricing_core_rs::RatePlan;
//!
//! let item = LineItem::new(
//!     Price::Rental(RentalPrice::new(RatePlan::new(1_000, 6_000, 20_000))),
//!     2,
//! )
//! .with_duration(10);
//!
//! let sub_total = calculate_sub_total(&item).unwrap();
//! assert_eq!(sub_total.unit_cost_in_cents, 9_000);
//! assert_eq!(sub_total.sub_total_in_cents, 18_000);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;
use crate::models::{Forecast, RatePlan};
use crate::optimizer::Forecaster;

/// Day / week / month rental price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPrice {
    #[serde(default)]
    pub name: Option<String>,
    pub rates: RatePlan,
}

impl RentalPrice {
    pub fn new(rates: RatePlan) -> Self {
        Self { name: None, rates }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Flat per-unit sale price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalePrice {
    #[serde(default)]
    pub name: Option<String>,
    pub unit_cost_in_cents: i64,
}

impl SalePrice {
    pub fn new(unit_cost_in_cents: i64) -> Self {
        Self {
            name: None,
            unit_cost_in_cents,
        }
    }
}

/// Price attached to a line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Price {
    Rental(RentalPrice),
    Sale(SalePrice),
}

/// Forecast attached to a line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "forecast", rename_all = "snake_case")]
pub enum LineItemForecast {
    Rental(Forecast),
    /// Sale items have no time dimension
    SaleForecastNotApplicable,
}

impl LineItemForecast {
    pub fn as_rental(&self) -> Option<&Forecast> {
        match self {
            LineItemForecast::Rental(forecast) => Some(forecast),
            LineItemForecast::SaleForecastNotApplicable => None,
        }
    }
}

/// One priced line of an order or quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub price: Price,

    pub quantity: u32,

    /// Rental length; ignored for sale items
    #[serde(default)]
    pub duration_in_days: Option<i64>,
}

impl LineItem {
    pub fn new(price: Price, quantity: u32) -> Self {
        Self {
            price,
            quantity,
            duration_in_days: None,
        }
    }

    pub fn with_duration(mut self, days: i64) -> Self {
        self.duration_in_days = Some(days);
        self
    }

    /// Forecast this item's cost
    ///
    /// `number_of_days` overrides the item's own `duration_in_days`.
    pub fn forecast(&self, number_of_days: Option<i64>) -> Result<LineItemForecast, ForecastError> {
        self.forecast_with(&Forecaster::default(), number_of_days)
    }

    /// Like [`LineItem::forecast`], with an explicitly configured forecaster
    pub fn forecast_with(
        &self,
        forecaster: &Forecaster,
        number_of_days: Option<i64>,
    ) -> Result<LineItemForecast, ForecastError> {
        match &self.price {
            Price::Rental(rental) => {
                let days = number_of_days
                    .or(self.duration_in_days)
                    .ok_or(ForecastError::MissingDuration)?;
                let forecast = forecaster.forecast(&rental.rates, days)?;
                Ok(LineItemForecast::Rental(forecast))
            }
            Price::Sale(_) => Ok(LineItemForecast::SaleForecastNotApplicable),
        }
    }
}

/// Priced result for a line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTotal {
    /// `unit_cost_in_cents * quantity` (saturating)
    pub sub_total_in_cents: i64,

    /// Cost of one unit: forecast total for rentals, unit price for sales
    pub unit_cost_in_cents: i64,

    pub quantity: u32,

    pub forecast: LineItemForecast,
}

/// Price a single line item with the default configuration
pub fn calculate_sub_total(item: &LineItem) -> Result<SubTotal, ForecastError> {
    calculate_sub_total_with(&Forecaster::default(), item)
}

/// Price a single line item
///
/// # Errors
///
/// - Any forecast error for rental items
/// - `MissingDuration` for a rental item without a duration
/// - `NegativeUnitCost` for a sale item with a negative price
pub fn calculate_sub_total_with(
    forecaster: &Forecaster,
    item: &LineItem,
) -> Result<SubTotal, ForecastError> {
    let (unit_cost, forecast) = match &item.price {
        Price::Rental(rental) => {
            let days = item.duration_in_days.ok_or(ForecastError::MissingDuration)?;
            let forecast = forecaster.forecast(&rental.rates, days)?;
            (
                forecast.accumulative_cost_in_cents,
                LineItemForecast::Rental(forecast),
            )
        }
        Price::Sale(sale) => {
            if sale.unit_cost_in_cents < 0 {
                return Err(ForecastError::NegativeUnitCost {
                    value: sale.unit_cost_in_cents,
                });
            }
            (
                sale.unit_cost_in_cents,
                LineItemForecast::SaleForecastNotApplicable,
            )
        }
    };

    Ok(SubTotal {
        sub_total_in_cents: unit_cost.saturating_mul(i64::from(item.quantity)),
        unit_cost_in_cents: unit_cost,
        quantity: item.quantity,
        forecast,
    })
}

/// Price each line item independently, preserving order
pub fn bulk_calculate_sub_total(items: &[LineItem]) -> Vec<Result<SubTotal, ForecastError>> {
    let forecaster = Forecaster::default();
    items
        .iter()
        .map(|item| calculate_sub_total_with(&forecaster, item))
        .collect()
}
