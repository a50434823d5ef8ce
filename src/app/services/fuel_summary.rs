//! Fuel spend and economy summary
//!
//! Aggregates a vehicle's fuel records into the totals shown by the CLI
//! `summary` report.

use serde::Serialize;

use crate::app::models::FuelRecord;

/// Aggregate statistics over a set of fuel fill-ups
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FuelSummary {
    /// Number of fill-ups
    pub fillups: usize,
    /// Sum of total prices
    pub total_cost: f64,
    /// Sum of fill amounts, in the vehicle's fuel units
    pub total_fill_amount: f64,
    /// Highest minus lowest odometer reading
    pub distance: f64,
    /// Mean of the non-zero per-fill MPG values, `None` when there are none
    pub average_mpg: Option<f64>,
}

impl FuelSummary {
    /// Summarise fuel records; order does not matter
    pub fn from_records(records: &[FuelRecord]) -> Self {
        let total_cost = records.iter().map(|r| r.total_price).sum();
        let total_fill_amount = records.iter().map(|r| r.fill_amount).sum();

        let distance = if records.is_empty() {
            0.0
        } else {
            let (min, max) = records
                .iter()
                .map(|r| r.odometer)
                .fold((f64::MAX, f64::MIN), |(lo, hi), o| (lo.min(o), hi.max(o)));
            max - min
        };

        // Partial fills carry no MPG and are recorded as zero
        let mpgs: Vec<f64> = records.iter().map(|r| r.mpg).filter(|m| *m > 0.0).collect();
        let average_mpg = if mpgs.is_empty() {
            None
        } else {
            Some(mpgs.iter().sum::<f64>() / mpgs.len() as f64)
        };

        Self {
            fillups: records.len(),
            total_cost,
            total_fill_amount,
            distance,
            average_mpg,
        }
    }

    /// Fuel cost per unit of distance driven
    pub fn cost_per_distance(&self) -> Option<f64> {
        if self.distance > 0.0 {
            Some(self.total_cost / self.distance)
        } else {
            None
        }
    }
}
