// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod consumption;
pub mod timeseries;
pub mod trend;

pub use consumption::{compute_consumption_metrics, ConsumptionMetric, ConsumptionReport};
pub use timeseries::{aggregate_by_month, MonthlyBucket};
pub use trend::{compare_year_over_year, YearComparison};
