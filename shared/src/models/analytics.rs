//! Analytics Model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::InvalidVariant;

/// Reporting window understood by the analytics route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "custom")]
    Custom,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "7days",
            TimeRange::Last30Days => "30days",
            TimeRange::Custom => "custom",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = InvalidVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7days" => Ok(TimeRange::Last7Days),
            "30days" => Ok(TimeRange::Last30Days),
            "custom" => Ok(TimeRange::Custom),
            _ => Err(InvalidVariant::new("time range", s)),
        }
    }
}

/// Query-string parameters for `GET /api/analytics/{restaurant_id}`.
///
/// Parameters are emitted in a fixed order (`timeRange`, `from`, `to`)
/// and unset ones are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsQuery {
    pub time_range: Option<TimeRange>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl AnalyticsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit date window
    pub fn range(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            time_range: None,
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn with_time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = Some(time_range);
        self
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(range) = self.time_range {
            pairs.push(("timeRange".to_string(), range.to_string()));
        }
        if let Some(from) = self.from {
            pairs.push(("from".to_string(), from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to".to_string(), to.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

/// Revenue for one day of the reporting window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: NaiveDate,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

/// Dashboard analytics for one restaurant
///
/// Every field defaults, since older backends return only a subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analytics {
    #[serde(alias = "order_count")]
    pub total_orders: u64,
    #[serde(alias = "total_sales", with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    pub average_rating: f64,
    pub revenue_trend: Vec<RevenuePoint>,
    pub previous_orders: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub previous_revenue: Decimal,
    pub previous_rating: f64,
    pub top_items: Vec<String>,
    pub recent_reviews: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_order() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let pairs = AnalyticsQuery::range(from, to)
            .with_time_range(TimeRange::Custom)
            .to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("timeRange".to_string(), "custom".to_string()),
                ("from".to_string(), "2024-01-01".to_string()),
                ("to".to_string(), "2024-01-31".to_string()),
            ]
        );
        assert!(AnalyticsQuery::new().to_pairs().is_empty());
    }

    #[test]
    fn test_legacy_analytics_shape() {
        let analytics: Analytics = serde_json::from_str(
            r#"{"restaurant_id": 7, "order_count": 3, "total_sales": 450.5}"#,
        )
        .unwrap();
        assert_eq!(analytics.total_orders, 3);
        assert_eq!(analytics.total_revenue, Decimal::new(4505, 1));
        assert!(analytics.revenue_trend.is_empty());
    }

    #[test]
    fn test_full_analytics_shape() {
        let analytics: Analytics = serde_json::from_str(
            r#"{
                "total_orders": 2, "total_revenue": 300, "average_rating": 4.5,
                "revenue_trend": [{"date": "2024-01-01", "revenue": 0.0}, {"date": "2024-01-02", "revenue": 300.0}],
                "previous_orders": 1, "previous_revenue": 100, "previous_rating": 4.0,
                "top_items": ["Dosa"], "recent_reviews": ["Great"]
            }"#,
        )
        .unwrap();
        assert_eq!(analytics.revenue_trend.len(), 2);
        assert_eq!(analytics.top_items, vec!["Dosa".to_string()]);
    }
}
