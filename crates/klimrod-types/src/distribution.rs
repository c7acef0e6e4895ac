//! Gratuity and fee distribution structures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sales::Totals;
use crate::{Amount, ParseVariantError, DEFAULT_POOL_LABEL};

/// How a pool is divided among employees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DistributionPolicy {
    /// Weighted by each employee's points.
    #[default]
    Percentage,
    /// Uniform split across all records.
    Equal,
}

impl DistributionPolicy {
    /// Short heading used on printed reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Percentage => "BY POINTS",
            Self::Equal => "EQUAL PARTS",
        }
    }
}

impl fmt::Display for DistributionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage => f.write_str("percentage"),
            Self::Equal => f.write_str("equal"),
        }
    }
}

impl FromStr for DistributionPolicy {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" => Ok(Self::Percentage),
            "equal" => Ok(Self::Equal),
            _ => Err(ParseVariantError::new("distribution policy", s)),
        }
    }
}

/// A single amount to be divided among employees: a flat fee or an
/// overriding total gratuity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct Pool {
    pub amount: Amount,
    #[serde(default)]
    pub label: Option<String>,
}

impl Pool {
    pub fn new(amount: Amount) -> Self {
        Self {
            amount,
            label: None,
        }
    }

    pub fn labeled(amount: Amount, label: impl Into<String>) -> Self {
        Self {
            amount,
            label: Some(label.into()),
        }
    }

    /// The pool's label, or [`DEFAULT_POOL_LABEL`].
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_POOL_LABEL)
    }
}

/// One employee's share of a distribution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRow {
    pub employee: String,
    pub position: String,
    /// With a pool, the whole share is reported here.
    pub cc_gratuity: Amount,
    pub cash_gratuity: Amount,
    /// Total share.
    pub tips: Amount,
    pub points: f64,
    /// Share of the pool, 0-100.
    pub percentage_of_pool: f64,
}

/// Output of a distribution run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TipReport {
    pub policy: DistributionPolicy,
    pub pool_label: String,
    /// A pool was split; rows carry their share as card gratuity.
    #[serde(default)]
    pub pooled: bool,
    pub rows: Vec<DistributionRow>,
    pub totals: Totals,
}

impl TipReport {
    /// True when there is gratuity to hand out but no row received any of it.
    pub fn is_undistributed(&self) -> bool {
        self.rows.is_empty() && self.totals.total_gratuity > 0.0
    }

    /// Sum of every row's share, unrounded.
    pub fn distributed_total(&self) -> Amount {
        self.rows.iter().map(|row| row.tips).sum()
    }
}
