//! Statistics that may be undefined.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a statistic could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum UndefinedReason {
    /// The baseline window averages to zero, so a relative change is meaningless.
    ZeroBaseline,
    /// The mean is zero, so the coefficient of variation is meaningless.
    ZeroMean,
    /// A series has no variance.
    ZeroVariance,
    /// Not enough values for the computation.
    TooFewValues { required: usize, actual: usize },
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndefinedReason::ZeroBaseline => write!(f, "baseline mean is zero"),
            UndefinedReason::ZeroMean => write!(f, "mean is zero"),
            UndefinedReason::ZeroVariance => write!(f, "series has zero variance"),
            UndefinedReason::TooFewValues { required, actual } => {
                write!(f, "need at least {} values, got {}", required, actual)
            }
        }
    }
}

/// A numeric result or an explicit marker that it is undefined.
///
/// Zero denominators never produce NaN or infinity; they produce
/// `Undefined` with the reason attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Statistic {
    Defined(f64),
    Undefined(UndefinedReason),
}

impl Statistic {
    /// `numerator / denominator`, or `Undefined(reason)` when the
    /// denominator is zero.
    pub fn ratio(numerator: f64, denominator: f64, reason: UndefinedReason) -> Self {
        if denominator.abs() < f64::EPSILON {
            Statistic::Undefined(reason)
        } else {
            Statistic::Defined(numerator / denominator)
        }
    }

    /// Marker for computations that need more values.
    pub fn too_few(required: usize, actual: usize) -> Self {
        Statistic::Undefined(UndefinedReason::TooFewValues { required, actual })
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Statistic::Defined(x) => Some(*x),
            Statistic::Undefined(_) => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Statistic::Defined(_))
    }

    pub fn reason(&self) -> Option<UndefinedReason> {
        match self {
            Statistic::Defined(_) => None,
            Statistic::Undefined(reason) => Some(*reason),
        }
    }

    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Statistic::Defined(x) => Statistic::Defined(f(x)),
            undefined => undefined,
        }
    }

    /// Chain a computation that may itself be undefined.
    pub fn and_then(self, f: impl FnOnce(f64) -> Statistic) -> Self {
        match self {
            Statistic::Defined(x) => f(x),
            undefined => undefined,
        }
    }

    pub fn unwrap_or(self, default: f64) -> f64 {
        self.value().unwrap_or(default)
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Defined(x) => write!(f, "{:.4}", x),
            Statistic::Undefined(reason) => write!(f, "undefined ({})", reason),
        }
    }
}
