use serde_json::Value;
use std::fmt;

/// Threat value object for a policy-service license threat score.
///
/// The upstream export distinguishes three cases which the reports keep
/// apart: a computed score, an explicit "not computed" (the field is present
/// with a `null` value), and no field at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Threat {
    /// Computed threat score
    Known(u32),
    /// Field present but null: the service could not score this license
    Unsupported,
    /// Field absent from the record
    #[default]
    Missing,
}

impl Threat {
    /// Interprets an optional JSON field as a threat.
    ///
    /// `None` is an absent field. Values that are not non-negative integers
    /// are treated as missing and logged.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None => Threat::Missing,
            Some(Value::Null) => Threat::Unsupported,
            Some(v) => match v.as_u64().and_then(|n| u32::try_from(n).ok()) {
                Some(n) => Threat::Known(n),
                None => {
                    tracing::warn!(value = %v, "ignoring threat value that is not a non-negative integer");
                    Threat::Missing
                }
            },
        }
    }

    /// Returns the numeric score when one was computed
    pub fn score(&self) -> Option<u32> {
        match self {
            Threat::Known(n) => Some(*n),
            Threat::Unsupported | Threat::Missing => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Threat::Known(_))
    }

    /// Whether this threat meets a high-risk threshold.
    /// Unscored threats never qualify.
    pub fn is_at_least(&self, threshold: u32) -> bool {
        matches!(self, Threat::Known(n) if *n >= threshold)
    }
}

impl fmt::Display for Threat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threat::Known(n) => write!(f, "{}", n),
            Threat::Unsupported => write!(f, "Unsupported"),
            Threat::Missing => write!(f, "N/A"),
        }
    }
}
