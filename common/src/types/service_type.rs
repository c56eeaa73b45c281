use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fulfillment mode chosen once per ordering session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    Delivery,
    Takeaway,
    DineIn,
}

impl ServiceType {
    pub fn badge(&self) -> &'static str {
        match self {
            ServiceType::Delivery => "Delivery",
            ServiceType::Takeaway => "Take Away",
            ServiceType::DineIn => "Dine In",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Delivery => "delivery",
            ServiceType::Takeaway => "takeaway",
            ServiceType::DineIn => "dine-in",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delivery" => Ok(ServiceType::Delivery),
            "takeaway" | "take-away" => Ok(ServiceType::Takeaway),
            "dine-in" | "dinein" => Ok(ServiceType::DineIn),
            other => Err(format!("unknown service type: {other}")),
        }
    }
}
