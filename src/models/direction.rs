use serde::{Deserialize, Serialize};
use std::fmt;

/// Intended side of the primary trade setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeDirection {
    #[default]
    Long,
    Short,
}

impl TradeDirection {
    /// Legal choices in form order. The first entry is the default.
    pub const CHOICES: &'static [&'static str] = &["Long", "Short"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeDirection::Long => "Long",
            TradeDirection::Short => "Short",
        }
    }

    pub fn from_label(s: &str) -> Option<TradeDirection> {
        match s {
            "Long" => Some(TradeDirection::Long),
            "Short" => Some(TradeDirection::Short),
            _ => None,
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Overall market bias recorded during pre-market analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bias {
    #[default]
    Bullish,
    Bearish,
    Neutral,
}

impl Bias {
    pub const CHOICES: &'static [&'static str] = &["Bullish", "Bearish", "Neutral"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bias::Bullish => "Bullish",
            Bias::Bearish => "Bearish",
            Bias::Neutral => "Neutral",
        }
    }

    pub fn from_label(s: &str) -> Option<Bias> {
        match s {
            "Bullish" => Some(Bias::Bullish),
            "Bearish" => Some(Bias::Bearish),
            "Neutral" => Some(Bias::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
