use std::fmt;

/// Point in the trading day a contingency scenario belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioGroup {
    PreMarket,
    OpeningBell,
    BeforeLevel,
    AtLevel,
    AfterTarget,
    Other,
}

impl ScenarioGroup {
    pub fn title(&self) -> &'static str {
        match self {
            ScenarioGroup::PreMarket => "A. Pre-Market Scenarios",
            ScenarioGroup::OpeningBell => "B. Opening Bell Scenarios",
            ScenarioGroup::BeforeLevel => {
                "C. During the Trading Day Scenarios (Before Level of Interest)"
            }
            ScenarioGroup::AtLevel => "D. At the Level of Interest",
            ScenarioGroup::AfterTarget => "E. After Target is Reached",
            ScenarioGroup::Other => "F. Other Scenarios",
        }
    }
}

impl fmt::Display for ScenarioGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// An IF/THEN contingency with an optional narrative note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub number: u8,
    pub group: ScenarioGroup,
    pub question: &'static str,
    pub condition: &'static str,
    pub action: &'static str,
    pub narrative: Option<&'static str>,
}

impl Scenario {
    /// Field names this scenario owns, condition first.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        [Some(self.condition), Some(self.action), self.narrative]
            .into_iter()
            .flatten()
    }
}

const fn scenario(
    number: u8,
    group: ScenarioGroup,
    question: &'static str,
    condition: &'static str,
    action: &'static str,
    narrative: Option<&'static str>,
) -> Scenario {
    Scenario {
        number,
        group,
        question,
        condition,
        action,
        narrative,
    }
}

use ScenarioGroup::*;

pub static SCENARIOS: &[Scenario] = &[
    scenario(
        1,
        PreMarket,
        "What if the stock breaks a key level in the pre-market?",
        "IF - Premarket Break",
        "THEN - Premarket Break",
        None,
    ),
    scenario(
        2,
        PreMarket,
        "What if the opening price is far from my Level of Interest?",
        "IF - Opening Price Far",
        "THEN - Opening Price Far",
        None,
    ),
    scenario(
        3,
        OpeningBell,
        "What if the stock has a large overnight gap?",
        "IF - Overnight Gap",
        "THEN - Overnight Gap",
        None,
    ),
    scenario(
        4,
        OpeningBell,
        "What if the stock reverses sharply at the open?",
        "IF - Sharp Reversal",
        "THEN - Sharp Reversal",
        Some("Narrative Consideration - Sharp Reversal"),
    ),
    scenario(
        5,
        BeforeLevel,
        "What if price reverses before reaching the Level of Interest?",
        "IF - Reversal Before",
        "THEN - Reversal Before",
        Some("Narrative Consideration - Reversal Before"),
    ),
    scenario(
        6,
        BeforeLevel,
        "What if the stock is strongly trending?",
        "IF - Strong Trend",
        "THEN - Strong Trend",
        Some("Narrative Consideration - Strong Trend"),
    ),
    scenario(
        7,
        BeforeLevel,
        "What if the stock is range-bound?",
        "IF - Range Bound",
        "THEN - Range Bound",
        Some("Narrative Consideration - Range Bound"),
    ),
    scenario(
        8,
        AtLevel,
        "What if price blows through the Level of Interest?",
        "IF - Blow Through",
        "THEN - Blow Through",
        Some("Narrative Consideration - Blow Through"),
    ),
    scenario(
        9,
        AtLevel,
        "What if price consolidates at the Level of Interest?",
        "IF - Consolidates",
        "THEN - Consolidates",
        Some("Narrative Consideration - Consolidates"),
    ),
    scenario(
        10,
        AtLevel,
        "What if the stock's trading volume is low at a key level?",
        "IF - Low Volume",
        "THEN - Low Volume",
        Some("Narrative Consideration - Low Volume"),
    ),
    scenario(
        11,
        AtLevel,
        "What if the stock shows a false breakout?",
        "IF - False Breakout",
        "THEN - False Breakout",
        Some("Narrative Consideration - False Breakout"),
    ),
    scenario(
        12,
        AfterTarget,
        "What if the target is reached quickly?",
        "IF - Target Reached Quickly",
        "THEN - Target Reached Quickly",
        Some("Narrative Consideration - Target Reached Quickly"),
    ),
    scenario(
        13,
        Other,
        "What if the stock's volatility increases significantly?",
        "IF - Volatility Increase",
        "THEN - Volatility Increase",
        Some("Narrative Consideration - Volatility Increase"),
    ),
    scenario(
        14,
        Other,
        "What if the stock fails to hold an important level?",
        "IF - Fails Hold Level",
        "THEN - Fails Hold Level",
        Some("Narrative Consideration - Fails Hold Level"),
    ),
    scenario(
        15,
        Other,
        "What if the stock gaps and then consolidates?",
        "IF - Gaps Consolidates",
        "THEN - Gaps Consolidates",
        Some("Narrative Consideration - Gaps Consolidates"),
    ),
    scenario(
        16,
        Other,
        "What if the stock is halted multiple times?",
        "IF - Stock Halted",
        "THEN - Stock Halted",
        Some("Narrative Consideration - Stock Halted"),
    ),
    scenario(
        17,
        Other,
        "What if the stock is approaching a major news event?",
        "IF - News Event",
        "THEN - News Event",
        Some("Narrative Consideration - News Event"),
    ),
];

/// Scenario that owns `field`, if any.
pub fn scenario_for(field: &str) -> Option<&'static Scenario> {
    SCENARIOS
        .iter()
        .find(|s| s.field_names().any(|name| name == field))
}
