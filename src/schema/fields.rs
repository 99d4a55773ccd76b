use super::{FieldDef, FieldKind, Section};
use crate::models::{Bias, TradeDirection};

use Section::*;

const fn text(name: &'static str, section: Section, hint: &'static str) -> FieldDef {
    FieldDef {
        name,
        kind: FieldKind::Text,
        section,
        hint,
    }
}

const fn number(name: &'static str, section: Section, hint: &'static str) -> FieldDef {
    FieldDef {
        name,
        kind: FieldKind::Number,
        section,
        hint,
    }
}

const fn check(name: &'static str, section: Section) -> FieldDef {
    FieldDef {
        name,
        kind: FieldKind::Boolean,
        section,
        hint: "",
    }
}

const fn choice(
    name: &'static str,
    section: Section,
    choices: &'static [&'static str],
) -> FieldDef {
    FieldDef {
        name,
        kind: FieldKind::Choice(choices),
        section,
        hint: "",
    }
}

/// Every plan field, in form order. This is also the column order of the
/// backing file.
pub static FIELDS: &[FieldDef] = &[
    // I. Pre-Market Analysis
    text("Stock", PreMarket, "e.g., AAPL"),
    number("Premarket Price", PreMarket, ""),
    text("Day's Expected Range", PreMarket, "e.g., High/Low estimate"),
    text(
        "Market Context",
        PreMarket,
        "Briefly describe the overall market conditions...",
    ),
    choice("Overall Bias", PreMarket, Bias::CHOICES),
    text(
        "Key Catalysts",
        PreMarket,
        "List any news, earnings, or economic data...",
    ),
    text("Sector", PreMarket, "e.g., Technology"),
    text(
        "Sector News",
        PreMarket,
        "Summarize any relevant news or trends...",
    ),
    number("Average Volume", PreMarket, "in millions"),
    number("Short Interest", PreMarket, ""),
    number("Short Ratio (Days to Cover)", PreMarket, ""),
    check("Check for news and earnings releases", PreMarket),
    check("Review overnight price action and volume", PreMarket),
    check("Identify potential gaps and their implications", PreMarket),
    check("Analyze pre-market volume and relative strength", PreMarket),
    text(
        "Initial Market Narrative Assessment",
        PreMarket,
        "Note any early observations about market sentiment...",
    ),
    // II. Key Levels
    number("Resistance 2", KeyLevels, ""),
    number("Resistance 1", KeyLevels, ""),
    number("Pivot Point", KeyLevels, ""),
    number("Support 1", KeyLevels, ""),
    number("Support 2", KeyLevels, ""),
    number("Previous Day Close", KeyLevels, ""),
    text(
        "Intraday Resistance",
        KeyLevels,
        "Price(s) where price sharply reversed downwards...",
    ),
    text(
        "Intraday Support",
        KeyLevels,
        "Price(s) where price sharply reversed upwards...",
    ),
    number("Current Price", KeyLevels, ""),
    check("Level Confluences", KeyLevels),
    // III. Primary Trade Setup
    text("Level of Interest", TradeSetup, "e.g., 123-123.5 range"),
    choice("Trade Direction", TradeSetup, TradeDirection::CHOICES),
    text(
        "Entry Condition",
        TradeSetup,
        "Specific price action, e.g., price reaches top of range...",
    ),
    text("Target", TradeSetup, "e.g., 120"),
    text("Stop-Loss", TradeSetup, "e.g., Above 124"),
    text(
        "Initial Position Size",
        TradeSetup,
        "To be calculated based on risk and capital",
    ),
    check("Consider the time of day and its typical volatility.", TradeSetup),
    text(
        "Note any specific times to avoid or favor trading.",
        TradeSetup,
        "e.g., Avoid trading in the first 15 minutes...",
    ),
    text(
        "List any additional factors that support the trade setup",
        TradeSetup,
        "e.g., trend alignment, chart patterns...",
    ),
    text(
        "Narrative Context",
        TradeSetup,
        "Describe the prevailing market narrative...",
    ),
    // IV. What Ifs
    text("IF - Premarket Break", WhatIfs, "e.g., Price breaks above Resistance 1..."),
    text("THEN - Premarket Break", WhatIfs, "e.g., Adjust entry strategy..."),
    text(
        "IF - Opening Price Far",
        WhatIfs,
        "e.g., The opening price is more than 1% away...",
    ),
    text(
        "THEN - Opening Price Far",
        WhatIfs,
        "e.g., Re-evaluate the relevance of the level...",
    ),
    text(
        "IF - Overnight Gap",
        WhatIfs,
        "e.g., Stock gaps up or down significantly (>2%)...",
    ),
    text(
        "THEN - Overnight Gap",
        WhatIfs,
        "e.g., Wait for the first 30 minutes of trading...",
    ),
    text(
        "IF - Sharp Reversal",
        WhatIfs,
        "e.g., Stock opens near a key level, then reverses...",
    ),
    text("THEN - Sharp Reversal", WhatIfs, "e.g., Consider trading the reversal..."),
    text(
        "Narrative Consideration - Sharp Reversal",
        WhatIfs,
        "Note the initial market narrative and how it aligns...",
    ),
    text(
        "IF - Reversal Before",
        WhatIfs,
        "e.g., Price shows strong bullish momentum before 123...",
    ),
    text("THEN - Reversal Before", WhatIfs, "e.g., Re-evaluate bias..."),
    text(
        "Narrative Consideration - Reversal Before",
        WhatIfs,
        "Is this reversal supported by the prevailing narrative?...",
    ),
    text("IF - Strong Trend", WhatIfs, "e.g., The stock is in a strong uptrend..."),
    text("THEN - Strong Trend", WhatIfs, "e.g., Favor long trades..."),
    text(
        "Narrative Consideration - Strong Trend",
        WhatIfs,
        "Ensure the narrative supports continued trend strength...",
    ),
    text(
        "IF - Range Bound",
        WhatIfs,
        "e.g., The stock is trading in a defined range...",
    ),
    text(
        "THEN - Range Bound",
        WhatIfs,
        "e.g., Buy near support, sell near resistance...",
    ),
    text(
        "Narrative Consideration - Range Bound",
        WhatIfs,
        "Is the range-bound behavior due to conflicting narratives?...",
    ),
    text("IF - Blow Through", WhatIfs, "e.g., Price breaks above 123.5..."),
    text("THEN - Blow Through", WhatIfs, "e.g., Invalidate short setup..."),
    text(
        "Narrative Consideration - Blow Through",
        WhatIfs,
        "Does this breakout confirm the prevailing narrative?...",
    ),
    text(
        "IF - Consolidates",
        WhatIfs,
        "e.g., Price consolidates in the 123-123.5 range...",
    ),
    text(
        "THEN - Consolidates",
        WhatIfs,
        "e.g., Be cautious. Reduce position size...",
    ),
    text(
        "Narrative Consideration - Consolidates",
        WhatIfs,
        "Is this consolidation a sign of narrative indecision?...",
    ),
    text("IF - Low Volume", WhatIfs, "e.g., Price approaches a key level..."),
    text("THEN - Low Volume", WhatIfs, "e.g., Reduce position size..."),
    text(
        "Narrative Consideration - Low Volume",
        WhatIfs,
        "Does the low volume suggest a lack of conviction?...",
    ),
    text(
        "IF - False Breakout",
        WhatIfs,
        "e.g., Price breaks a key resistance level...",
    ),
    text("THEN - False Breakout", WhatIfs, "e.g., Be cautious on longs..."),
    text(
        "Narrative Consideration - False Breakout",
        WhatIfs,
        "Does this false breakout signal a potential narrative change?...",
    ),
    text(
        "IF - Target Reached Quickly",
        WhatIfs,
        "e.g., Price reaches 120 very quickly...",
    ),
    text(
        "THEN - Target Reached Quickly",
        WhatIfs,
        "e.g., Scale out some profits...",
    ),
    text(
        "Narrative Consideration - Target Reached Quickly",
        WhatIfs,
        "Does the strength of the move suggest the narrative is likely to continue?...",
    ),
    text(
        "IF - Volatility Increase",
        WhatIfs,
        "e.g., The stock's ATR increases significantly...",
    ),
    text("THEN - Volatility Increase", WhatIfs, "e.g., Reduce position size..."),
    text(
        "Narrative Consideration - Volatility Increase",
        WhatIfs,
        "Is the increased volatility a sign of a narrative shift?...",
    ),
    text(
        "IF - Fails Hold Level",
        WhatIfs,
        "e.g., Price breaks a key support level...",
    ),
    text("THEN - Fails Hold Level", WhatIfs, "e.g., Close long position..."),
    text(
        "Narrative Consideration - Fails Hold Level",
        WhatIfs,
        "Does this failure confirm a bearish narrative?...",
    ),
    text(
        "IF - Gaps Consolidates",
        WhatIfs,
        "e.g., Stock gaps up or down and then consolidates...",
    ),
    text(
        "THEN - Gaps Consolidates",
        WhatIfs,
        "e.g., Wait for a breakout from the consolidation...",
    ),
    text(
        "Narrative Consideration - Gaps Consolidates",
        WhatIfs,
        "What does the consolidation tell us about the strength of the gap narrative?...",
    ),
    text("IF - Stock Halted", WhatIfs, "e.g., Stock is halted multiple times..."),
    text(
        "THEN - Stock Halted",
        WhatIfs,
        "e.g., Greatly reduce or eliminate position...",
    ),
    text(
        "Narrative Consideration - Stock Halted",
        WhatIfs,
        "Halts indicate high uncertainty and a potentially unstable narrative...",
    ),
    text("IF - News Event", WhatIfs, "e.g., Stock approaching earnings release..."),
    text(
        "THEN - News Event",
        WhatIfs,
        "e.g., Reduce position size significantly...",
    ),
    text(
        "Narrative Consideration - News Event",
        WhatIfs,
        "The news event will likely create a new narrative...",
    ),
    // V. Risk Management
    text("Position Sizing", RiskManagement, "e.g., Calculate in real-time..."),
    number(
        "Maximum Daily Loss",
        RiskManagement,
        "e.g., State the maximum amount you are willing to lose...",
    ),
    text(
        "Contingency Plan",
        RiskManagement,
        "Describe your plan if your maximum daily loss is hit...",
    ),
    check("Confirm position size aligns with risk tolerance.", RiskManagement),
    check("Ensure stop-loss is appropriately placed.", RiskManagement),
    check("Evaluate the risk/reward ratio of the trade.", RiskManagement),
    check("Consider the impact of correlated trades.", RiskManagement),
    text(
        "Narrative Risk Assessment",
        RiskManagement,
        "How might the evolving market narrative affect the risk of this trade?...",
    ),
    // VI. Trade Management
    text(
        "Scaling In/Out",
        TradeManagement,
        "Describe if and how you will scale into or out of positions...",
    ),
    text("Time Management", TradeManagement, "Note any time-based rules..."),
    text(
        "Notes",
        TradeManagement,
        "Use this section for any additional notes or observations...",
    ),
    text(
        "Post-Trade Review",
        TradeManagement,
        "Describe how you will review your trades...",
    ),
    check("Was the entry in line with the trading plan?", TradeManagement),
    check("Was the stop-loss correctly placed and honored?", TradeManagement),
    check("Was the target achieved? If not, why?", TradeManagement),
    check("Were emotions controlled throughout the trade?", TradeManagement),
    check("What lessons can be learned from this trade?", TradeManagement),
    text(
        "Narrative Review",
        TradeManagement,
        "How did the market narrative evolve during the trade?...",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn count(kind: fn(&FieldKind) -> bool) -> usize {
        FIELDS.iter().filter(|f| kind(&f.kind)).count()
    }

    #[test]
    fn table_shape() {
        assert_eq!(FIELDS.len(), 102);
        assert_eq!(count(|k| matches!(k, FieldKind::Number)), 12);
        assert_eq!(count(|k| matches!(k, FieldKind::Boolean)), 15);
        assert_eq!(count(|k| matches!(k, FieldKind::Choice(_))), 2);
    }

    #[test]
    fn checklist_fields_have_no_hint() {
        for f in FIELDS.iter().filter(|f| f.kind == FieldKind::Boolean) {
            assert!(f.hint.is_empty(), "{}", f.name);
        }
    }
}
