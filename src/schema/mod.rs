//! Static declaration of every field a trading plan carries.
//!
//! The field table in [`fields`] is the one place names, types and order are
//! declared. The record type, the CSV store and the renderers all iterate it,
//! so the write path and the read path cannot drift apart.

pub mod fields;
pub mod scenarios;

use serde::{Serialize, Serializer};
use std::fmt;

pub use fields::FIELDS;
pub use scenarios::{scenario_for, Scenario, ScenarioGroup, SCENARIOS};

/// Form section a field is presented under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    PreMarket,
    KeyLevels,
    TradeSetup,
    WhatIfs,
    RiskManagement,
    TradeManagement,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::PreMarket,
        Section::KeyLevels,
        Section::TradeSetup,
        Section::WhatIfs,
        Section::RiskManagement,
        Section::TradeManagement,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::PreMarket => "I. Pre-Market Analysis",
            Section::KeyLevels => "II. Key Levels",
            Section::TradeSetup => "III. Primary Trade Setup",
            Section::WhatIfs => "IV. What Ifs (Reactive Scenarios)",
            Section::RiskManagement => "V. Risk Management",
            Section::TradeManagement => "VI. Trade Management",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
    /// Closed set of labels. The first label is the default.
    Choice(&'static [&'static str]),
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Choice(_) => "choice",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
    /// Column header in the backing file and key in answers documents.
    pub name: &'static str,
    pub kind: FieldKind,
    pub section: Section,
    /// Example input shown next to the prompt. Empty when the form has none.
    pub hint: &'static str,
}

impl FieldDef {
    /// Legal labels for a choice field, empty for every other kind.
    pub fn choices(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Choice(choices) => choices,
            _ => &[],
        }
    }

    /// Value used when the user supplies nothing.
    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Number => FieldValue::Number(0.0),
            FieldKind::Boolean => FieldValue::Boolean(false),
            FieldKind::Choice(choices) => FieldValue::Choice(choices[0]),
        }
    }

    /// Whether `value` has the shape this field accepts. Choice labels must
    /// belong to the field's own set.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self.kind, value) {
            (FieldKind::Text, FieldValue::Text(_))
            | (FieldKind::Number, FieldValue::Number(_))
            | (FieldKind::Boolean, FieldValue::Boolean(_)) => true,
            (FieldKind::Choice(choices), FieldValue::Choice(label)) => choices.contains(label),
            _ => false,
        }
    }

    /// Resolve a user-supplied label to the field's own static label.
    pub fn choice(&self, label: &str) -> Option<&'static str> {
        self.choices().iter().copied().find(|c| *c == label)
    }
}

/// One field's value inside a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Choice(&'static str),
}

impl FieldValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "number",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Choice(_) => "choice",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Choice(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Decimal text for a number. Whole values keep a trailing `.0` so a column
/// reads as floating point.
pub fn format_number(n: f64) -> String {
    let s = n.to_string();
    if n.is_finite() && !s.contains(['.', 'e', 'E']) {
        format!("{}.0", s)
    } else {
        s
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", format_number(*n)),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Choice(s) => write!(f, "{}", s),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Boolean(b) => serializer.serialize_bool(*b),
            FieldValue::Choice(s) => serializer.serialize_str(s),
        }
    }
}

/// Every field in declaration order.
pub fn fields() -> &'static [FieldDef] {
    FIELDS
}

pub fn field_names() -> impl Iterator<Item = &'static str> {
    FIELDS.iter().map(|f| f.name)
}

/// Position and definition of a field by its exact name.
pub fn lookup(name: &str) -> Option<(usize, &'static FieldDef)> {
    FIELDS.iter().enumerate().find(|(_, f)| f.name == name)
}

pub fn section_fields(section: Section) -> impl Iterator<Item = &'static FieldDef> {
    FIELDS.iter().filter(move |f| f.section == section)
}
