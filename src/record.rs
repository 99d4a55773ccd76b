use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::RecordError;
use crate::models::{Bias, TradeDirection};
use crate::schema::{self, FieldDef, FieldKind, FieldValue, FIELDS};

/// One complete trading plan: a value for every schema field, held in
/// schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct TradingPlanRecord {
    values: Vec<FieldValue>,
}

impl Default for TradingPlanRecord {
    fn default() -> Self {
        Self {
            values: FIELDS.iter().map(FieldDef::default_value).collect(),
        }
    }
}

impl TradingPlanRecord {
    /// A record with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from values already in schema order.
    pub fn from_values(values: Vec<FieldValue>) -> Result<Self, RecordError> {
        if values.len() != FIELDS.len() {
            return Err(RecordError::WrongLength {
                expected: FIELDS.len(),
                found: values.len(),
            });
        }
        for (def, value) in FIELDS.iter().zip(&values) {
            check(def, value)?;
        }
        Ok(Self { values })
    }

    /// Build from a JSON object of field name to value. Absent and null
    /// fields take their defaults.
    pub fn from_answers(answers: &Value) -> Result<Self, RecordError> {
        let map = answers.as_object().ok_or(RecordError::NotAnObject)?;
        let mut record = Self::new();
        record.apply_answers(map)?;
        Ok(record)
    }

    fn apply_answers(&mut self, map: &Map<String, Value>) -> Result<(), RecordError> {
        for (name, raw) in map {
            let (idx, def) =
                schema::lookup(name).ok_or_else(|| RecordError::UnknownField(name.clone()))?;
            self.values[idx] = value_from_json(def, raw)?;
        }
        Ok(())
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        schema::lookup(name).map(|(idx, _)| &self.values[idx])
    }

    /// Replace a field's value. The value must match the field's kind.
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), RecordError> {
        let (idx, def) =
            schema::lookup(name).ok_or_else(|| RecordError::UnknownField(name.to_string()))?;
        check(def, &value)?;
        self.values[idx] = value;
        Ok(())
    }

    pub fn set_text(&mut self, name: &str, text: impl Into<String>) -> Result<(), RecordError> {
        self.set(name, FieldValue::Text(text.into()))
    }

    pub fn set_number(&mut self, name: &str, n: f64) -> Result<(), RecordError> {
        self.set(name, FieldValue::Number(n))
    }

    pub fn set_bool(&mut self, name: &str, b: bool) -> Result<(), RecordError> {
        self.set(name, FieldValue::Boolean(b))
    }

    /// Select a choice by label, resolved against the field's legal set.
    pub fn set_choice(&mut self, name: &str, label: &str) -> Result<(), RecordError> {
        let (idx, def) =
            schema::lookup(name).ok_or_else(|| RecordError::UnknownField(name.to_string()))?;
        if !matches!(def.kind, FieldKind::Choice(_)) {
            return Err(mismatch(def, "choice"));
        }
        let label = def
            .choice(label)
            .ok_or_else(|| RecordError::invalid_choice(def.name, label, def.choices()))?;
        self.values[idx] = FieldValue::Choice(label);
        Ok(())
    }

    /// Fields paired with their values, in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldDef, &FieldValue)> {
        FIELDS.iter().zip(self.values.iter())
    }

    /// Names of fields whose value differs from the schema default.
    pub fn filled_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter()
            .filter(|(def, value)| def.default_value() != **value)
            .map(|(def, _)| def.name)
    }

    pub fn stock(&self) -> &str {
        self.get("Stock").and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn bias(&self) -> Bias {
        self.get("Overall Bias")
            .and_then(FieldValue::as_text)
            .and_then(Bias::from_label)
            .unwrap_or_default()
    }

    pub fn direction(&self) -> TradeDirection {
        self.get("Trade Direction")
            .and_then(FieldValue::as_text)
            .and_then(TradeDirection::from_label)
            .unwrap_or_default()
    }

    /// Field-for-field equality with numbers compared within `tolerance`.
    pub fn approx_eq(&self, other: &TradingPlanRecord, tolerance: f64) -> bool {
        self.values
            .iter()
            .zip(&other.values)
            .all(|(a, b)| match (a, b) {
                (FieldValue::Number(x), FieldValue::Number(y)) => (x - y).abs() <= tolerance,
                _ => a == b,
            })
    }
}

impl Serialize for TradingPlanRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (def, value) in self.iter() {
            map.serialize_entry(def.name, value)?;
        }
        map.end()
    }
}

fn check(def: &FieldDef, value: &FieldValue) -> Result<(), RecordError> {
    if def.accepts(value) {
        return Ok(());
    }
    match (def.kind, value) {
        (FieldKind::Choice(choices), FieldValue::Choice(label)) => {
            Err(RecordError::invalid_choice(def.name, label, choices))
        }
        _ => Err(mismatch(def, value.kind_name())),
    }
}

fn mismatch(def: &FieldDef, found: impl Into<String>) -> RecordError {
    RecordError::TypeMismatch {
        field: def.name.to_string(),
        expected: def.kind.as_str(),
        found: found.into(),
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn value_from_json(def: &FieldDef, raw: &Value) -> Result<FieldValue, RecordError> {
    if raw.is_null() {
        return Ok(def.default_value());
    }
    match (def.kind, raw) {
        (FieldKind::Text, Value::String(s)) => Ok(FieldValue::Text(s.clone())),
        // Bare numbers are accepted for text fields, e.g. "Target": 120.
        (FieldKind::Text, Value::Number(n)) => Ok(FieldValue::Text(n.to_string())),
        (FieldKind::Number, Value::Number(n)) => n
            .as_f64()
            .map(FieldValue::Number)
            .ok_or_else(|| mismatch(def, n.to_string())),
        (FieldKind::Boolean, Value::Bool(b)) => Ok(FieldValue::Boolean(*b)),
        (FieldKind::Choice(choices), Value::String(s)) => def
            .choice(s)
            .map(FieldValue::Choice)
            .ok_or_else(|| RecordError::invalid_choice(def.name, s, choices)),
        _ => Err(mismatch(def, json_kind(raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_record;
    use serde_json::json;

    #[test]
    fn new_record_is_all_defaults() {
        let r = TradingPlanRecord::new();
        assert_eq!(r.values().len(), FIELDS.len());
        assert_eq!(r.filled_fields().count(), 0);
        assert_eq!(r.get("Premarket Price"), Some(&FieldValue::Number(0.0)));
        assert_eq!(r.get("Level Confluences"), Some(&FieldValue::Boolean(false)));
        assert_eq!(r.bias(), Bias::Bullish);
        assert_eq!(r.direction(), TradeDirection::Long);
        assert_eq!(r.stock(), "");
    }

    #[test]
    fn setters_enforce_kind() {
        let mut r = TradingPlanRecord::new();
        assert!(r.set_number("Stock", 1.0).is_err());
        assert!(r.set_text("Pivot Point", "100").is_err());
        assert!(r.set_bool("Notes", true).is_err());
        assert_eq!(
            r.set_text("Ticker", "AAPL"),
            Err(RecordError::UnknownField("Ticker".into()))
        );

        r.set_number("Pivot Point", 101.25).unwrap();
        assert_eq!(r.get("Pivot Point").and_then(FieldValue::as_number), Some(101.25));
    }

    #[test]
    fn set_choice_resolves_label() {
        let mut r = TradingPlanRecord::new();
        r.set_choice("Overall Bias", "Neutral").unwrap();
        assert_eq!(r.bias(), Bias::Neutral);

        let err = r.set_choice("Trade Direction", "Flat").unwrap_err();
        assert!(matches!(err, RecordError::InvalidChoice { .. }));
        assert!(r.set_choice("Stock", "Long").is_err());
        assert!(r.set("Trade Direction", FieldValue::Choice("Bearish")).is_err());
    }

    #[test]
    fn from_values_checks_length_and_kinds() {
        let r = sample_record();
        let copy = TradingPlanRecord::from_values(r.values().to_vec()).unwrap();
        assert_eq!(copy, r);

        let short = TradingPlanRecord::from_values(vec![FieldValue::Text("AAPL".into())]);
        assert!(matches!(short, Err(RecordError::WrongLength { found: 1, .. })));

        let mut bad = r.values().to_vec();
        bad[0] = FieldValue::Number(1.0);
        assert!(matches!(
            TradingPlanRecord::from_values(bad),
            Err(RecordError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn answers_default_fill_absent_fields() {
        let answers = json!({
            "Stock": "AAPL",
            "Overall Bias": "Bearish",
            "Current Price": 123.45,
            "Ensure stop-loss is appropriately placed.": true,
            "Target": 120,
            "Notes": null
        });
        let r = TradingPlanRecord::from_answers(&answers).unwrap();
        assert_eq!(r.stock(), "AAPL");
        assert_eq!(r.bias(), Bias::Bearish);
        assert_eq!(r.get("Current Price"), Some(&FieldValue::Number(123.45)));
        assert_eq!(r.get("Target"), Some(&FieldValue::Text("120".into())));
        assert_eq!(r.get("Notes"), Some(&FieldValue::Text(String::new())));
        assert_eq!(r.get("Support 1"), Some(&FieldValue::Number(0.0)));
        assert_eq!(r.direction(), TradeDirection::Long);
        assert_eq!(r.filled_fields().count(), 5);
    }

    #[test]
    fn answers_reject_bad_input() {
        assert_eq!(
            TradingPlanRecord::from_answers(&json!(["AAPL"])),
            Err(RecordError::NotAnObject)
        );
        assert_eq!(
            TradingPlanRecord::from_answers(&json!({"Ticker": "AAPL"})),
            Err(RecordError::UnknownField("Ticker".into()))
        );
        assert!(matches!(
            TradingPlanRecord::from_answers(&json!({"Pivot Point": "high"})),
            Err(RecordError::TypeMismatch { found, .. }) if found == "text"
        ));
        assert!(matches!(
            TradingPlanRecord::from_answers(&json!({"Level Confluences": "yes"})),
            Err(RecordError::TypeMismatch { .. })
        ));
        assert!(matches!(
            TradingPlanRecord::from_answers(&json!({"Trade Direction": "long"})),
            Err(RecordError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn serializes_in_schema_order() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        let stock = json.find("\"Stock\"").unwrap();
        let bias = json.find("\"Overall Bias\"").unwrap();
        let review = json.find("\"Narrative Review\"").unwrap();
        assert!(stock < bias && bias < review);

        let value: Value = serde_json::from_str(&json).unwrap();
        let back = TradingPlanRecord::from_answers(&value).unwrap();
        assert!(back.approx_eq(&sample_record(), 1e-9));
    }

    #[test]
    fn approx_eq_tolerates_float_noise() {
        let a = sample_record();
        let mut b = a.clone();
        b.set_number("Current Price", 123.45 + 1e-12).unwrap();
        assert!(a.approx_eq(&b, 1e-9));
        b.set_text("Stock", "MSFT").unwrap();
        assert!(!a.approx_eq(&b, 1e-9));
    }
}
