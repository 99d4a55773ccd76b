//! Text rendering for the viewing side: the stored plan, the field catalogue,
//! and the messages shown in place of a plan when the store cannot supply one.

use std::fmt::Write;

use crate::error::StoreError;
use crate::record::TradingPlanRecord;
use crate::schema::{self, scenario_for, FieldKind, Section};

const RULE: &str = "---";

/// Message shown to the user when loading fails.
pub fn user_message(err: &StoreError) -> String {
    match err {
        StoreError::NotFound(_) => {
            "Trading plan file not found. Please save a trading plan first.".to_string()
        }
        StoreError::Empty(_) => "The trading plan file is empty.".to_string(),
        other => format!("An error occurred: {}", other),
    }
}

/// Empty files are a warning, everything else an error.
pub fn is_warning(err: &StoreError) -> bool {
    matches!(err, StoreError::Empty(_))
}

/// Every field's name and value in schema order, under section and scenario
/// headings.
pub fn render_plan(record: &TradingPlanRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Trading Plan Details");

    let mut section: Option<Section> = None;
    for (def, value) in record.iter() {
        if section != Some(def.section) {
            section = Some(def.section);
            let _ = writeln!(out, "\n== {} ==\n", def.section);
        }
        if let Some(s) = scenario_for(def.name).filter(|s| s.condition == def.name) {
            let _ = writeln!(out, "[{}] {}. {}", s.group, s.number, s.question);
        }
        let _ = writeln!(out, "{}", def.name);
        let shown = value.to_string();
        if shown.is_empty() {
            let _ = writeln!(out, "  (blank)");
        } else {
            for line in shown.lines() {
                let _ = writeln!(out, "  {}", line);
            }
        }
        let _ = writeln!(out, "{}", RULE);
    }
    out
}

/// The schema as a form outline: type, legal choices and input hint for
/// every field.
pub fn render_schema() -> String {
    let mut out = String::new();
    for section in Section::ALL {
        let _ = writeln!(out, "{}", section);
        for def in schema::section_fields(section) {
            let _ = write!(out, "  {:<8} {}", def.kind, def.name);
            if let FieldKind::Choice(choices) = def.kind {
                let _ = write!(out, " [{}]", choices.join(" | "));
            }
            if !def.hint.is_empty() {
                let _ = write!(out, "  ({})", def.hint);
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
