use tempfile::TempDir;

use crate::record::TradingPlanRecord;
use crate::schema;
use crate::store::PlanStore;

/// The plan used across store and record tests: a short-biased setup with
/// every kind of field touched, including text that needs CSV quoting.
pub fn sample_record() -> TradingPlanRecord {
    let mut r = TradingPlanRecord::new();
    r.set_text("Stock", "AAPL").unwrap();
    r.set_number("Premarket Price", 124.1).unwrap();
    r.set_choice("Overall Bias", "Bearish").unwrap();
    r.set_text("Market Context", "Indices flat, CPI at 8:30, \"risk-off\" tone")
        .unwrap();
    r.set_number("Resistance 1", 124.0).unwrap();
    r.set_number("Support 1", 119.5).unwrap();
    r.set_number("Current Price", 123.45).unwrap();
    r.set_bool("Level Confluences", true).unwrap();
    r.set_text("Level of Interest", "123-123.5 range").unwrap();
    r.set_choice("Trade Direction", "Short").unwrap();
    r.set_text("Entry Condition", "Rejection wick at 123.5\nthen lower high on 1m")
        .unwrap();
    r.set_text("Target", "120").unwrap();
    r.set_text("Stop-Loss", "Above 124").unwrap();
    r.set_text("IF - Blow Through", "Price holds above 123.5 for 5 minutes")
        .unwrap();
    r.set_text("THEN - Blow Through", "Invalidate short, reassess").unwrap();
    r.set_number("Maximum Daily Loss", 250.0).unwrap();
    r.set_bool("Ensure stop-loss is appropriately placed.", true)
        .unwrap();
    r.set_bool("Was the target achieved? If not, why?", true).unwrap();
    r
}

/// A store backed by a file inside a fresh temp dir. Keep the dir alive for
/// the duration of the test.
pub fn temp_store() -> (TempDir, PlanStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = PlanStore::new(dir.path().join("trading_plan.csv"));
    (dir, store)
}

/// The CSV-encoded header row for the current schema, without a newline.
pub fn header_line() -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(schema::field_names()).unwrap();
    let bytes = writer.into_inner().unwrap();
    String::from_utf8(bytes).unwrap().trim_end().to_string()
}
