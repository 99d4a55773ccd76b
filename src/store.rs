use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::StoreError;
use crate::record::TradingPlanRecord;
use crate::schema::{self, FieldDef, FieldKind, FieldValue, FIELDS};

/// Single-record CSV store for the current trading plan.
///
/// The backing file holds a header row naming every schema field followed by
/// at most one data row. Each save replaces the whole file.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.plan_file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write `record` as the only data row, replacing any previous plan.
    ///
    /// The row is written to a temporary file next to the target and renamed
    /// into place, so a failed save leaves the previous plan readable.
    pub fn save(&self, record: &TradingPlanRecord) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| StoreError::write(&self.path, e))?;

        let tmp = NamedTempFile::new_in(&dir).map_err(|e| StoreError::write(&self.path, e))?;
        write_rows(tmp.as_file(), record).map_err(|e| StoreError::write(&self.path, e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| StoreError::write(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::write(&self.path, e.error))?;

        info!(
            "Saved trading plan for '{}' ({} of {} fields filled) to {}",
            record.stock(),
            record.filled_fields().count(),
            FIELDS.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Read back the stored plan.
    pub fn load(&self) -> Result<TradingPlanRecord, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(self.corrupt(e)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let headers = reader.headers().map_err(|e| self.corrupt(e))?.clone();
        let mut rows = reader.records();
        let row = match rows.next() {
            None => return Err(StoreError::Empty(self.path.clone())),
            Some(row) => row.map_err(|e| self.corrupt(e))?,
        };
        if rows.next().is_some() {
            warn!(
                "{} holds more than one data row, using the first",
                self.path.display()
            );
        }

        let mut columns: HashMap<&str, usize> = HashMap::with_capacity(headers.len());
        for (i, h) in headers.iter().enumerate() {
            if columns.insert(h, i).is_some() {
                return Err(self.corrupt(format!("duplicate column '{}'", h)));
            }
        }
        for extra in headers.iter().filter(|h| schema::lookup(h).is_none()) {
            warn!("Ignoring unknown column '{}' in {}", extra, self.path.display());
        }

        let mut values = Vec::with_capacity(FIELDS.len());
        for def in FIELDS {
            let idx = columns
                .get(def.name)
                .ok_or_else(|| self.corrupt(format!("missing column '{}'", def.name)))?;
            let cell = row.get(*idx).unwrap_or("");
            values.push(parse_cell(def, cell).map_err(|e| self.corrupt(e))?);
        }

        let record = TradingPlanRecord::from_values(values).map_err(|e| self.corrupt(e))?;
        debug!(
            "Loaded trading plan for '{}' from {}",
            record.stock(),
            self.path.display()
        );
        Ok(record)
    }

    fn corrupt(&self, err: impl std::fmt::Display) -> StoreError {
        StoreError::CorruptFormat(format!("{}: {}", self.path.display(), err))
    }
}

fn write_rows(out: impl Write, record: &TradingPlanRecord) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(schema::field_names())
        .map_err(io::Error::other)?;
    writer
        .write_record(record.values().iter().map(ToString::to_string))
        .map_err(io::Error::other)?;
    writer.flush()
}

/// Parse one cell back into the field's kind. Empty cells take the default.
pub fn parse_cell(def: &FieldDef, cell: &str) -> Result<FieldValue, String> {
    if cell.is_empty() {
        return Ok(def.default_value());
    }
    match def.kind {
        FieldKind::Text => Ok(FieldValue::Text(cell.to_string())),
        FieldKind::Number => cell
            .trim()
            .parse::<f64>()
            .map(FieldValue::Number)
            .map_err(|_| format!("field '{}': '{}' is not a number", def.name, cell)),
        FieldKind::Boolean => match cell.trim() {
            "true" | "True" | "TRUE" => Ok(FieldValue::Boolean(true)),
            "false" | "False" | "FALSE" => Ok(FieldValue::Boolean(false)),
            other => Err(format!(
                "field '{}': '{}' is not true or false",
                def.name, other
            )),
        },
        FieldKind::Choice(choices) => def.choice(cell.trim()).map(FieldValue::Choice).ok_or_else(|| {
            format!(
                "field '{}': '{}' is not one of {}",
                def.name,
                cell,
                choices.join(", ")
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{header_line, sample_record, temp_store};

    #[test]
    fn load_before_save_is_not_found() {
        let (_dir, store) = temp_store();
        assert!(!store.exists());
        assert!(matches!(store.load(), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = temp_store();
        let record = sample_record();
        store.save(&record).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), record);
    }

    #[test]
    fn file_is_header_plus_one_row() {
        let (_dir, store) = temp_store();
        store.save(&TradingPlanRecord::new()).unwrap();

        let mut reader = csv::Reader::from_path(store.path()).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        let expected: Vec<String> = schema::field_names().map(String::from).collect();
        assert_eq!(headers, expected);
        assert_eq!(reader.records().count(), 1);
    }

    #[test]
    fn defaults_are_written_as_typed_tokens() {
        let (_dir, store) = temp_store();
        store.save(&TradingPlanRecord::new()).unwrap();

        let mut reader = csv::Reader::from_path(store.path()).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        let (price, _) = schema::lookup("Premarket Price").unwrap();
        let (check, _) = schema::lookup("Level Confluences").unwrap();
        let (bias, _) = schema::lookup("Overall Bias").unwrap();
        let (stock, _) = schema::lookup("Stock").unwrap();
        assert_eq!(&row[price], "0.0");
        assert_eq!(&row[check], "false");
        assert_eq!(&row[bias], "Bullish");
        assert_eq!(&row[stock], "");
    }

    #[test]
    fn header_only_file_is_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), format!("{}\n", header_line())).unwrap();
        assert!(matches!(store.load(), Err(StoreError::Empty(_))));
    }

    #[test]
    fn zero_byte_file_is_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Empty(_))));
    }

    #[test]
    fn ragged_row_is_corrupt() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), format!("{}\nAAPL,1.0\n", header_line())).unwrap();
        assert!(matches!(store.load(), Err(StoreError::CorruptFormat(_))));
    }

    #[test]
    fn parse_cell_handles_each_kind() {
        let (_, price) = schema::lookup("Pivot Point").unwrap();
        let (_, check) = schema::lookup("Level Confluences").unwrap();
        let (_, dir) = schema::lookup("Trade Direction").unwrap();
        let (_, notes) = schema::lookup("Notes").unwrap();

        assert_eq!(parse_cell(price, "101.5"), Ok(FieldValue::Number(101.5)));
        assert_eq!(parse_cell(price, ""), Ok(FieldValue::Number(0.0)));
        assert!(parse_cell(price, "abc").unwrap_err().contains("Pivot Point"));

        assert_eq!(parse_cell(check, "True"), Ok(FieldValue::Boolean(true)));
        assert_eq!(parse_cell(check, "false"), Ok(FieldValue::Boolean(false)));
        assert!(parse_cell(check, "yes").is_err());

        assert_eq!(parse_cell(dir, "Short"), Ok(FieldValue::Choice("Short")));
        assert_eq!(parse_cell(dir, ""), Ok(FieldValue::Choice("Long")));
        assert!(parse_cell(dir, "Bullish").is_err());

        assert_eq!(
            parse_cell(notes, " spaced "),
            Ok(FieldValue::Text(" spaced ".into()))
        );
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let (_dir, store) = temp_store();
        let record = sample_record();
        store.save(&record).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let (header, rest) = content.split_once('\n').unwrap();
        fs::write(store.path(), format!("Extra,{}\nx,{}", header, rest)).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.stock(), "AAPL");
        assert_eq!(loaded, record);
    }

    #[test]
    fn duplicate_column_is_corrupt() {
        let (_dir, store) = temp_store();
        store.save(&sample_record()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let (header, rest) = content.split_once('\n').unwrap();
        fs::write(store.path(), format!("Stock,{}\nMSFT,{}", header, rest)).unwrap();

        match store.load() {
            Err(StoreError::CorruptFormat(msg)) => {
                assert!(msg.contains("duplicate column 'Stock'"), "{}", msg)
            }
            other => panic!("expected CorruptFormat, got {:?}", other),
        }
    }

    #[test]
    fn failed_save_keeps_previous_plan() {
        let (dir, store) = temp_store();
        let mut kept = TradingPlanRecord::new();
        kept.set_text("Stock", "KEEP").unwrap();
        store.save(&kept).unwrap();

        // A directory cannot be replaced by the renamed temp file.
        let blocked = PlanStore::new(dir.path());
        let err = blocked.save(&sample_record()).unwrap_err();
        assert!(matches!(err, StoreError::WriteFailure { .. }));

        let loaded = store.load().unwrap();
        assert_eq!(loaded.stock(), "KEEP");
        assert_eq!(loaded, kept);
    }

    #[test]
    fn unwritable_target_is_write_failure() {
        let (dir, _) = temp_store();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let store = PlanStore::new(blocker.join("plan.csv"));
        let err = store.save(&sample_record()).unwrap_err();
        assert!(matches!(err, StoreError::WriteFailure { .. }));
    }
}
