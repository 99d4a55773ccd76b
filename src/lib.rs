pub mod config;
pub mod error;
pub mod models;
pub mod record;
pub mod schema;
pub mod store;
#[cfg(test)]
pub mod test_helpers;
pub mod view;

pub use error::{RecordError, StoreError};
pub use record::TradingPlanRecord;
pub use store::PlanStore;
