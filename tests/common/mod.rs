use tempfile::TempDir;
use trade_plan_journal::PlanStore;

/// A store in its own temp dir. The dir is removed when dropped.
pub fn temp_store() -> (TempDir, PlanStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = PlanStore::new(dir.path().join("trading_plan.csv"));
    (dir, store)
}

/// Raw header line of the backing file.
pub fn first_line(store: &PlanStore) -> String {
    let content = std::fs::read_to_string(store.path()).unwrap();
    content.lines().next().unwrap_or("").to_string()
}
