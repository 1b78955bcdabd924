use tree_store::Record;

pub(crate) fn get_test_data_path() -> std::path::PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().unwrap());
    manifest_dir.join("test_data")
}

/// Loads a JSON array of records from `tests/test_data/<name>`.
pub(crate) fn load_records(name: &str) -> Vec<Record> {
    let source = std::fs::read_to_string(get_test_data_path().join(name)).unwrap();
    serde_json::from_str(&source).unwrap()
}

/// The seven-record sample tree:
///
/// ```text
/// 1 ── 3
///   └─ 4 ── 6
/// 2 ── 5 ── 7
/// ```
pub(crate) fn sample_records() -> Vec<Record> {
    load_records("sample.json")
}

pub(crate) fn records(pairs: &[(u32, u32)]) -> Vec<Record> {
    pairs
        .iter()
        .map(|&(id, parent_id)| Record::new(id, parent_id))
        .collect()
}

/// Builds `count` records as a complete tree with the given fanout. Ids start
/// at 1; record 1 is the only root.
pub(crate) fn balanced_records(count: u32, fanout: u32) -> Vec<Record> {
    (1..=count)
        .map(|id| {
            let parent_id = if id == 1 { 0 } else { (id - 2) / fanout + 1 };
            Record::new(id, parent_id).with_field("label", format!("node-{id}"))
        })
        .collect()
}

/// Builds a single chain `1 <- 2 <- ... <- count`.
pub(crate) fn chain_records(count: u32) -> Vec<Record> {
    (1..=count).map(|id| Record::new(id, id - 1)).collect()
}

pub(crate) fn ids(items: &[&Record]) -> Vec<u32> {
    items.iter().map(|item| item.id).collect()
}
