use tree_store::{TreeItem, TreeStore, TreeStoreError};

use crate::utils::{balanced_records, chain_records, ids, sample_records};

#[test]
fn test_get_all_parents_on_sample() -> anyhow::Result<()> {
    let store = TreeStore::new(sample_records())?;
    assert_eq!(ids(&store.get_all_parents(6)?), vec![4, 1]);
    assert_eq!(ids(&store.get_all_parents(7)?), vec![5, 2]);
    assert_eq!(ids(&store.get_all_parents(3)?), vec![1]);
    Ok(())
}

#[test]
fn test_get_all_parents_of_root_is_empty() -> anyhow::Result<()> {
    let store = TreeStore::new(sample_records())?;
    assert!(store.get_all_parents(1)?.is_empty());
    assert!(store.get_all_parents(2)?.is_empty());
    Ok(())
}

#[test]
fn test_get_all_parents_unknown_id() -> anyhow::Result<()> {
    let store = TreeStore::new(sample_records())?;
    assert_eq!(
        store.get_all_parents(70).unwrap_err(),
        TreeStoreError::NotFound { id: 70 }
    );
    Ok(())
}

#[test]
fn test_parent_chain_shape() -> anyhow::Result<()> {
    let input = balanced_records(2_000, 2);
    let store = TreeStore::new(input.clone())?;
    for record in &input {
        let parents = store.get_all_parents(record.id)?;
        assert_eq!(parents.len(), store.depth(record.id)? - 1);
        match (parents.first(), parents.last()) {
            (Some(first), Some(last)) => {
                assert_eq!(first.id, record.parent_id);
                assert!(last.is_root());
                for pair in parents.windows(2) {
                    assert_eq!(pair[0].parent_id, pair[1].id);
                }
            }
            _ => assert!(record.is_root()),
        }
    }
    Ok(())
}

#[test]
fn test_depth() -> anyhow::Result<()> {
    let store = TreeStore::new(sample_records())?;
    assert_eq!(store.depth(1)?, 1);
    assert_eq!(store.depth(4)?, 2);
    assert_eq!(store.depth(6)?, 3);
    assert!(store.depth(0).is_err());
    Ok(())
}

#[test]
fn test_deep_chain_does_not_exhaust_stack() -> anyhow::Result<()> {
    let depth = 100_000;
    let store = TreeStore::new(chain_records(depth))?;
    let parents = store.get_all_parents(depth)?;
    assert_eq!(parents.len(), depth as usize - 1);
    assert_eq!(parents[0].id, depth - 1);
    assert_eq!(parents[parents.len() - 1].id, 1);
    assert_eq!(store.depth(depth)?, depth as usize);
    Ok(())
}
