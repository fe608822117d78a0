//! Store Property Tests
//!
//! Random command sequences checked against a naive reference model that
//! copies the whole map on every `BEGIN`.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test store_properties
//! ```

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use tallykv::{Key, Store, StoreError};

// =============================================================================
// REFERENCE MODEL
// =============================================================================

/// Whole-map copy per open transaction. Slow but obviously correct.
#[derive(Debug, Default)]
struct Model {
    data: BTreeMap<String, String>,
    saved: Vec<BTreeMap<String, String>>,
}

impl Model {
    fn apply(&mut self, op: &Op) -> Result<(), StoreError> {
        match op {
            Op::Set(k, v) => {
                self.data.insert(k.clone(), v.clone());
            }
            Op::Unset(k) => {
                self.data.remove(k);
            }
            Op::Begin => self.saved.push(self.data.clone()),
            Op::Rollback => {
                self.data = self.saved.pop().ok_or(StoreError::NoTransaction)?;
            }
            Op::Commit => {
                self.saved.pop().ok_or(StoreError::NoTransaction)?;
            }
        }
        Ok(())
    }

    fn counts(&self, value: &str) -> usize {
        self.data.values().filter(|v| v.as_str() == value).count()
    }

    fn find(&self, value: &str) -> Vec<Key> {
        self.data
            .iter()
            .filter(|(_, v)| v.as_str() == value)
            .map(|(k, _)| Key::from(k.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone)]
enum Op {
    Set(String, String),
    Unset(String),
    Begin,
    Rollback,
    Commit,
}

fn apply(store: &mut Store, op: &Op) -> Result<(), StoreError> {
    match op {
        Op::Set(k, v) => store.set(k.as_str(), v.as_str()),
        Op::Unset(k) => {
            store.unset(k);
        }
        Op::Begin => {
            store.begin();
        }
        Op::Rollback => store.rollback()?,
        Op::Commit => store.commit()?,
    }
    Ok(())
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => ("[a-f]", "[0-3]").prop_map(|(k, v)| Op::Set(k, v)),
        2 => "[a-f]".prop_map(Op::Unset),
        2 => Just(Op::Begin),
        1 => Just(Op::Rollback),
        1 => Just(Op::Commit),
    ]
}

const VALUES: [&str; 4] = ["0", "1", "2", "3"];

fn assert_matches_model(store: &Store, model: &Model) -> Result<(), TestCaseError> {
    prop_assert_eq!(store.len(), model.data.len());
    prop_assert_eq!(store.transaction_depth(), model.saved.len());
    for (k, v) in &model.data {
        prop_assert_eq!(store.get(k).map(|v| v.as_str()), Some(v.as_str()));
    }
    for value in VALUES {
        prop_assert_eq!(store.counts(value), model.counts(value));
        prop_assert_eq!(store.find(value), model.find(value));
    }
    prop_assert!(store.keyspace().index_is_consistent());
    Ok(())
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_store_matches_copying_model(ops in proptest::collection::vec(op_strategy(), 0..96)) {
        let mut store = Store::new();
        let mut model = Model::default();

        for op in &ops {
            let expected = model.apply(op);
            let actual = apply(&mut store, op);
            prop_assert_eq!(actual, expected);
            assert_matches_model(&store, &model)?;
        }
    }

    #[test]
    fn prop_full_unwind_restores_initial_state(
        setup in proptest::collection::vec(op_strategy(), 0..32),
        body in proptest::collection::vec(op_strategy(), 0..64),
    ) {
        let mut store = Store::new();
        for op in &setup {
            let _ = apply(&mut store, op);
        }
        let before = store.keyspace().clone();
        let depth = store.transaction_depth();

        store.begin();
        for op in &body {
            // never close the transaction opened above
            if matches!(op, Op::Rollback | Op::Commit) && store.transaction_depth() == depth + 1 {
                continue;
            }
            apply(&mut store, op)?;
        }
        while store.transaction_depth() > depth {
            store.rollback()?;
        }

        prop_assert_eq!(store.keyspace(), &before);
    }

    #[test]
    fn prop_counts_match_find_len(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut store = Store::new();
        for op in &ops {
            let _ = apply(&mut store, op);
            for value in VALUES {
                let keys: BTreeSet<Key> = store.find(value).into_iter().collect();
                prop_assert_eq!(store.counts(value), keys.len());
            }
        }
    }
}
