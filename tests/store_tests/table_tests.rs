//! Store Tests
//!
//! Tests verify:
//! - Insert, get and list
//! - Last-write-wins overwrites
//! - Empty id rejection
//! - Snapshot semantics of list
//! - Concurrent access patterns

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use restkv::resource::{Post, User};
use restkv::store::Store;
use restkv::RestError;

fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name),
        password: "secret".to_string(),
    }
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store: Store<User> = Store::new();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    assert!(store.list().is_empty());
}

#[test]
fn test_insert_and_get() {
    let store = Store::new();

    let stored = store.insert(user("1", "bob")).unwrap();
    assert_eq!(stored, user("1", "bob"));

    assert_eq!(store.get("1"), Some(user("1", "bob")));
}

#[test]
fn test_get_nonexistent_id() {
    let store = Store::new();
    store.insert(user("1", "bob")).unwrap();
    store.insert(user("2", "alice")).unwrap();

    assert_eq!(store.get("999"), None);
}

#[test]
fn test_insert_overwrites_existing() {
    let store = Store::new();

    store.insert(user("1", "bob")).unwrap();
    store.insert(user("1", "robert")).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("1").unwrap().name, "robert");
}

#[test]
fn test_insert_empty_id_rejected() {
    let store = Store::new();

    let result = store.insert(user("", "nobody"));

    assert!(matches!(result, Err(RestError::EmptyId)));
    assert!(store.is_empty());
}

#[test]
fn test_with_records_skips_empty_ids() {
    let store = Store::with_records(vec![user("1", "bob"), user("", "ghost"), user("2", "eve")]);

    assert_eq!(store.len(), 2);
    assert_eq!(store.get(""), None);
}

// =============================================================================
// List Tests
// =============================================================================

#[test]
fn test_list_counts_distinct_ids() {
    let store = Store::new();

    for round in 0..3 {
        for id in 0..5 {
            store
                .insert(user(&id.to_string(), &format!("name{}", round)))
                .unwrap();
        }
    }

    let records = store.list();
    assert_eq!(records.len(), 5);

    let ids: HashSet<_> = records.iter().map(|u| u.id.clone()).collect();
    assert_eq!(ids.len(), 5);
    assert!(records.iter().all(|u| u.name == "name2"));
}

#[test]
fn test_list_is_a_snapshot() {
    let store = Store::new();
    store.insert(user("1", "bob")).unwrap();

    let snapshot = store.list();

    store.insert(user("1", "changed")).unwrap();
    store.insert(user("2", "alice")).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].name, "bob");
}

#[test]
fn test_stores_are_independent() {
    let users = Store::new();
    let posts: Store<Post> = Store::new();

    users.insert(user("1", "bob")).unwrap();

    assert_eq!(users.len(), 1);
    assert!(posts.is_empty());
    assert_eq!(posts.get("1"), None);
}

// =============================================================================
// Concurrent Access Tests
// =============================================================================

#[test]
fn test_concurrent_reads() {
    let store = Arc::new(Store::<User>::new());
    store.insert(user("1", "bob")).unwrap();

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(store.get("1").unwrap().name, "bob");
                    assert_eq!(store.list().len(), 1);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_inserts_never_lost() {
    let store = Arc::new(Store::<User>::new());

    let handles: Vec<_> = (0..10)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for j in 0..10 {
                    let id = (t * 10 + j).to_string();
                    store.insert(user(&id, "worker")).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 100);
    assert_eq!(store.list().len(), 100);
}

#[test]
fn test_readers_see_whole_records_during_writes() {
    let store = Arc::new(Store::<User>::new());

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..500 {
                store.insert(user(&i.to_string(), &format!("n{}", i))).unwrap();
            }
        })
    };

    let reader = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            let mut last_len = 0;
            for _ in 0..200 {
                let snapshot = store.list();
                // Inserts only add ids, so snapshots never shrink
                assert!(snapshot.len() >= last_len);
                last_len = snapshot.len();
                for record in snapshot {
                    assert_eq!(record.name, format!("n{}", record.id));
                }
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(store.len(), 500);
}
