//! In-memory integration tests for the task store lifecycle.

use std::sync::Arc;

use almanac::{
    config::DEFAULT_STORAGE_KEY,
    task::{
        adapters::memory::InMemoryKeyValueStore,
        domain::TaskId,
        ports::KeyValueStore,
        services::{TaskStore, TaskStoreError},
    },
};
use chrono::Duration;
use rstest::rstest;

use super::helpers::{clock, load, storage};
use crate::test_helpers::{FixedClock, ReadOnlyStore, instant};

#[rstest]
fn reload_restores_every_field_in_order(
    storage: InMemoryKeyValueStore,
    clock: Result<Arc<FixedClock>, eyre::Report>,
) -> Result<(), eyre::Report> {
    let fixed = clock?;
    let mut store = load(&storage, Arc::clone(&fixed));
    store.add("Buy milk", Some(instant(2026, 10, 20, 9, 0)?));
    fixed.advance(Duration::seconds(30));
    let done = store.add("Call home", None).ok_or_else(|| eyre::eyre!("task not added"))?;
    store.toggle(done.id());
    store.add("Pay rent", Some(instant(2026, 10, 1, 0, 0)?));

    let reloaded = load(&storage, fixed);

    eyre::ensure!(reloaded.tasks() == store.tasks(), "reloaded list differs");
    eyre::ensure!(reloaded.len() == 3, "expected three tasks");
    Ok(())
}

#[rstest]
fn persisted_layout_matches_the_documented_schema(
    storage: InMemoryKeyValueStore,
    clock: Result<Arc<FixedClock>, eyre::Report>,
) -> Result<(), eyre::Report> {
    let mut store = load(&storage, clock?);
    let task = store
        .add("  Buy milk ", Some(instant(2026, 10, 20, 9, 0)?))
        .ok_or_else(|| eyre::eyre!("task not added"))?;

    let payload = storage
        .get(DEFAULT_STORAGE_KEY)?
        .ok_or_else(|| eyre::eyre!("slot not written"))?;
    let parsed: serde_json::Value = serde_json::from_str(&payload)?;

    let expected = serde_json::json!([{
        "id": task.id().value(),
        "text": "Buy milk",
        "completed": false,
        "deadline": "2026-10-20T09:00:00.000Z",
    }]);
    eyre::ensure!(parsed == expected, "unexpected payload {payload}");
    eyre::ensure!(
        task.id() == TaskId::from_instant(instant(2026, 10, 19, 10, 0)?),
        "id should derive from the creation instant"
    );
    Ok(())
}

#[rstest]
fn delete_then_reload_forgets_the_task(
    storage: InMemoryKeyValueStore,
    clock: Result<Arc<FixedClock>, eyre::Report>,
) -> Result<(), eyre::Report> {
    let fixed = clock?;
    let mut store = load(&storage, Arc::clone(&fixed));
    let first = store.add("First", None).ok_or_else(|| eyre::eyre!("task not added"))?;
    let second = store.add("Second", None).ok_or_else(|| eyre::eyre!("task not added"))?;

    store.delete(first.id());
    let reloaded = load(&storage, fixed);

    eyre::ensure!(reloaded.find(first.id()).is_none(), "deleted task came back");
    eyre::ensure!(reloaded.tasks() == [second], "surviving task missing");
    Ok(())
}

#[rstest]
fn read_only_slot_keeps_mutations_in_memory(
    clock: Result<Arc<FixedClock>, eyre::Report>,
) -> Result<(), eyre::Report> {
    let seeded = r#"[{"id":1,"text":"Seeded","completed":false,"deadline":null}]"#;
    let mut store = TaskStore::load(
        Arc::new(ReadOnlyStore::serving(seeded)),
        clock?,
        DEFAULT_STORAGE_KEY,
    );

    let added = store.add("Added offline", None);
    store.toggle(TaskId::new(1));

    eyre::ensure!(added.is_some(), "add must succeed despite write failure");
    eyre::ensure!(store.len() == 2, "both tasks should be held in memory");
    eyre::ensure!(
        store.find(TaskId::new(1)).is_some_and(|task| task.is_completed()),
        "toggle must apply despite write failure"
    );
    eyre::ensure!(
        matches!(store.save(), Err(TaskStoreError::Storage(_))),
        "explicit save should surface the failure"
    );
    Ok(())
}

#[rstest]
fn corrupt_slot_starts_empty_and_is_overwritten(
    clock: Result<Arc<FixedClock>, eyre::Report>,
) -> Result<(), eyre::Report> {
    let storage = InMemoryKeyValueStore::with_entry(DEFAULT_STORAGE_KEY, "{ truncated");
    let mut store = load(&storage, clock?);
    eyre::ensure!(store.is_empty(), "corrupt slot should load as empty");

    store.add("Fresh start", None);

    let payload = storage
        .get(DEFAULT_STORAGE_KEY)?
        .ok_or_else(|| eyre::eyre!("slot not written"))?;
    eyre::ensure!(payload.contains("Fresh start"), "slot should be rewritten");
    Ok(())
}
