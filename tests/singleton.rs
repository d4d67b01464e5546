// tests/singleton.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use patterns::patterns::singleton::{ChannelOperator, InstanceCell, run_singleton};

#[test]
fn test_instance_cell_initialises_once() {
    let cell = InstanceCell::new();
    let inits = AtomicUsize::new(0);

    let first = cell.get_or_init(|| {
        inits.fetch_add(1, Ordering::SeqCst);
        ChannelOperator::new()
    });
    let id = first.id();

    let second = cell.get_or_init(|| {
        inits.fetch_add(1, Ordering::SeqCst);
        ChannelOperator::new()
    });

    assert_eq!(second.id(), id);
    assert!(std::ptr::eq(first, second));
    assert_eq!(inits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_instance_cell_starts_empty() {
    let cell: InstanceCell<ChannelOperator> = InstanceCell::new();

    assert!(!cell.is_initialized());
    assert!(cell.get().is_none());

    cell.get_or_init(ChannelOperator::new);
    assert!(cell.is_initialized());
}

#[test]
fn test_separate_cells_hold_separate_instances() {
    let a = InstanceCell::new();
    let b = InstanceCell::new();

    let a_id = a.get_or_init(ChannelOperator::new).id();
    let b_id = b.get_or_init(ChannelOperator::new).id();

    assert_ne!(a_id, b_id);
}

#[test]
fn test_shared_cell_across_threads() {
    let cell = Arc::new(InstanceCell::new());

    let ids: Vec<_> = (0..4)
        .map(|_| {
            let cell = Arc::clone(&cell);
            std::thread::spawn(move || cell.get_or_init(ChannelOperator::new).id())
        })
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(ids.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_channel_round_trip() {
    let operator = ChannelOperator::new();
    let rx = operator.open_channel("events");

    operator.send("events", "hello").unwrap();

    assert_eq!(rx.recv().unwrap(), "hello");
    assert_eq!(operator.channel_names(), vec!["events".to_string()]);
}

#[test]
fn test_send_to_unknown_channel_fails() {
    let operator = ChannelOperator::new();

    let err = operator.send("nowhere", "hello").unwrap_err();
    assert!(err.to_string().contains("not open"));
}

#[test]
fn test_send_after_receiver_dropped_fails() {
    let operator = ChannelOperator::new();
    drop(operator.open_channel("events"));

    assert!(operator.send("events", "hello").is_err());
}

#[test]
fn test_run_singleton_reuses_existing_instance() {
    let cell = InstanceCell::new();
    let id = cell.get_or_init(ChannelOperator::new).id();

    run_singleton(&cell).expect("singleton pattern should succeed");

    assert_eq!(cell.get().map(ChannelOperator::id), Some(id));
}
