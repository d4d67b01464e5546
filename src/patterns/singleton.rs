// src/patterns/singleton.rs

//! Single-instance example.
//!
//! Instead of a hidden process-global, the shared instance lives in an
//! [`InstanceCell`] that the driver creates once and hands to whoever needs
//! it. The cell builds its value on first access and returns that same value
//! on every later access.

use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, MutexGuard, OnceLock};

use anyhow::{Context, anyhow, ensure};
use tracing::debug;
use uuid::Uuid;

/// Lazily-initialised holder for one shared value.
#[derive(Debug, Default)]
pub struct InstanceCell<T> {
    cell: OnceLock<T>,
}

impl<T> InstanceCell<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Return the instance, building it with `init` if this is the first call.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(init)
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// Single point of access to named message channels.
#[derive(Debug)]
pub struct ChannelOperator {
    id: Uuid,
    channels: Mutex<BTreeMap<String, Sender<String>>>,
}

impl ChannelOperator {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        debug!(%id, "created channel operator");
        Self {
            id,
            channels: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Open (or replace) the channel `name` and return its receiving end.
    pub fn open_channel(&self, name: &str) -> Receiver<String> {
        let (tx, rx) = mpsc::channel();
        self.channels().insert(name.to_string(), tx);
        rx
    }

    pub fn send(&self, name: &str, message: impl Into<String>) -> anyhow::Result<()> {
        let channels = self.channels();
        let tx = channels
            .get(name)
            .ok_or_else(|| anyhow!("channel {name:?} is not open"))?;
        tx.send(message.into())
            .with_context(|| format!("channel {name:?} has no receiver"))
    }

    pub fn channel_names(&self) -> Vec<String> {
        self.channels().keys().cloned().collect()
    }

    fn channels(&self) -> MutexGuard<'_, BTreeMap<String, Sender<String>>> {
        // The map holds no invariant a panicking writer could break.
        self.channels.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ChannelOperator {
    fn default() -> Self {
        Self::new()
    }
}

/// Body of the `singleton` pattern.
///
/// Fetches the operator twice from `cell` and checks both handles are the
/// same instance: same id, and a channel opened through one is reachable
/// through the other.
pub fn run_singleton(cell: &InstanceCell<ChannelOperator>) -> anyhow::Result<()> {
    let first = cell.get_or_init(ChannelOperator::new);
    let rx = first.open_channel("singleton");

    let second = cell.get_or_init(ChannelOperator::new);
    ensure!(
        std::ptr::eq(first, second) && first.id() == second.id(),
        "channel operator was created more than once ({} != {})",
        first.id(),
        second.id()
    );

    second.send("singleton", "ping")?;
    let message = rx.recv().context("reading back from singleton channel")?;

    println!("channel operator {} ({message})", first.id());
    Ok(())
}
