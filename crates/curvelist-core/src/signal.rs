//! Synchronous observer lists.
//!
//! A [`Signal`] is how the curve list tells its owner that something happened:
//! rows changed visibility, the user asked to drop a curve, a drag finished.
//! Observers ("slots") are plain closures. [`Signal::connect`] hands back a
//! [`ConnectionId`]; [`Signal::connect_scoped`] hands back a
//! [`ConnectionGuard`] that disconnects on drop.
//!
//! # Dispatch
//!
//! Emission is synchronous: every connected slot runs on the emitting thread
//! before [`Signal::emit`] returns, in the order the slots were connected.
//! The connection list is snapshotted before dispatch, so a slot may connect
//! or disconnect slots on the same signal without deadlocking. Changes made
//! during an emission take effect from the next emission on.
//!
//! ```
//! use curvelist_core::Signal;
//!
//! let delete_curve = Signal::<String>::new();
//! let id = delete_curve.connect(|name| println!("dropping {name}"));
//! delete_curve.emit("vehicle/speed".to_string());
//! delete_curve.disconnect(id);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::SignalError;
use crate::logging::targets;

new_key_type! {
    /// Handle to one connected slot, used with [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Connection storage, kept in connection order.
struct Connections<Args> {
    slots: SlotMap<ConnectionId, Slot<Args>>,
    order: Vec<ConnectionId>,
}

impl<Args> Connections<Args> {
    fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    fn remove(&mut self, id: ConnectionId) -> bool {
        if self.slots.remove(id).is_some() {
            self.order.retain(|&existing| existing != id);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.order.clear();
    }
}

/// An ordered list of slots receiving `&Args` on every emission.
///
/// `Signal<Args>` is `Send + Sync`. The connection mutex is never held while
/// a slot runs.
pub struct Signal<Args> {
    connections: Arc<Mutex<Connections<Args>>>,
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().order.len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Creates a signal with no slots.
    pub fn new() -> Self {
        Self {
            connections: Arc::new(Mutex::new(Connections::new())),
            blocked: AtomicBool::new(false),
        }
    }

    /// Appends a slot. It runs after every slot connected before it.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut connections = self.connections.lock();
        let id = connections.slots.insert(Arc::new(slot));
        connections.order.push(id);
        id
    }

    /// Appends a slot that stays connected while the returned guard lives.
    ///
    /// The guard holds a weak reference and may outlive the signal.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard {
            connections: Arc::downgrade(&self.connections),
            id,
        }
    }

    /// Removes a slot. Returns false if the ID is unknown.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id)
    }

    /// Like [`disconnect`](Self::disconnect), with unknown IDs as an error.
    pub fn try_disconnect(&self, id: ConnectionId) -> Result<(), SignalError> {
        if self.disconnect(id) {
            Ok(())
        } else {
            Err(SignalError::InvalidConnection)
        }
    }

    /// Removes every slot.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().order.len()
    }

    /// While blocked, [`emit`](Self::emit) is a no-op.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Whether emission is blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Runs every slot with `args`, in connection order.
    #[tracing::instrument(skip_all, target = "curvelist_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = {
            let connections = self.connections.lock();
            connections
                .order
                .iter()
                .filter_map(|id| connections.slots.get(*id).cloned())
                .collect()
        };
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

/// Disconnects its slot when dropped. Created by [`Signal::connect_scoped`].
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use curvelist_core::Signal;
///
/// let hidden_items_changed = Signal::<()>::new();
/// let refreshes = Arc::new(AtomicUsize::new(0));
///
/// let counter = refreshes.clone();
/// let guard = hidden_items_changed.connect_scoped(move |_| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
/// hidden_items_changed.emit(());
/// drop(guard);
/// hidden_items_changed.emit(());
///
/// assert_eq!(refreshes.load(Ordering::SeqCst), 1);
/// ```
pub struct ConnectionGuard<Args> {
    connections: Weak<Mutex<Connections<Args>>>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<Args> {
    /// The ID of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> fmt::Debug for ConnectionGuard<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionGuard").field("id", &self.id).finish()
    }
}

impl<Args> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        if let Some(connections) = self.connections.upgrade() {
            connections.lock().remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn recorder(signal: &Signal<String>) -> (ConnectionId, Arc<Mutex<Vec<String>>>) {
        let names = Arc::new(Mutex::new(Vec::new()));
        let sink = names.clone();
        let id = signal.connect(move |name: &String| sink.lock().push(name.clone()));
        (id, names)
    }

    #[test]
    fn test_emit_reaches_slot() {
        let signal = Signal::<String>::new();
        let (_, names) = recorder(&signal);

        signal.emit("rpm".into());
        signal.emit("speed".into());
        assert_eq!(*names.lock(), vec!["rpm", "speed"]);
    }

    #[test]
    fn test_disconnected_slot_is_skipped() {
        let signal = Signal::<String>::new();
        let (id, names) = recorder(&signal);

        signal.emit("kept".into());
        assert!(signal.disconnect(id));
        signal.emit("dropped".into());

        assert_eq!(*names.lock(), vec!["kept"]);
        assert_eq!(signal.try_disconnect(id), Err(SignalError::InvalidConnection));
    }

    #[test]
    fn test_blocked_signal_is_silent() {
        let signal = Signal::<String>::new();
        let (_, names) = recorder(&signal);

        signal.set_blocked(true);
        assert!(signal.is_blocked());
        signal.emit("muted".into());
        signal.set_blocked(false);
        signal.emit("heard".into());

        assert_eq!(*names.lock(), vec!["heard"]);
    }

    #[test]
    fn test_dispatch_follows_connection_order() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let mut ids = Vec::new();
        for n in 0..4 {
            let order = order.clone();
            ids.push(signal.connect(move |_| order.lock().push(n)));
        }
        // Freed slot gets reused by the next connection; it must still run last.
        signal.disconnect(ids[1]);
        let tail = order.clone();
        signal.connect(move |_| tail.lock().push(9));

        signal.emit(());
        assert_eq!(*order.lock(), vec![0, 2, 3, 9]);
    }

    #[test]
    fn test_reentrant_connect_does_not_deadlock() {
        let signal = Arc::new(Signal::<()>::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let inner_signal = signal.clone();
        let inner_calls = calls.clone();
        signal.connect(move |_| {
            let calls = inner_calls.clone();
            inner_signal.connect(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        });

        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(signal.connection_count(), 2);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<()>::new();
        signal.connect(|_| {});
        signal.connect(|_| {});
        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_guard_disconnects_on_drop() {
        let signal = Signal::<String>::new();
        let names = Arc::new(Mutex::new(Vec::new()));

        let sink = names.clone();
        let guard = signal.connect_scoped(move |name: &String| sink.lock().push(name.clone()));
        signal.emit("a".into());
        drop(guard);
        signal.emit("b".into());

        assert_eq!(*names.lock(), vec!["a"]);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_guard_outliving_signal() {
        let signal = Signal::<i32>::new();
        let guard = signal.connect_scoped(|_| {});
        drop(signal);
        drop(guard);
    }
}
