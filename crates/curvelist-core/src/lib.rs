//! Core systems for curvelist.
//!
//! This crate provides the foundational pieces the widget crate is built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous observer lists
//! - **Property System**: Values with change detection
//! - **Logging**: `tracing` targets and timing spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use curvelist_core::Signal;
//!
//! let hidden_items_changed = Signal::<()>::new();
//!
//! let conn_id = hidden_items_changed.connect(|_| {
//!     println!("visibility changed, re-query rows");
//! });
//!
//! hidden_items_changed.emit(());
//! hidden_items_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::SignalError;
pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
