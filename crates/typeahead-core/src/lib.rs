//! Core systems for Typeahead.
//!
//! This crate provides the foundational components of the Typeahead
//! interaction engine:
//!
//! - **Signal/Slot System**: Type-safe notifications from the engine to the host
//! - **Logging Targets**: `tracing` target constants for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use typeahead_core::Signal;
//!
//! // Create a signal that notifies when the query changes
//! let query_changed = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = query_changed.connect(|query| {
//!     println!("Query changed to: {}", query);
//! });
//!
//! // Emit the signal
//! query_changed.emit("uni".to_string());
//!
//! // Disconnect when done
//! query_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
