//! Logging facilities for Typeahead.
//!
//! Typeahead uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every log line carries a `target:` from [`targets`], so subsystems can
//! be filtered individually, e.g. `RUST_LOG=typeahead::engine=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "typeahead_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "typeahead_core::signal";
    /// Widget controller target.
    pub const ENGINE: &str = "typeahead::engine";
    /// Suggestion matcher target.
    pub const MATCHER: &str = "typeahead::matcher";
    /// Trigger policy target.
    pub const TRIGGER: &str = "typeahead::trigger";
}
