//! Logging facilities for curvelist.
//!
//! curvelist uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("curvelist=debug")
//!         .init();
//! }
//! ```
//!
//! Every subsystem logs under its own target (see [`targets`]), so output can
//! be narrowed with directives such as `curvelist::filter=trace`.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "curvelist_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "curvelist_core::signal";
    /// Filter engine target.
    pub const FILTER: &str = "curvelist::filter";
    /// Table model target.
    pub const TABLE: &str = "curvelist::table";
    /// Drag source target.
    pub const DRAG: &str = "curvelist::drag";
    /// Context menu and deletion target.
    pub const MENU: &str = "curvelist::menu";
    /// Settings persistence target.
    pub const SETTINGS: &str = "curvelist::settings";
}

/// Span names used for performance tracing.
pub mod span_names {
    /// One filter evaluation over all rows.
    pub const FILTER_PASS: &str = "filter_pass";
    /// Building and executing a drag.
    pub const DRAG: &str = "drag";
}

/// A guard for timing a section of work.
///
/// The span is entered on creation and exited when the guard is dropped.
///
/// ```
/// use curvelist_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("filter_pass");
///     // ... work ...
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "curvelist::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

impl std::fmt::Debug for PerfSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerfSpan").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new(span_names::FILTER_PASS);
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::FILTER,
            targets::TABLE,
            targets::DRAG,
            targets::MENU,
            targets::SETTINGS,
        ] {
            assert!(target.starts_with("curvelist::"));
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
