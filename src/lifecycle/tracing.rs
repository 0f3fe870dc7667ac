//! # Tracing Setup
//!
//! Installs the global `tracing` subscriber. Levels come from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info roster                 # lifecycle and mutations
//! RUST_LOG=debug roster                # every request, with payloads
//! RUST_LOG=roster::command=debug roster
//! ```
//!
//! Store actors tag their events with `entity_type` (`User`, `Student`, `Teacher`), so
//! module paths are left out of the compact format. The JSON format keeps them, along
//! with the current span list, for log shippers.
//!
//! With `RUST_LOG=debug` a create on the user store reads like:
//!
//! ```text
//! DEBUG add_user: Sending request params=UserCreate { name: "Ana", .. }
//! DEBUG Create entity_type="User" params=UserCreate { name: "Ana", .. }
//! INFO  Created entity_type="User" id=1 size=1
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes logging once for the whole process. `json` switches from the compact
/// human format to one JSON object per line.
pub fn setup_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().with_current_span(false).with_span_list(true).init();
    } else {
        builder.with_target(false).compact().init();
    }
}
