//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter. The level
//! comes from `RUST_LOG` and defaults to `info`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle events, one line each
//! RUST_LOG=debug cargo run     # plus every actor request with its payload
//! ```
//!
//! Module paths are hidden (`with_target(false)`); actor logs carry an
//! `entity_type` field instead, and client calls open a span per method:
//!
//! ```text
//! INFO create_order: Sending create_order to actor
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO confirm_order{id=OrderId(1)}: Order status changed order_id=order_1 from=PENDING to=CONFIRMED
//! WARN Action failed entity_type="Order" id=order_2 error=Invalid status transition from SHIPPED to CONFIRMED
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
