//! # System Lifecycle
//!
//! Starts the three record stores, hands out their clients and shuts them down again.
//!
//! None of the stores depend on each other, so every actor runs with a `()` context.
//! Shutdown is driven by the channels: once [`RosterSystem::shutdown`] drops the last
//! client clone, each actor's mailbox closes and its task returns.
//!
//! ```rust
//! use roster::lifecycle::RosterSystem;
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = RosterSystem::new(32);
//!     let reply = system.agent().process("list users").await.unwrap();
//!     assert_eq!(reply, roster::command::CommandReply::Users(vec![]));
//!     system.shutdown().await.unwrap();
//! }
//! ```

pub mod roster_system;
pub mod tracing;

pub use roster_system::RosterSystem;
pub use self::tracing::setup_tracing;
