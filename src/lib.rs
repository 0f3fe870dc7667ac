//! # Roster
//!
//! In-memory student, teacher and user records served over HTTP, plus a small command
//! language for managing users (`add user Ana, 20, f, ana@x.com`).
//!
//! Every resource lives in its own store actor from the
//! [`record_actor`] crate. Nothing is persisted; state lasts as long as the process.
//!
//! ## Module Tour
//!
//! - [`model`]: record types, their ids and create/update payloads.
//! - [`user_actor`], [`student_actor`], [`teacher_actor`]: the
//!   [`RecordEntity`](record_actor::RecordEntity) implementations and error types.
//! - [`clients`]: typed clients. [`UserClient`](clients::UserClient) also enforces
//!   email uniqueness.
//! - [`command`]: parses instructions and runs them against the user store.
//! - [`lifecycle`]: [`RosterSystem`](lifecycle::RosterSystem) starts and stops the
//!   stores; [`setup_tracing`](lifecycle::setup_tracing) configures logging.
//! - [`http`]: the axum router.
//! - [`config`]: command-line and environment settings.
//!
//! ## Identifiers
//!
//! Each store counts from 1 and never hands out an identifier twice, even after
//! deletes. Lists come back in insertion order.
//!
//! ## Testing
//!
//! [`record_actor::mock::MockStore`] stands in for a store when testing a client. The
//! HTTP tests under `tests/` run the real router on an ephemeral port.

pub mod clients;
pub mod command;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod student_actor;
pub mod teacher_actor;
pub mod user_actor;
