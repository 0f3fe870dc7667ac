//! # HTTP Interface
//!
//! JSON over HTTP with axum. Students and teachers get plain CRUD routes; users are only
//! reachable through the command interpreter.
//!
//! | route | handler |
//! |---|---|
//! | `GET, POST /students/` | list, create (201) |
//! | `GET, PUT, DELETE /students/{id}` | fetch, partial update, remove |
//! | `GET, POST /teachers/` | list, create (201) |
//! | `GET, PUT, DELETE /teachers/{id}` | fetch, partial update, remove |
//! | `POST /agent/command` | run `{"prompt": ...}` |
//!
//! Errors are rendered by [`ApiError`](error::ApiError).

pub mod agent;
pub mod error;
pub mod students;
pub mod teachers;

use crate::clients::{StudentClient, TeacherClient};
use crate::command::CommandAgent;
use crate::lifecycle::RosterSystem;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Handles shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub students: StudentClient,
    pub teachers: TeacherClient,
    pub agent: CommandAgent,
}

impl AppState {
    pub fn new(system: &RosterSystem) -> Self {
        Self {
            students: system.student_client.clone(),
            teachers: system.teacher_client.clone(),
            agent: system.agent(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(students::routes())
        .merge(teachers::routes())
        .merge(agent::routes())
        .with_state(state)
}

/// Serves until `shutdown` resolves. The router, and with it every client clone it
/// holds, is dropped before this returns.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
