use crate::clients::{StudentClient, TeacherClient, UserClient};
use crate::command::CommandAgent;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Owns the running stores.
///
/// Clients are public so callers can clone what they need. Clones held elsewhere keep
/// their store alive, so drop them before calling [`shutdown`](Self::shutdown).
pub struct RosterSystem {
    pub user_client: UserClient,
    pub student_client: StudentClient,
    pub teacher_client: TeacherClient,
    handles: Vec<JoinHandle<()>>,
}

impl RosterSystem {
    /// Spawns the user, student and teacher stores, each with a mailbox of
    /// `mailbox_size` requests (at least one).
    pub fn new(mailbox_size: usize) -> Self {
        let mailbox_size = mailbox_size.max(1);
        let (user_actor, user_client) = crate::user_actor::new(mailbox_size);
        let (student_actor, student_client) = crate::student_actor::new(mailbox_size);
        let (teacher_actor, teacher_client) = crate::teacher_actor::new(mailbox_size);

        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(student_actor.run(())),
            tokio::spawn(teacher_actor.run(())),
        ];

        Self {
            user_client,
            student_client,
            teacher_client,
            handles,
        }
    }

    /// A command interpreter bound to this system's user store.
    pub fn agent(&self) -> CommandAgent {
        CommandAgent::new(self.user_client.clone())
    }

    /// Drops the clients and waits for every store to stop.
    ///
    /// Fails with the first actor task that panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.user_client);
        drop(self.student_client);
        drop(self.teacher_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
