//! # Command Interpreter
//!
//! Turns one-line instructions into user operations:
//!
//! ```text
//! add user <name>, <age>, <gender>, <email>
//! update user <id> email to <value>
//! update user <id> age to <n> and name to <value>
//! update user <id> age to <n>
//! update user <id> name to <value>
//! delete user <id>
//! get user <id>
//! list users
//! ```
//!
//! Keywords are case-insensitive. Parsing ([`Command::parse`]) is pure; [`CommandAgent`]
//! runs the parsed command against a [`UserClient`] and renders every domain outcome,
//! including rejections, as a [`CommandReply`]. Only a failure to reach the user store
//! is returned as an error.

pub mod parse;

pub use parse::{Command, FormatIssue, Intent, ParseError, Target, UserChange};

use crate::clients::UserClient;
use crate::model::User;
use crate::user_actor::UserError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What a command produces. Serializes untagged, so a reply is a bare string, a
/// `{"message": ...}` object, a user object or a list of users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandReply {
    Text(String),
    User(User),
    NotFound { message: String },
    Users(Vec<User>),
}

impl CommandReply {
    fn text(message: impl ToString) -> Self {
        CommandReply::Text(message.to_string())
    }
}

/// Executes commands against the user store.
#[derive(Clone)]
pub struct CommandAgent {
    users: UserClient,
}

impl CommandAgent {
    pub fn new(users: UserClient) -> Self {
        Self { users }
    }

    /// Parses and executes one instruction.
    #[instrument(skip(self))]
    pub async fn process(&self, prompt: &str) -> Result<CommandReply, UserError> {
        match Command::parse(prompt) {
            Ok(command) => {
                debug!(intent = ?command.intent(), "Classified command");
                self.execute(command).await
            }
            Err(e) => {
                match &e {
                    ParseError::InvalidFormat { intent, reason } => {
                        info!(?intent, %reason, "Rejected command")
                    }
                    ParseError::Unrecognized => info!("Unrecognized command"),
                }
                Ok(CommandReply::text(e))
            }
        }
    }

    pub async fn execute(&self, command: Command) -> Result<CommandReply, UserError> {
        match command {
            Command::Add(params) => {
                let name = params.name.clone();
                match self.users.add_user(params).await {
                    Ok(_) => Ok(CommandReply::text(format!("Added {name} successfully."))),
                    Err(e) => rejected(e),
                }
            }
            Command::Update { target, change } => {
                let Some(id) = target.user_id() else {
                    return Ok(CommandReply::text(missing(target)));
                };
                match self.users.update_user(id, change.into()).await {
                    Ok(_) => Ok(CommandReply::text(format!("Updated user {id} successfully."))),
                    Err(e) => rejected(e),
                }
            }
            Command::Delete(target) => {
                let Some(id) = target.user_id() else {
                    return Ok(CommandReply::text(missing(target)));
                };
                match self.users.delete_user(id).await {
                    Ok(_) => Ok(CommandReply::text(format!("Deleted user {id} successfully."))),
                    Err(e) => rejected(e),
                }
            }
            Command::Get(target) => {
                let user = match target.user_id() {
                    Some(id) => self.users.get_user(id).await?,
                    None => None,
                };
                Ok(match user {
                    Some(user) => CommandReply::User(user),
                    None => CommandReply::NotFound {
                        message: missing(target),
                    },
                })
            }
            Command::List => Ok(CommandReply::Users(self.users.list_users().await?)),
        }
    }
}

/// Same text as [`UserError::NotFound`], for ids no user can hold (zero, negative or
/// past `u32::MAX`) as well as ones that are simply free.
fn missing(target: Target) -> String {
    match target.user_id() {
        Some(id) => UserError::NotFound(id).to_string(),
        None => format!("User {target} not found."),
    }
}

/// Domain rejections become reply text; store failures stay errors.
fn rejected(e: UserError) -> Result<CommandReply, UserError> {
    match e {
        UserError::ActorCommunication(_) => Err(e),
        other => {
            info!(error = %other, "Command rejected");
            Ok(CommandReply::text(other))
        }
    }
}
