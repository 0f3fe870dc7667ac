//! Pure parsing of instruction strings into [`Command`]s.
//!
//! Classification is a prefix match on the raw input. Update fields are picked by
//! keyword anywhere in the lower-cased input, so `new_email` selects the email and
//! `Page` contains `age`. Ids and values come from whitespace tokens, which remember
//! where they end so the free-text value of an update keeps its inner spacing.

use crate::model::{UserCreate, UserId, UserUpdate};
use std::fmt::Display;
use thiserror::Error;

/// What a command asks for, decided by its leading phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Add,
    Update,
    Delete,
    Get,
    List,
}

impl Intent {
    /// Leading phrases in match priority order.
    const PHRASES: [(&'static str, Intent); 5] = [
        ("add user", Intent::Add),
        ("update user", Intent::Update),
        ("delete user", Intent::Delete),
        ("get user", Intent::Get),
        ("list users", Intent::List),
    ];

    /// Matches the leading phrase, ignoring ASCII case. Returns the intent and the
    /// text after the phrase.
    pub fn classify(input: &str) -> Option<(Intent, &str)> {
        Self::PHRASES.iter().find_map(|(phrase, intent)| {
            let head = input.as_bytes().get(..phrase.len())?;
            head.eq_ignore_ascii_case(phrase.as_bytes())
                .then(|| (*intent, &input[phrase.len()..]))
        })
    }

    /// Reply text for a malformed command of this intent.
    pub fn invalid_format_message(self) -> &'static str {
        match self {
            Intent::Add => "Invalid add user format.",
            Intent::Update => "Invalid update format.",
            Intent::Delete => "Invalid delete format.",
            Intent::Get => "Invalid get format.",
            Intent::List => "Invalid list format.",
        }
    }
}

/// Why a classified command could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatIssue {
    #[error("expected 4 comma-separated fields, got {0}")]
    FieldCount(usize),
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
    #[error("missing user id")]
    MissingId,
    #[error("not a user id: {0:?}")]
    BadId(String),
    #[error("no standalone `to`")]
    MissingTo,
    #[error("no recognised field before `to`")]
    UnknownField,
    #[error("empty value after `to`")]
    EmptyValue,
    #[error("expected `age to <n> and`")]
    MalformedAge,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Command not recognized.")]
    Unrecognized,
    #[error("{}", .intent.invalid_format_message())]
    InvalidFormat { intent: Intent, reason: FormatIssue },
}

/// The field change requested by an update command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserChange {
    Email(String),
    AgeAndName { age: i32, name: String },
    Age(i32),
    Name(String),
}

impl From<UserChange> for UserUpdate {
    fn from(change: UserChange) -> Self {
        match change {
            UserChange::Email(email) => UserUpdate {
                email: Some(email),
                ..Default::default()
            },
            UserChange::AgeAndName { age, name } => UserUpdate {
                age: Some(age),
                name: Some(name),
                ..Default::default()
            },
            UserChange::Age(age) => UserUpdate {
                age: Some(age),
                ..Default::default()
            },
            UserChange::Name(name) => UserUpdate {
                name: Some(name),
                ..Default::default()
            },
        }
    }
}

/// A user id as written in a command. Any integer parses; only positive values that
/// fit in a `u32` can name a stored user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target(pub i64);

impl Target {
    /// The store identifier, or `None` when no user can have this id.
    pub fn user_id(self) -> Option<UserId> {
        u32::try_from(self.0).ok().filter(|&n| n > 0).map(UserId)
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fully parsed instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(UserCreate),
    Update { target: Target, change: UserChange },
    Delete(Target),
    Get(Target),
    List,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let (intent, rest) = Intent::classify(input).ok_or(ParseError::Unrecognized)?;
        let invalid = |reason| ParseError::InvalidFormat { intent, reason };
        match intent {
            Intent::Add => parse_add(rest).map(Command::Add).map_err(invalid),
            Intent::Update => parse_update(input).map_err(invalid),
            Intent::Delete => target_id(&tokenize(input)).map(Command::Delete).map_err(invalid),
            Intent::Get => target_id(&tokenize(input)).map(Command::Get).map_err(invalid),
            Intent::List => Ok(Command::List),
        }
    }

    pub fn intent(&self) -> Intent {
        match self {
            Command::Add(_) => Intent::Add,
            Command::Update { .. } => Intent::Update,
            Command::Delete(_) => Intent::Delete,
            Command::Get(_) => Intent::Get,
            Command::List => Intent::List,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    /// Byte offset just past the token.
    end: usize,
}

impl Token<'_> {
    fn is(&self, keyword: &str) -> bool {
        self.text.eq_ignore_ascii_case(keyword)
    }
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (i, c) in input.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Token { text: &input[s..i], end: i });
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(Token { text: &input[s..], end: input.len() });
    }
    tokens
}

fn parse_int(text: &str) -> Result<i32, FormatIssue> {
    text.parse()
        .map_err(|_| FormatIssue::NotAnInteger(text.to_string()))
}

/// The id is always the third token: `<verb> user <id> ...`.
fn target_id(tokens: &[Token<'_>]) -> Result<Target, FormatIssue> {
    let token = tokens.get(2).ok_or(FormatIssue::MissingId)?;
    token
        .text
        .parse::<i64>()
        .map(Target)
        .map_err(|_| FormatIssue::BadId(token.text.to_string()))
}

fn parse_add(rest: &str) -> Result<UserCreate, FormatIssue> {
    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    let [name, age, gender, email] = fields[..] else {
        return Err(FormatIssue::FieldCount(fields.len()));
    };
    Ok(UserCreate {
        name: name.to_string(),
        age: parse_int(age)?,
        gender: gender.to_lowercase(),
        email: email.to_string(),
    })
}

fn parse_update(input: &str) -> Result<Command, FormatIssue> {
    let tokens = tokenize(input);
    let target = target_id(&tokens)?;

    let to = tokens
        .iter()
        .rposition(|t| t.is("to"))
        .filter(|&i| i > 2)
        .ok_or(FormatIssue::MissingTo)?;
    let value = input[tokens[to].end..].trim();
    if value.is_empty() {
        return Err(FormatIssue::EmptyValue);
    }

    let lowered = input.to_lowercase();
    let has = |keyword: &str| lowered.contains(keyword);
    let change = if has("email") {
        UserChange::Email(value.to_string())
    } else if has("age") && has("name") {
        UserChange::AgeAndName {
            age: stacked_age(&tokens[3..to])?,
            name: value.to_string(),
        }
    } else if has("age") {
        UserChange::Age(parse_int(value)?)
    } else if has("name") {
        UserChange::Name(value.to_string())
    } else {
        return Err(FormatIssue::UnknownField);
    };
    Ok(Command::Update { target, change })
}

/// Reads `<n>` out of `age to <n> and ...`.
fn stacked_age(selector: &[Token<'_>]) -> Result<i32, FormatIssue> {
    let age = selector
        .windows(2)
        .position(|pair| pair[0].is("age") && pair[1].is("to"))
        .ok_or(FormatIssue::MalformedAge)?;
    let rest = &selector[age + 2..];
    let and = rest
        .iter()
        .position(|t| t.is("and"))
        .ok_or(FormatIssue::MalformedAge)?;
    match &rest[..and] {
        [n] => parse_int(n.text),
        _ => Err(FormatIssue::MalformedAge),
    }
}
