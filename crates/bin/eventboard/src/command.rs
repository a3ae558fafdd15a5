//! Command-line commands, one per event store operation.

use eventboard_app::ports::DocumentStore;
use eventboard_app::services::event_store::EventStore;
use eventboard_domain::error::EventBoardError;
use eventboard_domain::event::{EventCollection, NewEvent};

pub const USAGE: &str = "usage: eventboard <command>

commands:
  list                                   list all events
  add <title> <description> <location>   add an event
  like <id>                              add a like to an event
  unlike <id>                            remove a like from an event";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    List,
    Add(NewEvent),
    Like(String),
    Unlike(String),
}

/// The arguments did not form a known command.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("{command} expects {expected} argument(s), got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },
}

impl Command {
    /// Parse the arguments that follow the program name.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError`] for an unknown command or a wrong argument count.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, UsageError> {
        let mut args = args.into_iter();
        let name = args.next().ok_or(UsageError::MissingCommand)?;
        let rest: Vec<String> = args.collect();

        match name.as_str() {
            "list" => {
                expect_args("list", &rest, 0)?;
                Ok(Self::List)
            }
            "add" => {
                expect_args("add", &rest, 3)?;
                let [title, description, location] =
                    <[String; 3]>::try_from(rest).map_err(|rest| UsageError::Arity {
                        command: "add",
                        expected: 3,
                        got: rest.len(),
                    })?;
                Ok(Self::Add(NewEvent::new(title, description, location)))
            }
            "like" => Ok(Self::Like(single_id("like", rest)?)),
            "unlike" => Ok(Self::Unlike(single_id("unlike", rest)?)),
            other => Err(UsageError::UnknownCommand(other.to_string())),
        }
    }

    /// Run the command against the event store.
    ///
    /// # Errors
    ///
    /// Propagates the event store error of `add`, `like` and `unlike`.
    pub async fn run<S: DocumentStore>(
        self,
        events: &EventStore<S>,
    ) -> Result<EventCollection, EventBoardError> {
        match self {
            Self::List => Ok(events.list_events().await),
            Self::Add(new_event) => events.add_event(new_event).await,
            Self::Like(id) => events.add_like(&id).await,
            Self::Unlike(id) => events.remove_like(&id).await,
        }
    }
}

fn expect_args(command: &'static str, rest: &[String], expected: usize) -> Result<(), UsageError> {
    if rest.len() == expected {
        Ok(())
    } else {
        Err(UsageError::Arity {
            command,
            expected,
            got: rest.len(),
        })
    }
}

fn single_id(command: &'static str, rest: Vec<String>) -> Result<String, UsageError> {
    expect_args(command, &rest, 1)?;
    rest.into_iter().next().ok_or(UsageError::Arity {
        command,
        expected: 1,
        got: 0,
    })
}
