use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    // the request does not fit the current lending state of the item
    State {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::AlreadyBorrowed { message } => {
                CommandError::State { message }
            }
            LibraryError::NotBorrowed { message } => {
                CommandError::State { message }
            }
            LibraryError::InvalidDurationFormat { message } => {
                CommandError::Validation { message, reason_code: Some("invalid_duration".to_string()) }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CommandError::State { message }
            | CommandError::DuplicateKey { message }
            | CommandError::NotFound { message }
            | CommandError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_map_state_errors() {
        assert!(matches!(CommandError::from(LibraryError::already_borrowed("x")), CommandError::State { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_borrowed("x")), CommandError::State { .. }));
    }

    #[test]
    fn test_should_map_invalid_duration_to_validation() {
        let err = CommandError::from(LibraryError::invalid_duration("x"));
        assert_eq!(CommandError::Validation { message: "x".to_string(), reason_code: Some("invalid_duration".to_string()) }, err);
    }

    #[test]
    fn test_should_map_lookup_errors() {
        assert!(matches!(CommandError::from(LibraryError::not_found("x")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::duplicate_key("x")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("x")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(LibraryError::validation("x", None)), CommandError::Validation { .. }));
    }
}
