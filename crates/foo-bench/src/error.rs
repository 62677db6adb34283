//! Registry errors.

use std::error::Error;
use std::fmt;

/// Errors from registering or looking up benchmark cases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A case was registered with an empty name.
    EmptyName,
    /// A case with this name is already registered.
    DuplicateName {
        /// The conflicting name.
        name: String,
    },
    /// No case with this name is registered.
    UnknownCase {
        /// The requested name.
        name: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "benchmark case name must not be empty"),
            Self::DuplicateName { name } => {
                write!(f, "benchmark case '{name}' is already registered")
            }
            Self::UnknownCase { name } => write!(f, "no benchmark case named '{name}'"),
        }
    }
}

impl Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_case() {
        let err = RegistryError::DuplicateName {
            name: "add_two".into(),
        };
        assert_eq!(err.to_string(), "benchmark case 'add_two' is already registered");
    }
}
