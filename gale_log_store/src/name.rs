//! Type-safe destination identifiers.
//!
//! Group and stream names are distinct types so they cannot be swapped at a
//! call site. Both follow the same naming rules.

use snafu::Snafu;

/// Errors that can occur when parsing destination names.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum NameError {
    #[snafu(display(
        "invalid {kind} name: '{name}' - must start with a lowercase letter and contain only lowercase letters, numbers, hyphens, and underscores"
    ))]
    InvalidName { kind: &'static str, name: String },
}

pub type NameResult<T, E = NameError> = std::result::Result<T, E>;

fn validate_name(kind: &'static str, name: &str) -> NameResult<()> {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return Err(NameError::InvalidName {
            kind,
            name: name.to_string(),
        });
    };

    if !first.is_ascii_lowercase() {
        return Err(NameError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }

    for ch in chars {
        if !ch.is_ascii_lowercase() && !ch.is_ascii_digit() && ch != '-' && ch != '_' {
            return Err(NameError::InvalidName {
                kind,
                name: name.to_string(),
            });
        }
    }

    Ok(())
}

macro_rules! destination_name {
    ($name:ident, $kind:literal) => {
        #[doc = concat!("Type-safe identifier for a log ", $kind, ".")]
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Create a new ", $kind, " name, validating it.")]
            pub fn parse(name: impl Into<String>) -> NameResult<Self> {
                let name = name.into();
                validate_name($kind, &name)?;
                Ok(Self(name))
            }

            #[doc = concat!("Create a new ", $kind, " name without validation.")]
            ///
            /// # Panics
            ///
            /// Panics if the name is invalid.
            pub fn new_unchecked(name: impl Into<String>) -> Self {
                let name = name.into();
                validate_name($kind, &name).expect("name must be valid");
                Self(name)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = NameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

destination_name!(GroupName, "group");
destination_name!(StreamName, "stream");
