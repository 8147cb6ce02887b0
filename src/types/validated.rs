//! Validated string types that enforce invariants at construction time

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Validation errors for string types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("router name cannot be empty or whitespace")]
    EmptyRouterName,

    #[error("config path cannot be empty or whitespace")]
    EmptyConfigPath,
}

/// Generates a string newtype that rejects empty or whitespace-only input.
///
/// Each type gets `new()`, `as_str()`, `AsRef<str>`, `Deref`, `Display`,
/// `TryFrom<String>`, `FromStr` and validating serde impls.
macro_rules! validated_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident(String) {
            error_variant: $error_variant:ident,
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        $vis struct $name(String);

        impl $name {
            #[doc = concat!("Create a new ", stringify!($name), " after validation")]
            pub fn new(s: String) -> Result<Self, ValidationError> {
                if s.trim().is_empty() {
                    Err(ValidationError::$error_variant)
                } else {
                    Ok(Self(s))
                }
            }

            #[doc = concat!("Get the ", stringify!($name), " as a string slice")]
            #[must_use]
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::new(s).map_err(serde::de::Error::custom)
            }
        }
    };
}

validated_string! {
    /// Name of a router, as it appears under `rt/` in the metrics tree and as
    /// the `label` of the router's configuration entry
    ///
    /// # Examples
    /// ```
    /// use router_summary::types::RouterName;
    ///
    /// let router = RouterName::new("incoming".to_string()).unwrap();
    /// assert_eq!(router.as_str(), "incoming");
    ///
    /// assert!(RouterName::new("  ".to_string()).is_err());
    /// ```
    #[doc(alias = "label")]
    pub struct RouterName(String) {
        error_variant: EmptyRouterName,
    }
}

validated_string! {
    /// Path to a router configuration file
    pub struct ConfigPath(String) {
        error_variant: EmptyConfigPath,
    }
}
