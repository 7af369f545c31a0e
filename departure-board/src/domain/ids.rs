//! Identifier types for schedule records.
//!
//! GTFS identifiers are opaque feed-assigned strings; these newtypes keep
//! the different identifier spaces from being mixed up. They carry no
//! format validation (feeds disagree wildly on identifier shape) - the
//! required-field checks live in `DepartureRequest::validate`.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is the empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id! {
    /// Tenant/feed identifier scoping all schedule rows.
    AgencyId
}

string_id! {
    /// Logical grouping of calendar validity rules, referenced by trips.
    ServiceId
}

string_id! {
    /// A single scheduled vehicle journey.
    TripId
}

string_id! {
    /// A route grouping trips presented to riders as one line.
    RouteId
}

string_id! {
    /// A location where vehicles pick up or drop off riders.
    StopId
}

/// Direction of travel on a route (GTFS `direction_id`: 0 or 1).
///
/// Distinguishes inbound from outbound trips. The value is feed-defined;
/// nothing here assumes which of 0/1 means which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectionId(pub u8);

impl fmt::Display for DirectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
