// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Typed values held by a preference store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single stored preference value.
///
/// The four variants match the types the game ever persists. Integers are
/// kept at their on-device widths (`Int` is 32-bit, `Long` is 64-bit) so
/// values written by older builds read back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PrefValue {
    /// Boolean toggle.
    Bool(bool),
    /// 32-bit integer (counts, packed colors).
    Int(i32),
    /// 64-bit integer (elapsed time).
    Long(i64),
    /// UTF-8 string.
    Str(String),
}

/// Discriminant of a [`PrefValue`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefKind {
    /// [`PrefValue::Bool`]
    Bool,
    /// [`PrefValue::Int`]
    Int,
    /// [`PrefValue::Long`]
    Long,
    /// [`PrefValue::Str`]
    Str,
}

impl fmt::Display for PrefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Long => "long",
            Self::Str => "string",
        })
    }
}

impl PrefValue {
    /// Kind of this value.
    pub fn kind(&self) -> PrefKind {
        match self {
            Self::Bool(_) => PrefKind::Bool,
            Self::Int(_) => PrefKind::Int,
            Self::Long(_) => PrefKind::Long,
            Self::Str(_) => PrefKind::Str,
        }
    }

    /// Boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// 32-bit payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// 64-bit payload, if this is a `Long`.
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(l) => Some(*l),
            _ => None,
        }
    }

    /// String payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PrefValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Long(l) => write!(f, "{l}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for PrefValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for PrefValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for PrefValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<String> for PrefValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}
