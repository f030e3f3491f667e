// identifiers shared by the analyzer
use std::fmt;

use serde::{Deserialize, Serialize};

/// Case-sensitive name of a record property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyName(String);

impl PropertyName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropertyName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Reference to a record type by its qualified name.
///
/// Two references are the same type iff their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Structural role of an operator port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PortRole {
    Master,
    Transaction,
    Joined,
    //join output for unmatched transactions, never mapped
    Missed,
    Left,
    Right,
}

impl PortRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortRole::Master => "master",
            PortRole::Transaction => "transaction",
            PortRole::Joined => "joined",
            PortRole::Missed => "missed",
            PortRole::Left => "left",
            PortRole::Right => "right",
        }
    }
}

impl fmt::Display for PortRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PortDirection {
    Input,
    Output,
}

/// Stable identity of a port: which side, where, and what it is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortRef {
    pub direction: PortDirection,
    pub index: usize,
    pub role: PortRole,
}

impl PortRef {
    pub fn input(index: usize, role: PortRole) -> Self {
        Self { direction: PortDirection::Input, index, role }
    }

    pub fn output(index: usize, role: PortRole) -> Self {
        Self { direction: PortDirection::Output, index, role }
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role.as_str())
    }
}
