use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A positional request argument as sent by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Argument {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Argument {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Argument::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Argument::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Integers widen to floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Argument::Float(value) => Some(*value),
            Argument::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Argument::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Bool(value) => write!(f, "{value}"),
            Argument::Integer(value) => write!(f, "{value}"),
            Argument::Float(value) => write!(f, "{value}"),
            Argument::String(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::String(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::String(value)
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Argument::Integer(value)
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Float(value)
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Argument::Bool(value)
    }
}

/// A call from the host: a method name and its positional arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,

    #[serde(default)]
    pub parameters: Vec<Argument>,
}

impl Request {
    pub fn new(method: impl Into<String>, parameters: Vec<Argument>) -> Self {
        Self {
            method: method.into(),
            parameters,
        }
    }

    /// A `query` request carrying the raw query text.
    pub fn query_request(text: impl Into<String>) -> Self {
        Self::new(crate::QUERY_METHOD, vec![Argument::String(text.into())])
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The raw query text: the first argument when it is a string, else "".
    pub fn query(&self) -> &str {
        self.parameters
            .first()
            .and_then(Argument::as_str)
            .unwrap_or_default()
    }

    pub fn argument(&self, index: usize) -> Result<&Argument> {
        self.parameters
            .get(index)
            .ok_or_else(|| ProtocolError::MissingArgument {
                method: self.method.clone(),
                index,
            })
    }

    pub fn str_argument(&self, index: usize) -> Result<&str> {
        self.argument(index)?
            .as_str()
            .ok_or(ProtocolError::InvalidArgument {
                index,
                expected: "a string",
            })
    }

    pub fn i64_argument(&self, index: usize) -> Result<i64> {
        self.argument(index)?
            .as_i64()
            .ok_or(ProtocolError::InvalidArgument {
                index,
                expected: "an integer",
            })
    }

    pub fn f64_argument(&self, index: usize) -> Result<f64> {
        self.argument(index)?
            .as_f64()
            .ok_or(ProtocolError::InvalidArgument {
                index,
                expected: "a number",
            })
    }

    pub fn bool_argument(&self, index: usize) -> Result<bool> {
        self.argument(index)?
            .as_bool()
            .ok_or(ProtocolError::InvalidArgument {
                index,
                expected: "a boolean",
            })
    }
}
