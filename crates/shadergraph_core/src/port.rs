// SPDX-License-Identifier: MIT OR Apache-2.0
//! Port definitions for node inputs/outputs.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Port direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortDirection {
    /// Input port
    Input,
    /// Output port
    Output,
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
        }
    }
}

/// Semantic type tag carried by a port.
///
/// Serialized as the bare tag (`"float3"`). Tags outside the shader
/// scalar/vector family are kept verbatim in [`PortType::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PortType {
    /// `float`
    Float,
    /// `float2`
    Float2,
    /// `float3`
    Float3,
    /// `float4`
    Float4,
    /// Any other tag
    Custom(String),
}

impl PortType {
    /// The tag as written in port declarations
    pub fn tag(&self) -> &str {
        match self {
            Self::Float => "float",
            Self::Float2 => "float2",
            Self::Float3 => "float3",
            Self::Float4 => "float4",
            Self::Custom(tag) => tag,
        }
    }

    /// Check if an output of this type may feed an input of `other`
    pub fn can_connect_to(&self, other: &PortType) -> bool {
        if self == other {
            return true;
        }

        // A scalar splats into any vector width
        matches!(
            (self, other),
            (Self::Float, Self::Float2 | Self::Float3 | Self::Float4)
        )
    }
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PortType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for PortType {
    fn from(tag: &str) -> Self {
        match tag {
            "float" => Self::Float,
            "float2" => Self::Float2,
            "float3" => Self::Float3,
            "float4" => Self::Float4,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for PortType {
    fn from(tag: String) -> Self {
        match Self::from(tag.as_str()) {
            Self::Custom(_) => Self::Custom(tag),
            known => known,
        }
    }
}

impl From<PortType> for String {
    fn from(port_type: PortType) -> Self {
        match port_type {
            PortType::Custom(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

/// A named, typed connection point on a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Port {
    /// Port name
    pub name: String,
    /// Data type
    pub port_type: PortType,
}

impl Port {
    /// Create a new port
    pub fn new(name: impl Into<String>, port_type: impl Into<PortType>) -> Self {
        Self {
            name: name.into(),
            port_type: port_type.into(),
        }
    }

    /// Check if this port, used as an output, may feed `input`
    pub fn can_connect(&self, input: &Port) -> bool {
        self.port_type.can_connect_to(&input.port_type)
    }
}
