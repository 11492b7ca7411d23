use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target platform of the runner executable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "x86")]
    X86,
    #[default]
    #[serde(rename = "x64")]
    X64,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::X86 => "x86",
            Platform::X64 => "x64",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "x86" => Ok(Platform::X86),
            "x64" => Ok(Platform::X64),
            other => Err(Error::ConfigError(format!(
                "Unsupported platform '{other}' (expected x86 or x64)"
            ))),
        }
    }
}

/// Runner major version, which selects the flag dialect and executable set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Version {
    #[serde(rename = "2.x")]
    V2,
    #[default]
    #[serde(rename = "3.x")]
    V3,
}

impl Version {
    pub fn as_str(self) -> &'static str {
        match self {
            Version::V2 => "2.x",
            Version::V3 => "3.x",
        }
    }

    /// Console executable name for this version on the given platform
    pub fn executable(self, platform: Platform) -> &'static str {
        match (self, platform) {
            (Version::V2, Platform::X86) => "nunit-console-x86.exe",
            (Version::V2, Platform::X64) => "nunit-console.exe",
            (Version::V3, _) => "nunit3-console.exe",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "2.x" => Ok(Version::V2),
            "3.x" => Ok(Version::V3),
            other => Err(Error::ConfigError(format!(
                "Unsupported runner version '{other}' (expected 2.x or 3.x)"
            ))),
        }
    }
}

/// Value of a single runner flag as written in configuration.
///
/// Formatters never reject a value: a scalar handed to a list flag is treated as a
/// one-element list, and a list handed to a scalar flag is comma-joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<String>),
}

impl OptionValue {
    pub fn as_text(&self) -> String {
        match self {
            OptionValue::Flag(value) => value.to_string(),
            OptionValue::Number(value) => value.to_string(),
            OptionValue::Text(value) => value.clone(),
            OptionValue::List(values) => values.join(","),
        }
    }

    pub fn as_list(&self) -> Vec<String> {
        match self {
            OptionValue::List(values) => values.clone(),
            scalar => vec![scalar.as_text()],
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Flag(value)
    }
}

impl From<u64> for OptionValue {
    fn from(value: u64) -> Self {
        OptionValue::Number(value.into())
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        OptionValue::List(values)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(values: Vec<&str>) -> Self {
        OptionValue::List(values.into_iter().map(String::from).collect())
    }
}

/// Runner configuration: platform, version, install path and the ordered runner flags.
///
/// Flags keep the order in which they were supplied; the command builder emits them in
/// that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunnerOptions {
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub version: Version,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(flatten)]
    pub flags: IndexMap<String, OptionValue>,
}

impl RunnerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Append a flag. Re-setting an existing key keeps its original position.
    pub fn with_flag(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.flags.insert(key.into(), value.into());
        self
    }

    pub fn flag(&self, key: &str) -> Option<&OptionValue> {
        self.flags.get(key)
    }
}
