use quick_xml::events::attributes::AttrError;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while building runner commands or converting reports
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    AttrError(#[from] AttrError),

    #[error("Report error: {0}")]
    ReportError(String),

    #[error("Assembly not found: {}", .0.display())]
    AssemblyNotFound(PathBuf),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for nunit-teamcity operations
pub type Result<T> = std::result::Result<T, Error>;
