use std::fmt;

/// TeamCity test lifecycle events produced from a result report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    TestSuiteStarted,
    TestSuiteFinished,
    TestStarted,
    TestFinished,
    TestFailed,
    TestIgnored,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::TestSuiteStarted => "testSuiteStarted",
            MessageKind::TestSuiteFinished => "testSuiteFinished",
            MessageKind::TestStarted => "testStarted",
            MessageKind::TestFinished => "testFinished",
            MessageKind::TestFailed => "testFailed",
            MessageKind::TestIgnored => "testIgnored",
        }
    }
}

/// One `##teamcity[...]` line.
///
/// Values are written verbatim: callers escape text content beforehand. The `name`
/// attribute comes straight from report attributes and is not escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceMessage {
    pub kind: MessageKind,
    pub name: String,
    attributes: Vec<(&'static str, String)>,
}

impl ServiceMessage {
    pub fn new(kind: MessageKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn suite_started(name: impl Into<String>) -> Self {
        Self::new(MessageKind::TestSuiteStarted, name)
    }

    pub fn suite_finished(name: impl Into<String>) -> Self {
        Self::new(MessageKind::TestSuiteFinished, name)
    }

    pub fn test_started(name: impl Into<String>) -> Self {
        Self::new(MessageKind::TestStarted, name)
    }

    pub fn test_ignored(name: impl Into<String>, message: &str) -> Self {
        Self::new(MessageKind::TestIgnored, name).with_attribute("message", message)
    }

    pub fn test_failed(name: impl Into<String>, message: &str, details: &str) -> Self {
        Self::new(MessageKind::TestFailed, name)
            .with_attribute("message", message)
            .with_attribute("details", details)
    }

    pub fn test_finished(name: impl Into<String>, duration: Option<i64>) -> Self {
        let message = Self::new(MessageKind::TestFinished, name);
        match duration {
            Some(duration) => message.with_attribute("duration", &duration.to_string()),
            None => message,
        }
    }

    /// Append an attribute; empty values are left out of the line entirely
    pub fn with_attribute(mut self, key: &'static str, value: &str) -> Self {
        if !value.is_empty() {
            self.attributes.push((key, value.to_string()));
        }
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for ServiceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "##teamcity[{} name='{}'", self.kind.as_str(), self.name)?;
        for (key, value) in &self.attributes {
            write!(f, " {key}='{value}'")?;
        }
        f.write_str("]")
    }
}
