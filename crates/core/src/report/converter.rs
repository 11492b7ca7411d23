//! Streaming conversion of NUnit 2 result reports into TeamCity service messages.
//!
//! The report is read as a sequence of parse events (element open, character data,
//! element close). [`TeamcityLogBuilder`] holds the only mutable state: the stack of
//! open elements and the message / stack-trace text of the current test case. A
//! fresh builder is created for every conversion.

use crate::{
    error::{Error, Result},
    report::{ServiceMessage, escape},
};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// An open element on the ancestor stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportNode {
    pub name: String,
    pub attributes: HashMap<String, String>,
}

impl ReportNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    fn from_start(element: &BytesStart<'_>) -> Result<Self> {
        let mut node = Self::new(String::from_utf8_lossy(element.name().as_ref()));
        for attribute in element.attributes() {
            let attribute = attribute?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            node.attributes.insert(key, value);
        }
        Ok(node)
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Display name for suite events: assemblies are shown by file name only
    pub fn suite_name(&self) -> String {
        let name = self.attr("name").unwrap_or_default();
        if self.attr("type") == Some("Assembly") {
            file_name(name).to_string()
        } else {
            name.to_string()
        }
    }

    fn is_executed(&self) -> bool {
        self.attr("executed") == Some("True")
    }
}

fn file_name(path: &str) -> &str {
    path.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
}

/// Duration reported for a finished test.
///
/// Every `.` and `:` is stripped from the raw `time` attribute and the leading digits
/// of what remains, with an optional `+`/`-` sign, are read as an integer.
/// `0:00:01.230` therefore yields `1230`; this is digit concatenation, not a
/// conversion to milliseconds. A digit run that does not fit in an `i64` yields
/// `None` and the duration is left out.
pub fn duration_from_time(time: &str) -> Option<i64> {
    let stripped: String = time.chars().filter(|c| *c != '.' && *c != ':').collect();
    let stripped = stripped.trim_start();
    let (sign, digits) = match stripped.strip_prefix(['+', '-']) {
        Some(rest) => (&stripped[..1], rest),
        None => ("", stripped),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    format!("{sign}{}", &digits[..end]).parse().ok()
}

/// Event-driven state machine turning report events into service messages.
///
/// The report must consist of exactly one root element; character data outside it
/// may only be whitespace.
#[derive(Debug, Default)]
pub struct TeamcityLogBuilder {
    ancestors: Vec<ReportNode>,
    message: String,
    stack_trace: String,
    log: Vec<ServiceMessage>,
    root_opened: bool,
    root_closed: bool,
}

impl TeamcityLogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_element(&mut self, node: ReportNode) -> Result<()> {
        if self.root_closed {
            return Err(Error::ReportError(format!(
                "Element <{}> found after the root element was closed",
                node.name
            )));
        }
        self.root_opened = true;

        match node.name.as_str() {
            "test-suite" => self.log.push(ServiceMessage::suite_started(node.suite_name())),
            "test-case" => {
                if node.is_executed() {
                    let name = node.attr("name").unwrap_or_default();
                    self.log.push(ServiceMessage::test_started(name));
                }
                self.message.clear();
                self.stack_trace.clear();
            }
            _ => {}
        }
        self.ancestors.push(node);
        Ok(())
    }

    /// Character data is kept only while a `message` or `stack-trace` element is the
    /// innermost open element. Outside the root element only whitespace is allowed.
    pub fn character_data(&mut self, data: &str) -> Result<()> {
        let Some(current) = self.ancestors.last() else {
            if data.trim().is_empty() {
                return Ok(());
            }
            return Err(Error::ReportError(
                "Text found outside the root element".to_string(),
            ));
        };
        match current.name.as_str() {
            "message" => self.message.push_str(&escape(data)),
            "stack-trace" => self.stack_trace.push_str(&escape(data)),
            _ => {}
        }
        Ok(())
    }

    pub fn close_element(&mut self, name: &str) -> Result<()> {
        let node = self.ancestors.pop().ok_or_else(|| {
            Error::ReportError(format!("Closing tag </{name}> without an open element"))
        })?;
        if node.name != name {
            return Err(Error::ReportError(format!(
                "Closing tag </{name}> does not match <{}>",
                node.name
            )));
        }

        if self.ancestors.is_empty() {
            self.root_closed = true;
        }

        match node.name.as_str() {
            "test-suite" => self.log.push(ServiceMessage::suite_finished(node.suite_name())),
            "test-case" => self.finish_test_case(&node),
            _ => {}
        }
        Ok(())
    }

    fn finish_test_case(&mut self, node: &ReportNode) {
        let name = node.attr("name").unwrap_or_default();

        if node.attr("result") == Some("Ignored") {
            self.log.push(ServiceMessage::test_ignored(name, &self.message));
        } else if node.is_executed() {
            if node.attr("success") == Some("False") {
                self.log.push(ServiceMessage::test_failed(
                    name,
                    &self.message,
                    &self.stack_trace,
                ));
            }
            let duration = node.attr("time").and_then(duration_from_time);
            self.log.push(ServiceMessage::test_finished(name, duration));
        }
    }

    /// Number of currently open elements
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Finish the conversion. Fails if there was no root element or if any element is
    /// still open.
    pub fn finish(self) -> Result<Vec<ServiceMessage>> {
        if !self.root_opened {
            return Err(Error::ReportError(
                "Report contains no root element".to_string(),
            ));
        }
        if let Some(open) = self.ancestors.last() {
            return Err(Error::ReportError(format!(
                "Unexpected end of report: <{}> is not closed",
                open.name
            )));
        }
        Ok(self.log)
    }
}

/// Convert a report read incrementally from `source`
pub fn create_teamcity_log_from_reader<R: BufRead>(source: R) -> Result<Vec<ServiceMessage>> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().expand_empty_elements = true;

    let mut builder = TeamcityLogBuilder::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(element) => builder.open_element(ReportNode::from_start(&element)?)?,
            Event::End(element) => {
                builder.close_element(&String::from_utf8_lossy(element.name().as_ref()))?
            }
            Event::Text(text) => builder.character_data(&text.unescape()?)?,
            Event::CData(cdata) => {
                let bytes = cdata.into_inner();
                let data = std::str::from_utf8(&bytes).map_err(|e| {
                    Error::ReportError(format!("Invalid UTF-8 in CDATA section: {e}"))
                })?;
                builder.character_data(data)?;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    let log = builder.finish()?;
    debug!("Converted report into {} service messages", log.len());
    Ok(log)
}

/// Convert the full text of a report
pub fn create_teamcity_log(report: &str) -> Result<Vec<ServiceMessage>> {
    create_teamcity_log_from_reader(report.as_bytes())
}

/// Convert the report stored at `path`
pub fn create_teamcity_log_from_file(path: &Path) -> Result<Vec<ServiceMessage>> {
    debug!("Reading report from {}", path.display());
    let file = File::open(path)?;
    create_teamcity_log_from_reader(BufReader::new(file))
}
