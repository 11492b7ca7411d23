//! Per-version flag dialects for the NUnit console runner.
//!
//! Each dialect is a table from flag name to a pure formatting function. The 2.x
//! table is complete; 3.x only lists flags with their own spelling and borrows the
//! rest from 2.x through a syntactic rewrite (`/name:value` becomes `--name=value`).

use crate::config::{OptionValue, Version};

/// Formats one option value into a single command-line argument
pub type Formatter = fn(&OptionValue) -> String;

type FlagTable = &'static [(&'static str, Formatter)];

const V2_FLAGS: FlagTable = &[
    ("run", run),
    ("runlist", runlist),
    ("config", config),
    ("result", result),
    ("noresult", noresult),
    ("output", output),
    ("err", err),
    ("work", work),
    ("labels", labels),
    ("trace", trace),
    ("include", include),
    ("exclude", exclude),
    ("framework", framework),
    ("process", process),
    ("domain", domain),
    ("apartment", apartment),
    ("noshadow", noshadow),
    ("nothread", nothread),
    ("basepath", basepath),
    ("privatebinpath", privatebinpath),
    ("timeout", timeout),
    ("wait", wait),
    ("nologo", nologo),
    ("nodots", nodots),
    ("stoponerror", stoponerror),
    ("cleanup", cleanup),
];

// Every 3.x flag currently goes through the 2.x fallback.
const V3_FLAGS: FlagTable = &[];

/// Default result argument the 3.x runner always receives, so the report stays in
/// the NUnit 2 format the converter understands
pub const V3_DEFAULT_RESULT_ARG: &str = "--result=TestResults.xml;format=nunit2";

fn lookup(table: FlagTable, key: &str) -> Option<Formatter> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, formatter)| *formatter)
}

/// Format `key` for the given dialect, or `None` if the dialect has no such flag
pub fn format_flag(version: Version, key: &str, value: &OptionValue) -> Option<String> {
    match version {
        Version::V2 => lookup(V2_FLAGS, key).map(|format| format(value)),
        Version::V3 => match lookup(V3_FLAGS, key) {
            Some(format) => Some(format(value)),
            None => lookup(V2_FLAGS, key).map(|format| to_v3_syntax(&format(value))),
        },
    }
}

/// Whether the dialect can format `key`, natively or via fallback
pub fn supports(version: Version, key: &str) -> bool {
    match version {
        Version::V2 => lookup(V2_FLAGS, key).is_some(),
        Version::V3 => lookup(V3_FLAGS, key).is_some() || lookup(V2_FLAGS, key).is_some(),
    }
}

/// Rewrite a 2.x flag into 3.x syntax. Only the first `/` and the first `:` are
/// replaced, so values containing either character past that point pass through.
pub fn to_v3_syntax(flag: &str) -> String {
    flag.replacen('/', "--", 1).replacen(':', "=", 1)
}

fn quoted(name: &str, value: &OptionValue) -> String {
    format!("/{name}:\"{}\"", value.as_text())
}

fn bare(name: &str, value: &OptionValue) -> String {
    format!("/{name}:{}", value.as_text())
}

fn joined(name: &str, separator: &str, value: &OptionValue) -> String {
    let values = value.as_list();
    if values.is_empty() {
        return String::new();
    }
    format!("/{name}:\"{}\"", values.join(separator))
}

fn run(value: &OptionValue) -> String {
    format!("/run:\"{}\"", value.as_list().join(","))
}

fn runlist(value: &OptionValue) -> String {
    quoted("runlist", value)
}

fn config(value: &OptionValue) -> String {
    quoted("config", value)
}

fn result(value: &OptionValue) -> String {
    quoted("result", value)
}

fn noresult(_: &OptionValue) -> String {
    "/noresult".to_string()
}

fn output(value: &OptionValue) -> String {
    quoted("output", value)
}

fn err(value: &OptionValue) -> String {
    quoted("err", value)
}

fn work(value: &OptionValue) -> String {
    quoted("work", value)
}

fn labels(_: &OptionValue) -> String {
    "/labels".to_string()
}

fn trace(value: &OptionValue) -> String {
    bare("trace", value)
}

fn include(value: &OptionValue) -> String {
    joined("include", ",", value)
}

fn exclude(value: &OptionValue) -> String {
    joined("exclude", ",", value)
}

fn framework(value: &OptionValue) -> String {
    quoted("framework", value)
}

fn process(value: &OptionValue) -> String {
    bare("process", value)
}

fn domain(value: &OptionValue) -> String {
    bare("domain", value)
}

fn apartment(value: &OptionValue) -> String {
    bare("apartment", value)
}

fn noshadow(_: &OptionValue) -> String {
    "/noshadow".to_string()
}

fn nothread(_: &OptionValue) -> String {
    "/nothread".to_string()
}

fn basepath(value: &OptionValue) -> String {
    quoted("basepath", value)
}

fn privatebinpath(value: &OptionValue) -> String {
    joined("privatebinpath", ";", value)
}

fn timeout(value: &OptionValue) -> String {
    bare("timeout", value)
}

fn wait(_: &OptionValue) -> String {
    "/wait".to_string()
}

fn nologo(_: &OptionValue) -> String {
    "/nologo".to_string()
}

fn nodots(_: &OptionValue) -> String {
    "/nodots".to_string()
}

fn stoponerror(_: &OptionValue) -> String {
    "/stoponerror".to_string()
}

fn cleanup(_: &OptionValue) -> String {
    "/cleanup".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v2(key: &str, value: impl Into<OptionValue>) -> Option<String> {
        format_flag(Version::V2, key, &value.into())
    }

    fn v3(key: &str, value: impl Into<OptionValue>) -> Option<String> {
        format_flag(Version::V3, key, &value.into())
    }

    #[test]
    fn test_list_flags_join() {
        assert_eq!(v2("run", vec!["A.B", "A.C"]).unwrap(), "/run:\"A.B,A.C\"");
        assert_eq!(v2("include", vec!["Fast", "Unit"]).unwrap(), "/include:\"Fast,Unit\"");
        assert_eq!(v2("exclude", vec!["Slow"]).unwrap(), "/exclude:\"Slow\"");
        assert_eq!(
            v2("privatebinpath", vec!["lib", "bin"]).unwrap(),
            "/privatebinpath:\"lib;bin\""
        );
    }

    #[test]
    fn test_empty_list_flags_format_to_empty_string() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(v2("include", empty.clone()).unwrap(), "");
        assert_eq!(v2("exclude", empty.clone()).unwrap(), "");
        assert_eq!(v2("privatebinpath", empty.clone()).unwrap(), "");
        // `run` has no empty-list rule
        assert_eq!(v2("run", empty).unwrap(), "/run:\"\"");
    }

    #[test]
    fn test_scalar_flags_are_quoted() {
        assert_eq!(v2("config", "Release").unwrap(), "/config:\"Release\"");
        assert_eq!(v2("result", "out.xml").unwrap(), "/result:\"out.xml\"");
        assert_eq!(v2("framework", "net-4.0").unwrap(), "/framework:\"net-4.0\"");
        assert_eq!(v2("runlist", "tests.txt").unwrap(), "/runlist:\"tests.txt\"");
    }

    #[test]
    fn test_bare_flags_are_not_quoted() {
        assert_eq!(v2("timeout", 5000u64).unwrap(), "/timeout:5000");
        assert_eq!(v2("process", "Multiple").unwrap(), "/process:Multiple");
        assert_eq!(v2("domain", "None").unwrap(), "/domain:None");
        assert_eq!(v2("apartment", "STA").unwrap(), "/apartment:STA");
        assert_eq!(v2("trace", "Verbose").unwrap(), "/trace:Verbose");
    }

    #[test]
    fn test_presence_flags_ignore_value() {
        for (key, expected) in [
            ("noresult", "/noresult"),
            ("labels", "/labels"),
            ("noshadow", "/noshadow"),
            ("nothread", "/nothread"),
            ("wait", "/wait"),
            ("nologo", "/nologo"),
            ("nodots", "/nodots"),
            ("stoponerror", "/stoponerror"),
            ("cleanup", "/cleanup"),
        ] {
            assert_eq!(v2(key, true).unwrap(), expected);
            assert_eq!(v2(key, false).unwrap(), expected, "{key} must ignore falsy values");
        }
    }

    #[test]
    fn test_unknown_flag_has_no_formatter() {
        assert_eq!(v2("where", "cat == Fast"), None);
        assert_eq!(v3("where", "cat == Fast"), None);
        assert!(!supports(Version::V3, "platform"));
        assert!(supports(Version::V3, "nologo"));
    }

    #[test]
    fn test_v3_falls_back_to_rewritten_v2_flag() {
        assert_eq!(v3("framework", "bar").unwrap(), "--framework=\"bar\"");
        assert_eq!(v3("nologo", true).unwrap(), "--nologo");
        assert_eq!(v3("timeout", 100u64).unwrap(), "--timeout=100");
        assert_eq!(v3("include", Vec::<String>::new()).unwrap(), "");
    }

    #[test]
    fn test_v3_rewrite_touches_first_occurrence_only() {
        assert_eq!(to_v3_syntax("/foo:\"bar\""), "--foo=\"bar\"");
        assert_eq!(v3("work", "C:/build/out").unwrap(), "--work=\"C:/build/out\"");
        assert_eq!(to_v3_syntax("/a:b:c/d"), "--a=b:c/d");
    }
}
