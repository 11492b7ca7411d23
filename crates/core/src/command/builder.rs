use crate::{
    command::{RunnerInvocation, dialect},
    config::{RunnerOptions, Version},
};
use std::path::MAIN_SEPARATOR;
use tracing::debug;

/// Builds runner invocations for one set of options
pub struct CommandBuilder {
    options: RunnerOptions,
}

impl CommandBuilder {
    pub fn new(options: RunnerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    pub fn build_command<S: AsRef<str>>(&self, assemblies: &[S]) -> RunnerInvocation {
        let options = &self.options;
        let executable = self.resolve_executable();
        debug!(
            "Building {} command for {} with {} assemblies",
            options.version,
            options.platform,
            assemblies.len()
        );

        let mut args: Vec<String> = assemblies
            .iter()
            .map(|assembly| format!("\"{}\"", assembly.as_ref()))
            .collect();

        // Appended even when `result` or `noresult` is also configured
        if options.version == Version::V3 {
            args.push(dialect::V3_DEFAULT_RESULT_ARG.to_string());
        }

        for (key, value) in &options.flags {
            match dialect::format_flag(options.version, key, value) {
                Some(arg) => args.push(arg),
                None => debug!("No {} formatter for option '{}', skipping", options.version, key),
            }
        }

        debug!("Built command: {} {:?}", executable, args);
        RunnerInvocation::new(executable, args)
    }

    /// Executable name for the configured version and platform, joined onto the
    /// install directory if one is set
    pub fn resolve_executable(&self) -> String {
        let name = self.options.version.executable(self.options.platform);
        let joined = match self.options.path.as_deref() {
            Some(dir) if !dir.is_empty() => {
                let dir = dir.trim_end_matches(['/', '\\']);
                format!("{dir}/{name}")
            }
            _ => name.to_string(),
        };
        normalize_separators(&joined)
    }
}

/// Build the runner invocation for `assemblies` under `options`
pub fn build_command<S: AsRef<str>>(assemblies: &[S], options: &RunnerOptions) -> RunnerInvocation {
    CommandBuilder::new(options.clone()).build_command(assemblies)
}

fn normalize_separators(path: &str) -> String {
    path.chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Platform;

    fn native(path: &str) -> String {
        path.replace('/', &MAIN_SEPARATOR.to_string())
    }

    #[test]
    fn test_executable_names() {
        for (version, platform, expected) in [
            (Version::V2, Platform::X86, "nunit-console-x86.exe"),
            (Version::V2, Platform::X64, "nunit-console.exe"),
            (Version::V3, Platform::X86, "nunit3-console.exe"),
            (Version::V3, Platform::X64, "nunit3-console.exe"),
        ] {
            let options = RunnerOptions::new()
                .with_version(version)
                .with_platform(platform);
            let invocation = build_command(&["Tests.dll"], &options);
            assert_eq!(invocation.executable, expected);
        }
    }

    #[test]
    fn test_defaults_to_v3_x64() {
        let invocation = build_command(&["Tests.dll"], &RunnerOptions::default());
        assert_eq!(invocation.executable, "nunit3-console.exe");
        assert_eq!(
            invocation.args,
            vec![
                "\"Tests.dll\"".to_string(),
                "--result=TestResults.xml;format=nunit2".to_string(),
            ]
        );
    }

    #[test]
    fn test_path_is_joined_and_separators_normalized() {
        let options = RunnerOptions::new().with_path("tools\\NUnit/bin\\");
        let invocation = build_command(&["a.dll"], &options);
        assert_eq!(
            invocation.executable,
            native("tools/NUnit/bin/nunit3-console.exe")
        );

        let options = RunnerOptions::new()
            .with_version(Version::V2)
            .with_platform(Platform::X86)
            .with_path("C:\\Program Files\\NUnit 2.6\\bin");
        let invocation = build_command(&["a.dll"], &options);
        assert_eq!(
            invocation.executable,
            native("C:/Program Files/NUnit 2.6/bin/nunit-console-x86.exe")
        );
    }

    #[test]
    fn test_empty_path_means_no_directory() {
        let options = RunnerOptions::new().with_path("");
        let invocation = build_command(&["a.dll"], &options);
        assert_eq!(invocation.executable, "nunit3-console.exe");
    }

    #[test]
    fn test_assemblies_are_quoted_in_order() {
        let options = RunnerOptions::new().with_version(Version::V2);
        let invocation = build_command(&["b/Second.dll", "a/First.dll"], &options);
        assert_eq!(
            invocation.args,
            vec!["\"b/Second.dll\"".to_string(), "\"a/First.dll\"".to_string()]
        );
    }

    #[test]
    fn test_v2_flags_follow_configuration_order() {
        let options = RunnerOptions::new()
            .with_version(Version::V2)
            .with_flag("nologo", true)
            .with_flag("run", vec!["A.B", "A.C"])
            .with_flag("timeout", 500u64)
            .with_flag("framework", "net-4.0");
        let invocation = build_command(&["Tests.dll"], &options);
        assert_eq!(
            invocation.args,
            vec![
                "\"Tests.dll\"",
                "/nologo",
                "/run:\"A.B,A.C\"",
                "/timeout:500",
                "/framework:\"net-4.0\"",
            ]
        );
    }

    #[test]
    fn test_v3_default_result_present_once_after_assemblies() {
        let options = RunnerOptions::new()
            .with_flag("result", "custom.xml")
            .with_flag("noresult", true);
        let invocation = build_command(&["A.dll", "B.dll"], &options);

        assert_eq!(invocation.args[2], dialect::V3_DEFAULT_RESULT_ARG);
        let defaults = invocation
            .args
            .iter()
            .filter(|arg| arg.as_str() == dialect::V3_DEFAULT_RESULT_ARG)
            .count();
        assert_eq!(defaults, 1);
        // Caller-supplied result flags are still emitted after the default
        assert_eq!(invocation.args[3], "--result=\"custom.xml\"");
        assert_eq!(invocation.args[4], "--noresult");
    }

    #[test]
    fn test_v2_has_no_default_result() {
        let options = RunnerOptions::new().with_version(Version::V2);
        let invocation = build_command(&["A.dll"], &options);
        assert_eq!(invocation.args, vec!["\"A.dll\""]);
    }

    #[test]
    fn test_empty_list_flags_leave_empty_arguments() {
        let options = RunnerOptions::new()
            .with_version(Version::V2)
            .with_flag("include", Vec::<String>::new())
            .with_flag("nologo", true)
            .with_flag("privatebinpath", Vec::<String>::new());
        let invocation = build_command(&["A.dll"], &options);
        // Empty strings are kept as literal argument tokens
        assert_eq!(invocation.args, vec!["\"A.dll\"", "", "/nologo", ""]);
    }

    #[test]
    fn test_v3_uses_rewritten_v2_flags() {
        let options = RunnerOptions::new()
            .with_flag("framework", "bar")
            .with_flag("exclude", Vec::<String>::new())
            .with_flag("labels", false);
        let invocation = build_command(&["A.dll"], &options);
        assert_eq!(
            invocation.args,
            vec![
                "\"A.dll\"",
                "--result=TestResults.xml;format=nunit2",
                "--framework=\"bar\"",
                "",
                "--labels",
            ]
        );
    }

    #[test]
    fn test_unknown_and_reserved_keys_are_skipped() {
        let options = RunnerOptions::new()
            .with_version(Version::V2)
            .with_flag("where", "cat == Fast")
            .with_flag("verbose", true);
        let invocation = build_command(&["A.dll"], &options);
        assert_eq!(invocation.args, vec!["\"A.dll\""]);
    }

    #[test]
    fn test_builder_resolves_executable_without_assemblies() {
        let builder = CommandBuilder::new(RunnerOptions::new().with_platform(Platform::X86));
        assert_eq!(builder.resolve_executable(), "nunit3-console.exe");
        let invocation = builder.build_command::<&str>(&[]);
        assert_eq!(invocation.args, vec!["--result=TestResults.xml;format=nunit2"]);
    }
}
