use nunit_teamcity_core::{Platform, RunnerOptions, Version};

/// Starter configuration written by `init`
pub fn create_starter_config(version: Version, platform: Platform) -> RunnerOptions {
    let options = RunnerOptions::new()
        .with_version(version)
        .with_platform(platform)
        .with_flag("nologo", true);

    match version {
        // 2.x writes TestResult.xml by default; 3.x gets its result flag from the builder
        Version::V2 => options.with_flag("result", "TestResult.xml"),
        Version::V3 => options,
    }
}
