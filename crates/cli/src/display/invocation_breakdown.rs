use nunit_teamcity_core::RunnerInvocation;

/// Print a readable breakdown of `invocation` to stderr.
///
/// `assembly_count` tells how many leading arguments are assemblies.
pub fn print_invocation_breakdown(invocation: &RunnerInvocation, assembly_count: usize) {
    eprintln!("   🔧 Command breakdown:");
    eprintln!("      • executable: {}", invocation.executable);

    let (assemblies, flags) = invocation
        .args
        .split_at(assembly_count.min(invocation.args.len()));

    for assembly in assemblies {
        eprintln!("      • assembly: {}", assembly);
    }

    for flag in flags {
        if flag.is_empty() {
            eprintln!("      • flag: (empty argument)");
        } else {
            eprintln!("      • flag: {}", flag);
        }
    }
}
