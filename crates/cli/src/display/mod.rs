pub mod invocation_breakdown;

pub use invocation_breakdown::print_invocation_breakdown;
