pub mod perf;
pub mod priority;
pub mod selector;
