pub mod harness;
pub mod probe;
pub mod results;
