pub mod cli;
pub mod compressor;
pub mod messages;
pub mod runner;

pub use runner::{Console, run, run_with};
