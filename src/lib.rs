pub mod changes;
pub mod cli;
pub mod coverage;
pub mod matcher;
pub mod report;
pub mod types;
pub mod utils;

pub use changes::ChangedFiles;
pub use coverage::CoverageIndex;
pub use report::Reporter;
pub use types::*;
