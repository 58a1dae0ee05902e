pub mod cobertura;
pub mod index;

// Re-export main functions
pub use cobertura::{parse_cobertura, record_from_attributes};
pub use index::CoverageIndex;
