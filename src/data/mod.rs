/// Example tables and discrete value utilities
pub mod dataset;
/// Per-feature value domains
pub mod domain;
