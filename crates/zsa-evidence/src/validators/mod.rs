//! Per-type claim validators
//!
//! Each validator is a pure function from a claim plus evidence to one
//! [`ValidationCheck`](crate::ValidationCheck). Missing evidence always
//! yields `unable_to_verify`, never an error.

pub mod citation;
pub mod consistency;
pub mod dependency;
pub mod extension;
pub mod false_positive;
pub mod file_existence;
pub mod general;

pub use citation::validate_citation_claim;
pub use consistency::validate_cross_source_consistency;
pub use dependency::validate_dependency_claim;
pub use extension::validate_extension_claim;
pub use false_positive::detect_false_positive;
pub use file_existence::validate_file_existence;
pub use general::validate_general_claim;
