// src/models.rs
pub mod report;
pub mod verification_result;

pub use report::Report;
pub use verification_result::VerificationResult;
