// Resume analysis: upload intake, staging, extraction, parsing, persistence.

pub mod handlers;
pub mod preview;
pub mod staging;
