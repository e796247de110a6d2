pub mod config;
pub mod error;
pub mod payload;
pub mod signature;
pub mod client;

pub use client::{run, Receipt, SubmissionClient};
pub use config::Config;
pub use error::SubmitError;
pub use payload::Submission;
