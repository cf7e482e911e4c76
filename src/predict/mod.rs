//! Disease-prediction gateway: one request, one child process.
//!
//! The actual model lives in an external script. This module only owns the
//! bridge: serialize the symptom list, hand it to the program, and map the
//! three possible endings (clean exit, non-zero exit, failed launch) onto
//! HTTP responses.

pub mod routes;
pub mod runner;
pub mod types;

pub use routes::PredictState;
pub use runner::{CommandRunner, InvokeError, ProcessOutcome, ProgramRunner};
