#[macro_use]
extern crate tracing;

pub mod cli;
mod error;
mod event;
pub mod handlers;
pub mod lambda;
mod serve;
pub mod telemetry;

pub use error::*;
pub use event::*;
pub use serve::*;
