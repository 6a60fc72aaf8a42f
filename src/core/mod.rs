mod args;
mod error;
mod logger;

pub use args::CliArgs;
pub use logger::setup_logging;
pub use error::EntryGateError;
