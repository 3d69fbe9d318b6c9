use tracing_subscriber::FmtSubscriber;

use crate::config::Log;
use crate::error::CommonError;
use crate::error::Result;

/// Installs a global fmt subscriber writing to stdout at the configured level.
///
/// Applications embedding the SDK may install their own subscriber instead; the
/// SDK itself only emits events through `tracing` macros.
pub fn init(log: &Log) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        // all spans/events with a level higher than the configured one are dropped
        .with_max_level(log.level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| CommonError::Logging(err.to_string()))
}
