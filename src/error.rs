//! Crate-wide error and result types.

use derive_more::{Display, Error, From};

/// Errors raised while bringing up panel devices.
///
/// All variants are fatal: they occur during initialization, before the
/// dispatch loop starts, and the firmware halts on them rather than running
/// with a missing device. Range violations (digit values, pixel indices)
/// are programming errors guarded by assertions, not `Error` variants.
#[derive(Debug, Display, Error, From, defmt::Format)]
#[non_exhaustive]
pub enum Error {
    /// A background device task could not be spawned.
    #[display("failed to spawn device task: {_0:?}")]
    TaskSpawn(embassy_executor::SpawnError),

    /// The WS2812 program did not fit in the PIO instruction memory.
    #[display("failed to load the WS2812 program into the PIO")]
    PioProgramLoad,
}

/// Result type with this crate's [`Error`] as the default error.
pub type Result<T, E = Error> = core::result::Result<T, E>;
