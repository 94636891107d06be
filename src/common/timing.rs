// src/common/timing.rs

use core::time::Duration;

/// Step between availability polls while waiting on a requested byte.
pub const POLL_STEP: Duration = Duration::from_millis(1);

/// Ceiling on the alert-response handshake: the latched interrupt byte must
/// arrive within this window or the clear attempt fails.
pub const CLEAR_INTERRUPT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Allowance for a granted measurement byte to land in the receive path.
/// Data reads complete within a bus transaction, so this only has to cover
/// transport buffering, not an integration period.
pub const DATA_BYTE_TIMEOUT: Duration = Duration::from_millis(10);

/// Worst-case RSET tolerance headroom applied to the computed refresh time.
pub const RSET_TOLERANCE_FACTOR: f32 = 1.1;
