use std::sync::atomic::{AtomicU32, Ordering};

use log::debug;

use crate::Error;

/// Precision in bits used for high-precision arithmetic if nothing else is specified
pub const DEFAULT_PREC: u32 = 256;

static DEFAULT: AtomicU32 = AtomicU32::new(DEFAULT_PREC);

/// The current process-wide default precision in bits
pub fn default_prec() -> u32 {
    DEFAULT.load(Ordering::Relaxed)
}

/// Change the process-wide default precision
///
/// Only affects values constructed afterwards. Returns the previous
/// default.
pub fn set_default_prec(bits: u32) -> Result<u32, Error> {
    let bits = check_prec(bits)?;
    let old = DEFAULT.swap(bits, Ordering::Relaxed);
    debug!("Default precision changed from {old} to {bits} bits");
    Ok(old)
}

/// Check that `rug` supports floats with `bits` bits of precision
pub fn check_prec(bits: u32) -> Result<u32, Error> {
    if (rug::float::prec_min()..=rug::float::prec_max()).contains(&bits) {
        Ok(bits)
    } else {
        Err(Error::InvalidPrecision(bits))
    }
}
