//! # Critical power
//!
//! Estimates critical power(CP) from two all-out efforts
//! of different duration using the two-point work-time model:
//!
//! ```notrust
//! W = W' + CP x t
//! CP = (P1 x t1 - P2 x t2) / (t1 - t2)
//! ```
//!
//! Where:
//!
//! - W - total work of an effort, approximated as power x time
//! - W' - anaerobic work capacity
//! - P1, P2 - average power of each trial in watts
//! - t1, t2 - duration of each trial in seconds
//!
//! CP is the slope of work against time between the two efforts.
//! Training zones are derived from it as fixed fractions, see [`zones`].
//!
//! Based on the Monod-Scherrer work capacity [model](https://doi.org/10.1080/00140136508930810).

mod zones;

pub use self::zones::*;

/// One timed all-out effort.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trial {
    /// Average power over the effort in watts
    pub power: f64,
    /// Duration of the effort in seconds
    pub time: f64,
}

impl Trial {
    pub const fn new(power: f64, time: f64) -> Self {
        Self { power, time }
    }

    /// Total work of the effort as power x time
    #[inline]
    pub fn work(&self) -> f64 {
        self.power * self.time
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CriticalPowerError {
    /// Equal durations make the model denominator zero
    #[error("trial times are equal, the two-point model is undefined")]
    EqualTrialTimes,
}

/// Critical power from two all-out efforts.
///
/// # Params
/// - `first` - power and time of trial 1
/// - `second` - power and time of trial 2
///
/// Fails only when both trials have the same duration. Any other
/// input produces a plain number, even a physiologically
/// nonsensical one - range checks belong to the caller.
pub fn critical_power(first: Trial, second: Trial) -> Result<f64, CriticalPowerError> {
    if first.time == second.time {
        return Err(CriticalPowerError::EqualTrialTimes);
    }

    Ok((first.work() - second.work()) / (first.time - second.time))
}
