//! The balanced-brightness constraint set.
//!
//! A [`BalanceRule`] pins the sum of a generated color's three channels to
//! `mean * 3` while keeping every channel inside `[min, max]`. Colors drawn
//! under the same rule differ in hue but sit at roughly the same perceived
//! brightness, which is what keeps a randomly colored mesh looking like one
//! artwork instead of confetti.
//!
//! Construction is the validation gate: a `BalanceRule` that exists is one
//! the sampler provably converges under, so sampling itself never fails.

use thiserror::Error;

/// A rejected balance configuration.
///
/// All variants are programming/configuration defects; none are retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// `min` exceeds `max`; the channel window contains no values.
    #[error("channel window is empty: min {min} > max {max}")]
    EmptyRange {
        /// Lower channel bound.
        min: u8,
        /// Upper channel bound.
        max: u8,
    },

    /// The target mean lies outside the channel window.
    #[error("mean {mean} outside channel window [{min}, {max}]")]
    MeanOutOfRange {
        /// Target per-channel mean.
        mean: u8,
        /// Lower channel bound.
        min: u8,
        /// Upper channel bound.
        max: u8,
    },

    /// A zero nudge step can never move the derived channel into range.
    #[error("nudge step must be positive")]
    ZeroStep,

    /// One repair stride spans more than the whole channel window, so the
    /// derived channel could jump over it forever.
    #[error("nudge step {step} too coarse for channel window [{min}, {max}]")]
    StepTooCoarse {
        /// Nudge step.
        step: u8,
        /// Lower channel bound.
        min: u8,
        /// Upper channel bound.
        max: u8,
    },

    /// The mean sits so close to a window end that a repair pass could push
    /// one of the drawn channels out of the window.
    #[error("mean {mean} too close to the edge of window [{min}, {max}] for step {step}")]
    MeanTooSkewed {
        /// Target per-channel mean.
        mean: u8,
        /// Lower channel bound.
        min: u8,
        /// Upper channel bound.
        max: u8,
        /// Nudge step.
        step: u8,
    },
}

/// Constraints for balanced color sampling: channel window, target mean,
/// and the nudge step used to repair the derived channel.
///
/// Fields are private; [`BalanceRule::new`] is the only way to build a
/// custom rule and rejects every configuration the sampler could not
/// honor. The two shipped presets are known-valid constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceRule {
    min: u8,
    max: u8,
    mean: u8,
    step: u8,
}

impl BalanceRule {
    /// Muted channel window, mid brightness.
    pub const CLASSIC: Self = Self {
        min: 20,
        max: 220,
        mean: 150,
        step: 10,
    };

    /// Brighter channel window, higher mean.
    pub const VIVID: Self = Self {
        min: 41,
        max: 240,
        mean: 162,
        step: 10,
    };

    /// Build a rule from raw constraints.
    ///
    /// # Errors
    ///
    /// Rejects windows with `min > max`, means outside the window, a zero
    /// step, a step whose repair stride (`2 * step`) could jump over the
    /// window, and means close enough to a window end that repairing the
    /// derived channel would drag a drawn channel out of the window
    /// (`mean * 3` must lie in `[2*min + max + step, 2*max + min - step]`).
    pub const fn new(min: u8, max: u8, mean: u8, step: u8) -> Result<Self, BalanceError> {
        if min > max {
            return Err(BalanceError::EmptyRange { min, max });
        }
        if mean < min || mean > max {
            return Err(BalanceError::MeanOutOfRange { mean, min, max });
        }
        if step == 0 {
            return Err(BalanceError::ZeroStep);
        }
        let span = max as i32 - min as i32;
        if 2 * step as i32 > span + 1 {
            return Err(BalanceError::StepTooCoarse { step, min, max });
        }
        let target = 3 * mean as i32;
        let lo = 2 * min as i32 + max as i32 + step as i32;
        let hi = 2 * max as i32 + min as i32 - step as i32;
        if target < lo || target > hi {
            return Err(BalanceError::MeanTooSkewed {
                mean,
                min,
                max,
                step,
            });
        }
        Ok(Self {
            min,
            max,
            mean,
            step,
        })
    }

    /// Lower channel bound.
    #[inline]
    #[must_use]
    pub const fn min(self) -> u8 {
        self.min
    }

    /// Upper channel bound.
    #[inline]
    #[must_use]
    pub const fn max(self) -> u8 {
        self.max
    }

    /// Target per-channel mean; generated colors sum to `mean * 3`.
    #[inline]
    #[must_use]
    pub const fn mean(self) -> u8 {
        self.mean
    }

    /// Step by which the two drawn channels are nudged during repair.
    #[inline]
    #[must_use]
    pub const fn step(self) -> u8 {
        self.step
    }

    /// The channel sum every color under this rule must have.
    #[inline]
    #[must_use]
    pub const fn target_sum(self) -> u16 {
        self.mean as u16 * 3
    }
}

impl Default for BalanceRule {
    fn default() -> Self {
        Self::VIVID
    }
}
