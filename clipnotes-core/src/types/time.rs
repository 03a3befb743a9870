//! Rational tick durations for exact clip timing
//!
//! A bar is 512 ticks. Nested groups divide their slot by arity, so a triplet
//! inside a sixteenth lands on a fraction of a tick; keeping durations as
//! rationals means the pieces of a slot always add back up to the slot.

use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, Zero};

/// Exact duration in ticks
pub type Ticks = Ratio<i64>;

/// Ticks in one 4/4 bar
pub const TICKS_PER_BAR: i64 = 512;

/// Create Ticks from a whole tick count
#[inline]
pub fn ticks(n: i64) -> Ticks {
    Ratio::from_integer(n)
}

/// Create Ticks from a ratio n/d
#[inline]
pub fn ticks_ratio(n: i64, d: i64) -> Ticks {
    Ratio::new(n, d)
}

/// Sum a sequence of durations exactly, or `None` if an intermediate value
/// no longer fits in an `i64` ratio.
pub fn sum<I: IntoIterator<Item = Ticks>>(durations: I) -> Option<Ticks> {
    durations
        .into_iter()
        .try_fold(Ticks::zero(), |acc, d| acc.checked_add(&d))
}

/// Start offset of each duration laid end to end, plus the end of the last.
/// `None` on overflow.
pub fn offsets<I: IntoIterator<Item = Ticks>>(durations: I) -> Option<(Vec<Ticks>, Ticks)> {
    let durations = durations.into_iter();
    let mut starts = Vec::with_capacity(durations.size_hint().0);
    let mut end = Ticks::zero();
    for d in durations {
        starts.push(end);
        end = end.checked_add(&d)?;
    }
    Some((starts, end))
}

/// One of `parts` equal pieces of `t`. `None` on overflow or zero parts.
pub fn split(t: Ticks, parts: usize) -> Option<Ticks> {
    let parts = i64::try_from(parts).ok().filter(|n| *n > 0)?;
    t.checked_div(&Ticks::from_integer(parts))
}

/// Render ticks as `n` or `n/d`
pub fn format_ticks(t: Ticks) -> String {
    if t.is_integer() {
        t.numer().to_string()
    } else {
        format!("{}/{}", t.numer(), t.denom())
    }
}
