//! Path cost arithmetic.

use std::fmt::Debug;
use std::ops::Add;

/// An accumulated path cost.
///
/// Costs must be totally ordered and additive with an identity `ZERO`.
/// Edge costs handed to the search must never be below `ZERO`; signed types
/// are accepted only so callers don't have to convert.
pub trait Cost: Copy + Ord + Add<Output = Self> + Debug {
    const ZERO: Self;
}

macro_rules! impl_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// A cost with a secondary key that only breaks ties.
///
/// Compared lexicographically and added component-wise, so the search still
/// minimises `primary` first. Use it when a puzzle wants one particular path
/// among several optimal ones (e.g. fewest turns).
///
/// ```
/// use puzzle_solutions::utils::search::{Cost, Tiebreak};
///
/// let a = Tiebreak(10u32, 3u32);
/// let b = Tiebreak(10u32, 1u32);
/// assert!(b < a);
/// assert_eq!(a + b, Tiebreak(20, 4));
/// assert_eq!(Tiebreak::<u32, u32>::ZERO, Tiebreak(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tiebreak<C, T>(pub C, pub T);

impl<C: Add<Output = C>, T: Add<Output = T>> Add for Tiebreak<C, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Tiebreak(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl<C: Cost, T: Cost> Cost for Tiebreak<C, T> {
    const ZERO: Self = Tiebreak(C::ZERO, T::ZERO);
}
