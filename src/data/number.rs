//! # Number types
//!
//! Supply, demand, allocated amounts and unit costs are all nonnegative integers. Rather than
//! fixing a single width, the data structures and algorithms are generic over any unsigned
//! primitive integer.
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::str::FromStr;

use num_traits::{PrimInt, Unsigned};

/// Amount of goods, or a cost per unit of goods.
///
/// Nonnegativity is guaranteed by the type, overflow is not: sums and products should be computed
/// with the checked operations that `PrimInt` provides.
pub trait Quantity: PrimInt + Unsigned + FromStr + Sum + Display + Debug + Default {
    /// Sum a sequence of values, `None` if the result doesn't fit.
    fn checked_sum<'a, I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        values.into_iter().try_fold(Self::zero(), |total, &value| total.checked_add(&value))
    }
}

impl<T> Quantity for T
where
    T: PrimInt + Unsigned + FromStr + Sum + Display + Debug + Default,
{
}
