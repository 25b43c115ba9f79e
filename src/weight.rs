/*!
# Edge Weights

Graphs are generic over their weight type `W: Weight`. The weight domain is fixed by that type
and is either [`WeightKind::Integer`] (all primitive integers up to 64 bits) or
[`WeightKind::Real`] (`f32`, `f64`).

A matrix entry of `W::zero()` encodes the absence of an edge, so every weight stored for an
edge is strictly positive.
*/

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use num::{NumCast, One, ToPrimitive, Zero};

/// The numeric domain of edge weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightKind {
    /// Signed or unsigned integers
    Integer,
    /// Floating point numbers
    Real,
}

impl Display for WeightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightKind::Integer => write!(f, "integer"),
            WeightKind::Real => write!(f, "real"),
        }
    }
}

/// Trait for all types usable as edge weights
pub trait Weight:
    Copy + PartialOrd + Zero + One + ToPrimitive + NumCast + Debug + Display + Send + Sync + 'static
{
    /// The domain this weight type belongs to
    const KIND: WeightKind;

    /// Returns *true* if the value is non-negative (and finite for reals)
    fn is_valid(&self) -> bool;

    /// Returns a bit-pattern identifying the value, used for hashing graph contents
    fn to_bits(&self) -> u64;

    /// Sum of two valid weights; integer sums saturate at the maximum of the type
    fn saturating_sum(self, other: Self) -> Self;

    /// Total order on valid weights
    fn weight_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }

    /// Returns *true* if the value is exactly `0` or `1`
    fn is_unit(&self) -> bool {
        *self == Self::zero() || *self == Self::one()
    }

    /// Returns *true* if the value encodes an edge
    fn is_edge(&self) -> bool {
        *self > Self::zero()
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const KIND: WeightKind = WeightKind::Integer;

                fn is_valid(&self) -> bool {
                    *self >= Self::zero()
                }

                fn to_bits(&self) -> u64 {
                    *self as u64
                }

                fn saturating_sum(self, other: Self) -> Self {
                    self.saturating_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_real_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const KIND: WeightKind = WeightKind::Real;

                fn is_valid(&self) -> bool {
                    self.is_finite() && *self >= 0.0
                }

                fn to_bits(&self) -> u64 {
                    (*self as f64).to_bits()
                }

                fn saturating_sum(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_real_weight!(f32, f64);
