// ABOUTME: Shared behaviour for scalar measurement value types
// ABOUTME: Generates exact comparison, validity checks and arithmetic for f64 newtypes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Every quantity stores one canonical `f64` in a private tuple field.
//!
//! Equality, ordering and hashing follow the IEEE total order with all NaN
//! payloads folded into one value, so `NaN == NaN`, `-0.0 < 0.0` and NaN sorts
//! above positive infinity. The named comparison methods (`greater_than`, ...)
//! use plain float comparison and are therefore false whenever NaN is involved.

use std::cmp::Ordering;

/// Fold every NaN into the same bit pattern
#[inline]
#[must_use]
pub(crate) fn canonical(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN
    } else {
        value
    }
}

/// Total order over canonicalized values
#[inline]
#[must_use]
pub(crate) fn total_cmp(a: f64, b: f64) -> Ordering {
    canonical(a).total_cmp(&canonical(b))
}

/// Implements comparison, hashing and validity predicates for a quantity newtype
macro_rules! impl_quantity_compare {
    ($name:ident) => {
        impl $name {
            /// True iff the canonical value is exactly zero
            #[must_use]
            pub fn is_zero(&self) -> bool {
                self.0 == 0.0
            }

            /// True iff the canonical value is NaN or infinite
            #[must_use]
            pub fn is_invalid(&self) -> bool {
                self.0.is_nan() || self.0.is_infinite()
            }

            /// Strictly greater than `other`
            #[must_use]
            pub fn greater_than(&self, other: &Self) -> bool {
                self.0 > other.0
            }

            /// Greater than or equal to `other`
            #[must_use]
            pub fn greater_or_equal_than(&self, other: &Self) -> bool {
                self.0 >= other.0
            }

            /// Strictly less than `other`; false at equality
            #[must_use]
            pub fn less_than(&self, other: &Self) -> bool {
                self.0 < other.0
            }

            /// Less than or equal to `other`
            #[must_use]
            pub fn less_or_equal_than(&self, other: &Self) -> bool {
                self.0 <= other.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::models::quantity::total_cmp(self.0, other.0)
                    == ::std::cmp::Ordering::Equal
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                $crate::models::quantity::total_cmp(self.0, other.0)
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $crate::models::quantity::canonical(self.0)
                    .to_bits()
                    .hash(state);
            }
        }
    };
}

/// Implements additive arithmetic and scaling for a quantity newtype
macro_rules! impl_quantity_arithmetic {
    ($name:ident) => {
        impl $name {
            /// Sum of two quantities
            #[must_use]
            pub fn plus(self, other: Self) -> Self {
                Self(self.0 + other.0)
            }

            /// Difference of two quantities
            #[must_use]
            pub fn minus(self, other: Self) -> Self {
                Self(self.0 - other.0)
            }

            /// Quantity scaled by a dimensionless factor
            #[must_use]
            pub fn multiplied_by(self, factor: f64) -> Self {
                Self(factor * self.0)
            }

            /// Dimensionless ratio; a zero divisor yields infinity or NaN
            #[must_use]
            pub fn divided_by(self, divisor: Self) -> f64 {
                self.0 / divisor.0
            }
        }

        impl ::std::ops::Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                self.plus(rhs)
            }
        }

        impl ::std::ops::Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                self.minus(rhs)
            }
        }

        impl ::std::ops::Mul<f64> for $name {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self {
                self.multiplied_by(rhs)
            }
        }

        impl ::std::ops::Div for $name {
            type Output = f64;

            fn div(self, rhs: Self) -> f64 {
                self.divided_by(rhs)
            }
        }

        impl ::std::iter::Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self(0.0), Self::plus)
            }
        }
    };
}

pub(crate) use impl_quantity_arithmetic;
pub(crate) use impl_quantity_compare;
