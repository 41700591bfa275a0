use core::fmt;

use serde::{Deserialize, Serialize};
use soroban_fixed_point_math::FixedPoint;

use crate::PERCENT_DENOMINATOR;

/// Fixed type with inner type of i128 and fixed denominator 10e9
#[derive(
    Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FixedI128(i128);

impl FixedI128 {
    pub const DENOMINATOR: i128 = 1_000_000_000;
    pub const ZERO: FixedI128 = FixedI128(0);
    pub const ONE: FixedI128 = FixedI128(Self::DENOMINATOR);
    pub const HUNDRED: FixedI128 = FixedI128(100 * Self::DENOMINATOR);

    /// Returns inner value
    pub const fn into_inner(self) -> i128 {
        self.0
    }

    /// Construct FixedI128 from inner value
    pub fn from_inner<T: Into<i128>>(inner: T) -> FixedI128 {
        FixedI128(inner.into())
    }

    /// Construct fixed value from rational
    pub fn from_rational<N: Into<i128>, D: Into<i128>>(nom: N, denom: D) -> Option<FixedI128> {
        Self::DENOMINATOR
            .checked_mul(nom.into())?
            .checked_div(denom.into())
            .map(FixedI128)
    }

    /// Construct fixed value as fraction of integer percentage
    /// percentage expressed as 1% - 1, 100% - 100
    pub fn from_percent<T: Into<i128>>(percent: T) -> Option<FixedI128> {
        Self::from_rational(percent, PERCENT_DENOMINATOR)
    }

    /// Construct fixed from int value
    pub fn from_int<T: Into<i128>>(value: T) -> Option<FixedI128> {
        FixedI128::DENOMINATOR
            .checked_mul(value.into())
            .map(FixedI128)
    }

    /// Construct fixed from token amount expressed in the smallest units,
    /// e.g. 1_500_000 with 6 decimals is 1.5
    pub fn from_amount(amount: u64, decimals: u8) -> Option<FixedI128> {
        let denom = 10i128.checked_pow(decimals.into())?;
        Self::from_rational(amount, denom)
    }

    /// Inverse of [`FixedI128::from_amount`], rounds towards zero
    pub fn to_amount(self, decimals: u8) -> Option<u64> {
        let amount = self.to_precision(decimals.into())?;
        u64::try_from(amount).ok()
    }

    pub fn to_precision(self, precision: u32) -> Option<i128> {
        let prec_denom = 10i128.checked_pow(precision)?;

        self.0
            .checked_mul(prec_denom)?
            .checked_div(Self::DENOMINATOR)
    }

    /// Lossy conversion, intended for display
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::DENOMINATOR as f64
    }

    /// Multiplication of two fixed values
    pub fn checked_mul(self, value: FixedI128) -> Option<FixedI128> {
        self.0
            .fixed_mul_floor(value.0, Self::DENOMINATOR)
            .map(FixedI128)
    }

    /// Division of two FixedI128 values
    pub fn checked_div(self, value: FixedI128) -> Option<FixedI128> {
        if value.is_zero() {
            return None;
        }

        self.0
            .fixed_div_floor(value.0, Self::DENOMINATOR)
            .map(FixedI128)
    }

    /// Sum of two fixed values
    pub fn checked_add(self, value: FixedI128) -> Option<FixedI128> {
        self.0.checked_add(value.0).map(FixedI128)
    }

    /// Subtraction of two fixed values
    pub fn checked_sub(self, other: FixedI128) -> Option<FixedI128> {
        self.0.checked_sub(other.0).map(FixedI128)
    }

    /// Returns true if self is negative, false - when positive or zero
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    /// Returns true if self is positive, false - when negative or zero
    pub fn is_positive(self) -> bool {
        self.0.is_positive()
    }

    /// Returns true if self is zero
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns min value
    pub fn min(self, other: FixedI128) -> FixedI128 {
        if self.0.lt(&other.0) {
            self
        } else {
            other
        }
    }
}

impl fmt::Display for FixedI128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let denom = Self::DENOMINATOR.unsigned_abs();

        write!(f, "{}{}.{:09}", sign, abs / denom, abs % denom)
    }
}
