use crate::bigint::{BigInt, Sign};
use crate::error::{Error, Result};
use crate::math::{from_u128, to_u128};

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(n: $ty) -> Self {
                    BigInt::from_parts(false, from_u128(n as u128))
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(n: $ty) -> Self {
                    BigInt::from_parts(n < 0, from_u128((n as i128).unsigned_abs()))
                }
            }
        )*
    };
}

from_unsigned! {
    u8 u16 u32 u64 u128 usize
}

from_signed! {
    i8 i16 i32 i64 i128 isize
}

impl BigInt {
    /// The magnitude as a `u128`, if it fits.
    fn magnitude_u128(&self) -> Result<u128> {
        to_u128(self.magnitude()).ok_or_else(Error::out_of_range)
    }

    fn to_i128(&self) -> Result<i128> {
        let m = tri!(self.magnitude_u128());
        if self.is_negative() {
            // i128::MIN has a magnitude one past i128::MAX.
            0i128
                .checked_sub_unsigned(m)
                .ok_or_else(Error::out_of_range)
        } else {
            i128::try_from(m).map_err(|_| Error::out_of_range())
        }
    }

    fn to_u128(&self) -> Result<u128> {
        if self.is_negative() {
            return Err(Error::out_of_range());
        }
        self.magnitude_u128()
    }
}

macro_rules! try_into_native {
    ($($ty:ident)*, $conversion:ident) => {
        $(
            impl<'a> TryFrom<&'a BigInt> for $ty {
                type Error = Error;

                fn try_from(value: &BigInt) -> Result<$ty> {
                    let n = tri!(value.$conversion());
                    $ty::try_from(n).map_err(|_| Error::out_of_range())
                }
            }

            impl TryFrom<BigInt> for $ty {
                type Error = Error;

                fn try_from(value: BigInt) -> Result<$ty> {
                    $ty::try_from(&value)
                }
            }
        )*
    };
}

try_into_native!(i8 i16 i32 i64 i128 isize, to_i128);
try_into_native!(u8 u16 u32 u64 u128 usize, to_u128);

impl From<Sign> for BigInt {
    /// -1, 0 or 1.
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => BigInt::from(-1),
            Sign::Zero => BigInt::zero(),
            Sign::Positive => BigInt::from(1),
        }
    }
}

#[cfg(feature = "accelerated")]
mod num {
    use super::*;

    fn to_num_sign(sign: Sign) -> num_bigint::Sign {
        match sign {
            Sign::Negative => num_bigint::Sign::Minus,
            Sign::Zero => num_bigint::Sign::NoSign,
            Sign::Positive => num_bigint::Sign::Plus,
        }
    }

    fn from_num_sign(sign: num_bigint::Sign) -> Sign {
        match sign {
            num_bigint::Sign::Minus => Sign::Negative,
            num_bigint::Sign::NoSign => Sign::Zero,
            num_bigint::Sign::Plus => Sign::Positive,
        }
    }

    impl<'a> From<&'a BigInt> for num_bigint::BigInt {
        fn from(value: &BigInt) -> Self {
            let (sign, digits) = value.to_u32_digits();
            num_bigint::BigInt::from_slice(to_num_sign(sign), &digits)
        }
    }

    impl From<BigInt> for num_bigint::BigInt {
        fn from(value: BigInt) -> Self {
            num_bigint::BigInt::from(&value)
        }
    }

    impl<'a> From<&'a num_bigint::BigInt> for BigInt {
        fn from(value: &num_bigint::BigInt) -> Self {
            let (sign, digits) = value.to_u32_digits();
            BigInt::from_slice(from_num_sign(sign), &digits)
        }
    }

    impl From<num_bigint::BigInt> for BigInt {
        fn from(value: num_bigint::BigInt) -> Self {
            BigInt::from(&value)
        }
    }
}
