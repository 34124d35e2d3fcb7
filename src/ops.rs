//! Operator overloads.
//!
//! Every binary operator is implemented for all four combinations of owned
//! and borrowed operands, plus native integers on the right-hand side. `/`
//! and `%` panic on a zero divisor like the native integer operators do; use
//! [`BigInt::div_rem`], [`BigInt::checked_div`] or [`BigInt::checked_rem`] to
//! get an error instead.

use crate::bigint::BigInt;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

fn div_or_panic(x: &BigInt, y: &BigInt) -> BigInt {
    match x.checked_div(y) {
        Ok(q) => q,
        Err(err) => panic!("{}", err),
    }
}

fn rem_or_panic(x: &BigInt, y: &BigInt) -> BigInt {
    match x.checked_rem(y) {
        Ok(r) => r,
        Err(err) => panic!("{}", err),
    }
}

macro_rules! forward_binop {
    ($($imp:ident $method:ident $assign:ident $assign_method:ident => $f:path;)*) => {
        $(
            impl<'a, 'b> $imp<&'b BigInt> for &'a BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, other: &BigInt) -> BigInt {
                    $f(self, other)
                }
            }

            impl<'a> $imp<&'a BigInt> for BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, other: &BigInt) -> BigInt {
                    $f(&self, other)
                }
            }

            impl<'a> $imp<BigInt> for &'a BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, other: BigInt) -> BigInt {
                    $f(self, &other)
                }
            }

            impl $imp<BigInt> for BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, other: BigInt) -> BigInt {
                    $f(&self, &other)
                }
            }

            impl<'a> $assign<&'a BigInt> for BigInt {
                #[inline]
                fn $assign_method(&mut self, other: &BigInt) {
                    *self = $f(self, other);
                }
            }

            impl $assign<BigInt> for BigInt {
                #[inline]
                fn $assign_method(&mut self, other: BigInt) {
                    *self = $f(self, &other);
                }
            }
        )*
    };
}

forward_binop! {
    Add add AddAssign add_assign => BigInt::add_ref;
    Sub sub SubAssign sub_assign => BigInt::sub_ref;
    Mul mul MulAssign mul_assign => BigInt::mul_ref;
    Div div DivAssign div_assign => div_or_panic;
    Rem rem RemAssign rem_assign => rem_or_panic;
    BitAnd bitand BitAndAssign bitand_assign => BigInt::and;
    BitOr bitor BitOrAssign bitor_assign => BigInt::or;
    BitXor bitxor BitXorAssign bitxor_assign => BigInt::xor;
}

macro_rules! primitive_binop {
    (@one $imp:ident $method:ident $assign:ident $assign_method:ident [$($ty:ty)*]) => {
        $(
            impl $imp<$ty> for BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, other: $ty) -> BigInt {
                    $imp::$method(&self, &BigInt::from(other))
                }
            }

            impl<'a> $imp<$ty> for &'a BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, other: $ty) -> BigInt {
                    $imp::$method(self, &BigInt::from(other))
                }
            }

            impl $assign<$ty> for BigInt {
                #[inline]
                fn $assign_method(&mut self, other: $ty) {
                    *self = $imp::$method(&*self, &BigInt::from(other));
                }
            }
        )*
    };
    ($($imp:ident $method:ident $assign:ident $assign_method:ident),* => $ty:tt) => {
        $(primitive_binop!(@one $imp $method $assign $assign_method $ty);)*
    };
}

primitive_binop! {
    Add add AddAssign add_assign,
    Sub sub SubAssign sub_assign,
    Mul mul MulAssign mul_assign,
    Div div DivAssign div_assign,
    Rem rem RemAssign rem_assign
    => [i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize]
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negated()
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.clone().negated()
    }
}

/// Two's-complement inversion, `-(x + 1)`.
impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        self.inv()
    }
}

impl<'a> Not for &'a BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        self.inv()
    }
}

// SHIFTS

// A negative count shifts the other way.
fn shift_left(x: &BigInt, bits: i128) -> BigInt {
    let n = usize::try_from(bits.unsigned_abs()).unwrap_or(usize::MAX);
    if bits >= 0 {
        BigInt::shl(x, n)
    } else {
        BigInt::shr(x, n)
    }
}

macro_rules! shift_ops {
    ($($ty:ident)*) => {
        $(
            impl<'a> Shl<$ty> for &'a BigInt {
                type Output = BigInt;

                #[inline]
                fn shl(self, bits: $ty) -> BigInt {
                    shift_left(self, bits as i128)
                }
            }

            impl Shl<$ty> for BigInt {
                type Output = BigInt;

                #[inline]
                fn shl(self, bits: $ty) -> BigInt {
                    shift_left(&self, bits as i128)
                }
            }

            impl<'a> Shr<$ty> for &'a BigInt {
                type Output = BigInt;

                #[inline]
                fn shr(self, bits: $ty) -> BigInt {
                    shift_left(self, -(bits as i128))
                }
            }

            impl Shr<$ty> for BigInt {
                type Output = BigInt;

                #[inline]
                fn shr(self, bits: $ty) -> BigInt {
                    shift_left(&self, -(bits as i128))
                }
            }

            impl ShlAssign<$ty> for BigInt {
                #[inline]
                fn shl_assign(&mut self, bits: $ty) {
                    *self = shift_left(self, bits as i128);
                }
            }

            impl ShrAssign<$ty> for BigInt {
                #[inline]
                fn shr_assign(&mut self, bits: $ty) {
                    *self = shift_left(self, -(bits as i128));
                }
            }
        )*
    };
}

shift_ops! {
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
}

// FOLDS

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

// COMPARISON WITH NATIVE INTEGERS

macro_rules! partialeq_numeric {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for BigInt {
                fn eq(&self, other: &$ty) -> bool {
                    *self == BigInt::from(*other)
                }
            }

            impl PartialEq<BigInt> for $ty {
                fn eq(&self, other: &BigInt) -> bool {
                    BigInt::from(*self) == *other
                }
            }

            impl<'a> PartialEq<$ty> for &'a BigInt {
                fn eq(&self, other: &$ty) -> bool {
                    **self == BigInt::from(*other)
                }
            }
        )*
    };
}

partialeq_numeric! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
}
