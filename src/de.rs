use crate::bigint::BigInt;
use serde_core::de::{self, Deserialize, Deserializer, Visitor};
use std::fmt;

/// Deserializes from a string literal, with the same prefix detection as
/// [`BigInt::parse`], or from any native integer.
impl<'de> Deserialize<'de> for BigInt {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string containing an integer")
            }

            #[inline]
            fn visit_i64<E>(self, value: i64) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            #[inline]
            fn visit_u64<E>(self, value: u64) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            #[inline]
            fn visit_i128<E>(self, value: i128) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            #[inline]
            fn visit_u128<E>(self, value: u128) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                BigInt::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(BigIntVisitor)
    }
}
