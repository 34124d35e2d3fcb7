use crate::bigint::BigInt;
use serde_core::ser::{Serialize, Serializer};

/// Serializes as a decimal string, so values outside the range of every
/// native integer survive formats like JSON unchanged.
impl Serialize for BigInt {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
