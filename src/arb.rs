use crate::bigint::{BigInt, Sign};
use quickcheck::{Arbitrary, Gen};

impl Arbitrary for BigInt {
    fn arbitrary(g: &mut Gen) -> Self {
        // Half the values fit a native integer; the rest span up to
        // `g.size()` 32-bit digits, enough to reach the Karatsuba path.
        if bool::arbitrary(g) {
            return BigInt::from(i64::arbitrary(g));
        }
        let sign = if bool::arbitrary(g) {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let digits: Vec<u32> = Arbitrary::arbitrary(g);
        BigInt::from_slice(sign, &digits)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let (sign, digits) = self.to_u32_digits();
        Box::new(digits.shrink().map(move |digits| BigInt::from_slice(sign, &digits)))
    }
}
