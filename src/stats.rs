/// Work counters collected by [`BigInt::mul_with_stats`] and
/// [`BigInt::pow_with_stats`].
///
/// The counters describe the algorithm, not the machine: they are identical
/// across runs and across limb widths only when the operands span the same
/// number of limbs, so compare them within one build.
///
/// [`BigInt::mul_with_stats`]: crate::BigInt::mul_with_stats
/// [`BigInt::pow_with_stats`]: crate::BigInt::pow_with_stats
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OpStats {
    /// Limb products computed by the schoolbook inner loop, or squaring
    /// steps taken by `pow`.
    pub iterations: u64,
    /// Big-integer multiplications performed by `pow`.
    pub multiplications: u64,
    /// Times the Karatsuba strategy split its operands in halves.
    pub splits: u64,
}

impl OpStats {
    /// Reset every counter to zero.
    pub fn clear(&mut self) {
        *self = OpStats::default();
    }
}
