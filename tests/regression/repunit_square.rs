use arbint::{BigInt, OpStats};

#[test]
fn test() {
    let x = BigInt::parse(&"1".repeat(1024)).unwrap();
    let mut stats = OpStats::default();
    let product = x.mul_with_stats(&x, &mut stats);
    assert_eq!(product.to_string().len(), 2047);
    assert!(stats.splits > 0);

    // The schoolbook path agrees digit for digit: 111...1 squared is the
    // digit sequence 1, 2, ..., carried.
    let small = BigInt::parse(&"1".repeat(9)).unwrap();
    assert_eq!((&small * &small).to_string(), "12345678987654321");
}
