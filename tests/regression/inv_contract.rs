use arbint::BigInt;

#[test]
fn test() {
    assert_eq!(BigInt::from(0xFFFF).inv(), -65536);
    assert_eq!(BigInt::zero().inv(), -1);
    assert_eq!(BigInt::from(0x1234).inv(), -4661);

    // Multi-limb magnitudes follow the same rule in both directions.
    let x = BigInt::parse("0x1234567890abcdef1234567890abcdef1234").unwrap();
    assert_eq!(x.inv(), -(&x + 1i32));
    assert_eq!(x.inv().inv(), x);
}
