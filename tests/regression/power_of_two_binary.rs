use arbint::BigInt;

#[test]
fn test() {
    for k in [15usize, 62, 128] {
        let one = BigInt::from(1);
        let power = BigInt::from(2).pow(k as i64).unwrap();
        let product = &one * &power;
        let expected = format!("1{}", "0".repeat(k));
        assert_eq!(product.to_string_radix(2).unwrap(), expected);
        assert_eq!(product, one << k);
    }
}
