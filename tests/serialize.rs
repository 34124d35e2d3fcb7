use arbint::BigInt;

#[test]
fn test_serialize_as_string() {
    let x = BigInt::parse("-123456789012345678901234567890").unwrap();
    assert_eq!(
        serde_json::to_string(&x).unwrap(),
        "\"-123456789012345678901234567890\""
    );
    assert_eq!(serde_json::to_string(&BigInt::zero()).unwrap(), "\"0\"");
}

#[test]
fn test_deserialize() {
    let x: BigInt = serde_json::from_str("\"-123456789012345678901234567890\"").unwrap();
    assert_eq!(x, BigInt::parse("-123456789012345678901234567890").unwrap());

    let x: BigInt = serde_json::from_str("\"0xff\"").unwrap();
    assert_eq!(x, 255);

    let x: BigInt = serde_json::from_str("-42").unwrap();
    assert_eq!(x, -42);

    let x: BigInt = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(x, u64::MAX);

    let xs: Vec<BigInt> = serde_json::from_str("[1, \"2\", -3]").unwrap();
    assert_eq!(xs, [BigInt::from(1), BigInt::from(2), BigInt::from(-3)]);
}

#[test]
fn test_deserialize_errors() {
    let err = serde_json::from_str::<BigInt>("\"12x\"").unwrap_err();
    assert!(err.to_string().contains("invalid digit 'x'"), "{}", err);
    assert!(serde_json::from_str::<BigInt>("1.5").is_err());
    assert!(serde_json::from_str::<BigInt>("null").is_err());
}

#[test]
fn test_roundtrip() {
    let x = BigInt::from(3).pow(500).unwrap();
    let json = serde_json::to_string(&x).unwrap();
    assert_eq!(serde_json::from_str::<BigInt>(&json).unwrap(), x);
}
