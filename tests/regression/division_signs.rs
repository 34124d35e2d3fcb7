use arbint::BigInt;

#[test]
fn test() {
    let l = BigInt::parse("100000000000000000000").unwrap();
    let s = BigInt::parse("20000000000").unwrap();
    let q = BigInt::parse("5000000000").unwrap();

    assert_eq!(&l / &s, q);
    assert_eq!(-&l / &s, -&q);
    assert_eq!(&l / -&s, -&q);
    assert_eq!(-&l / -&s, q);

    for (x, y) in [(&l, &s), (&s, &l)] {
        for (x, y) in [(x.clone(), y.clone()), (-x, y.clone()), (x.clone(), -y), (-x, -y)] {
            let (q, r) = x.div_rem(&y).unwrap();
            assert_eq!(&q * &y + &r, x);
            assert!(r.is_zero() || r.sign() == x.sign());
        }
    }
}
