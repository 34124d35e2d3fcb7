use arbint::BigInt;

#[test]
fn test() {
    let table = [
        ("f", "15"),
        ("ff", "255"),
        ("fff", "4095"),
        ("ffff", "65535"),
        ("fffff", "1048575"),
        ("ffffff", "16777215"),
        ("fffffff", "268435455"),
        ("ffffffff", "4294967295"),
        ("fffffffff", "68719476735"),
        ("ffffffffff", "1099511627775"),
        ("fffffffffff", "17592186044415"),
        ("ffffffffffff", "281474976710655"),
        ("fffffffffffff", "4503599627370495"),
        ("ffffffffffffff", "72057594037927935"),
        ("fffffffffffffff", "1152921504606846975"),
        ("ffffffffffffffff", "18446744073709551615"),
        ("fffffffffffffffff", "295147905179352825855"),
        ("ffffffffffffffffff", "4722366482869645213695"),
        ("fffffffffffffffffff", "75557863725914323419135"),
        ("ffffffffffffffffffff", "1208925819614629174706175"),
        ("fffffffffffffffffffff", "19342813113834066795298815"),
        ("ffffffffffffffffffffff", "309485009821345068724781055"),
        ("fffffffffffffffffffffff", "4951760157141521099596496895"),
        ("ffffffffffffffffffffffff", "79228162514264337593543950335"),
        ("fffffffffffffffffffffffff", "1267650600228229401496703205375"),
        ("ffffffffffffffffffffffffff", "20282409603651670423947251286015"),
        ("fffffffffffffffffffffffffff", "324518553658426726783156020576255"),
        ("ffffffffffffffffffffffffffff", "5192296858534827628530496329220095"),
        ("fffffffffffffffffffffffffffff", "83076749736557242056487941267521535"),
        ("ffffffffffffffffffffffffffffff", "1329227995784915872903807060280344575"),
        ("fffffffffffffffffffffffffffffff", "21267647932558653966460912964485513215"),
    ];
    for (hex, decimal) in table {
        let x = BigInt::parse_radix(hex, 16).unwrap();
        assert_eq!(x.to_string(), decimal, "parsing {}", hex);
        assert_eq!(x.to_string_radix(16).unwrap(), hex);
        assert_eq!(BigInt::parse(&format!("0x{}", hex)).unwrap(), x);
    }
}
