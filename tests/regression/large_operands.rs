use arbint::BigInt;

const A: &str = "9191291821821972198723892731927412419757607241902412742141904810123913021931";
const B: &str = "121231246717581291824912849128509185124190310741841824712837131738172";

#[test]
fn test() {
    let a = BigInt::parse(A).unwrap();
    let b = BigInt::parse(B).unwrap();

    assert_eq!(
        (&a + &b).to_string(),
        "9191291943053218916305184556840261548266792366092723483983729522961044760103"
    );
    assert_eq!(
        (&a - &b).to_string(),
        "9191291700590725481142600907014563291248422117712102000300080097286781283759"
    );
    assert_eq!(
        (&a * &b).to_string(),
        "1114271766504586738871424632299032567834176034059871342978560190227960452332298253865995506036055166329263498074211029232849112689623243185850132"
    );
    assert_eq!((&a / &b).to_string(), "75816194");
    assert_eq!(
        (&a % &b).to_string(),
        "101819965766955686129307629109600080549778649042399450539859107464563"
    );

    // Operands are left untouched.
    assert_eq!(a.to_string(), A);
    assert_eq!(b.to_string(), B);
}
