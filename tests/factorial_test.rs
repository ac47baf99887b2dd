use small_numerics::{factorial, is_prime, multiply, CalcError, DigitSequence, Strategy};

const FACTORIAL_25: &str = "15511210043330985984000000";
const FACTORIAL_30: &str = "265252859812191058636308480000000";
const FACTORIAL_100: &str = "93326215443944152681699238856266700490715968264381621468592963895217599993229915608941463976156518286253697920827223758251185210916864000000000000000000000000";

#[test]
fn test_known_factorials() {
    assert_eq!(factorial(0).unwrap().digits, "1");
    assert_eq!(factorial(1).unwrap().digits, "1");
    assert_eq!(factorial(5).unwrap().digits, "120");
    assert_eq!(factorial(20).unwrap().digits, "2432902008176640000");
    assert_eq!(factorial(21).unwrap().digits, "51090942171709440000");
    assert_eq!(factorial(25).unwrap().digits, FACTORIAL_25);
    assert_eq!(factorial(30).unwrap().digits, FACTORIAL_30);
    assert_eq!(factorial(100).unwrap().digits, FACTORIAL_100);
}

#[test]
fn test_factorial_1000() {
    let result = factorial(1000).unwrap();
    assert_eq!(result.strategy, Strategy::ArbitraryPrecision);
    assert_eq!(result.digits.len(), 2568);
    assert!(result.digits.starts_with("402387260077"));

    let trailing_zeros = result.digits.chars().rev().take_while(|&c| c == '0').count();
    assert_eq!(trailing_zeros, 249);
}

#[test]
fn test_engine_has_no_built_in_ceiling() {
    let result = factorial(1200).unwrap();
    assert!(result.digits.len() > 2568);
}

#[test]
fn test_results_are_canonical_and_consistent() {
    let mut previous = DigitSequence::one();
    for n in 0..=120i64 {
        let digits = factorial(n).unwrap().digits;
        assert!(!digits.starts_with('0'), "leading zero in {}!", n);

        if n >= 1 {
            // n! == (n-1)! * n
            previous = &previous * &DigitSequence::from(n as u64);
        }
        assert_eq!(digits, previous.to_string(), "n = {}", n);
    }
}

#[test]
fn test_factorial_is_idempotent() {
    let first = factorial(250).unwrap();
    let second = factorial(250).unwrap();
    assert_eq!(first.digits, second.digits);
}

#[test]
fn test_negative_factorial_is_typed_error() {
    let err = factorial(-1).unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput { value: -1 }));
    assert_eq!(err.status_code(), 400);
}

#[test]
fn test_multiply_properties() {
    assert_eq!(multiply("0", FACTORIAL_100).unwrap(), "0");
    assert_eq!(multiply(FACTORIAL_25, "1").unwrap(), FACTORIAL_25);
    assert_eq!(
        multiply(FACTORIAL_25, FACTORIAL_30).unwrap(),
        multiply(FACTORIAL_30, FACTORIAL_25).unwrap()
    );
    // 30! = 25! * 26 * 27 * 28 * 29 * 30
    assert_eq!(multiply(FACTORIAL_25, "17100720").unwrap(), FACTORIAL_30);
    assert!(matches!(
        multiply("12 3", "4"),
        Err(CalcError::InvalidDigitSequence { .. })
    ));
}

#[test]
fn test_primality_properties() {
    for n in [0, 1, 4, 100] {
        assert!(!is_prime(n), "{} should not be prime", n);
    }
    for n in [2, 3, 97, 7919] {
        assert!(is_prime(n), "{} should be prime", n);
    }
    for k in 2..200i64 {
        assert!(!is_prime(k * k), "{} is a perfect square", k * k);
    }
}
