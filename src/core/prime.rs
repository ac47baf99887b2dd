use crate::domain::model::PrimalityResult;

/// Trial division by 2 and then odd candidates up to `floor(sqrt(n))`.
///
/// Total over `i64`: zero, one and negatives are not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // d <= n / d  <=>  d * d <= n, without overflow or float rounding.
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

pub fn check(n: i64) -> PrimalityResult {
    PrimalityResult {
        number: n,
        is_prime: is_prime(n),
    }
}
