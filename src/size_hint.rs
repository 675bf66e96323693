//! Arithmetic on **Iterator** *.size_hint()* values.
//!
//! Every adaptor that can say anything about its own length combines its
//! upstream(s)' hints through the helpers here, rather than re-deriving the
//! saturating/checked arithmetic at each call site.

use std::cmp;

/// **SizeHint** is the return type of **Iterator::size_hint()**.
pub type SizeHint = (usize, Option<usize>);

/// Add two size hints (`Concat`, `chain`-style adaptors).
#[inline]
pub fn add(a: SizeHint, b: SizeHint) -> SizeHint {
    let low = a.0.saturating_add(b.0);
    let high = option_both(a.1, b.1).and_then(|(x, y)| x.checked_add(y));
    (low, high)
}

/// Add **x** to a **SizeHint** (`Enumerate`-style adaptors that don't change
/// cardinality).
#[inline]
pub fn add_scalar((mut low, mut hi): SizeHint, x: usize) -> SizeHint {
    low = low.saturating_add(x);
    hi = hi.and_then(|elt| elt.checked_add(x));
    (low, hi)
}

/// Subtract **x** from a **SizeHint**, saturating at zero (`Drop`,
/// `TakeEvery`).
#[inline]
pub fn sub_scalar((mut low, mut hi): SizeHint, x: usize) -> SizeHint {
    low = low.saturating_sub(x);
    hi = hi.map(|elt| elt.saturating_sub(x));
    (low, hi)
}

/// Multiply **SizeHint** correctly (`Product`, `Loop`).
///
/// ```
/// use lazyview::size_hint;
///
/// assert_eq!(size_hint::mul((3, Some(4)), (3, Some(4))),
///            (9, Some(16)));
///
/// assert_eq!(size_hint::mul((3, Some(4)), (usize::MAX, None)),
///            (usize::MAX, None));
///
/// assert_eq!(size_hint::mul((3, None), (0, Some(0))),
///            (0, Some(0)));
/// ```
#[inline]
pub fn mul(a: SizeHint, b: SizeHint) -> SizeHint {
    let low = a.0.checked_mul(b.0).unwrap_or(usize::MAX);
    let hi = match (a.1, b.1) {
        (Some(x), Some(y)) => x.checked_mul(y),
        (Some(0), None) | (None, Some(0)) => Some(0),
        _ => None,
    };

    (low, hi)
}

/// Multiply a **SizeHint** by a scalar (`Loop`).
#[inline]
pub fn mul_scalar((low, hi): SizeHint, x: usize) -> SizeHint {
    (
        low.checked_mul(x).unwrap_or(usize::MAX),
        hi.and_then(|elt| elt.checked_mul(x)),
    )
}

/// Return the maximum of two size hints (`ZipLongest`: longest wins).
#[inline]
pub fn max((a_lower, a_upper): SizeHint, (b_lower, b_upper): SizeHint) -> SizeHint {
    let lower = cmp::max(a_lower, b_lower);
    let upper = option_both(a_upper, b_upper).map(|(x, y)| cmp::max(x, y));
    (lower, upper)
}

/// Return the minimum of two size hints (`Zip`, `Interleave`: shortest wins).
#[inline]
pub fn min((a_lower, a_upper): SizeHint, (b_lower, b_upper): SizeHint) -> SizeHint {
    let lower = cmp::min(a_lower, b_lower);
    let upper = match (a_upper, b_upper) {
        (Some(u1), Some(u2)) => Some(cmp::min(u1, u2)),
        _ => a_upper.or(b_upper),
    };

    (lower, upper)
}

#[inline]
fn option_both<A, B>(a: Option<A>, b: Option<B>) -> Option<(A, B)> {
    match (a, b) {
        (Some(a), Some(b)) => Some((a, b)),
        _ => None,
    }
}
