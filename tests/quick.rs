//! Property-based checks that `size_hint`/`len` stay honest across inputs of
//! arbitrary length, in the spirit of the crate's own `tests/quick.rs`
//! coverage of size_hint correctness.
use lazyview::{ops, view};
use quickcheck_macros::quickcheck;

fn size_hint_is_consistent<I: Iterator>(mut it: I) -> bool {
    loop {
        let (lo, hi) = it.size_hint();
        if let Some(hi) = hi {
            if hi < lo {
                return false;
            }
        }
        match it.next() {
            Some(_) => {}
            None => return lo == 0,
        }
    }
}

#[quickcheck]
fn filter_size_hint_is_consistent(data: Vec<i32>) -> bool {
    size_hint_is_consistent(view(data.into_iter()) | ops::filter(|x: &i32| x % 2 == 0))
}

#[quickcheck]
fn map_len_matches_source_len(data: Vec<i32>) -> bool {
    let expected = data.len();
    (view(data.into_iter()) | ops::map(|x| x * 2)).count() == expected
}

#[quickcheck]
fn take_never_yields_more_than_n(data: Vec<i32>, n: usize) -> bool {
    let v: Vec<_> = (view(data.into_iter()) | ops::take(n)).collect();
    v.len() <= n
}

#[quickcheck]
fn chunks_reassemble_to_the_original_sequence(data: Vec<i32>, size: u8) -> bool {
    let size = (size as usize) + 1;
    let reassembled: Vec<i32> = (view(data.clone().into_iter()) | ops::chunks(size))
        .flatten()
        .collect();
    reassembled == data
}

#[quickcheck]
fn dedup_never_has_two_equal_neighbors(data: Vec<i32>) -> bool {
    use lazyview::ViewExt as _;
    let v: Vec<_> = data.into_iter().dedup().collect();
    v.windows(2).all(|w| w[0] != w[1])
}
