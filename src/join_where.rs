//! Key-matched inner join (spec §4.13).

/// Inner-joins two sources on a derived key: every left item is paired with
/// every right item whose key compares equal, in left-then-right order
/// (spec §4.13). The right side is buffered and sorted by key up front, so a
/// binary search locates the first candidate match for each left item in
/// `O(log n)` instead of a full right-side scan per left item; duplicate
/// keys on the right are then walked forward from that point.
///
/// The left item is cloned once per match because a single left item can
/// legitimately be yielded more than once (once per matching right item).
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct JoinWhere<L: Iterator, R, KL, KR, K> {
    left: L,
    right_sorted: Vec<(K, R)>,
    key_left: KL,
    key_right: KR,
    current_left: Option<<L as Iterator>::Item>,
    cursor: usize,
}

impl<L, R, KL, KR, K> JoinWhere<L, R, KL, KR, K>
where
    L: Iterator,
    KL: FnMut(&L::Item) -> K,
    KR: FnMut(&R) -> K,
    K: Ord,
{
    /// Create a new `JoinWhere` adaptor, matching `left` against `right` on
    /// the keys produced by `key_left`/`key_right`.
    pub fn new<RI>(left: L, right: RI, mut key_right: KR, key_left: KL) -> Self
    where
        RI: IntoIterator<Item = R>,
    {
        let mut right_sorted: Vec<(K, R)> = right
            .into_iter()
            .map(|r| (key_right(&r), r))
            .collect();
        right_sorted.sort_by(|a, b| a.0.cmp(&b.0));
        JoinWhere {
            left,
            right_sorted,
            key_left,
            key_right,
            current_left: None,
            cursor: 0,
        }
    }
}

impl<L, R, KL, KR, K> Iterator for JoinWhere<L, R, KL, KR, K>
where
    L: Iterator,
    L::Item: Clone,
    R: Clone,
    KL: FnMut(&L::Item) -> K,
    KR: FnMut(&R) -> K,
    K: Ord,
{
    type Item = (L::Item, R);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(left_item) = &self.current_left {
                if self.cursor < self.right_sorted.len() {
                    let key = (self.key_left)(left_item);
                    let (right_key, right_item) = &self.right_sorted[self.cursor];
                    if *right_key == key {
                        let pair = (left_item.clone(), right_item.clone());
                        self.cursor += 1;
                        return Some(pair);
                    }
                }
                self.current_left = None;
                self.cursor = 0;
                continue;
            }

            let next_left = self.left.next()?;
            let key = (self.key_left)(&next_left);
            let start = self
                .right_sorted
                .partition_point(|(k, _)| *k < key);
            self.current_left = Some(next_left);
            self.cursor = start;
        }
    }
}
