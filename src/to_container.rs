//! The `to<Container>` terminal (spec §4.14).
//!
//! Every standard container already implements `FromIterator`, and
//! `Iterator::collect` already dispatches on that capability the same way
//! spec §4.14 asks `to<Container>` to: pick the cheapest construction path
//! the target type and the source iterator's capabilities allow (e.g. a
//! single allocation when `size_hint` is exact). `to` is a thin, explicitly
//! named wrapper around `collect` for call sites that read better as
//! `to::<Vec<_>>(view)` than `view.collect::<Vec<_>>()`.

/// Consumes `iter`, materializing it into `C` via `FromIterator`.
pub fn to<C, I>(iter: I) -> C
where
    I: IntoIterator,
    C: FromIterator<I::Item>,
{
    iter.into_iter().collect()
}

/// Consumes `iter` into a fixed-size array of exactly `N` elements.
///
/// # Panics
/// Panics if `iter` does not yield exactly `N` elements — spec §4.14 treats
/// a length mismatch against a fixed-capacity target as a contract
/// violation, not a recoverable error.
pub fn to_array<T, I, const N: usize>(iter: I) -> [T; N]
where
    I: IntoIterator<Item = T>,
{
    let v: Vec<T> = iter.into_iter().collect();
    let len = v.len();
    v.try_into()
        .unwrap_or_else(|_| panic!("to_array: expected exactly {N} elements, got {len}"))
}

/// Escape hatch for target types that cannot implement `FromIterator`
/// directly (e.g. a type defined in another crate). Implement this instead
/// and call [`collect_custom`].
pub trait CollectCustom<Item> {
    /// Build `Self` from the given items.
    fn collect_custom<I: IntoIterator<Item = Item>>(iter: I) -> Self;
}

/// Consumes `iter` into any type implementing [`CollectCustom`].
pub fn collect_custom<C, I>(iter: I) -> C
where
    I: IntoIterator,
    C: CollectCustom<I::Item>,
{
    C::collect_custom(iter)
}
