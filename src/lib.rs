//! Lazy, composable range views.
//!
//! `lazyview` adapts any [`Iterator`] into a pipeline of lazily-evaluated
//! views — filter, map, zip, flatten, chunk, split, join and more — composed
//! either as ordinary method calls, through [`Pipe::pipe`], or with the
//! literal `|` operator via [`view`]:
//!
//! ```
//! use lazyview::{view, ops};
//!
//! let result: Vec<i32> = (view(1..=5) | ops::filter(|x: &i32| x % 2 == 0) | ops::map(|x| x * 3))
//!     .collect();
//! assert_eq!(result, vec![6, 12]);
//! ```
//!
//! Every adaptor is implemented directly against [`Iterator`] /
//! [`DoubleEndedIterator`] / [`ExactSizeIterator`] rather than a bespoke
//! capability trait: those three traits already are Rust's forward /
//! bidirectional / random-access category system, so an adaptor that
//! forwards `ExactSizeIterator` is exactly the "random-access capable"
//! adaptor a C++ range library has to synthesize by hand.
//!
//! Terminal consumption goes through [`to`], a thin wrapper over
//! [`FromIterator`]/`.collect()` — every standard container already
//! dispatches its own construction strategy from the source's capabilities,
//! which is what a capability-dispatched `to<Container>` is asking for.

pub mod adaptors;
pub mod chunks;
pub mod format;
pub mod free;
pub mod join_where;
pub mod ops;
pub mod pipe;
pub mod size_hint;
pub mod split;
pub mod to_container;
pub mod zip;

pub use adaptors::{
    Concat, Dedup, DropAdaptor, Enumerate, Filter, Flatten, Interleave, Loop, Map, Product,
    Rotate, Slice, Take, TakeEvery, TakeWhile, Unique, UniqueBy,
};
pub use chunks::{Chunks, ChunksIf};
pub use format::{new_format, new_format_default, Format};
pub use free::NPOS;
pub use join_where::JoinWhere;
pub use pipe::{view, Adaptor, Pipe, View};
pub use split::{Split, SplitOn, SplitOnSeq};
pub use to_container::{collect_custom, to, to_array, CollectCustom};
pub use zip::{Zip2, ZipLongest2};

/// Extension methods for adaptors whose name does not already collide with
/// a `std::Iterator` method of the same name (`filter`/`map`/`zip`/`take`/
/// `skip`/`take_while`/`skip_while`/`enumerate`/`flatten`/`chain` all keep
/// their std meaning and are reached through [`View`]/[`Pipe`]/`ops`
/// instead, never through this trait). `join_where` has no extension-method
/// form at all: its two sides derive different key types from different
/// item types, which does not fit a single-`Self` trait method — construct
/// [`JoinWhere`] directly.
pub trait ViewExt: Iterator {
    /// Round-robins this view with `others`, stopping at the shortest.
    fn interleave_with<J>(self, others: J) -> Interleave<Self>
    where
        Self: Sized,
        J: IntoIterator<Item = Self>,
    {
        let mut slots = vec![self];
        slots.extend(others);
        Interleave::new(slots)
    }

    /// Pairs this view's elements with those of `other`, continuing until
    /// both are exhausted.
    fn zip_longest<J>(self, other: J) -> ZipLongest2<Self, J::IntoIter>
    where
        Self: Sized,
        J: IntoIterator,
    {
        ZipLongest2::new(self, other.into_iter())
    }

    /// The cartesian product of this view with `other`, in row-major order.
    fn cartesian_product<J>(self, other: J) -> Product<Self, J::IntoIter>
    where
        Self: Sized + Clone,
        J: IntoIterator,
        J::IntoIter: Clone,
    {
        Product::new(self, other.into_iter())
    }

    /// Groups this view into fixed-size chunks (the last chunk may be
    /// shorter).
    fn chunks(self, size: usize) -> Chunks<Self>
    where
        Self: Sized,
    {
        Chunks::new(self, size)
    }

    /// Splits this view wherever `is_boundary(prev, cur)` holds.
    fn chunks_if<P>(self, is_boundary: P) -> ChunksIf<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        ChunksIf::new(self, is_boundary)
    }

    /// Splits this view wherever `is_delimiter` holds, dropping the
    /// delimiter.
    fn split_on<D>(self, is_delimiter: D) -> SplitOn<Self, D>
    where
        Self: Sized,
        D: FnMut(&Self::Item) -> bool,
    {
        SplitOn::new(self, is_delimiter)
    }

    /// Splits this view wherever a contiguous run of elements equals
    /// `delimiter`, dropping the matched run.
    fn split_on_seq(self, delimiter: Vec<Self::Item>) -> SplitOnSeq<Self>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        SplitOnSeq::new(self, delimiter)
    }

    /// Restricts this view to the half-open range `[i, j)`.
    ///
    /// # Panics
    /// Panics unless `i <= j <= self.len()`.
    fn slice(self, i: usize, j: usize) -> Slice<Self>
    where
        Self: Sized + ExactSizeIterator,
    {
        Slice::new(self, i, j)
    }

    /// Yields every `stride`-th element, starting at `start`.
    fn take_every(self, stride: usize, start: usize) -> TakeEvery<Self>
    where
        Self: Sized,
    {
        TakeEvery::new(self, stride, start)
    }

    /// Moves the first `k` elements to the back.
    fn rotate(self, k: usize) -> Rotate<Self>
    where
        Self: Sized + ExactSizeIterator + Clone,
    {
        Rotate::new(self, k)
    }

    /// Repeats this view `n` times in sequence.
    fn loop_n(self, n: usize) -> Loop<Self>
    where
        Self: Sized + Clone,
    {
        Loop::new(self, n)
    }

    /// Concatenates this view with `others`, in order.
    fn concat_with<J>(self, others: J) -> Concat<Self>
    where
        Self: Sized,
        J: IntoIterator<Item = Self>,
    {
        let mut slots = vec![self];
        slots.extend(others);
        Concat::new(slots)
    }

    /// Drops consecutive duplicate elements, keeping the first of each run.
    fn dedup(self) -> Dedup<Self>
    where
        Self: Sized,
        Self::Item: Clone + PartialEq,
    {
        Dedup::new(self)
    }

    /// Drops elements whose `f`-derived key has already been seen anywhere
    /// earlier in the view.
    fn unique_by<V, F>(self, f: F) -> UniqueBy<Self, V, F>
    where
        Self: Sized,
        V: Eq + std::hash::Hash,
        F: FnMut(&Self::Item) -> V,
    {
        UniqueBy::new(self, f)
    }

    /// Drops elements equal to one already seen anywhere earlier in the
    /// view.
    fn unique(self) -> Unique<Self>
    where
        Self: Sized,
        Self::Item: Eq + std::hash::Hash + Clone,
    {
        UniqueBy::by_value(self)
    }

    /// Formats every element, separated by `sep`, using each element's own
    /// `Display` impl.
    #[allow(clippy::type_complexity)]
    fn format(
        self,
        sep: &str,
    ) -> Format<'_, Self, fn(Self::Item, &mut dyn FnMut(&dyn std::fmt::Display) -> std::fmt::Result) -> std::fmt::Result>
    where
        Self: Sized,
        Self::Item: std::fmt::Display,
    {
        new_format_default(self, sep)
    }
}

impl<I: Iterator + ?Sized> ViewExt for I {}
