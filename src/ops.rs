//! Partial-application constructors for the pipe operator (spec §4.15).
//!
//! Each function here returns a small closure object that bundles an
//! adaptor's bound arguments. The object implements [`crate::pipe::Adaptor`]
//! for whatever upstream type it is compatible with, so it can be applied
//! either through `.pipe(...)` or through `view(source) | ops::thing(...)`.
//! The direct, non-piped call form of each adaptor lives on the adaptor's own
//! type as `Thing::new(upstream, args…)`.
use crate::adaptors::{
    Concat, DropAdaptor, DropWhile, Filter, Flatten, Interleave, Loop, Map, Product, Rotate,
    Slice, Take, TakeEvery, TakeWhile,
};
use crate::chunks::{Chunks, ChunksIf};
use crate::pipe::Adaptor;
use crate::split::{SplitOn, SplitOnSeq};
use crate::zip::{Zip2, ZipLongest2};

/// Closure produced by [`filter`].
#[derive(Clone, Debug)]
pub struct FilterOp<P>(P);

/// Partial application of [`Filter`]: `view(src) | ops::filter(pred)`.
pub fn filter<P>(predicate: P) -> FilterOp<P> {
    FilterOp(predicate)
}

impl<I, P> Adaptor<I> for FilterOp<P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = Filter<I, P>;
    fn apply(self, upstream: I) -> Filter<I, P> {
        Filter::new(upstream, self.0)
    }
}

/// Closure produced by [`map`].
#[derive(Clone, Debug)]
pub struct MapOp<F>(F);

/// Partial application of [`Map`].
pub fn map<F>(f: F) -> MapOp<F> {
    MapOp(f)
}

impl<I, F, B> Adaptor<I> for MapOp<F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Output = Map<I, F>;
    fn apply(self, upstream: I) -> Map<I, F> {
        Map::new(upstream, self.0)
    }
}

/// Closure produced by [`take`].
#[derive(Clone, Copy, Debug)]
pub struct TakeOp(usize);

/// Partial application of [`Take`].
pub fn take(n: usize) -> TakeOp {
    TakeOp(n)
}

impl<I: Iterator> Adaptor<I> for TakeOp {
    type Output = Take<I>;
    fn apply(self, upstream: I) -> Take<I> {
        Take::new(upstream, self.0)
    }
}

/// Closure produced by [`drop`].
#[derive(Clone, Copy, Debug)]
pub struct DropOp(usize);

/// Partial application of `DropAdaptor`.
pub fn drop(n: usize) -> DropOp {
    DropOp(n)
}

impl<I: Iterator> Adaptor<I> for DropOp {
    type Output = DropAdaptor<I>;
    fn apply(self, upstream: I) -> DropAdaptor<I> {
        DropAdaptor::new(upstream, self.0)
    }
}

/// Closure produced by [`take_while`].
#[derive(Clone, Debug)]
pub struct TakeWhileOp<P>(P);

/// Partial application of [`TakeWhile`].
pub fn take_while<P>(predicate: P) -> TakeWhileOp<P> {
    TakeWhileOp(predicate)
}

impl<I, P> Adaptor<I> for TakeWhileOp<P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = TakeWhile<I, P>;
    fn apply(self, upstream: I) -> TakeWhile<I, P> {
        TakeWhile::new(upstream, self.0)
    }
}

/// Closure produced by [`drop_while`].
#[derive(Clone, Debug)]
pub struct DropWhileOp<P>(P);

/// Partial application of [`DropWhile`].
pub fn drop_while<P>(predicate: P) -> DropWhileOp<P> {
    DropWhileOp(predicate)
}

impl<I, P> Adaptor<I> for DropWhileOp<P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = DropWhile<I, P>;
    fn apply(self, upstream: I) -> DropWhile<I, P> {
        DropWhile::new(upstream, self.0)
    }
}

/// Closure produced by [`zip_with`].
#[derive(Clone, Debug)]
pub struct ZipOp<J>(J);

/// Partial application of [`Zip2`]: zips the piped view with `other`.
pub fn zip_with<J: IntoIterator>(other: J) -> ZipOp<J::IntoIter> {
    ZipOp(other.into_iter())
}

impl<I: Iterator, J: Iterator> Adaptor<I> for ZipOp<J> {
    type Output = Zip2<I, J>;
    fn apply(self, upstream: I) -> Zip2<I, J> {
        Zip2::new(upstream, self.0)
    }
}

/// Closure produced by [`zip_longest_with`].
#[derive(Clone, Debug)]
pub struct ZipLongestOp<J>(J);

/// Partial application of [`ZipLongest2`].
pub fn zip_longest_with<J: IntoIterator>(other: J) -> ZipLongestOp<J::IntoIter> {
    ZipLongestOp(other.into_iter())
}

impl<I: Iterator, J: Iterator> Adaptor<I> for ZipLongestOp<J> {
    type Output = ZipLongest2<I, J>;
    fn apply(self, upstream: I) -> ZipLongest2<I, J> {
        ZipLongest2::new(upstream, self.0)
    }
}

/// Closure produced by [`interleave_with`].
#[derive(Clone, Debug)]
pub struct InterleaveOp<T>(Vec<T>);

/// Partial application of [`Interleave`]: interleaves the piped view as slot
/// 0 with the given additional sources.
pub fn interleave_with<I, J>(others: J) -> InterleaveOp<I>
where
    J: IntoIterator<Item = I>,
{
    InterleaveOp(others.into_iter().collect())
}

impl<I: Iterator> Adaptor<I> for InterleaveOp<I> {
    type Output = Interleave<I>;
    fn apply(self, upstream: I) -> Interleave<I> {
        let mut slots = Vec::with_capacity(self.0.len() + 1);
        slots.push(upstream);
        slots.extend(self.0);
        Interleave::new(slots)
    }
}

/// Closure produced by [`cartesian_product_with`].
#[derive(Clone, Debug)]
pub struct ProductOp<J>(J);

/// Partial application of [`Product`].
pub fn cartesian_product_with<J: IntoIterator>(other: J) -> ProductOp<J::IntoIter>
where
    J::IntoIter: Clone,
{
    ProductOp(other.into_iter())
}

impl<I, J> Adaptor<I> for ProductOp<J>
where
    I: Iterator + Clone,
    J: Iterator + Clone,
{
    type Output = Product<I, J>;
    fn apply(self, upstream: I) -> Product<I, J> {
        Product::new(upstream, self.0)
    }
}

/// Closure produced by [`flatten`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FlattenOp;

/// Partial application of [`Flatten`]. Stack `ops::flatten()` calls (or pipe
/// the result of one into another) to flatten more than one dimension.
pub fn flatten() -> FlattenOp {
    FlattenOp
}

impl<I> Adaptor<I> for FlattenOp
where
    I: Iterator,
    I::Item: IntoIterator,
{
    type Output = Flatten<I>;
    fn apply(self, upstream: I) -> Flatten<I> {
        Flatten::new(upstream)
    }
}

/// Closure produced by [`chunks`].
#[derive(Clone, Copy, Debug)]
pub struct ChunksOp(usize);

/// Partial application of [`Chunks`].
pub fn chunks(size: usize) -> ChunksOp {
    ChunksOp(size)
}

impl<I: Iterator> Adaptor<I> for ChunksOp {
    type Output = Chunks<I>;
    fn apply(self, upstream: I) -> Chunks<I> {
        Chunks::new(upstream, self.0)
    }
}

/// Closure produced by [`chunks_if`].
#[derive(Clone, Debug)]
pub struct ChunksIfOp<P>(P);

/// Partial application of [`ChunksIf`].
pub fn chunks_if<P>(predicate: P) -> ChunksIfOp<P> {
    ChunksIfOp(predicate)
}

impl<I, P> Adaptor<I> for ChunksIfOp<P>
where
    I: Iterator,
    P: FnMut(&I::Item, &I::Item) -> bool,
{
    type Output = ChunksIf<I, P>;
    fn apply(self, upstream: I) -> ChunksIf<I, P> {
        ChunksIf::new(upstream, self.0)
    }
}

/// Closure produced by [`split_on`].
#[derive(Clone, Debug)]
pub struct SplitOnOp<D>(D);

/// Partial application of [`SplitOn`].
pub fn split_on<D>(is_delimiter: D) -> SplitOnOp<D> {
    SplitOnOp(is_delimiter)
}

impl<I, D> Adaptor<I> for SplitOnOp<D>
where
    I: Iterator,
    D: FnMut(&I::Item) -> bool,
{
    type Output = SplitOn<I, D>;
    fn apply(self, upstream: I) -> SplitOn<I, D> {
        SplitOn::new(upstream, self.0)
    }
}

/// Closure produced by [`split_on_seq`].
#[derive(Clone, Debug)]
pub struct SplitOnSeqOp<T>(Vec<T>);

/// Partial application of [`SplitOnSeq`].
pub fn split_on_seq<T>(delimiter: Vec<T>) -> SplitOnSeqOp<T> {
    SplitOnSeqOp(delimiter)
}

impl<I> Adaptor<I> for SplitOnSeqOp<I::Item>
where
    I: Iterator,
    I::Item: PartialEq,
{
    type Output = SplitOnSeq<I>;
    fn apply(self, upstream: I) -> SplitOnSeq<I> {
        SplitOnSeq::new(upstream, self.0)
    }
}

/// Closure produced by [`take_every`].
#[derive(Clone, Copy, Debug)]
pub struct TakeEveryOp {
    stride: usize,
    start: usize,
}

/// Partial application of [`TakeEvery`].
pub fn take_every(stride: usize, start: usize) -> TakeEveryOp {
    TakeEveryOp { stride, start }
}

impl<I: Iterator> Adaptor<I> for TakeEveryOp {
    type Output = TakeEvery<I>;
    fn apply(self, upstream: I) -> TakeEvery<I> {
        TakeEvery::new(upstream, self.stride, self.start)
    }
}

/// Closure produced by [`rotate`].
#[derive(Clone, Copy, Debug)]
pub struct RotateOp(usize);

/// Partial application of [`Rotate`].
pub fn rotate(k: usize) -> RotateOp {
    RotateOp(k)
}

impl<I> Adaptor<I> for RotateOp
where
    I: ExactSizeIterator + Clone,
{
    type Output = Rotate<I>;
    fn apply(self, upstream: I) -> Rotate<I> {
        Rotate::new(upstream, self.0)
    }
}

/// Closure produced by [`slice`].
#[derive(Clone, Copy, Debug)]
pub struct SliceOp {
    i: usize,
    j: usize,
}

/// Partial application of [`Slice`].
pub fn slice(i: usize, j: usize) -> SliceOp {
    SliceOp { i, j }
}

impl<I> Adaptor<I> for SliceOp
where
    I: ExactSizeIterator,
{
    type Output = Slice<I>;
    fn apply(self, upstream: I) -> Slice<I> {
        Slice::new(upstream, self.i, self.j)
    }
}

/// Closure produced by [`loop_n`].
#[derive(Clone, Copy, Debug)]
pub struct LoopOp(usize);

/// Partial application of [`Loop`].
pub fn loop_n(times: usize) -> LoopOp {
    LoopOp(times)
}

impl<I> Adaptor<I> for LoopOp
where
    I: Iterator + Clone,
{
    type Output = Loop<I>;
    fn apply(self, upstream: I) -> Loop<I> {
        Loop::new(upstream, self.0)
    }
}

/// Closure produced by [`concat_with`].
#[derive(Clone, Debug)]
pub struct ConcatOp<I>(Vec<I>);

/// Partial application of [`Concat`]: concatenates the piped view with
/// `others`, in order.
pub fn concat_with<I, J>(others: J) -> ConcatOp<I>
where
    J: IntoIterator<Item = I>,
{
    ConcatOp(others.into_iter().collect())
}

impl<I: Iterator> Adaptor<I> for ConcatOp<I> {
    type Output = Concat<I>;
    fn apply(self, upstream: I) -> Concat<I> {
        let mut slots = Vec::with_capacity(self.0.len() + 1);
        slots.push(upstream);
        slots.extend(self.0);
        Concat::new(slots)
    }
}
