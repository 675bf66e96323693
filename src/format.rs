//! Lazy, write-once-at-display-time formatting (the stream terminal from
//! spec §4, "Format/stream terminal").
use std::cell::RefCell;
use std::fmt;

/// Formats all elements of an iterator, separated by `sep`, the first time
/// the value is displayed. Built lazily so `view(...) | ... .format(", ")`
/// never materializes a `String` unless something actually writes it out.
///
/// Uses interior mutability because `Display::fmt` takes `&self` but
/// formatting needs to drain the wrapped iterator.
pub struct Format<'a, I, F> {
    sep: &'a str,
    inner: RefCell<Option<(I, F)>>,
}

/// Create a new `Format` adaptor using a custom per-element formatting
/// callback `f`.
pub fn new_format<'a, I, F>(iter: I, sep: &'a str, f: F) -> Format<'a, I, F>
where
    I: Iterator,
    F: FnMut(I::Item, &mut dyn FnMut(&dyn fmt::Display) -> fmt::Result) -> fmt::Result,
{
    Format {
        sep,
        inner: RefCell::new(Some((iter, f))),
    }
}

/// Create a new `Format` adaptor using each element's own `Display` impl.
pub fn new_format_default<'a, I>(iter: I, sep: &'a str) -> Format<'a, I, fn(I::Item, &mut dyn FnMut(&dyn fmt::Display) -> fmt::Result) -> fmt::Result>
where
    I: Iterator,
    I::Item: fmt::Display,
{
    fn format_default<T: fmt::Display>(
        item: T,
        f: &mut dyn FnMut(&dyn fmt::Display) -> fmt::Result,
    ) -> fmt::Result {
        f(&item)
    }
    new_format(iter, sep, format_default)
}

impl<I, F> fmt::Display for Format<'_, I, F>
where
    I: Iterator,
    F: FnMut(I::Item, &mut dyn FnMut(&dyn fmt::Display) -> fmt::Result) -> fmt::Result,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mut iter, mut format) = self
            .inner
            .borrow_mut()
            .take()
            .expect("Format: value was already displayed once");
        let mut write_elt = |disp: &dyn fmt::Display| write!(fmt, "{disp}");

        if let Some(first) = iter.next() {
            format(first, &mut write_elt)?;
            for elt in iter {
                if !self.sep.is_empty() {
                    write_elt(&self.sep)?;
                }
                format(elt, &mut write_elt)?;
            }
        }
        Ok(())
    }
}

impl<I, F> fmt::Debug for Format<'_, I, F>
where
    I: Iterator,
    F: FnMut(I::Item, &mut dyn FnMut(&dyn fmt::Display) -> fmt::Result) -> fmt::Result,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_joins_elements_with_the_separator() {
        let f = new_format_default(vec![1, 2, 3].into_iter(), ", ");
        assert_eq!(f.to_string(), "1, 2, 3");
    }

    #[test]
    fn format_of_an_empty_iterator_is_empty() {
        let f = new_format_default(Vec::<i32>::new().into_iter(), ", ");
        assert_eq!(f.to_string(), "");
    }

    #[test]
    fn format_with_custom_callback_controls_each_elements_rendering() {
        let f = new_format(vec![1, 2, 3].into_iter(), " + ", |x: i32, cb| {
            cb(&format!("[{x}]"))
        });
        assert_eq!(f.to_string(), "[1] + [2] + [3]");
    }
}
