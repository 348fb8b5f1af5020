use std::cmp::*;

/* clipping within min and max */
#[inline]
pub(crate) fn EVC_CLIP3<T: Ord>(min_x: T, max_x: T, value: T) -> T {
    max(min_x, min(max_x, value))
}

#[repr(align(64))]
pub(crate) struct Align64;

// A 64 byte aligned piece of data.
// # Examples
// ```
// let mut x: Aligned<[i32; 64 * 64]> = Aligned::new([0; 64 * 64]);
// assert!(x.data.as_ptr() as usize % 64 == 0);
// ```
pub(crate) struct Aligned<T> {
    _alignment: [Align64; 0],
    pub(crate) data: T,
}

impl<T> Aligned<T> {
    pub(crate) const fn new(data: T) -> Self {
        Aligned {
            _alignment: [],
            data,
        }
    }
}

/// A block stored as `rows` runs of `line` samples, so that sample `j` of row `i`
/// sits at `i * line + j`.
///
/// The first pass reads coefficient `i` of column `j` this way; the second pass
/// reads the transposed intermediate the same way.
#[derive(Clone, Copy)]
pub(crate) struct LineView<'a, T> {
    data: &'a [T],
    line: usize,
}

impl<'a, T: Copy> LineView<'a, T> {
    #[inline(always)]
    pub(crate) fn new(data: &'a [T], line: usize) -> Self {
        LineView { data, line }
    }

    #[inline(always)]
    pub(crate) fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.line + j]
    }

    /// The `len` samples of row `i` starting at line `j`.
    #[inline(always)]
    pub(crate) fn run(&self, i: usize, j: usize, len: usize) -> &'a [T] {
        let start = i * self.line + j;
        &self.data[start..start + len]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn is_aligned<T>(ptr: *const T, n: usize) -> bool {
        ((ptr as usize) & ((1 << n) - 1)) == 0
    }

    #[test]
    fn sanity_stack() {
        let a: Aligned<_> = Aligned::new([0i32; 3]);
        assert!(is_aligned(a.data.as_ptr(), 6));
    }

    #[test]
    fn clip3() {
        assert_eq!(EVC_CLIP3(-4, 4, 7), 4);
        assert_eq!(EVC_CLIP3(-4, 4, -7), -4);
        assert_eq!(EVC_CLIP3(-4, 4, 1), 1);
    }

    #[test]
    fn line_view_addresses_rows_of_line_samples() {
        let data: Vec<i16> = (0..12).collect();
        let view = LineView::new(&data, 4);
        assert_eq!(view.get(0, 3), 3);
        assert_eq!(view.get(2, 1), 9);
        assert_eq!(view.run(1, 2, 2), &[6, 7]);
    }
}
