use crate::com::tbl::*;
use crate::com::*;

/// One sample per line, or a vector of adjacent lines, moving through the butterfly.
///
/// Every operation is exact integer arithmetic. Vector implementations use 32-bit
/// lanes and are only fed inputs whose partial sums cannot leave `i32`.
pub(crate) trait Lanes: Copy {
    fn zero() -> Self;
    /// `self + x * c`
    fn mul_add(self, x: Self, c: i32) -> Self;
    fn sum(self, other: Self) -> Self;
    fn diff(self, other: Self) -> Self;
}

impl Lanes for i64 {
    #[inline(always)]
    fn zero() -> Self {
        0
    }
    #[inline(always)]
    fn mul_add(self, x: Self, c: i32) -> Self {
        self + x * c as i64
    }
    #[inline(always)]
    fn sum(self, other: Self) -> Self {
        self + other
    }
    #[inline(always)]
    fn diff(self, other: Self) -> Self {
        self - other
    }
}

/// 1-D inverse transform of `src` (one coefficient per basis row) by even/odd
/// decomposition.
///
/// An `n`-point level takes its inputs from rows `0, step, 2 * step, ..` of the
/// full basis (`step = N / n`). Its odd-indexed inputs are dot products against
/// the first `n / 2` columns of their rows; its even-indexed inputs form the
/// `n / 2`-point level below. The levels are evaluated bottom-up, from the 2-point
/// level (rows `0` and `N / 2`) to the full `N`-point one, and each combines as
/// `out[k] = even[k] + odd[k]`, `out[n - 1 - k] = even[k] - odd[k]`.
#[inline(always)]
pub(crate) fn partial_butterfly<L: Lanes>(basis: BasisMatrix, src: &[L], dst: &mut [L]) {
    let size = basis.size();
    debug_assert!(size >= 4);
    debug_assert!(src.len() >= size && dst.len() >= size);

    let mut buf0 = [L::zero(); MAX_TR_SIZE];
    let mut buf1 = [L::zero(); MAX_TR_SIZE];
    let mut even = &mut buf0;
    let mut next = &mut buf1;

    let step = size >> 1;
    for k in 0..2 {
        even[k] = L::zero()
            .mul_add(src[0], basis.at(0, k))
            .mul_add(src[step], basis.at(step, k));
    }

    let mut n = 4;
    while n <= size {
        let step = size / n;
        let half = n >> 1;
        for k in 0..half {
            let mut odd = L::zero();
            let mut i = 1;
            while i < n {
                odd = odd.mul_add(src[i * step], basis.at(i * step, k));
                i += 2;
            }
            next[k] = even[k].sum(odd);
            next[n - 1 - k] = even[k].diff(odd);
        }
        std::mem::swap(&mut even, &mut next);
        n <<= 1;
    }

    dst[..size].copy_from_slice(&even[..size]);
}

/// Largest input magnitude for which an `size`-point pass, rounding offset
/// included, stays inside 32-bit lanes.
#[inline]
pub(crate) fn lane_bound(size: usize, add: i64) -> i64 {
    (MAX_TX_VAL_32 as i64 - add) / (MAX_BASIS_MAGNITUDE * size as i64)
}

#[cfg(test)]
mod test {
    use super::*;
    use interpolate_name::interpolate_test;
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn naive(basis: BasisMatrix, src: &[i64]) -> Vec<i64> {
        let n = basis.size();
        (0..n)
            .map(|k| (0..n).map(|i| basis.at(i, k) as i64 * src[i]).sum())
            .collect()
    }

    #[interpolate_test(n4, 2)]
    #[interpolate_test(n8, 3)]
    #[interpolate_test(n16, 4)]
    #[interpolate_test(n32, 5)]
    #[interpolate_test(n64, 6)]
    fn matches_matrix_product(log2: usize) {
        let basis = BasisMatrix::for_log2(log2);
        let n = basis.size();
        let mut ra = ChaChaRng::from_seed([log2 as u8; 32]);

        for _ in 0..32 {
            let src: Vec<i64> = (0..n).map(|_| ra.gen::<i16>() as i64).collect();
            let mut dst = vec![0i64; n];
            partial_butterfly(basis, &src, &mut dst);
            assert_eq!(dst, naive(basis, &src));
        }
    }

    #[interpolate_test(n4, 2)]
    #[interpolate_test(n64, 6)]
    fn single_coefficient_yields_its_basis_row(log2: usize) {
        let basis = BasisMatrix::for_log2(log2);
        let n = basis.size();
        for i in 0..n {
            let mut src = vec![0i64; n];
            src[i] = 1;
            let mut dst = vec![0i64; n];
            partial_butterfly(basis, &src, &mut dst);
            let row: Vec<i64> = basis.row(i).iter().map(|&c| c as i64).collect();
            assert_eq!(dst, row);
        }
    }

    #[test]
    fn lane_bound_keeps_worst_case_in_i32() {
        for log2 in 2..=MAX_TR_LOG2 {
            let size = 1 << log2;
            for &add in &[0i64, 1 << 16, 1 << 30] {
                let bound = lane_bound(size, add);
                let worst = bound * MAX_BASIS_MAGNITUDE * size as i64 + add;
                assert!(worst <= MAX_TX_VAL_32 as i64);
            }
        }
        /* a whole i16 block never needs the check */
        assert!(lane_bound(MAX_TR_SIZE, 0) >= -(MIN_TX_VAL as i64));
    }
}
