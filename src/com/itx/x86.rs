//! SSE4.1 and AVX2 passes.
//!
//! Each vector lane carries one line of the batch through the same butterfly the
//! scalar code runs, in 32-bit arithmetic. The vertical pass always fits: a 16-bit
//! input times at most 90 per term over 64 terms stays below 2^28. The horizontal
//! pass only takes the vector path when every input is within `lane_bound`;
//! otherwise the whole batch goes through the scalar kernel.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::butterfly::*;
use super::scalar::*;
use super::*;
use crate::com::tbl::*;

/* every input of a horizontal batch keeps the butterfly inside 32-bit lanes */
fn fits_lanes(src: &[i32], size: usize, shift: usize) -> bool {
    let bound = lane_bound(size, ITX_ADD(shift));
    src.iter().all(|&x| (x as i64).abs() <= bound)
}

/* lane types never leave this module, so only the feature-gated kernels can build them */
mod kernel {
    use super::*;

    /* four lines in a 128-bit register */
    #[derive(Clone, Copy)]
    struct Sse41(__m128i);

    /* eight lines in a 256-bit register */
    #[derive(Clone, Copy)]
    struct Avx2(__m256i);

    // SAFETY: values of these types are only built inside the `#[target_feature]`
    // kernels below, which run after the matching CPU feature was detected.
    impl Lanes for Sse41 {
        #[inline(always)]
        fn zero() -> Self {
            unsafe { Sse41(_mm_setzero_si128()) }
        }
        #[inline(always)]
        fn mul_add(self, x: Self, c: i32) -> Self {
            unsafe {
                Sse41(_mm_add_epi32(
                    self.0,
                    _mm_mullo_epi32(x.0, _mm_set1_epi32(c)),
                ))
            }
        }
        #[inline(always)]
        fn sum(self, other: Self) -> Self {
            unsafe { Sse41(_mm_add_epi32(self.0, other.0)) }
        }
        #[inline(always)]
        fn diff(self, other: Self) -> Self {
            unsafe { Sse41(_mm_sub_epi32(self.0, other.0)) }
        }
    }

    impl Lanes for Avx2 {
        #[inline(always)]
        fn zero() -> Self {
            unsafe { Avx2(_mm256_setzero_si256()) }
        }
        #[inline(always)]
        fn mul_add(self, x: Self, c: i32) -> Self {
            unsafe {
                Avx2(_mm256_add_epi32(
                    self.0,
                    _mm256_mullo_epi32(x.0, _mm256_set1_epi32(c)),
                ))
            }
        }
        #[inline(always)]
        fn sum(self, other: Self) -> Self {
            unsafe { Avx2(_mm256_add_epi32(self.0, other.0)) }
        }
        #[inline(always)]
        fn diff(self, other: Self) -> Self {
            unsafe { Avx2(_mm256_sub_epi32(self.0, other.0)) }
        }
    }

    /// Vertical pass over groups of four lines starting at `start`. Returns the first
    /// line left unprocessed.
    #[target_feature(enable = "sse4.1")]
    pub(super) unsafe fn itx_b0_sse41(
        basis: BasisMatrix,
        src: &[i16],
        dst: &mut [i32],
        line: usize,
        start: usize,
    ) -> usize {
        let n = basis.size();
        let src = LineView::new(src, line);
        let mut col = [Sse41::zero(); MAX_TR_SIZE];
        let mut out = [Sse41::zero(); MAX_TR_SIZE];
        let mut v = [0i32; 4];

        let mut j = start;
        while j + 4 <= line {
            for i in 0..n {
                let p = src.run(i, j, 4).as_ptr() as *const __m128i;
                col[i] = Sse41(_mm_cvtepi16_epi32(_mm_loadl_epi64(p)));
            }
            partial_butterfly(basis, &col[..n], &mut out[..n]);
            for k in 0..n {
                _mm_storeu_si128(v.as_mut_ptr() as *mut __m128i, out[k].0);
                for l in 0..4 {
                    dst[(j + l) * n + k] = v[l];
                }
            }
            j += 4;
        }
        j
    }

    #[target_feature(enable = "sse4.1")]
    pub(super) unsafe fn itx_b1_sse41(
        basis: BasisMatrix,
        src: &[i32],
        dst: &mut [i16],
        shift: usize,
        line: usize,
        range: ClipRange,
        start: usize,
    ) -> usize {
        let n = basis.size();
        let src = LineView::new(src, line);
        let add = _mm_set1_epi32(ITX_ADD(shift) as i32);
        let count = _mm_cvtsi32_si128(shift as i32);
        let lo = _mm_set1_epi32(range.min);
        let hi = _mm_set1_epi32(range.max);
        let mut col = [Sse41::zero(); MAX_TR_SIZE];
        let mut out = [Sse41::zero(); MAX_TR_SIZE];
        let mut v = [0i16; 8];

        let mut j = start;
        while j + 4 <= line {
            for i in 0..n {
                let p = src.run(i, j, 4).as_ptr() as *const __m128i;
                col[i] = Sse41(_mm_loadu_si128(p));
            }
            partial_butterfly(basis, &col[..n], &mut out[..n]);
            for k in 0..n {
                let x = _mm_sra_epi32(_mm_add_epi32(out[k].0, add), count);
                let x = _mm_min_epi32(_mm_max_epi32(x, lo), hi);
                _mm_storeu_si128(v.as_mut_ptr() as *mut __m128i, _mm_packs_epi32(x, x));
                for l in 0..4 {
                    dst[(j + l) * n + k] = v[l];
                }
            }
            j += 4;
        }
        j
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn itx_b0_avx2(
        basis: BasisMatrix,
        src: &[i16],
        dst: &mut [i32],
        line: usize,
        start: usize,
    ) -> usize {
        let n = basis.size();
        let src = LineView::new(src, line);
        let mut col = [Avx2::zero(); MAX_TR_SIZE];
        let mut out = [Avx2::zero(); MAX_TR_SIZE];
        let mut v = [0i32; 8];

        let mut j = start;
        while j + 8 <= line {
            for i in 0..n {
                let p = src.run(i, j, 8).as_ptr() as *const __m128i;
                col[i] = Avx2(_mm256_cvtepi16_epi32(_mm_loadu_si128(p)));
            }
            partial_butterfly(basis, &col[..n], &mut out[..n]);
            for k in 0..n {
                _mm256_storeu_si256(v.as_mut_ptr() as *mut __m256i, out[k].0);
                for l in 0..8 {
                    dst[(j + l) * n + k] = v[l];
                }
            }
            j += 8;
        }
        j
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn itx_b1_avx2(
        basis: BasisMatrix,
        src: &[i32],
        dst: &mut [i16],
        shift: usize,
        line: usize,
        range: ClipRange,
        start: usize,
    ) -> usize {
        let n = basis.size();
        let src = LineView::new(src, line);
        let add = _mm256_set1_epi32(ITX_ADD(shift) as i32);
        let count = _mm_cvtsi32_si128(shift as i32);
        let lo = _mm256_set1_epi32(range.min);
        let hi = _mm256_set1_epi32(range.max);
        let mut col = [Avx2::zero(); MAX_TR_SIZE];
        let mut out = [Avx2::zero(); MAX_TR_SIZE];
        let mut v = [0i16; 8];

        let mut j = start;
        while j + 8 <= line {
            for i in 0..n {
                let p = src.run(i, j, 8).as_ptr() as *const __m256i;
                col[i] = Avx2(_mm256_loadu_si256(p));
            }
            partial_butterfly(basis, &col[..n], &mut out[..n]);
            for k in 0..n {
                let x = _mm256_sra_epi32(_mm256_add_epi32(out[k].0, add), count);
                let x = _mm256_min_epi32(_mm256_max_epi32(x, lo), hi);
                let x = _mm_packs_epi32(
                    _mm256_castsi256_si128(x),
                    _mm256_extracti128_si256(x, 1),
                );
                _mm_storeu_si128(v.as_mut_ptr() as *mut __m128i, x);
                for l in 0..8 {
                    dst[(j + l) * n + k] = v[l];
                }
            }
            j += 8;
        }
        j
    }
}

use self::kernel::*;

pub(crate) fn itx_pbnb0_sse41<const LOG2: usize>(src: &[i16], dst: &mut [i32], line: usize) {
    let basis = BasisMatrix::for_log2(LOG2);
    // SAFETY: this kernel is only reachable through ITX_TABLE_SSE41, which
    // `ItxTable::for_isa` hands out after detecting sse4.1.
    let done = unsafe { itx_b0_sse41(basis, src, dst, line, 0) };
    itx_b0_lines(basis, src, dst, line, done..line);
}

pub(crate) fn itx_pbnb1_sse41<const LOG2: usize>(
    src: &[i32],
    dst: &mut [i16],
    shift: usize,
    line: usize,
    range: ClipRange,
) {
    let basis = BasisMatrix::for_log2(LOG2);
    let mut done = 0;
    if fits_lanes(&src[..basis.size() * line], basis.size(), shift) {
        // SAFETY: see itx_pbnb0_sse41
        done = unsafe { itx_b1_sse41(basis, src, dst, shift, line, range, 0) };
    }
    itx_b1_lines(basis, src, dst, shift, line, range, done..line);
}

pub(crate) fn itx_pbnb0_avx2<const LOG2: usize>(src: &[i16], dst: &mut [i32], line: usize) {
    let basis = BasisMatrix::for_log2(LOG2);
    // SAFETY: ITX_TABLE_AVX2 is handed out only when both avx2 and sse4.1 are
    // detected; four-line leftovers go to the sse4.1 kernel.
    let done = unsafe {
        let done = itx_b0_avx2(basis, src, dst, line, 0);
        itx_b0_sse41(basis, src, dst, line, done)
    };
    itx_b0_lines(basis, src, dst, line, done..line);
}

pub(crate) fn itx_pbnb1_avx2<const LOG2: usize>(
    src: &[i32],
    dst: &mut [i16],
    shift: usize,
    line: usize,
    range: ClipRange,
) {
    let basis = BasisMatrix::for_log2(LOG2);
    let mut done = 0;
    if fits_lanes(&src[..basis.size() * line], basis.size(), shift) {
        // SAFETY: see itx_pbnb0_avx2
        done = unsafe {
            let done = itx_b1_avx2(basis, src, dst, shift, line, range, 0);
            itx_b1_sse41(basis, src, dst, shift, line, range, done)
        };
    }
    itx_b1_lines(basis, src, dst, shift, line, range, done..line);
}

pub(crate) static ITX_TABLE_SSE41: ItxTable = ItxTable {
    isa: Isa::Sse41,
    kernels: [
        ItxKernel {
            log2_size: 1,
            isa: Isa::Scalar,
            itxb0: itx_pb2b0,
            itxb1: itx_pb2b1,
        },
        ItxKernel {
            log2_size: 2,
            isa: Isa::Sse41,
            itxb0: itx_pbnb0_sse41::<2>,
            itxb1: itx_pbnb1_sse41::<2>,
        },
        ItxKernel {
            log2_size: 3,
            isa: Isa::Sse41,
            itxb0: itx_pbnb0_sse41::<3>,
            itxb1: itx_pbnb1_sse41::<3>,
        },
        ItxKernel {
            log2_size: 4,
            isa: Isa::Sse41,
            itxb0: itx_pbnb0_sse41::<4>,
            itxb1: itx_pbnb1_sse41::<4>,
        },
        ItxKernel {
            log2_size: 5,
            isa: Isa::Sse41,
            itxb0: itx_pbnb0_sse41::<5>,
            itxb1: itx_pbnb1_sse41::<5>,
        },
        ItxKernel {
            log2_size: 6,
            isa: Isa::Sse41,
            itxb0: itx_pbnb0_sse41::<6>,
            itxb1: itx_pbnb1_sse41::<6>,
        },
    ],
};

pub(crate) static ITX_TABLE_AVX2: ItxTable = ItxTable {
    isa: Isa::Avx2,
    kernels: [
        ItxKernel {
            log2_size: 1,
            isa: Isa::Scalar,
            itxb0: itx_pb2b0,
            itxb1: itx_pb2b1,
        },
        ItxKernel {
            log2_size: 2,
            isa: Isa::Avx2,
            itxb0: itx_pbnb0_avx2::<2>,
            itxb1: itx_pbnb1_avx2::<2>,
        },
        ItxKernel {
            log2_size: 3,
            isa: Isa::Avx2,
            itxb0: itx_pbnb0_avx2::<3>,
            itxb1: itx_pbnb1_avx2::<3>,
        },
        ItxKernel {
            log2_size: 4,
            isa: Isa::Avx2,
            itxb0: itx_pbnb0_avx2::<4>,
            itxb1: itx_pbnb1_avx2::<4>,
        },
        ItxKernel {
            log2_size: 5,
            isa: Isa::Avx2,
            itxb0: itx_pbnb0_avx2::<5>,
            itxb1: itx_pbnb1_avx2::<5>,
        },
        ItxKernel {
            log2_size: 6,
            isa: Isa::Avx2,
            itxb0: itx_pbnb0_avx2::<6>,
            itxb1: itx_pbnb1_avx2::<6>,
        },
    ],
};

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lane_check_is_inclusive() {
        let bound = lane_bound(8, ITX_ADD(7)) as i32;
        assert!(fits_lanes(&[bound, -bound, 0], 8, 7));
        assert!(!fits_lanes(&[0, bound + 1], 8, 7));
        assert!(!fits_lanes(&[MIN_TX_VAL_32], 8, 7));
    }

    /* a single out-of-bound sample sends the whole batch, bound values included, to scalar */
    #[test]
    fn out_of_bound_batch_matches_scalar() {
        if !Isa::Sse41.is_available() {
            return;
        }
        let n = 8;
        let line = 8;
        let shift = 12;
        let bound = lane_bound(n, ITX_ADD(shift)) as i32;
        for &edge in &[bound, bound + 1] {
            let mut src = vec![bound; n * line];
            src[n * line - 1] = edge;
            src[3] = -bound;

            let mut expected = vec![0i16; n * line];
            itx_pbnb1::<3>(&src, &mut expected, shift, line, ClipRange::TX_32);
            for isa in Isa::available() {
                if isa == Isa::Scalar {
                    continue;
                }
                let table = ItxTable::for_isa(isa).unwrap();
                let mut got = vec![0i16; n * line];
                table.horizontal(
                    &PassParameters::horizontal(3, line, shift, ClipRange::TX_32),
                    &src,
                    &mut got,
                );
                assert_eq!(got, expected, "{} edge={}", isa, edge);
            }
        }
    }

    /* 8-wide, 4-wide and scalar tails all land in the right place */
    #[test]
    fn leftover_lines_match_scalar() {
        if !Isa::Sse41.is_available() {
            return;
        }
        for &line in &[1usize, 3, 4, 7, 8, 11, 12, 13, 15] {
            let src: Vec<i16> = (0..16 * line)
                .map(|i| ((i * 7919) % 65536) as u16 as i16)
                .collect();
            let mut expected = vec![0i32; 16 * line];
            itx_pbnb0::<4>(&src, &mut expected, line);

            let mut got = vec![0i32; 16 * line];
            itx_pbnb0_sse41::<4>(&src, &mut got, line);
            assert_eq!(got, expected, "sse4.1 line={}", line);

            if Isa::Avx2.is_available() {
                let mut got = vec![0i32; 16 * line];
                itx_pbnb0_avx2::<4>(&src, &mut got, line);
                assert_eq!(got, expected, "avx2 line={}", line);
            }
        }
    }
}
