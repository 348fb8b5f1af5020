//! NEON passes, four lines per 128-bit register.
//!
//! Same lane discipline as the x86 kernels: the vertical pass always fits 32-bit
//! lanes and the horizontal pass takes the vector path only for batches within
//! `lane_bound`.

use std::arch::aarch64::*;

use super::butterfly::*;
use super::scalar::*;
use super::*;
use crate::com::tbl::*;

fn fits_lanes(src: &[i32], size: usize, shift: usize) -> bool {
    let bound = lane_bound(size, ITX_ADD(shift));
    src.iter().all(|&x| (x as i64).abs() <= bound)
}

/* the lane type never leaves this module, so only the feature-gated kernels can build it */
mod kernel {
    use super::*;

    #[derive(Clone, Copy)]
    struct Neon(int32x4_t);

    // SAFETY: values are only built inside the `#[target_feature(enable = "neon")]`
    // kernels below, which run after neon was detected.
    impl Lanes for Neon {
        #[inline(always)]
        fn zero() -> Self {
            unsafe { Neon(vdupq_n_s32(0)) }
        }
        #[inline(always)]
        fn mul_add(self, x: Self, c: i32) -> Self {
            unsafe { Neon(vmlaq_n_s32(self.0, x.0, c)) }
        }
        #[inline(always)]
        fn sum(self, other: Self) -> Self {
            unsafe { Neon(vaddq_s32(self.0, other.0)) }
        }
        #[inline(always)]
        fn diff(self, other: Self) -> Self {
            unsafe { Neon(vsubq_s32(self.0, other.0)) }
        }
    }

    #[target_feature(enable = "neon")]
    pub(super) unsafe fn itx_b0_neon(
        basis: BasisMatrix,
        src: &[i16],
        dst: &mut [i32],
        line: usize,
    ) -> usize {
        let n = basis.size();
        let src = LineView::new(src, line);
        let mut col = [Neon::zero(); MAX_TR_SIZE];
        let mut out = [Neon::zero(); MAX_TR_SIZE];
        let mut v = [0i32; 4];

        let mut j = 0;
        while j + 4 <= line {
            for i in 0..n {
                col[i] = Neon(vmovl_s16(vld1_s16(src.run(i, j, 4).as_ptr())));
            }
            partial_butterfly(basis, &col[..n], &mut out[..n]);
            for k in 0..n {
                vst1q_s32(v.as_mut_ptr(), out[k].0);
                for l in 0..4 {
                    dst[(j + l) * n + k] = v[l];
                }
            }
            j += 4;
        }
        j
    }

    #[target_feature(enable = "neon")]
    pub(super) unsafe fn itx_b1_neon(
        basis: BasisMatrix,
        src: &[i32],
        dst: &mut [i16],
        shift: usize,
        line: usize,
        range: ClipRange,
    ) -> usize {
        let n = basis.size();
        let src = LineView::new(src, line);
        let add = vdupq_n_s32(ITX_ADD(shift) as i32);
        /* a negative left shift is an arithmetic right shift */
        let count = vdupq_n_s32(-(shift as i32));
        let lo = vdupq_n_s32(range.min);
        let hi = vdupq_n_s32(range.max);
        let mut col = [Neon::zero(); MAX_TR_SIZE];
        let mut out = [Neon::zero(); MAX_TR_SIZE];
        let mut v = [0i16; 4];

        let mut j = 0;
        while j + 4 <= line {
            for i in 0..n {
                col[i] = Neon(vld1q_s32(src.run(i, j, 4).as_ptr()));
            }
            partial_butterfly(basis, &col[..n], &mut out[..n]);
            for k in 0..n {
                let x = vshlq_s32(vaddq_s32(out[k].0, add), count);
                let x = vminq_s32(vmaxq_s32(x, lo), hi);
                vst1_s16(v.as_mut_ptr(), vqmovn_s32(x));
                for l in 0..4 {
                    dst[(j + l) * n + k] = v[l];
                }
            }
            j += 4;
        }
        j
    }
}

use self::kernel::*;

pub(crate) fn itx_pbnb0_neon<const LOG2: usize>(src: &[i16], dst: &mut [i32], line: usize) {
    let basis = BasisMatrix::for_log2(LOG2);
    // SAFETY: only reachable through ITX_TABLE_NEON, which `ItxTable::for_isa`
    // hands out after detecting neon.
    let done = unsafe { itx_b0_neon(basis, src, dst, line) };
    itx_b0_lines(basis, src, dst, line, done..line);
}

pub(crate) fn itx_pbnb1_neon<const LOG2: usize>(
    src: &[i32],
    dst: &mut [i16],
    shift: usize,
    line: usize,
    range: ClipRange,
) {
    let basis = BasisMatrix::for_log2(LOG2);
    let mut done = 0;
    if fits_lanes(&src[..basis.size() * line], basis.size(), shift) {
        // SAFETY: see itx_pbnb0_neon
        done = unsafe { itx_b1_neon(basis, src, dst, shift, line, range) };
    }
    itx_b1_lines(basis, src, dst, shift, line, range, done..line);
}

pub(crate) static ITX_TABLE_NEON: ItxTable = ItxTable {
    isa: Isa::Neon,
    kernels: [
        ItxKernel {
            log2_size: 1,
            isa: Isa::Scalar,
            itxb0: itx_pb2b0,
            itxb1: itx_pb2b1,
        },
        ItxKernel {
            log2_size: 2,
            isa: Isa::Neon,
            itxb0: itx_pbnb0_neon::<2>,
            itxb1: itx_pbnb1_neon::<2>,
        },
        ItxKernel {
            log2_size: 3,
            isa: Isa::Neon,
            itxb0: itx_pbnb0_neon::<3>,
            itxb1: itx_pbnb1_neon::<3>,
        },
        ItxKernel {
            log2_size: 4,
            isa: Isa::Neon,
            itxb0: itx_pbnb0_neon::<4>,
            itxb1: itx_pbnb1_neon::<4>,
        },
        ItxKernel {
            log2_size: 5,
            isa: Isa::Neon,
            itxb0: itx_pbnb0_neon::<5>,
            itxb1: itx_pbnb1_neon::<5>,
        },
        ItxKernel {
            log2_size: 6,
            isa: Isa::Neon,
            itxb0: itx_pbnb0_neon::<6>,
            itxb1: itx_pbnb1_neon::<6>,
        },
    ],
};

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_and_leftover_lines_match_scalar() {
        if !Isa::Neon.is_available() {
            return;
        }
        for &line in &[1usize, 3, 4, 5, 8, 11] {
            let src: Vec<i16> = (0..8 * line)
                .map(|i| ((i * 7919) % 65536) as u16 as i16)
                .collect();
            let mut expected = vec![0i32; 8 * line];
            let mut got = vec![0i32; 8 * line];
            itx_pbnb0::<3>(&src, &mut expected, line);
            itx_pbnb0_neon::<3>(&src, &mut got, line);
            assert_eq!(got, expected, "line={}", line);
        }
    }
}
