use super::butterfly::*;
use super::*;
use crate::com::tbl::*;
use crate::com::util::*;
use crate::com::*;

use std::ops::Range;

/* 2-point base case: a sum/difference pair, no decomposition */
pub(crate) fn itx_pb2b0(src: &[i16], dst: &mut [i32], line: usize) {
    let src = LineView::new(src, line);
    for j in 0..line {
        /* E and O */
        let E = src.get(0, j) as i64 + src.get(1, j) as i64;
        let O = src.get(0, j) as i64 - src.get(1, j) as i64;

        dst[j * 2 + 0] = ITX_CLIP_32(evc_tbl_tm2[0] as i64 * E);
        dst[j * 2 + 1] = ITX_CLIP_32(evc_tbl_tm2[2] as i64 * O);
    }
}

pub(crate) fn itx_pb2b1(src: &[i32], dst: &mut [i16], shift: usize, line: usize, range: ClipRange) {
    let add = ITX_ADD(shift);
    let src = LineView::new(src, line);
    for j in 0..line {
        /* E and O */
        let E = src.get(0, j) as i64 + src.get(1, j) as i64;
        let O = src.get(0, j) as i64 - src.get(1, j) as i64;

        dst[j * 2 + 0] = ITX_ROUND(evc_tbl_tm2[0] as i64 * E, add, shift, range);
        dst[j * 2 + 1] = ITX_ROUND(evc_tbl_tm2[2] as i64 * O, add, shift, range);
    }
}

/// Vertical pass over `lines` of a `basis.size()`-point transform: 16-bit in,
/// 32-bit out, transposed on write.
pub(crate) fn itx_b0_lines(
    basis: BasisMatrix,
    src: &[i16],
    dst: &mut [i32],
    line: usize,
    lines: Range<usize>,
) {
    let n = basis.size();
    let src = LineView::new(src, line);
    let mut col = [0i64; MAX_TR_SIZE];
    let mut out = [0i64; MAX_TR_SIZE];

    for j in lines {
        for i in 0..n {
            col[i] = src.get(i, j) as i64;
        }
        partial_butterfly(basis, &col[..n], &mut out[..n]);
        for k in 0..n {
            dst[j * n + k] = ITX_CLIP_32(out[k]);
        }
    }
}

/// Horizontal pass over `lines`: 32-bit in, rounded, shifted and saturated to 16 bits.
pub(crate) fn itx_b1_lines(
    basis: BasisMatrix,
    src: &[i32],
    dst: &mut [i16],
    shift: usize,
    line: usize,
    range: ClipRange,
    lines: Range<usize>,
) {
    let n = basis.size();
    let add = ITX_ADD(shift);
    let src = LineView::new(src, line);
    let mut col = [0i64; MAX_TR_SIZE];
    let mut out = [0i64; MAX_TR_SIZE];

    for j in lines {
        for i in 0..n {
            col[i] = src.get(i, j) as i64;
        }
        partial_butterfly(basis, &col[..n], &mut out[..n]);
        for k in 0..n {
            dst[j * n + k] = ITX_ROUND(out[k], add, shift, range);
        }
    }
}

pub(crate) fn itx_pbnb0<const LOG2: usize>(src: &[i16], dst: &mut [i32], line: usize) {
    itx_b0_lines(BasisMatrix::for_log2(LOG2), src, dst, line, 0..line);
}

pub(crate) fn itx_pbnb1<const LOG2: usize>(
    src: &[i32],
    dst: &mut [i16],
    shift: usize,
    line: usize,
    range: ClipRange,
) {
    itx_b1_lines(BasisMatrix::for_log2(LOG2), src, dst, shift, line, range, 0..line);
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_case_is_sum_and_difference() {
        /* two lines: (3, -5) and (-7, 2) */
        let src = [3i16, -7, -5, 2];
        let mut tb = [0i32; 4];
        itx_pb2b0(&src, &mut tb, 2);
        assert_eq!(tb, [64 * -2, 64 * 8, 64 * -5, 64 * -9]);

        /* lines (-128, -320) and (512, -576) */
        let mut dst = [0i16; 4];
        itx_pb2b1(&tb, &mut dst, 0, 2, ClipRange::TX_32);
        assert_eq!(dst, [64 * -448, 64 * 192, 64 * -64, i16::MAX]);
    }

    #[test]
    fn base_case_rounds_both_signs() {
        let tb = [1i32, -1];
        let mut dst = [0i16; 2];
        /* 64 * 0 and 64 * 2 */
        itx_pb2b1(&tb, &mut dst, 7, 1, ClipRange::TX_32);
        assert_eq!(dst, [0, 1]);

        let tb = [-1i32, -2];
        /* 64 * -3 = -192, (-192 + 64) >> 7 = -1; 64 * 1 = 64, (64 + 64) >> 7 = 1 */
        itx_pb2b1(&tb, &mut dst, 7, 1, ClipRange::TX_32);
        assert_eq!(dst, [-1, 1]);
    }

    #[test]
    fn lines_outside_the_range_are_untouched() {
        let basis = BasisMatrix::for_log2(2);
        let src = [1i16; 16];
        let mut dst = [7i32; 16];
        itx_b0_lines(basis, &src, &mut dst, 4, 2..4);
        assert_eq!(&dst[..8], &[7; 8]);
        assert!(dst[8..].iter().all(|&v| v != 7));
    }
}
