//! Inverse integer transform.
//!
//! A 2-D inverse transform is two 1-D passes. The vertical pass reads 16-bit
//! coefficients column-wise and writes a 32-bit intermediate already transposed,
//! so the horizontal pass reads it with the same access pattern and writes the
//! final 16-bit residual in row-major order.

pub(crate) mod butterfly;
mod dispatch;
pub(crate) mod scalar;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod x86;

#[cfg(target_arch = "aarch64")]
mod arm;

pub use self::dispatch::*;

use super::tracer::*;
use super::util::*;
use super::*;

/// Saturating output range of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRange {
    pub min: i32,
    pub max: i32,
}

impl ClipRange {
    /// Full 32-bit intermediate range.
    pub const TX_32: ClipRange = ClipRange {
        min: MIN_TX_VAL_32,
        max: MAX_TX_VAL_32,
    };

    pub fn new(min: i32, max: i32) -> Self {
        assert!(min <= max, "empty clip range [{}, {}]", min, max);
        ClipRange { min, max }
    }

    /// Residual range for samples of `bit_depth` bits.
    pub fn for_bit_depth(bit_depth: usize) -> Self {
        let range = EVC_CLIP3(
            MAX_TX_DYNAMIC_RANGE,
            MAX_TX_DYNAMIC_RANGE_32 - 1,
            bit_depth + 6,
        );
        ClipRange {
            min: -(1 << range),
            max: (1 << range) - 1,
        }
    }
}

impl Default for ClipRange {
    fn default() -> Self {
        ClipRange::for_bit_depth(BIT_DEPTH)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// First pass: 16-bit coefficients in, 32-bit intermediate out, no shift.
    Vertical,
    /// Second pass: 32-bit intermediate in, rounded and shifted 16-bit residual out.
    Horizontal,
}

/// Description of one batched 1-D pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassParameters {
    /// log2 of the transform length N.
    pub log2_size: usize,
    /// Number of independent 1-D transforms in the batch.
    pub line: usize,
    pub step: Step,
    pub shift: usize,
    pub range: ClipRange,
}

impl PassParameters {
    pub fn vertical(log2_size: usize, line: usize) -> Self {
        PassParameters {
            log2_size,
            line,
            step: Step::Vertical,
            shift: 0,
            range: ClipRange::TX_32,
        }
    }

    pub fn horizontal(log2_size: usize, line: usize, shift: usize, range: ClipRange) -> Self {
        PassParameters {
            log2_size,
            line,
            step: Step::Horizontal,
            shift,
            range,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        1 << self.log2_size
    }

    /* number of samples read and written by the pass */
    #[inline]
    pub fn area(&self) -> usize {
        self.size() * self.line
    }

    fn check(&self, step: Step, src_len: usize, dst_len: usize) {
        assert_eq!(self.step, step);
        assert!(
            self.log2_size >= MIN_TR_LOG2 && self.log2_size <= MAX_TR_LOG2,
            "unsupported transform size 1 << {}",
            self.log2_size
        );
        assert!(self.line > 0 && self.line <= MAX_TR_SIZE);
        assert!(self.shift <= MAX_ITX_SHIFT);
        assert!(self.range.min <= self.range.max);
        assert!(src_len >= self.area() && dst_len >= self.area());
    }
}

#[inline]
pub(crate) fn ITX_ADD(shift: usize) -> i64 {
    if shift == 0 {
        0
    } else {
        1 << (shift - 1) as i64
    }
}

#[inline]
pub(crate) fn ITX_CLIP_32(x: i64) -> i32 {
    if x <= MIN_TX_VAL_32 as i64 {
        MIN_TX_VAL_32
    } else if x >= MAX_TX_VAL_32 as i64 {
        MAX_TX_VAL_32
    } else {
        x as i32
    }
}

/* clamp to `range`, then saturate to 16 bits */
#[inline]
pub(crate) fn ITX_CLIP(x: i64, range: ClipRange) -> i16 {
    let x = EVC_CLIP3(range.min as i64, range.max as i64, x);
    EVC_CLIP3(MIN_TX_VAL as i64, MAX_TX_VAL as i64, x) as i16
}

/* horizontal output stage: 32-bit clamp, rounding offset, shift, narrow */
#[inline]
pub(crate) fn ITX_ROUND(x: i64, add: i64, shift: usize, range: ClipRange) -> i16 {
    ITX_CLIP((ITX_CLIP_32(x) as i64 + add) >> shift as i64, range)
}

impl ItxTable {
    /// Runs one vertical pass: `dst[j * N + k]` receives output `k` of column `j`.
    pub fn vertical(&self, p: &PassParameters, src: &[i16], dst: &mut [i32]) {
        p.check(Step::Vertical, src.len(), dst.len());
        (self.kernel(p.log2_size).itxb0)(&src[..p.area()], &mut dst[..p.area()], p.line);
    }

    /// Runs one horizontal pass: `dst[j * N + k]` receives output `k` of row `j`.
    pub fn horizontal(&self, p: &PassParameters, src: &[i32], dst: &mut [i16]) {
        p.check(Step::Horizontal, src.len(), dst.len());
        (self.kernel(p.log2_size).itxb1)(
            &src[..p.area()],
            &mut dst[..p.area()],
            p.shift,
            p.line,
            p.range,
        );
    }

    /// 2-D inverse transform of a `1 << log2_w` by `1 << log2_h` block in row-major order.
    pub fn inverse_2d(
        &self,
        src: &[i16],
        dst: &mut [i16],
        log2_w: usize,
        log2_h: usize,
        shift: usize,
        range: ClipRange,
    ) {
        let mut tb = Aligned::new([0i32; MAX_TR_DIM]); /* temp buffer */
        let cnt = (1 << log2_w) * (1 << log2_h);
        let tb = &mut tb.data[..cnt];
        self.vertical(&PassParameters::vertical(log2_h, 1 << log2_w), src, tb);
        self.horizontal(
            &PassParameters::horizontal(log2_w, 1 << log2_h, shift, range),
            tb,
            dst,
        );
    }

    /// Same as [`ItxTable::inverse_2d`], writing the residual over the coefficients.
    pub fn inverse_2d_in_place(
        &self,
        coef: &mut [i16],
        log2_w: usize,
        log2_h: usize,
        shift: usize,
        range: ClipRange,
    ) {
        let mut tb = Aligned::new([0i32; MAX_TR_DIM]); /* temp buffer */
        let cnt = (1 << log2_w) * (1 << log2_h);
        let tb = &mut tb.data[..cnt];
        self.vertical(&PassParameters::vertical(log2_h, 1 << log2_w), coef, tb);
        self.horizontal(
            &PassParameters::horizontal(log2_w, 1 << log2_h, shift, range),
            tb,
            coef,
        );
    }
}

impl ItxKernel {
    /// Square 2-D inverse transform of size `1 << self.log2_size()`.
    pub fn inverse_2d(&self, src: &[i16], dst: &mut [i16], shift: usize, range: ClipRange) {
        let n = 1 << self.log2_size;
        let vp = PassParameters::vertical(self.log2_size, n);
        let hp = PassParameters::horizontal(self.log2_size, n, shift, range);
        vp.check(Step::Vertical, src.len(), MAX_TR_DIM);
        hp.check(Step::Horizontal, MAX_TR_DIM, dst.len());

        let mut tb = Aligned::new([0i32; MAX_TR_DIM]); /* temp buffer */
        let tb = &mut tb.data[..n * n];
        (self.itxb0)(&src[..n * n], tb, n);
        (self.itxb1)(tb, &mut dst[..n * n], shift, n, range);
    }
}

/// In-place inverse transform through the process-wide kernel table.
pub fn evc_itrans(coef: &mut [i16], log2_w: usize, log2_h: usize, shift: usize, range: ClipRange) {
    itx_table().inverse_2d_in_place(coef, log2_w, log2_h, shift, range);
}

/// Inverse transforms the luma and 4:2:0 chroma residual of one coding unit.
///
/// Components whose `flag` is clear carry no coefficients and are left alone.
pub fn evc_sub_block_itrans(
    coef: &mut [[i16; MAX_CU_DIM]; N_C],
    log2_cuw: usize,
    log2_cuh: usize,
    flag: &[bool; N_C],
    bit_depth: usize,
) {
    assert!((8..=16).contains(&bit_depth), "unsupported bit depth {}", bit_depth);
    let shift = itx_shift(bit_depth);
    let range = ClipRange::for_bit_depth(bit_depth);

    for c in 0..N_C {
        let chroma = if c > 0 { 1 } else { 0 };
        if flag[c] {
            let log2_w = log2_cuw - chroma;
            let log2_h = log2_cuh - chroma;
            evc_itrans(&mut coef[c], log2_w, log2_h, shift, range);

            TRACE_RESI(c, 1 << log2_w, 1 << log2_h, &coef[c]);
        }
    }
}
