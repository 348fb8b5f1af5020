pub mod itx;
pub(crate) mod tbl;
pub(crate) mod tracer;
pub(crate) mod util;

/* default bit depth of the baseline profile */
pub const BIT_DEPTH: usize = 10;

pub const Y_C: usize = 0; /* Y luma */
pub const U_C: usize = 1; /* Cb Chroma */
pub const V_C: usize = 2; /* Cr Chroma */
pub const N_C: usize = 3; /* number of color component */

pub const MAX_CU_LOG2: usize = 6; // baseline: 64x64
pub const MAX_CU_SIZE: usize = (1 << MAX_CU_LOG2);
pub const MAX_CU_DIM: usize = (1 << (MAX_CU_LOG2 + MAX_CU_LOG2));

pub const MAX_TR_LOG2: usize = 6; /* 64x64 */
pub const MIN_TR_LOG2: usize = 1; /* 2x2 */
pub const MAX_TR_SIZE: usize = (1 << MAX_TR_LOG2);
pub const MIN_TR_SIZE: usize = (1 << MIN_TR_LOG2);
pub const MAX_TR_DIM: usize = (MAX_TR_SIZE * MAX_TR_SIZE);
pub const MIN_TR_DIM: usize = (MIN_TR_SIZE * MIN_TR_SIZE);

/* dynamic range of the residual coming out of the inverse transform */
pub const MAX_TX_DYNAMIC_RANGE: usize = 15;
pub const MAX_TX_VAL: i32 = 32767;
pub const MIN_TX_VAL: i32 = -32768;

pub const MAX_TX_DYNAMIC_RANGE_32: usize = 31;
pub const MAX_TX_VAL_32: i32 = 2147483647;
pub const MIN_TX_VAL_32: i32 = -2147483648;

pub const ITX_SHIFT1: usize = 7; /* shift after 1st IT stage */

/* shift after 2nd IT stage */
#[inline]
pub const fn ITX_SHIFT2(bit_depth: usize) -> usize {
    12 - (bit_depth - 8)
}

/// Total shift applied by the horizontal pass for samples of `bit_depth` bits.
#[inline]
pub const fn itx_shift(bit_depth: usize) -> usize {
    ITX_SHIFT1 + ITX_SHIFT2(bit_depth)
}

/* largest shift the horizontal pass accepts */
pub const MAX_ITX_SHIFT: usize = 31;
