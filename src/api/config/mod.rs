mod itx;

pub use itx::*;
