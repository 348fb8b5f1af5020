#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

#[macro_use]
extern crate num_derive;

#[macro_use]
extern crate lazy_static;

pub mod api;
pub mod com;

pub use crate::api::*;

#[cfg(feature = "bench")]
pub mod bench {
    pub mod itx {
        pub use crate::api::*;
        pub use crate::com::itx::*;
    }
}
