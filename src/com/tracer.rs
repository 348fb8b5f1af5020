#[cfg(feature = "trace_resi")]
use log::trace;

#[cfg(feature = "trace_resi")]
pub(crate) fn TRACE_RESI(ch_type: usize, cuw: usize, cuh: usize, resi: &[i16]) {
    let mut line = String::with_capacity(cuw * cuh * 8);
    for i in 0..cuw * cuh {
        if i != 0 {
            line.push_str(" , ");
        }
        line.push_str(&resi[i].to_string());
    }
    trace!("Resi for {} : {}", ch_type, line);
}

#[cfg(not(feature = "trace_resi"))]
#[inline(always)]
pub(crate) fn TRACE_RESI(_ch_type: usize, _cuw: usize, _cuh: usize, _resi: &[i16]) {}
