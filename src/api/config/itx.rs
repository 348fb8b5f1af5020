use crate::api::*;

use log::*;

use std::env;

/// Environment variable naming the instruction set of the process-wide kernels.
pub const EVC_ITX_ISA: &str = "EVC_ITX_ISA";

// Inverse transform settings. They only choose code paths, never the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItxConfig {
    // Forced instruction set, or `None` to use the best one the CPU offers.
    pub isa: Option<Isa>,
}

impl ItxConfig {
    /// Parses an instruction set name; `None`, an empty string and `auto` all mean
    /// auto-detection.
    pub fn parse(value: Option<&str>) -> Result<ItxConfig, ItxError> {
        let isa = match value.map(str::trim) {
            None | Some("") => None,
            Some(v) if v.eq_ignore_ascii_case("auto") => None,
            Some(v) => Some(v.parse::<Isa>()?),
        };
        Ok(ItxConfig { isa })
    }

    /// Reads `EVC_ITX_ISA`, falling back to auto-detection on a bad value.
    pub fn from_env() -> ItxConfig {
        let value = env::var(EVC_ITX_ISA).ok();
        match ItxConfig::parse(value.as_deref()) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("ignoring {}: {}", EVC_ITX_ISA, err);
                ItxConfig::default()
            }
        }
    }

    /// Resolves the kernel table this configuration asks for.
    pub fn select(&self) -> &'static ItxTable {
        match self.isa {
            None => ItxTable::detect(),
            Some(isa) => match ItxTable::for_isa(isa) {
                Ok(table) => table,
                Err(err) => {
                    warn!("{}, using {}", err, Isa::detect());
                    ItxTable::detect()
                }
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn auto_detect_spellings() {
        for v in &[None, Some(""), Some("auto"), Some(" AUTO ")] {
            assert_eq!(ItxConfig::parse(*v).unwrap(), ItxConfig::default());
        }
    }

    #[test]
    fn forced_isa() {
        assert_eq!(
            ItxConfig::parse(Some("sse4.1")).unwrap().isa,
            Some(Isa::Sse41)
        );
        assert_eq!(ItxConfig::parse(Some("Neon")).unwrap().isa, Some(Isa::Neon));
        assert_eq!(
            ItxConfig::parse(Some("scalar")).unwrap().select().isa(),
            Isa::Scalar
        );
    }

    #[test]
    fn bad_value_is_an_error() {
        assert_eq!(
            ItxConfig::parse(Some("avx512")),
            Err(ItxError::UnknownIsa("avx512".to_owned()))
        );
    }

    #[test]
    fn unsupported_isa_falls_back_to_detection() {
        for isa in &[Isa::Sse41, Isa::Avx2, Isa::Neon] {
            let cfg = ItxConfig { isa: Some(*isa) };
            let expected = if isa.is_available() { *isa } else { Isa::detect() };
            assert_eq!(cfg.select().isa(), expected);
        }
        assert_eq!(ItxConfig::default().select().isa(), Isa::detect());
    }
}
