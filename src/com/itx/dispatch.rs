use super::scalar::*;
use super::*;
use crate::api::*;

use log::*;
use num_traits::FromPrimitive;

use std::fmt;
use std::str::FromStr;

/// Instruction set a kernel table is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive)]
pub enum Isa {
    Scalar = 0,
    Sse41 = 1,
    Avx2 = 2,
    Neon = 3,
}

impl Isa {
    /// Whether kernels for this instruction set can run on the current CPU.
    pub fn is_available(self) -> bool {
        cpu_supports(self)
    }

    /// Every instruction set usable on this CPU, scalar first.
    pub fn available() -> Vec<Isa> {
        (0u8..)
            .map_while(Isa::from_u8)
            .filter(|isa| isa.is_available())
            .collect()
    }

    /// The fastest instruction set usable on this CPU.
    pub fn detect() -> Isa {
        let mut best = Isa::Scalar;
        for isa in Isa::available() {
            if isa.rank() > best.rank() {
                best = isa;
            }
        }
        best
    }

    fn rank(self) -> u8 {
        match self {
            Isa::Scalar => 0,
            Isa::Sse41 | Isa::Neon => 1,
            Isa::Avx2 => 2,
        }
    }
}

impl fmt::Display for Isa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::Isa::*;
        match self {
            Scalar => write!(f, "scalar"),
            Sse41 => write!(f, "sse4.1"),
            Avx2 => write!(f, "avx2"),
            Neon => write!(f, "neon"),
        }
    }
}

impl FromStr for Isa {
    type Err = ItxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use self::Isa::*;
        match s.trim().to_ascii_lowercase().as_str() {
            "scalar" | "c" | "rust" => Ok(Scalar),
            "sse4.1" | "sse41" | "sse" => Ok(Sse41),
            "avx2" | "avx" => Ok(Avx2),
            "neon" => Ok(Neon),
            _ => Err(ItxError::UnknownIsa(s.to_owned())),
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        fn cpu_supports(isa: Isa) -> bool {
            match isa {
                Isa::Scalar => true,
                Isa::Sse41 => is_x86_feature_detected!("sse4.1"),
                Isa::Avx2 => {
                    is_x86_feature_detected!("sse4.1") && is_x86_feature_detected!("avx2")
                }
                Isa::Neon => false,
            }
        }
    } else if #[cfg(target_arch = "aarch64")] {
        fn cpu_supports(isa: Isa) -> bool {
            match isa {
                Isa::Scalar => true,
                Isa::Neon => std::arch::is_aarch64_feature_detected!("neon"),
                Isa::Sse41 | Isa::Avx2 => false,
            }
        }
    } else {
        fn cpu_supports(isa: Isa) -> bool {
            isa == Isa::Scalar
        }
    }
}

pub(crate) type EVC_ITXB0 = fn(src: &[i16], dst: &mut [i32], line: usize);
pub(crate) type EVC_ITXB1 =
    fn(src: &[i32], dst: &mut [i16], shift: usize, line: usize, range: ClipRange);

/// Vertical and horizontal pass of one transform size.
pub struct ItxKernel {
    pub(crate) log2_size: usize,
    pub(crate) isa: Isa,
    pub(crate) itxb0: EVC_ITXB0,
    pub(crate) itxb1: EVC_ITXB1,
}

impl ItxKernel {
    pub fn log2_size(&self) -> usize {
        self.log2_size
    }

    /// Instruction set of the code this entry runs first; vector kernels may still
    /// hand short batches to a narrower one.
    pub fn isa(&self) -> Isa {
        self.isa
    }
}

impl fmt::Debug for ItxKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = 1 << self.log2_size;
        write!(f, "ItxKernel({}x{}, {})", n, n, self.isa)
    }
}

/// Inverse transform kernels for every size from 2 to 64, indexed by `log2(N) - 1`.
#[derive(Debug)]
pub struct ItxTable {
    pub(crate) isa: Isa,
    pub(crate) kernels: [ItxKernel; MAX_TR_LOG2],
}

pub(crate) static ITX_TABLE_SCALAR: ItxTable = ItxTable {
    isa: Isa::Scalar,
    kernels: [
        ItxKernel {
            log2_size: 1,
            isa: Isa::Scalar,
            itxb0: itx_pb2b0,
            itxb1: itx_pb2b1,
        },
        ItxKernel {
            log2_size: 2,
            isa: Isa::Scalar,
            itxb0: itx_pbnb0::<2>,
            itxb1: itx_pbnb1::<2>,
        },
        ItxKernel {
            log2_size: 3,
            isa: Isa::Scalar,
            itxb0: itx_pbnb0::<3>,
            itxb1: itx_pbnb1::<3>,
        },
        ItxKernel {
            log2_size: 4,
            isa: Isa::Scalar,
            itxb0: itx_pbnb0::<4>,
            itxb1: itx_pbnb1::<4>,
        },
        ItxKernel {
            log2_size: 5,
            isa: Isa::Scalar,
            itxb0: itx_pbnb0::<5>,
            itxb1: itx_pbnb1::<5>,
        },
        ItxKernel {
            log2_size: 6,
            isa: Isa::Scalar,
            itxb0: itx_pbnb0::<6>,
            itxb1: itx_pbnb1::<6>,
        },
    ],
};

impl ItxTable {
    /// This table followed by the scalar one, each listed once.
    pub fn with_scalar(&'static self) -> Vec<&'static ItxTable> {
        let mut tables = vec![self];
        if self.isa != Isa::Scalar {
            tables.push(&ITX_TABLE_SCALAR);
        }
        tables
    }

    /// The portable table every other one must agree with bit for bit.
    pub fn scalar() -> &'static ItxTable {
        &ITX_TABLE_SCALAR
    }

    /// Table for `isa`, if this CPU can run it.
    pub fn for_isa(isa: Isa) -> Result<&'static ItxTable, ItxError> {
        if !isa.is_available() {
            return Err(ItxError::UnsupportedIsa(isa));
        }

        let table: &'static ItxTable = match isa {
            Isa::Scalar => &ITX_TABLE_SCALAR,
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            Isa::Sse41 => &super::x86::ITX_TABLE_SSE41,
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            Isa::Avx2 => &super::x86::ITX_TABLE_AVX2,
            #[cfg(target_arch = "aarch64")]
            Isa::Neon => &super::arm::ITX_TABLE_NEON,
            #[allow(unreachable_patterns)]
            _ => return Err(ItxError::UnsupportedIsa(isa)),
        };
        debug!("inverse transform table resolved for {}", isa);

        Ok(table)
    }

    /// Table for the fastest instruction set of this CPU.
    pub fn detect() -> &'static ItxTable {
        ItxTable::for_isa(Isa::detect()).unwrap_or(&ITX_TABLE_SCALAR)
    }

    pub fn isa(&self) -> Isa {
        self.isa
    }

    /// Kernel for transforms of `1 << log2_size` points.
    pub fn kernel(&self, log2_size: usize) -> &ItxKernel {
        assert!(
            log2_size >= MIN_TR_LOG2 && log2_size <= MAX_TR_LOG2,
            "unsupported transform size 1 << {}",
            log2_size
        );
        &self.kernels[log2_size - 1]
    }
}

lazy_static! {
    static ref ITX_TABLE: &'static ItxTable = {
        let table = ItxConfig::from_env().select();
        info!("inverse transform kernels: {}", table.isa());
        table
    };
}

/// The process-wide kernel table, chosen once on first use.
pub fn itx_table() -> &'static ItxTable {
    *ITX_TABLE
}

#[cfg(test)]
mod test {
    use super::*;
    use interpolate_name::interpolate_test;
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    /* extreme and random 16-bit blocks */
    fn blocks_i16(cnt: usize, seed: u8) -> Vec<Vec<i16>> {
        let mut ra = ChaChaRng::from_seed([seed; 32]);
        let mut blocks = vec![
            vec![i16::MAX; cnt],
            vec![i16::MIN; cnt],
            (0..cnt)
                .map(|i| if i & 1 == 0 { i16::MAX } else { i16::MIN })
                .collect(),
        ];
        for _ in 0..8 {
            blocks.push((0..cnt).map(|_| ra.gen()).collect());
        }
        blocks
    }

    /* intermediates: those reachable from 16-bit input plus out-of-lane magnitudes */
    fn blocks_i32(cnt: usize, seed: u8) -> Vec<Vec<i32>> {
        let mut ra = ChaChaRng::from_seed([seed; 32]);
        let mut blocks = vec![
            vec![MAX_TX_VAL_32; cnt],
            vec![MIN_TX_VAL_32; cnt],
            vec![188_743_680; cnt],
            vec![-188_743_680; cnt],
        ];
        for _ in 0..2 {
            blocks.push((0..cnt).map(|_| ra.gen_range(-4096, 4097)).collect());
            blocks.push(
                (0..cnt)
                    .map(|_| ra.gen_range(-188_743_680, 188_743_681))
                    .collect(),
            );
            blocks.push((0..cnt).map(|_| ra.gen()).collect());
        }
        blocks
    }

    #[interpolate_test(n2, 1)]
    #[interpolate_test(n4, 2)]
    #[interpolate_test(n8, 3)]
    #[interpolate_test(n16, 4)]
    #[interpolate_test(n32, 5)]
    #[interpolate_test(n64, 6)]
    fn every_table_matches_scalar(log2: usize) {
        let scalar = ItxTable::scalar();
        let n = 1 << log2;

        for isa in Isa::available() {
            let table = ItxTable::for_isa(isa).unwrap();
            for &line in &[1usize, 2, 3, 4, 5, 8, 12, 13, 64] {
                let vp = PassParameters::vertical(log2, line);
                for src in blocks_i16(n * line, log2 as u8) {
                    let mut expected = vec![0i32; n * line];
                    let mut got = vec![0i32; n * line];
                    scalar.vertical(&vp, &src, &mut expected);
                    table.vertical(&vp, &src, &mut got);
                    assert_eq!(got, expected, "{} vertical line={}", isa, line);
                }

                for &shift in &[0usize, 1, 12, MAX_ITX_SHIFT] {
                    let ranges = [
                        ClipRange::default(),
                        ClipRange::TX_32,
                        ClipRange::new(-512, 511),
                    ];
                    for &range in &ranges {
                        let hp = PassParameters::horizontal(log2, line, shift, range);
                        for src in blocks_i32(n * line, log2 as u8) {
                            let mut expected = vec![0i16; n * line];
                            let mut got = vec![0i16; n * line];
                            scalar.horizontal(&hp, &src, &mut expected);
                            table.horizontal(&hp, &src, &mut got);
                            assert_eq!(
                                got, expected,
                                "{} horizontal line={} shift={}",
                                isa, line, shift
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn size_two_always_routes_to_the_base_case() {
        for isa in Isa::available() {
            let table = ItxTable::for_isa(isa).unwrap();
            let kernel = table.kernel(1);
            assert_eq!(kernel.isa(), Isa::Scalar, "{}", isa);
            assert_eq!(kernel.log2_size(), 1);

            /* (a, b) -> (64 (a + b), 64 (a - b)) for both signs */
            let src = [5i16, -5, -3, 3];
            let mut tb = [0i32; 4];
            table.vertical(&PassParameters::vertical(1, 2), &src, &mut tb);
            assert_eq!(tb, [128, 512, -128, -512]);
        }
    }

    #[test]
    fn kernels_are_indexed_by_log2_size() {
        for isa in Isa::available() {
            let table = ItxTable::for_isa(isa).unwrap();
            assert_eq!(table.isa(), isa);
            for log2 in MIN_TR_LOG2..=MAX_TR_LOG2 {
                assert_eq!(table.kernel(log2).log2_size(), log2);
                if log2 > 1 {
                    assert_eq!(table.kernel(log2).isa(), isa);
                }
            }
        }
    }

    #[test]
    fn scalar_is_listed_once() {
        for isa in Isa::available() {
            let tables = ItxTable::for_isa(isa).unwrap().with_scalar();
            let isas: Vec<Isa> = tables.iter().map(|t| t.isa()).collect();
            let expected = if isa == Isa::Scalar {
                vec![Isa::Scalar]
            } else {
                vec![isa, Isa::Scalar]
            };
            assert_eq!(isas, expected);
        }
        assert_eq!(ItxTable::scalar().with_scalar().len(), 1);
    }

    #[test]
    #[should_panic]
    fn size_128_is_not_a_kernel() {
        ItxTable::scalar().kernel(7);
    }

    #[test]
    fn detection_is_consistent() {
        let available = Isa::available();
        assert_eq!(available[0], Isa::Scalar);
        assert!(available.contains(&Isa::detect()));
        assert_eq!(ItxTable::detect().isa(), Isa::detect());
        assert!(available.contains(&itx_table().isa()));
    }

    #[test]
    fn unavailable_isa_is_refused() {
        for isa in (0u8..).map_while(Isa::from_u8) {
            if !isa.is_available() {
                assert_eq!(
                    ItxTable::for_isa(isa).unwrap_err(),
                    ItxError::UnsupportedIsa(isa)
                );
            }
        }
    }

    #[test]
    fn isa_names_round_trip() {
        for isa in (0u8..).map_while(Isa::from_u8) {
            assert_eq!(isa.to_string().parse::<Isa>().unwrap(), isa);
        }
        assert_eq!("AVX2".parse::<Isa>().unwrap(), Isa::Avx2);
        assert_eq!(
            "mmx".parse::<Isa>().unwrap_err(),
            ItxError::UnknownIsa("mmx".to_owned())
        );
    }
}
