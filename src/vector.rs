use rand::Rng;
use std::io::{Error, ErrorKind, Result};
use structopt::StructOpt;

/// How the values of a vector are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorKind {
    /// Draw `pool_size` values once, then pick from them at random.
    Pooled { pool_size: usize },
    /// Independent values over the full 32-bit range.
    Uniform,
    /// Independent 32-bit values reduced modulo `modulus`.
    Bounded { modulus: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorSpec {
    pub file_name: &'static str,
    pub count: usize,
    pub kind: VectorKind,
}

impl VectorSpec {
    /// Flow header words, with intentional repetition.
    pub fn head_info(count: usize, pool_size: usize) -> Self {
        Self {
            file_name: "head_info.txt",
            count,
            kind: VectorKind::Pooled { pool_size },
        }
    }

    /// Buffer addresses.
    pub fn buff_addr(count: usize) -> Self {
        Self {
            file_name: "buff_addr.txt",
            count,
            kind: VectorKind::Uniform,
        }
    }

    /// Buffer gap counts.
    pub fn buff_gapn(count: usize, modulus: u32) -> Self {
        Self {
            file_name: "buff_gapn.txt",
            count,
            kind: VectorKind::Bounded { modulus },
        }
    }

    /// Exclusive upper bound on any value of this vector.
    pub fn bound(&self) -> u64 {
        match self.kind {
            VectorKind::Bounded { modulus } => modulus as u64,
            _ => 1 << 32,
        }
    }

    /// Maximum number of distinct values this vector may contain.
    pub fn max_distinct(&self) -> usize {
        match self.kind {
            VectorKind::Pooled { pool_size } => pool_size.min(self.count),
            _ => self.count,
        }
    }

    fn validate(&self) -> Result<()> {
        match self.kind {
            VectorKind::Pooled { pool_size: 0 } if self.count > 0 => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("{}: pool size must be positive", self.file_name),
            )),
            VectorKind::Pooled { pool_size } if pool_size > u32::MAX as usize => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("{}: pool size must fit in 32 bits", self.file_name),
            )),
            VectorKind::Bounded { modulus: 0 } => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("{}: modulus must be positive", self.file_name),
            )),
            _ => Ok(()),
        }
    }
}

/// Sizes of the standard vector set, shared by both binaries.
#[derive(Clone, Debug, StructOpt)]
pub struct Layout {
    /// Number of values per file
    #[structopt(long = "count", default_value = "2048")]
    pub count: usize,

    /// Number of distinct flow headers in head_info
    #[structopt(long = "pool-size", default_value = "64")]
    pub pool_size: usize,

    /// Exclusive upper bound of the buff_gapn values
    #[structopt(long = "gap-modulus", default_value = "32")]
    pub gap_modulus: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            count: 2048,
            pool_size: 64,
            gap_modulus: 32,
        }
    }
}

impl Layout {
    /// Returns the three standard specs in generation order.
    pub fn specs(&self) -> Result<Vec<VectorSpec>> {
        let specs = vec![
            VectorSpec::head_info(self.count, self.pool_size),
            VectorSpec::buff_addr(self.count),
            VectorSpec::buff_gapn(self.count, self.gap_modulus),
        ];

        for spec in &specs {
            spec.validate()?;
        }

        Ok(specs)
    }
}

#[derive(Clone, Debug)]
pub struct Vector {
    pub spec: VectorSpec,
    pub values: Vec<u32>,
    /// The pool the values were resampled from, for pooled vectors.
    pub pool: Option<Vec<u32>>,
}

/// Draws one vector from `rng`.
///
/// For pooled vectors the whole pool is drawn before any index, so the
/// stream consumption matches regardless of `count`. Indices are sampled as
/// `u32` so a seed yields the same vector on 32-bit and 64-bit targets.
pub fn generate<R: Rng + ?Sized>(spec: &VectorSpec, rng: &mut R) -> Result<Vector> {
    spec.validate()?;

    let (values, pool) = match spec.kind {
        VectorKind::Pooled { pool_size } => {
            let pool: Vec<u32> = (0..pool_size).map(|_| rng.next_u32()).collect();

            let upper = pool_size as u32;
            let values = (0..spec.count)
                .map(|_| pool[rng.gen_range(0..upper) as usize])
                .collect();

            (values, Some(pool))
        }
        VectorKind::Uniform => ((0..spec.count).map(|_| rng.next_u32()).collect(), None),
        VectorKind::Bounded { modulus } => (
            (0..spec.count).map(|_| rng.next_u32() % modulus).collect(),
            None,
        ),
    };

    Ok(Vector {
        spec: spec.clone(),
        values,
        pool,
    })
}

/// Generates every spec in order from the same stream.
pub fn generate_all<R: Rng + ?Sized>(specs: &[VectorSpec], rng: &mut R) -> Result<Vec<Vector>> {
    specs.iter().map(|spec| generate(spec, rng)).collect()
}
