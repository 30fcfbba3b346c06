use crate::vector::VectorSpec;
use itertools::{Itertools, MinMaxResult};
use std::collections::HashSet;
use std::fmt;
use std::io::{Error, ErrorKind, Result};

/// Summary of a vector that passed every check.
#[derive(Debug, PartialEq, Eq)]
pub struct Report {
    pub file_name: &'static str,
    pub count: usize,
    pub distinct: usize,
    pub range: Option<(u32, u32)>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} values, {} distinct",
            self.file_name, self.count, self.distinct
        )?;

        if let Some((lo, hi)) = self.range {
            write!(f, ", range 0x{:08x}..=0x{:08x}", lo, hi)?;
        }

        Ok(())
    }
}

fn violation(spec: &VectorSpec, message: String) -> Error {
    Error::new(
        ErrorKind::InvalidData,
        format!("{}: {}", spec.file_name, message),
    )
}

/// Verifies `values` against `spec`.
///
/// When the pool a pooled vector was drawn from is known, every value must
/// also belong to it.
pub fn check(spec: &VectorSpec, values: &[u32], pool: Option<&[u32]>) -> Result<Report> {
    if values.len() != spec.count {
        return Err(violation(
            spec,
            format!("expected {} values, found {}", spec.count, values.len()),
        ));
    }

    let bound = spec.bound();

    if let Some((index, value)) = values
        .iter()
        .enumerate()
        .find(|&(_, &v)| v as u64 >= bound)
    {
        return Err(violation(
            spec,
            format!(
                "value #{} (0x{:08x}) is not below {}",
                index + 1,
                value,
                bound
            ),
        ));
    }

    let distinct = values.iter().unique().count();

    if distinct > spec.max_distinct() {
        return Err(violation(
            spec,
            format!(
                "{} distinct values, at most {} allowed",
                distinct,
                spec.max_distinct()
            ),
        ));
    }

    if let Some(pool) = pool {
        let pool: HashSet<u32> = pool.iter().copied().collect();

        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|&(_, v)| !pool.contains(v))
        {
            return Err(violation(
                spec,
                format!("value #{} (0x{:08x}) is not in the pool", index + 1, value),
            ));
        }
    }

    let range = match values.iter().minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(&v) => Some((v, v)),
        MinMaxResult::MinMax(&lo, &hi) => Some((lo, hi)),
    };

    Ok(Report {
        file_name: spec.file_name,
        count: values.len(),
        distinct,
        range,
    })
}
