//! Random stimulus vectors for the packet scheduler testbench.
//!
//! Three files are produced per run, in this order, from a single random
//! stream: `head_info.txt` (resampled from a small pool of flow headers),
//! `buff_addr.txt` (uniform 32-bit buffer addresses) and `buff_gapn.txt`
//! (gap counts reduced modulo 32).

pub mod check;
pub mod codec;
pub mod vector;

pub use check::{check, Report};
pub use codec::{decode, encode, read_file, write_file, Format};
pub use vector::{generate, generate_all, Layout, Vector, VectorKind, VectorSpec};
