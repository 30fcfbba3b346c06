use parse_int::parse;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::fs;
use std::io::Result;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;
use testgen::{generate_all, write_file, Format, Layout};

/// Accepts decimal or `0x`-prefixed hex, with `_` digit separators.
fn parse_seed(src: &str) -> std::result::Result<u64, ParseIntError> {
    parse::<u64>(&src.replace('_', ""))
}

fn run(args: Opt) -> Result<()> {
    let specs = args.layout.specs()?;
    let format = Format::from_binary_flag(args.binary);

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("[-] Using seed 0x{:016x}.", seed);

    let mut rng = Pcg32::seed_from_u64(seed);

    fs::create_dir_all(&args.out_dir)?;

    for vector in generate_all(&specs, &mut rng)? {
        let path = format.path_in(&args.out_dir, vector.spec.file_name);

        write_file(&path, &vector.values, format).map_err(|err| {
            println!("[!] Failed to write {}!", path.display());
            err
        })?;

        match &vector.pool {
            Some(pool) => {
                let pool_path = format.pool_path_in(&args.out_dir, vector.spec.file_name);
                write_file(&pool_path, pool, format)?;

                println!(
                    "[+] Wrote {} values from a pool of {} to {} (pool in {}).",
                    vector.values.len(),
                    pool.len(),
                    path.display(),
                    pool_path.display()
                )
            }
            None => println!(
                "[+] Wrote {} values to {}.",
                vector.values.len(),
                path.display()
            ),
        }
    }

    println!("[+] Stimulus vectors generated in {}.", args.out_dir.display());

    Ok(())
}

fn main() {
    if let Err(err) = run(Opt::from_args()) {
        eprintln!("\nfatal error: {}", err);
        process::exit(1);
    }
}

#[derive(StructOpt)]
#[structopt(about)]
struct Opt {
    /// Seed for the generator, decimal or 0x-prefixed hex (random if omitted)
    #[structopt(long = "seed", parse(try_from_str = parse_seed))]
    seed: Option<u64>,

    /// Write raw 32-bit words to .bin files instead of hex text
    #[structopt(long = "binary")]
    binary: bool,

    /// Directory the vector files are written to
    #[structopt(long = "out-dir", default_value = ".", parse(from_os_str))]
    out_dir: PathBuf,

    #[structopt(flatten)]
    layout: Layout,
}
