use std::io::Result;
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;
use testgen::{check, read_file, Format, Layout, VectorKind};

fn run(args: Opt) -> Result<()> {
    let format = Format::from_binary_flag(args.binary);

    for spec in args.layout.specs()? {
        let path = format.path_in(&args.dir, spec.file_name);

        println!("[-] Checking {}.", path.display());

        let values = read_file(&path, format).map_err(|err| {
            println!("[!] Failed to read {}!", path.display());
            err
        })?;

        let pool_path = format.pool_path_in(&args.dir, spec.file_name);
        let pool = match spec.kind {
            VectorKind::Pooled { .. } if pool_path.exists() => {
                println!("[-] Checking against pool {}.", pool_path.display());
                Some(read_file(&pool_path, format)?)
            }
            _ => None,
        };

        let report = check(&spec, &values, pool.as_deref())?;
        println!("[+] {}", report);
    }

    println!("[+] All vectors are well-formed.");

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
    /// Read raw 32-bit words from .bin files instead of hex text
    #[structopt(long = "binary")]
    binary: bool,

    /// Directory holding the vector files
    #[structopt(long = "dir", default_value = ".", parse(from_os_str))]
    dir: PathBuf,

    #[structopt(flatten)]
    layout: Layout,
}
