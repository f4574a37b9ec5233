mod device;
mod layout;
mod mbr;
mod print;
mod ptype;

use std::{path::PathBuf, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use device::BlkDevice;

/// List the MBR partitions and the logical partitions of the EBR chain
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Block device or disk image
    device: PathBuf,

    /// Log filter, written to stderr
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    let mut dev = match BlkDevice::open(&args.device) {
        Ok(dev) => dev,
        Err(e) => {
            eprintln!("error: failed to open {}: {}", args.device.display(), e);
            process::exit(1);
        }
    };

    match mbr::walk(&mut dev) {
        Ok(parts) => {
            if !parts.is_empty() {
                println!("partitions:");
                for (idx, p) in parts.iter().enumerate() {
                    println!("{}", print::partition_line(idx, p));
                }
            }
        }
        Err(e) => {
            eprintln!("error: {}: {}", args.device.display(), e);
            process::exit(1);
        }
    };
}
