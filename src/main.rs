mod args;
mod fl;

use clap::Parser;
use log::{debug, info};
use snafu::ErrorCompat;

use crate::args::Args;

fn main() {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    debug!("args: {:?}", args);

    let res = fl::run_load(
        &args.config,
        args.data_dir.clone(),
        args.out.clone(),
        args.reference.clone(),
        args.only.clone(),
    );

    match res {
        Ok(loaded) => {
            for (source, stats) in loaded.iter() {
                info!("{}: {} results", source, stats.inserted);
            }
        }
        Err(e) => {
            eprintln!("An error occured {}", e);
            if let Some(bt) = ErrorCompat::backtrace(&e) {
                eprintln!("trace: {}", bt);
            }
            std::process::exit(1);
        }
    }
}
