use std::error::Error;

use ascii_generator::cli::{self, Args};
use clap::Parser;

fn main() {
    let args = Args::parse();

    match cli::run(&args) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("{}", e);
            // Underlying causes (decoder, filesystem, TOML) one per line
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("{}", cause);
                source = cause.source();
            }
            std::process::exit(1);
        }
    }
}
