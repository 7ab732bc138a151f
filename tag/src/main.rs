use std::fs::File;
use std::io::{prelude::*, stdin};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use postiglione::{Model, Predictor, Sentence};

#[derive(Parser, Debug)]
#[command(about = "A program to assign part-of-speech tags to raw sentences.")]
struct Args {
    /// The model file to use when analyzing text
    #[arg(long)]
    model: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading model file...");
    let mut f = zstd::Decoder::new(File::open(args.model)?)?;
    let model = Model::read(&mut f)?;
    let predictor = Predictor::new(model);

    eprintln!("Start tagging");
    let mut n_tokens = 0;
    let start = Instant::now();
    for line in stdin().lock().lines() {
        let line = line?;
        if line.is_empty() {
            println!();
            continue;
        }
        // Failed sentences produce an empty line so that the output stays
        // line-aligned with the input.
        let s = match Sentence::from_raw(line) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                println!();
                continue;
            }
        };
        match predictor.predict(s) {
            Ok(s) => {
                n_tokens += s.len();
                println!("{}", s.to_tagged_string()?);
            }
            Err(e) => {
                eprintln!("{e}");
                println!();
            }
        }
    }
    let duration = start.elapsed();
    eprintln!("Elapsed: {} [sec]", duration.as_secs_f64());
    eprintln!(
        "Speed: {} [tokens/sec]",
        n_tokens as f64 / duration.as_secs_f64()
    );

    Ok(())
}
