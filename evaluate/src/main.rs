use std::fs::File;
use std::io::{prelude::*, stdin};
use std::path::PathBuf;

use clap::Parser;
use postiglione::{Model, Predictor, Sentence};

#[derive(Parser, Debug)]
#[command(about = "A program to evaluate the accuracy of Postiglione.")]
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
    let mut n_correct_tokens = 0;
    let mut n_sentences = 0;
    let mut n_correct_sentences = 0;
    let mut n_failed = 0;
    for line in stdin().lock().lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let s = Sentence::from_tagged(line)?;
        let reference = s.tags().to_vec();
        n_sentences += 1;
        n_tokens += reference.len();
        match predictor.predict(s) {
            Ok(s) => {
                let mut all_correct = true;
                for (r, h) in reference.iter().zip(s.tags()) {
                    if r == h {
                        n_correct_tokens += 1;
                    } else {
                        all_correct = false;
                    }
                }
                if all_correct {
                    n_correct_sentences += 1;
                }
            }
            Err(_) => {
                // Tokens of a failed sentence count as wrong.
                n_failed += 1;
            }
        }
    }

    println!(
        "Token accuracy: {}",
        n_correct_tokens as f64 / n_tokens as f64
    );
    println!(
        "Sentence accuracy: {}",
        n_correct_sentences as f64 / n_sentences as f64
    );
    println!("Failed sentences: {}", n_failed);

    Ok(())
}
