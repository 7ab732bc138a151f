use std::fs;
use std::path::PathBuf;

use clap::Parser;
use postiglione::Model;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(about = "A program to dump tables of trained models.")]
struct Args {
    /// Input path of the model file
    #[arg(long)]
    model: PathBuf,

    /// Output the word vocabulary contained in the model.
    #[arg(long)]
    dump_words: Option<PathBuf>,

    /// Output the tag vocabulary contained in the model.
    #[arg(long)]
    dump_tags: Option<PathBuf>,

    /// Output transition counts and probabilities.
    #[arg(long)]
    dump_transitions: Option<PathBuf>,

    /// Output emission counts and probabilities.
    #[arg(long)]
    dump_emissions: Option<PathBuf>,
}

#[derive(Serialize)]
struct TermRecord<'a> {
    index: usize,
    term: &'a str,
}

#[derive(Serialize)]
struct TransitionRecord<'a> {
    from: &'a str,
    to: &'a str,
    count: u32,
    probability: f64,
}

#[derive(Serialize)]
struct EmissionRecord<'a> {
    tag: &'a str,
    word: &'a str,
    count: u32,
    probability: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading model file...");
    let mut f = zstd::Decoder::new(fs::File::open(args.model)?)?;
    let model = Model::read(&mut f)?;

    if let Some(path) = args.dump_words {
        eprintln!("Saving word vocabulary...");
        let file = fs::File::create(path)?;
        let mut wtr = csv::Writer::from_writer(file);
        for (index, term) in model.word_vocab().terms().iter().enumerate() {
            wtr.serialize(TermRecord { index, term })?;
        }
    }

    if let Some(path) = args.dump_tags {
        eprintln!("Saving tag vocabulary...");
        let file = fs::File::create(path)?;
        let mut wtr = csv::Writer::from_writer(file);
        for (index, term) in model.tag_vocab().terms().iter().enumerate() {
            wtr.serialize(TermRecord { index, term })?;
        }
    }

    if let Some(path) = args.dump_transitions {
        eprintln!("Saving transition table...");
        let file = fs::File::create(path)?;
        let mut wtr = csv::Writer::from_writer(file);
        let tags = model.tag_vocab().terms();
        let counts = model.transition_counts();
        let probs = model.transition_probs();
        for i in 0..counts.rows() {
            for j in 0..counts.cols() {
                let count = counts.get(i, j);
                if count == 0 {
                    continue;
                }
                wtr.serialize(TransitionRecord {
                    from: &tags[i],
                    to: &tags[j],
                    count,
                    probability: probs.get(i, j),
                })?;
            }
        }
    }

    if let Some(path) = args.dump_emissions {
        eprintln!("Saving emission table...");
        let file = fs::File::create(path)?;
        let mut wtr = csv::Writer::from_writer(file);
        let tags = model.tag_vocab().terms();
        let words = model.word_vocab().terms();
        let counts = model.emission_counts();
        let probs = model.emission_probs();
        for i in 0..counts.rows() {
            for j in 0..counts.cols() {
                let count = counts.get(i, j);
                if count == 0 {
                    continue;
                }
                wtr.serialize(EmissionRecord {
                    tag: &tags[i],
                    word: &words[j],
                    count,
                    probability: probs.get(i, j),
                })?;
            }
        }
    }

    Ok(())
}
