use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use postiglione::Trainer;

#[derive(Parser, Debug)]
#[command(about = "A program to train models of Postiglione.")]
struct Args {
    /// A tagged training corpus with one sentence per line
    #[arg(long)]
    corpus: PathBuf,

    /// The file to write the trained model to
    #[arg(long)]
    model: PathBuf,

    /// The number of workers for zstd (0 means multithreaded will be disabled)
    #[arg(long, default_value = "0")]
    zstd_workers: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading corpus {:?} ...", args.corpus);
    let mut trainer = Trainer::new();
    let f = BufReader::new(File::open(args.corpus)?);
    trainer.read_corpus(f)?;
    eprintln!("# of sentences: {}", trainer.n_sentences());

    eprintln!("Start training...");
    let model = trainer.train();
    eprintln!("Finish training.");
    eprintln!("# of words: {}", model.word_vocab().len());
    eprintln!("# of tags: {}", model.tag_vocab().len());

    let mut f = zstd::Encoder::new(File::create(args.model)?, 19)?;
    f.multithread(args.zstd_workers)?;
    model.write(&mut f)?;
    f.finish()?;

    Ok(())
}
