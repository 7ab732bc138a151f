//! # Postiglione
//!
//! Postiglione is a bigram hidden Markov model based part-of-speech tagger.
//!
//! ## Examples
//!
//! Model files are zstd-compressed, as written by the bundled `train`
//! command:
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::{prelude::*, stdin};
//!
//! use postiglione::{Model, Predictor, Sentence};
//!
//! let mut f = zstd::Decoder::new(File::open("model.zst").unwrap()).unwrap();
//! let model = Model::read(&mut f).unwrap();
//! let predictor = Predictor::new(model);
//!
//! for line in stdin().lock().lines() {
//!     let s = Sentence::from_raw(line.unwrap()).unwrap();
//!     let s = predictor.predict(s).unwrap();
//!     println!("{}", s.to_tagged_string().unwrap());
//! }
//! ```
//!
//! Models are estimated from a tagged corpus. For more details, see [`Trainer`].

pub mod errors;

mod matrix;
mod model;
mod predictor;
mod sentence;
mod trainer;
mod vocab;

pub use matrix::Matrix;
pub use model::Model;
pub use predictor::Predictor;
pub use sentence::Sentence;
pub use trainer::Trainer;
pub use vocab::{Vocab, BOS, BOS_ID, EOS, EOS_ID};
