use std::collections::BTreeSet;
use std::io::BufRead;

use crate::errors::{PostiglioneError, Result};
use crate::matrix::Matrix;
use crate::model::Model;
use crate::sentence::Sentence;
use crate::vocab::{Vocab, BOS, BOS_ID, EOS, EOS_ID};

fn corpus_error(line: usize, e: PostiglioneError) -> PostiglioneError {
    match e {
        PostiglioneError::InvalidArgument(e) => PostiglioneError::invalid_corpus(line, e.msg),
        e => e,
    }
}

/// Trainer.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
///
/// use postiglione::Trainer;
///
/// let mut trainer = Trainer::new();
/// let f = BufReader::new(File::open("corpus-train.txt").unwrap());
/// trainer.read_corpus(f).unwrap();
///
/// let model = trainer.train();
/// let mut f = zstd::Encoder::new(File::create("model.zst").unwrap(), 19).unwrap();
/// model.write(&mut f).unwrap();
/// f.finish().unwrap();
/// ```
pub struct Trainer {
    sentences: Vec<Sentence>,
}

impl Trainer {
    /// Creates a new trainer with an empty corpus.
    pub fn new() -> Self {
        Self { sentences: vec![] }
    }

    /// Adds a sentence to the training corpus.
    ///
    /// # Arguments
    ///
    /// * `s` - A tagged sentence.
    ///
    /// # Errors
    ///
    /// [`PostiglioneError::InvalidArgument`] will be returned if the sentence
    /// is untagged or uses a reserved marker symbol as a word or a tag.
    pub fn push_sentence(&mut self, s: Sentence) -> Result<()> {
        if !s.is_tagged() {
            return Err(PostiglioneError::invalid_argument(
                "s",
                "sentence has no tags",
            ));
        }
        for word in s.words() {
            if word == BOS || word == EOS {
                return Err(PostiglioneError::invalid_argument(
                    "s",
                    format!("word {word:?} is a reserved marker"),
                ));
            }
        }
        for tag in s.tags() {
            if tag == BOS || tag == EOS {
                return Err(PostiglioneError::invalid_argument(
                    "s",
                    format!("tag {tag:?} is a reserved marker"),
                ));
            }
        }
        self.sentences.push(s);
        Ok(())
    }

    /// Reads a tagged corpus with one sentence per line.
    ///
    /// # Arguments
    ///
    /// * `rdr` - A corpus source.
    ///
    /// # Errors
    ///
    /// [`PostiglioneError::InvalidCorpus`] will be returned if a line cannot
    /// be parsed, reporting its 1-based line number. Read failures are
    /// returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use postiglione::Trainer;
    ///
    /// let mut trainer = Trainer::new();
    /// trainer
    ///     .read_corpus("the_D dog_N runs_V\nthe_D cat_N sleeps_V\n".as_bytes())
    ///     .unwrap();
    /// assert_eq!(2, trainer.n_sentences());
    /// ```
    pub fn read_corpus<R>(&mut self, rdr: R) -> Result<()>
    where
        R: BufRead,
    {
        for (i, line) in rdr.lines().enumerate() {
            let line = line?;
            let s = Sentence::from_tagged(&line).map_err(|e| corpus_error(i + 1, e))?;
            self.push_sentence(s).map_err(|e| corpus_error(i + 1, e))?;
        }
        Ok(())
    }

    /// Gets the number of sentences in the corpus.
    pub fn n_sentences(&self) -> usize {
        self.sentences.len()
    }

    /// Estimates a model from the accumulated corpus.
    ///
    /// Builds both vocabularies, accumulates transition and emission counts
    /// over marker-bracketed sentences, and derives maximum likelihood
    /// estimates from the counts.
    ///
    /// # Returns
    ///
    /// A trained model.
    pub fn train(self) -> Model {
        let mut words = BTreeSet::new();
        let mut tags = BTreeSet::new();
        for s in &self.sentences {
            for word in s.words() {
                words.insert(word.clone());
            }
            for tag in s.tags() {
                tags.insert(tag.clone());
            }
        }
        let word_vocab = Vocab::from_symbols(words);
        let tag_vocab = Vocab::from_symbols(tags);

        let n_words = word_vocab.len();
        let n_tags = tag_vocab.len();
        let mut transition_counts = Matrix::new(n_tags, n_tags);
        let mut emission_counts = Matrix::new(n_tags, n_words);
        let mut tag_counts = vec![0u32; n_tags];

        for s in &self.sentences {
            let mut tag_ids = Vec::with_capacity(s.words().len() + 2);
            tag_ids.push(BOS_ID);
            *emission_counts.get_mut(BOS_ID, BOS_ID) += 1;
            tag_counts[BOS_ID] += 1;
            for (word, tag) in s.words().iter().zip(s.tags()) {
                // Lookups cannot fail: the vocabularies were just built from
                // these sentences.
                let word_id = word_vocab.id(word).unwrap();
                let tag_id = tag_vocab.id(tag).unwrap();
                *emission_counts.get_mut(tag_id, word_id) += 1;
                tag_counts[tag_id] += 1;
                tag_ids.push(tag_id);
            }
            tag_ids.push(EOS_ID);
            *emission_counts.get_mut(EOS_ID, EOS_ID) += 1;
            tag_counts[EOS_ID] += 1;
            for pair in tag_ids.windows(2) {
                *transition_counts.get_mut(pair[0], pair[1]) += 1;
            }
        }

        let mut transition_probs = Matrix::new(n_tags, n_tags);
        let mut emission_probs = Matrix::new(n_tags, n_words);
        for i in 0..n_tags {
            if tag_counts[i] == 0 {
                continue;
            }
            let marginal = f64::from(tag_counts[i]);
            // Nothing ever transitions into the start marker, so its column
            // stays zero.
            for j in 1..n_tags {
                *transition_probs.get_mut(i, j) =
                    f64::from(transition_counts.get(i, j)) / marginal;
            }
            for j in 0..n_words {
                *emission_probs.get_mut(i, j) = f64::from(emission_counts.get(i, j)) / marginal;
            }
        }

        Model {
            word_vocab,
            tag_vocab,
            transition_counts,
            emission_counts,
            tag_counts,
            transition_probs,
            emission_probs,
        }
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}
