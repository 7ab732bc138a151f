use std::io::{Read, Write};

use bincode::{Decode, Encode};

use crate::errors::Result;
use crate::matrix::Matrix;
use crate::vocab::Vocab;

/// Model data.
#[derive(Debug, PartialEq, Decode, Encode)]
pub struct Model {
    pub(crate) word_vocab: Vocab,
    pub(crate) tag_vocab: Vocab,
    pub(crate) transition_counts: Matrix<u32>,
    pub(crate) emission_counts: Matrix<u32>,
    pub(crate) tag_counts: Vec<u32>,
    pub(crate) transition_probs: Matrix<f64>,
    pub(crate) emission_probs: Matrix<f64>,
}

impl Model {
    /// Exports the model data.
    ///
    /// # Arguments
    ///
    /// * `wtr` - Byte-oriented sink object.
    ///
    /// # Errors
    ///
    /// When `wtr` generates an error, it will be returned as is.
    pub fn write<W>(&self, wtr: &mut W) -> Result<()>
    where
        W: Write,
    {
        bincode::encode_into_std_write(self, wtr, bincode::config::standard())?;
        Ok(())
    }

    /// Creates a model from a reader.
    ///
    /// # Arguments
    ///
    /// * `rdr` - A data source.
    ///
    /// # Returns
    ///
    /// A model data read from `rdr`.
    ///
    /// # Errors
    ///
    /// When `rdr` generates an error, it will be returned as is.
    pub fn read<R>(rdr: &mut R) -> Result<Self>
    where
        R: Read,
    {
        Ok(bincode::decode_from_std_read(
            rdr,
            bincode::config::standard(),
        )?)
    }

    /// Gets the word vocabulary.
    pub fn word_vocab(&self) -> &Vocab {
        &self.word_vocab
    }

    /// Gets the tag vocabulary.
    pub fn tag_vocab(&self) -> &Vocab {
        &self.tag_vocab
    }

    /// Gets the transition counts, indexed by tag pair.
    pub fn transition_counts(&self) -> &Matrix<u32> {
        &self.transition_counts
    }

    /// Gets the emission counts, indexed by tag and word.
    pub fn emission_counts(&self) -> &Matrix<u32> {
        &self.emission_counts
    }

    /// Gets the marginal tag counts.
    pub fn tag_counts(&self) -> &[u32] {
        &self.tag_counts
    }

    /// Gets the transition probabilities, indexed by tag pair.
    pub fn transition_probs(&self) -> &Matrix<f64> {
        &self.transition_probs
    }

    /// Gets the emission probabilities, indexed by tag and word.
    pub fn emission_probs(&self) -> &Matrix<f64> {
        &self.emission_probs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trainer::Trainer;

    #[test]
    fn test_model_write_read_round_trip() {
        let mut trainer = Trainer::new();
        trainer
            .read_corpus("the_D dog_N runs_V\nthe_D cat_N sleeps_V\n".as_bytes())
            .unwrap();
        let model = trainer.train();

        let mut buf = vec![];
        model.write(&mut buf).unwrap();
        let mut slice = buf.as_slice();
        let decoded = Model::read(&mut slice).unwrap();

        assert_eq!(model, decoded);
        assert_eq!(Some(3), decoded.word_vocab().id("dog"));
    }
}
