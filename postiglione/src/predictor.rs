use crate::errors::{PostiglioneError, Result};
use crate::matrix::Matrix;
use crate::model::Model;
use crate::sentence::Sentence;
use crate::vocab::{BOS_ID, EOS_ID};

/// Predictor.
pub struct Predictor {
    model: Model,
}

impl Predictor {
    /// Creates a new predictor.
    ///
    /// # Arguments
    ///
    /// * `model` - A model data.
    ///
    /// # Returns
    ///
    /// A new predictor.
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    /// Assigns a part-of-speech tag to every word of a sentence.
    ///
    /// The sentence is bracketed with the start and end markers and the most
    /// probable tag sequence is recovered with the Viterbi algorithm. Any
    /// tags already present on the sentence are replaced.
    ///
    /// # Arguments
    ///
    /// * `sentence` - A sentence.
    ///
    /// # Returns
    ///
    /// A tagged sentence.
    ///
    /// # Errors
    ///
    /// This function will return an error variant when:
    ///
    /// * A word of the sentence is missing from the vocabulary.
    /// * No tag sequence has nonzero probability under the model.
    ///
    /// # Examples
    ///
    /// ```
    /// use postiglione::{Predictor, Sentence, Trainer};
    ///
    /// let mut trainer = Trainer::new();
    /// trainer
    ///     .read_corpus("the_D dog_N runs_V\nthe_D cat_N sleeps_V\n".as_bytes())
    ///     .unwrap();
    /// let predictor = Predictor::new(trainer.train());
    ///
    /// let s = Sentence::from_raw("the dog sleeps").unwrap();
    /// let s = predictor.predict(s).unwrap();
    /// assert_eq!("the_D dog_N sleeps_V", s.to_tagged_string().unwrap());
    /// ```
    pub fn predict(&self, mut sentence: Sentence) -> Result<Sentence> {
        let word_vocab = &self.model.word_vocab;
        let mut word_ids = Vec::with_capacity(sentence.words().len() + 2);
        word_ids.push(BOS_ID);
        for word in sentence.words() {
            let id = word_vocab
                .id(word)
                .ok_or_else(|| PostiglioneError::out_of_vocabulary(word.as_str()))?;
            word_ids.push(id);
        }
        word_ids.push(EOS_ID);

        let tag_ids = self.viterbi(&word_ids)?;
        let tag_vocab = &self.model.tag_vocab;
        let tags = tag_ids
            .iter()
            .map(|&id| tag_vocab.terms()[id].clone())
            .collect();
        sentence.set_tags(tags);
        Ok(sentence)
    }

    fn viterbi(&self, word_ids: &[usize]) -> Result<Vec<usize>> {
        let len = word_ids.len();
        let n_tags = self.model.tag_vocab.len();

        let mut prob = Matrix::<f64>::new(len, n_tags);
        let mut back = Matrix::<Option<usize>>::new(len, n_tags);
        *prob.get_mut(0, BOS_ID) = 1.0;
        for i in 1..len {
            let word = word_ids[i];
            for j in 0..n_tags {
                let emission = self.model.emission_probs.get(j, word);
                if emission == 0.0 {
                    continue;
                }
                let mut best = 0.0;
                let mut best_prev = None;
                for k in 0..n_tags {
                    let score = prob.get(i - 1, k) * self.model.transition_probs.get(k, j);
                    if score > best {
                        best = score;
                        best_prev = Some(k);
                    }
                }
                if let Some(prev) = best_prev {
                    *prob.get_mut(i, j) = best * emission;
                    *back.get_mut(i, j) = Some(prev);
                }
            }
        }

        let mut best = 0.0;
        let mut best_tag = None;
        for j in 0..n_tags {
            let score = prob.get(len - 1, j);
            if score > best {
                best = score;
                best_tag = Some(j);
            }
        }
        let mut cur = best_tag.ok_or_else(|| {
            PostiglioneError::zero_probability("no tag sequence has nonzero probability")
        })?;

        let mut path = vec![0; len - 1];
        for i in (0..len - 1).rev() {
            cur = back
                .get(i + 1, cur)
                .ok_or_else(|| PostiglioneError::zero_probability("backtrace chain is broken"))?;
            path[i] = cur;
        }
        // path[0] is the start marker; the query tags follow it.
        Ok(path.split_off(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trainer::Trainer;

    fn train_model(corpus: &str) -> Model {
        let mut trainer = Trainer::new();
        trainer.read_corpus(corpus.as_bytes()).unwrap();
        trainer.train()
    }

    #[test]
    fn test_predict_self_consistent() {
        let predictor = Predictor::new(train_model("a_X b_Y\n"));
        let s = Sentence::from_raw("a b").unwrap();
        let s = predictor.predict(s).unwrap();

        assert_eq!("a_X b_Y", s.to_tagged_string().unwrap());
    }

    #[test]
    fn test_predict_single_word() {
        let predictor = Predictor::new(train_model("a_X\n"));
        let s = Sentence::from_raw("a").unwrap();
        let s = predictor.predict(s).unwrap();

        assert_eq!(&["X"], s.tags());
    }

    #[test]
    fn test_predict_best_path() {
        let predictor = Predictor::new(train_model("the_D dog_N runs_V\nthe_D cat_N sleeps_V\n"));
        let s = Sentence::from_raw("the cat runs").unwrap();
        let s = predictor.predict(s).unwrap();

        assert_eq!(&["D", "N", "V"], s.tags());
    }

    #[test]
    fn test_predict_replaces_existing_tags() {
        let predictor = Predictor::new(train_model("a_X b_Y\n"));
        let s = Sentence::from_tagged("a_Q b_Q").unwrap();
        let s = predictor.predict(s).unwrap();

        assert_eq!("a_X b_Y", s.to_tagged_string().unwrap());
    }

    #[test]
    fn test_predict_disambiguates_by_context() {
        // "run" is trained as both N and V; the surrounding transitions
        // decide which one survives.
        let predictor = Predictor::new(train_model("the_D run_N sells_V\nbirds_N run_V\n"));
        let s = Sentence::from_raw("birds run").unwrap();
        let s = predictor.predict(s).unwrap();

        assert_eq!("birds_N run_V", s.to_tagged_string().unwrap());
    }

    #[test]
    fn test_predict_tie_prefers_lowest_tag_index() {
        // Both X and Y emit "a" with the same probability, so the first
        // candidate in index order must win.
        let predictor = Predictor::new(train_model("a_X m_M\na_Y m_M\n"));
        let s = Sentence::from_raw("a m").unwrap();
        let s = predictor.predict(s).unwrap();

        assert_eq!("a_X m_M", s.to_tagged_string().unwrap());
    }

    #[test]
    fn test_predict_out_of_vocabulary() {
        let predictor = Predictor::new(train_model("a_X\n"));
        let s = Sentence::from_raw("a zzz").unwrap();
        let e = predictor.predict(s).err().unwrap();

        assert_eq!("OutOfVocabularyError: zzz", &e.to_string());
    }

    #[test]
    fn test_predict_zero_probability() {
        let predictor = Predictor::new(train_model("a_X b_Y\n"));
        let s = Sentence::from_raw("b a").unwrap();

        match predictor.predict(s) {
            Err(PostiglioneError::ZeroProbability(_)) => {}
            r => panic!("unexpected result: {r:?}"),
        }
    }

    #[test]
    fn test_predict_marker_word_zero_probability() {
        // The markers resolve in the vocabulary but no path can reach them
        // mid-sentence.
        let predictor = Predictor::new(train_model("a_X\n"));
        let s = Sentence::from_raw("<s>").unwrap();

        match predictor.predict(s) {
            Err(PostiglioneError::ZeroProbability(_)) => {}
            r => panic!("unexpected result: {r:?}"),
        }
    }

    #[test]
    fn test_predict_empty_model() {
        let predictor = Predictor::new(Trainer::new().train());
        let s = Sentence::from_raw("a").unwrap();

        match predictor.predict(s) {
            Err(PostiglioneError::OutOfVocabulary(_)) => {}
            r => panic!("unexpected result: {r:?}"),
        }
    }
}
