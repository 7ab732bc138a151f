use crate::errors::{PostiglioneError, Result};

/// Separator between a word and its tag in annotated text.
const TAG_SEPARATOR: char = '_';

/// Sentence with part-of-speech annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    words: Vec<String>,
    tags: Vec<String>,
}

impl Sentence {
    /// Creates a new [`Sentence`] from a raw string.
    ///
    /// # Arguments
    ///
    /// * `text` - A whitespace separated sequence of words without annotations.
    ///
    /// # Returns
    ///
    /// A new [`Sentence`] without tags.
    ///
    /// # Errors
    ///
    /// If the given `text` contains no words, an error variant will be returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use postiglione::Sentence;
    ///
    /// let s = Sentence::from_raw("the dog runs");
    /// assert!(s.is_ok());
    ///
    /// let s = Sentence::from_raw("");
    /// assert!(s.is_err());
    /// ```
    pub fn from_raw<S>(text: S) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let words: Vec<String> = text
            .as_ref()
            .split_whitespace()
            .map(|w| w.to_string())
            .collect();

        if words.is_empty() {
            return Err(PostiglioneError::invalid_argument(
                "text",
                "must contain at least one word",
            ));
        }

        Ok(Self {
            words,
            tags: vec![],
        })
    }

    /// Creates a new [`Sentence`] from a tagged string.
    ///
    /// Each token must consist of a word and a tag joined by an underscore.
    /// The word and the tag are split at the last underscore, so words may
    /// contain underscores themselves.
    ///
    /// # Arguments
    ///
    /// * `tagged_text` - A whitespace separated sequence of `word_TAG` tokens.
    ///
    /// # Returns
    ///
    /// A new [`Sentence`] with tags.
    ///
    /// # Errors
    ///
    /// This function will return an error variant when:
    ///
    /// * `tagged_text` contains no tokens.
    /// * A token contains no underscore.
    /// * A word or a tag is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use postiglione::Sentence;
    ///
    /// let s = Sentence::from_tagged("the_D dog_N runs_V").unwrap();
    /// assert_eq!(&["the", "dog", "runs"], s.words());
    /// assert_eq!(&["D", "N", "V"], s.tags());
    /// ```
    pub fn from_tagged<S>(tagged_text: S) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let mut words = vec![];
        let mut tags = vec![];
        for token in tagged_text.as_ref().split_whitespace() {
            let (word, tag) = token.rsplit_once(TAG_SEPARATOR).ok_or_else(|| {
                PostiglioneError::invalid_argument(
                    "tagged_text",
                    format!("token {token:?} must be of the form word_TAG"),
                )
            })?;
            if word.is_empty() {
                return Err(PostiglioneError::invalid_argument(
                    "tagged_text",
                    format!("token {token:?} has an empty word"),
                ));
            }
            if tag.is_empty() {
                return Err(PostiglioneError::invalid_argument(
                    "tagged_text",
                    format!("token {token:?} has an empty tag"),
                ));
            }
            words.push(word.to_string());
            tags.push(tag.to_string());
        }

        if words.is_empty() {
            return Err(PostiglioneError::invalid_argument(
                "tagged_text",
                "must contain at least one token",
            ));
        }

        Ok(Self { words, tags })
    }

    /// Gets the words.
    ///
    /// # Examples
    ///
    /// ```
    /// use postiglione::Sentence;
    ///
    /// let s = Sentence::from_raw("the dog runs").unwrap();
    /// assert_eq!(&["the", "dog", "runs"], s.words());
    /// ```
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Gets the tags. The slice is empty if the sentence is untagged.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the number of words. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Checks whether every word carries a tag.
    pub fn is_tagged(&self) -> bool {
        !self.tags.is_empty()
    }

    pub(crate) fn set_tags(&mut self, tags: Vec<String>) {
        debug_assert_eq!(self.words.len(), tags.len());
        self.tags = tags;
    }

    /// Generates a string with `word_TAG` tokens.
    ///
    /// # Returns
    ///
    /// A tagged string.
    ///
    /// # Errors
    ///
    /// If the sentence is untagged, an error variant will be returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use postiglione::Sentence;
    ///
    /// let s = Sentence::from_tagged("the_D dog_N runs_V").unwrap();
    /// assert_eq!("the_D dog_N runs_V", s.to_tagged_string().unwrap());
    /// ```
    pub fn to_tagged_string(&self) -> Result<String> {
        if !self.is_tagged() {
            return Err(PostiglioneError::invalid_argument(
                "sentence",
                "sentence has no tags",
            ));
        }
        let mut result = String::new();
        for (word, tag) in self.words.iter().zip(&self.tags) {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(word);
            result.push(TAG_SEPARATOR);
            result.push_str(tag);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_from_raw_empty() {
        let s = Sentence::from_raw("");

        assert!(s.is_err());
        assert_eq!(
            "InvalidArgumentError: text: must contain at least one word",
            &s.err().unwrap().to_string()
        );
    }

    #[test]
    fn test_sentence_from_raw_whitespace_only() {
        let s = Sentence::from_raw("   ");

        assert!(s.is_err());
    }

    #[test]
    fn test_sentence_from_raw_untagged() {
        let s = Sentence::from_raw("the dog runs").unwrap();

        assert_eq!(&["the", "dog", "runs"], s.words());
        assert_eq!(3, s.len());
        assert!(s.tags().is_empty());
        assert!(!s.is_tagged());
    }

    #[test]
    fn test_sentence_from_tagged_empty() {
        let s = Sentence::from_tagged("");

        assert!(s.is_err());
        assert_eq!(
            "InvalidArgumentError: tagged_text: must contain at least one token",
            &s.err().unwrap().to_string()
        );
    }

    #[test]
    fn test_sentence_from_tagged_no_separator() {
        let s = Sentence::from_tagged("the_D dog runs_V");

        assert!(s.is_err());
        assert_eq!(
            "InvalidArgumentError: tagged_text: token \"dog\" must be of the form word_TAG",
            &s.err().unwrap().to_string()
        );
    }

    #[test]
    fn test_sentence_from_tagged_empty_word() {
        let s = Sentence::from_tagged("_D");

        assert!(s.is_err());
    }

    #[test]
    fn test_sentence_from_tagged_empty_tag() {
        let s = Sentence::from_tagged("dog_");

        assert!(s.is_err());
    }

    #[test]
    fn test_sentence_from_tagged_splits_at_last_separator() {
        let s = Sentence::from_tagged("ice_cream_N").unwrap();

        assert_eq!(&["ice_cream"], s.words());
        assert_eq!(&["N"], s.tags());
    }

    #[test]
    fn test_sentence_to_tagged_string_untagged() {
        let s = Sentence::from_raw("the dog runs").unwrap();

        assert!(s.to_tagged_string().is_err());
    }

    #[test]
    fn test_sentence_tagged_string_round_trip() {
        let s = Sentence::from_tagged("a_X b_Y").unwrap();

        assert_eq!("a_X b_Y", s.to_tagged_string().unwrap());
    }
}
