use std::collections::{BTreeSet, HashMap};

use bincode::{
    de::Decoder,
    enc::Encoder,
    error::{DecodeError, EncodeError},
    Decode, Encode,
};

/// Start marker bracketing every sentence.
pub const BOS: &str = "<s>";

/// End marker bracketing every sentence.
pub const EOS: &str = "</s>";

/// Index of [`BOS`] in every vocabulary.
pub const BOS_ID: usize = 0;

/// Index of [`EOS`] in every vocabulary.
pub const EOS_ID: usize = 1;

/// Symbol table assigning a stable index to every term.
///
/// The start and end markers always occupy the first two indices, and the
/// remaining terms follow in lexicographic order.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocab {
    terms: Vec<String>,
    ids: HashMap<String, usize>,
}

impl Vocab {
    pub(crate) fn from_symbols(symbols: BTreeSet<String>) -> Self {
        let mut terms = Vec::with_capacity(symbols.len() + 2);
        terms.push(BOS.to_string());
        terms.push(EOS.to_string());
        terms.extend(symbols);
        Self::from_terms(terms)
    }

    fn from_terms(terms: Vec<String>) -> Self {
        let ids = terms
            .iter()
            .enumerate()
            .map(|(id, term)| (term.clone(), id))
            .collect();
        Self { terms, ids }
    }

    /// Gets the index of a term.
    pub fn id(&self, term: &str) -> Option<usize> {
        self.ids.get(term).copied()
    }

    /// Gets the term at the given index.
    pub fn term(&self, id: usize) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }

    /// Gets all terms in index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Gets the number of terms, markers included. Never less than two.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

// Only the term vector is stored; the index is rebuilt on decoding.
impl Encode for Vocab {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        Encode::encode(&self.terms, encoder)?;
        Ok(())
    }
}

impl Decode for Vocab {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self, DecodeError> {
        let terms: Vec<String> = Decode::decode(decoder)?;
        Ok(Self::from_terms(terms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(terms: &[&str]) -> BTreeSet<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_vocab_marker_order() {
        let v = Vocab::from_symbols(symbols(&["b", "c", "a"]));

        assert_eq!(&["<s>", "</s>", "a", "b", "c"], v.terms());
        assert_eq!(5, v.len());
        assert_eq!(Some(BOS_ID), v.id(BOS));
        assert_eq!(Some(EOS_ID), v.id(EOS));
        assert_eq!(Some(2), v.id("a"));
        assert_eq!(Some(4), v.id("c"));
        assert_eq!(Some("b"), v.term(3));
    }

    #[test]
    fn test_vocab_unknown_term() {
        let v = Vocab::from_symbols(BTreeSet::new());

        assert_eq!(2, v.len());
        assert_eq!(None, v.id("a"));
        assert_eq!(None, v.term(2));
    }

    #[test]
    fn test_vocab_decode_rebuilds_index() {
        let v = Vocab::from_symbols(symbols(&["a", "b"]));
        let buf = bincode::encode_to_vec(&v, bincode::config::standard()).unwrap();
        let (decoded, _): (Vocab, usize) =
            bincode::decode_from_slice(&buf, bincode::config::standard()).unwrap();

        assert_eq!(v, decoded);
        assert_eq!(Some(3), decoded.id("b"));
    }
}
