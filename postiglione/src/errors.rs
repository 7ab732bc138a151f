//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = PostiglioneError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum PostiglioneError {
    InvalidCorpus(InvalidCorpusError),
    InvalidArgument(InvalidArgumentError),
    OutOfVocabulary(OutOfVocabularyError),
    ZeroProbability(ZeroProbabilityError),
    DecodeError(bincode::error::DecodeError),
    EncodeError(bincode::error::EncodeError),
    IOError(std::io::Error),
}

impl PostiglioneError {
    pub(crate) fn invalid_corpus<S>(line: usize, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidCorpus(InvalidCorpusError {
            line,
            msg: msg.into(),
        })
    }

    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn out_of_vocabulary<S>(word: S) -> Self
    where
        S: Into<String>,
    {
        Self::OutOfVocabulary(OutOfVocabularyError { word: word.into() })
    }

    pub(crate) fn zero_probability<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::ZeroProbability(ZeroProbabilityError { msg: msg.into() })
    }
}

impl fmt::Display for PostiglioneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidCorpus(e) => e.fmt(f),
            Self::InvalidArgument(e) => e.fmt(f),
            Self::OutOfVocabulary(e) => e.fmt(f),
            Self::ZeroProbability(e) => e.fmt(f),
            Self::DecodeError(e) => e.fmt(f),
            Self::EncodeError(e) => e.fmt(f),
            Self::IOError(e) => e.fmt(f),
        }
    }
}

impl Error for PostiglioneError {}

/// Error used when the training corpus is broken.
#[derive(Debug)]
pub struct InvalidCorpusError {
    /// Line number where the error occurred (1-based).
    pub(crate) line: usize,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidCorpusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidCorpusError: line {}: {}", self.line, self.msg)
    }
}

impl Error for InvalidCorpusError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when a query word is missing from the vocabulary.
#[derive(Debug)]
pub struct OutOfVocabularyError {
    /// The unknown word.
    pub(crate) word: String,
}

impl fmt::Display for OutOfVocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OutOfVocabularyError: {}", self.word)
    }
}

impl Error for OutOfVocabularyError {}

/// Error used when no tag sequence has nonzero probability.
#[derive(Debug)]
pub struct ZeroProbabilityError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for ZeroProbabilityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ZeroProbabilityError: {}", self.msg)
    }
}

impl Error for ZeroProbabilityError {}

impl From<bincode::error::DecodeError> for PostiglioneError {
    fn from(error: bincode::error::DecodeError) -> Self {
        Self::DecodeError(error)
    }
}

impl From<bincode::error::EncodeError> for PostiglioneError {
    fn from(error: bincode::error::EncodeError) -> Self {
        Self::EncodeError(error)
    }
}

impl From<std::io::Error> for PostiglioneError {
    fn from(error: std::io::Error) -> Self {
        Self::IOError(error)
    }
}
