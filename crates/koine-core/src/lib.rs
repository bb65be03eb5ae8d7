//! Annotation pipeline for the tagged Greek New Testament.
//!
//! Each corpus token becomes a [`annotate::WordAnnotation`]: decoded
//! morphology, a katakana reading, a Latin transliteration, and gloss /
//! dictionary cross-references. Tokens are then grouped into books,
//! chapters and verses by [`aggregate::Aggregator`].

pub mod aggregate;
pub mod annotate;
pub mod books;
pub mod corpus;
pub mod katakana;
pub mod lexicon;
pub mod morphology;
pub mod normalize;
pub mod pipeline;
pub mod romanize;
pub mod settings;
