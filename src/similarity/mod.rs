// Similarity scoring — tokenization, term-frequency vectors and cosine overlap.

pub mod band;
pub mod cosine;
pub mod segment;
pub mod stopwords;
pub mod tokenizer;
pub mod traits;
pub mod vector;
