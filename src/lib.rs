// papercheck: term-frequency similarity for Chinese documents
//
// This is the library root. `similarity` and `pipeline` are the scoring core;
// `document`, `output` and `config` are the boundary the binary is built on.

pub mod config;
pub mod document;
pub mod output;
pub mod pipeline;
pub mod similarity;

pub use pipeline::batch::CachedReference;
pub use pipeline::{score, Pipeline};
pub use similarity::cosine::cosine_similarity;
pub use similarity::tokenizer::{Tokenizer, TokenizerConfig};
pub use similarity::vector::FrequencyVector;
