//! Text extraction adapters.

mod payload_text;

pub use payload_text::PayloadTextExtractor;
