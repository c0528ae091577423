// Match scoring engine: normalization, the three lexical metrics, and the composite
// scorer that blends them. Pure functions over in-memory text; the only collaborator
// is the markup extractor behind `extract::TextExtractor`.

pub mod composite;
pub mod cosine;
pub mod extract;
pub mod handlers;
pub mod keyword_overlap;
pub mod normalize;
pub mod skills;
