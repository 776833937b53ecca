pub mod answer_extractor;
pub mod fuzzy_matcher;
pub mod normalizer;
pub mod option_parser;
pub mod segmenter;

pub use answer_extractor::extract_answer;
pub use fuzzy_matcher::best_match;
pub use normalizer::{normalize_block, normalize_inline};
pub use option_parser::{detect_multi_choice, parse_options};
pub use segmenter::{segment_questions, segment_solutions, split_header_options};
