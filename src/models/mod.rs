pub mod quiz_item;
pub mod record;

pub use quiz_item::{QuestionType, QuizItem};
pub use record::{Block, QuestionRecord, SolutionRecord};
