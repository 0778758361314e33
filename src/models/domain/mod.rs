pub mod study_module;
pub mod topic;
pub use study_module::{ComprehensionItem, EssayUnit, McqItem, StudyModule};
pub use topic::TopicEntry;
