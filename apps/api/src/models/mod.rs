pub mod idea;
pub mod job;
pub mod skill;

pub use idea::ProjectIdea;
pub use job::JobPosting;
pub use skill::{AggregateSkill, ExtractionResult, SkillScore};
