pub mod profile;
pub mod roadmap;

pub use profile::{ExperienceBand, LearningStyle, Timeframe, UserProfile};
pub use roadmap::{Milestone, Roadmap};
