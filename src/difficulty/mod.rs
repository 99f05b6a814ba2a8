pub mod colour;
pub mod history;
pub mod skill;
pub mod types;

pub use colour::ColourEvaluator;
pub use history::RunHistory;
pub use skill::StrainSkill;
pub use types::{DifficultyEvent, HitType, ObjectKind};
