pub mod catalog;
pub mod filter;
pub mod query;
pub mod rank;
pub mod session;

pub use crate::domain::model::{JobPosting, LearningResource, SkillGap, UserProfile};
pub use crate::domain::ports::{AdvisoryService, ConfigProvider, Storage};
pub use crate::utils::error::Result;
