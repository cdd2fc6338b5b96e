// Core moderation module - banned-word and spam-report business logic.

pub mod moderation_models;
pub mod moderation_service;
pub mod spam_tracker;
pub mod word_filter;

pub use moderation_models::*;
pub use moderation_service::*;
pub use word_filter::WordFilter;
