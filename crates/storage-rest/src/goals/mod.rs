//! REST store implementation for goals.

mod repository;

pub use repository::GoalRepository;
