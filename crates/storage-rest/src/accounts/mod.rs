//! REST store implementation for accounts.

mod repository;

pub use repository::AccountRepository;
