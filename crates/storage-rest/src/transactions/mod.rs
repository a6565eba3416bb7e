//! REST store implementation for transactions.

mod repository;

pub use repository::TransactionRepository;
