//! Investments module - domain models, services, and traits.

mod investments_constants;
mod investments_errors;
mod investments_model;
mod investments_service;
mod investments_traits;

#[cfg(test)]
mod investments_service_tests;

pub use investments_constants::*;
pub use investments_errors::InvestmentError;
pub use investments_model::{Investment, InvestmentType, NewInvestment};
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
