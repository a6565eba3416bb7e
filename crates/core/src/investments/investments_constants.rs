/// Investment product types
/// Investment funds.
pub const INVESTMENT_TYPE_FUNDS: &str = "FUNDS";

/// Government treasury bonds.
pub const INVESTMENT_TYPE_TREASURY: &str = "TREASURY";

/// Private pension plans.
pub const INVESTMENT_TYPE_PENSION: &str = "PENSION";

/// Stock market positions.
pub const INVESTMENT_TYPE_STOCKS: &str = "STOCKS";
