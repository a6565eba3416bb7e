/// Number of decimal places balances are rounded to before being written
/// back to the account store.
pub const BALANCE_DECIMAL_PRECISION: u32 = 2;

/// Display precision for amounts.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
