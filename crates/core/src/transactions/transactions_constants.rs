/// Transaction types
///
/// Each constant represents one of the supported transaction categories.
/// The sign of the balance effect is derived from the type, never stored.
/// Incoming funds from outside the bank. Increases the account balance.
pub const TRANSACTION_TYPE_DEPOSIT: &str = "DEPOSIT";

/// Outgoing funds to an external destination. Decreases the balance.
pub const TRANSACTION_TYPE_WITHDRAWAL: &str = "WITHDRAWAL";

/// Funds sent to another account holder. Decreases the balance.
pub const TRANSACTION_TYPE_TRANSFER: &str = "TRANSFER";

/// Bill or merchant payment. Decreases the balance.
pub const TRANSACTION_TYPE_PAYMENT: &str = "PAYMENT";

/// Funds moved into an investment product. Decreases the liquid balance;
/// the amount lives on as an investment record until redeemed.
pub const TRANSACTION_TYPE_INVESTMENT: &str = "INVESTMENT";

/// Funds parked against a savings goal. Decreases the liquid balance;
/// the amount is tracked in the goal's `assigned` total until the goal
/// or the transaction is deleted.
pub const TRANSACTION_TYPE_GOAL: &str = "GOAL";

/// Income transaction types (increase the balance).
pub const INCOME_TRANSACTION_TYPES: [&str; 1] = [TRANSACTION_TYPE_DEPOSIT];

/// Expense transaction types (decrease the balance).
pub const EXPENSE_TRANSACTION_TYPES: [&str; 5] = [
    TRANSACTION_TYPE_WITHDRAWAL,
    TRANSACTION_TYPE_TRANSFER,
    TRANSACTION_TYPE_PAYMENT,
    TRANSACTION_TYPE_INVESTMENT,
    TRANSACTION_TYPE_GOAL,
];
