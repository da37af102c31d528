/// Fixed number of days a monthly allowance is spread over.
///
/// Not the length of the current calendar month.
pub const DAYS_PER_BUDGETING_PERIOD: u32 = 30;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Lowest accepted sleep quality rating
pub const MIN_SLEEP_QUALITY: u8 = 1;

/// Highest accepted sleep quality rating
pub const MAX_SLEEP_QUALITY: u8 = 5;
