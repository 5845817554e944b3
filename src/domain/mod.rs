// Category roster
pub mod category;

// Per-day tallies
pub mod daily_record;

// Day selection (date or Overall)
pub mod day;

// Domain-specific error types
pub mod errors;

// Win/loss tally and percentage rules
pub mod record;
