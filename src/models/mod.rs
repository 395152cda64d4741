pub mod option;

pub use option::{years_from_days, OptionField, OptionParameters, OptionType, DAYS_PER_YEAR};
