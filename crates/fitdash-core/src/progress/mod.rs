mod quotes;
mod rules;

pub use quotes::{motivational_quote, random_quote, QUOTES};
pub use rules::ProgressRules;
