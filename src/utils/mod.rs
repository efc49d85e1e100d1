pub mod time_ago;
pub mod validate;

pub use time_ago::time_ago;
