pub mod history;
pub mod homyo;
pub mod user;
