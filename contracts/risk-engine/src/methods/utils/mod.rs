pub mod book_walk;
pub mod exchange_rate;
pub mod rate;
