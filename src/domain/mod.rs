pub mod branch;
pub mod prompt;
pub mod ticket;
