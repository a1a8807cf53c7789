pub mod combinations;
pub mod engine;
pub mod index;
pub mod occurrences;
pub mod search;
pub mod types;
