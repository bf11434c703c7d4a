pub mod calculator;
pub mod config;
pub mod ingest;
pub mod logic;
pub mod timeline;

pub use logic::Core;
