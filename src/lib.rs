pub mod cli;
pub mod config;
pub mod error;
pub mod experiment;
pub mod read;
pub mod score;
pub mod scorer;
pub mod table;
