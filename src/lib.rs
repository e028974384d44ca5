pub mod cli;
pub mod config;
pub mod errors;

#[cfg(test)]
mod tests;
