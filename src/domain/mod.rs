pub mod appointment;
pub mod filter;

#[cfg(test)]
mod filter_tests;
