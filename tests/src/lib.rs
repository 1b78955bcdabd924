//! This crate contains the tree store integration tests

#[cfg(test)]
mod store;
#[cfg(test)]
mod utils;
