mod pages;
mod pdf;
mod security;

#[cfg(test)]
#[path = "../../tests/common/mod.rs"]
mod fixtures;

pub use pdf::extract;
