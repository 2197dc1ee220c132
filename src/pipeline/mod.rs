pub mod classify;
pub mod converter;
pub mod descriptor;
pub mod discover;
pub mod fs_ops;
pub mod theme_writer;

#[cfg(test)]
mod pipeline_test;
