//! Builds node trees, numbers them in pre-order and prints them indented.
#![allow(clippy::enum_variant_names)]

pub mod application;
pub mod cli;
pub mod config;
mod ext;
pub mod tree;
