//! Gallery configuration module

pub mod gallery_config;

pub use gallery_config::*;
