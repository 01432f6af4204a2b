pub mod cli;
pub mod commands;
pub mod config;
pub mod icon;
pub mod silhouette;
pub mod synth;
