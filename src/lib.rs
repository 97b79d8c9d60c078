// Code viewer library - the tree/session model, plus the terminal front end
// when built with the `runtime` feature

pub mod config;
pub mod file_tree;
pub mod library;
pub mod playback;
pub mod services;
pub mod viewer;

#[cfg(feature = "runtime")]
pub mod app;
#[cfg(feature = "runtime")]
pub mod ui;
