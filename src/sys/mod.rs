pub mod config;
pub mod deps;
pub mod download;
pub mod ffmpeg;
pub mod local;
pub mod logging;
pub mod process;
pub mod sheet;
