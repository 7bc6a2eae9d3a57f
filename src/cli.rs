use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "spherecast")]
#[command(about = "A minimal sphere ray caster with local lighting")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Output image width in pixels
    #[arg(long, default_value = "970", help = "Output image width in pixels")]
    pub width: u32,

    /// Output image height in pixels
    #[arg(long, default_value = "970", help = "Output image height in pixels")]
    pub height: u32,

    /// Viewport plane edge length in world units
    #[arg(long, default_value = "10.0", help = "Viewport plane edge length in world units")]
    pub viewport_size: f32,

    /// Output file path (.png)
    #[arg(short, long, default_value = "render.png", help = "Output file path (.png)")]
    pub output: String,
}
