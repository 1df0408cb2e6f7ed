use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels exposed on the command line.
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

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

/// Built-in scene presets.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScenePreset {
    /// Book-cover style field of random spheres.
    Cover,
    /// Three spheres, the glass one hollowed out with a negative-radius
    /// inner bubble.
    Hollow,
}

/// Command line arguments.
#[derive(Parser)]
#[command(name = "lumapath")]
#[command(about = "A recursive path tracer in Rust")]
pub struct Args {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "1200")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "675")]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "100")]
    pub samples_per_pixel: u32,

    /// Maximum number of ray bounces
    #[arg(long, default_value = "50")]
    pub max_depth: u32,

    /// Scene preset to render
    #[arg(long, value_enum, default_value = "cover")]
    pub scene: ScenePreset,

    /// Seed for the random generator (scene generation becomes reproducible)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file path (.png for 8-bit with gamma correction, .exr for HDR linear)
    #[arg(short, long, default_value = "output.png")]
    pub output: String,
}
