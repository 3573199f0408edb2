use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lancer_renderer::{Camera, ImageFormat};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
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

/// Output encodings accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text PPM (P3)
    Ascii,
    /// Raw PPM (P6)
    Binary,
    Png,
}

impl From<OutputFormat> for ImageFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Ascii => ImageFormat::PpmAscii,
            OutputFormat::Binary => ImageFormat::PpmBinary,
            OutputFormat::Png => ImageFormat::Png,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lancer")]
#[command(about = "Render the built-in sphere room with direct lighting and hard shadows")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 1000)]
    pub height: u32,

    /// Worker threads (defaults to the available hardware parallelism)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Camera opening coefficient, must be greater than 1
    #[arg(long, default_value_t = Camera::DEFAULT_OPENING)]
    pub opening: f32,

    /// Distance from the image plane to the camera focal plane
    #[arg(long, default_value_t = Camera::DEFAULT_FOCAL_DISTANCE)]
    pub focal_distance: f32,

    /// Output file path
    #[arg(short, long, default_value = "render.ppm")]
    pub output: PathBuf,

    /// Output encoding (inferred from the file extension when omitted)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Render on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,
}

impl Args {
    /// Output encoding: explicit `--format` wins over the file extension.
    pub fn image_format(&self) -> ImageFormat {
        self.format
            .map(ImageFormat::from)
            .unwrap_or_else(|| ImageFormat::from_path(&self.output))
    }
}
