use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{ImageError, ImageReader, RgbImage};
use log::debug;
use thiserror::Error;

use crate::hex_dump::write_hex_dump;
use crate::rgb565::pack_image;

/// Extension given to the generated dump. The content is text.
pub const OUTPUT_EXTENSION: &str = "bin";

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("usage: {program} <image>")]
    Usage { program: String },

    #[error("not exists: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::Usage { .. } => 2,
            ConvertError::NotFound(_) => 3,
            ConvertError::Decode { .. } => 4,
            ConvertError::Io { .. } => 5,
        }
    }
}

/// Pick the single input path out of `args` (program name first).
pub fn parse_args(args: &[String]) -> Result<PathBuf, ConvertError> {
    match args {
        [_, input] => Ok(PathBuf::from(input)),
        _ => Err(ConvertError::Usage {
            program: args
                .first()
                .cloned()
                .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string()),
        }),
    }
}

/// `dir/name.png` -> `dir/name.bin`
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

pub fn load_rgb(path: &Path) -> Result<RgbImage, ConvertError> {
    let io_err = |source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    };
    let img = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?
        .decode()
        .map_err(|source| ConvertError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(img.to_rgb8())
}

/// Decode `input` and write its RGB565 dump next to it. Returns the path written.
///
/// The output file is only created once the image decoded successfully.
pub fn convert_file(input: &Path) -> Result<PathBuf, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::NotFound(input.to_path_buf()));
    }

    let img = load_rgb(input)?;
    debug!("{}: {}x{}", input.display(), img.width(), img.height());
    let rgb565 = pack_image(&img);

    let out_path = output_path(input);
    let io_err = |source| ConvertError::Io {
        path: out_path.clone(),
        source,
    };
    let mut out = BufWriter::new(File::create(&out_path).map_err(io_err)?);
    write_hex_dump(&mut out, rgb565.iter().copied()).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    debug!("wrote {} pixels to {}", rgb565.len(), out_path.display());
    Ok(out_path)
}

pub fn run(args: &[String]) -> Result<PathBuf, ConvertError> {
    let input = parse_args(args)?;
    convert_file(&input)
}
