//! Logger setup for the converter binary.
//!
//! Library code only emits through the `log` facade; initializing the
//! logger is the binary's call.

use std::{fs::File, io::Write};

use env_logger::{Builder, Target, fmt::Formatter};

use crate::options::{ConverterOptions, LogFormat};
use crate::{Error, Result};

pub fn init_logger(options: &ConverterOptions) -> Result<()> {
    let log_format = options.log_format;
    let log_timestamp = options.log_timestamp;

    let mut builder = Builder::new();
    builder
        .filter_level(options.log_level.to_filter())
        .write_style(env_logger::WriteStyle::Never)
        .format(move |buf: &mut Formatter, record| {
            if log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }

            let tag = record.level().as_str();
            match log_format {
                LogFormat::Compact => writeln!(buf, "{tag} {}", record.args()),
                LogFormat::Pretty => {
                    writeln!(buf, "{tag} [{}] {}", record.target(), record.args())
                }
            }
        });

    match options.log_output_path() {
        Some(log_path) => {
            let log_file = File::create(log_path).map_err(|e| {
                Error::other(format!(
                    "failed to create log output file {}: {e}",
                    log_path.display()
                ))
            })?;
            builder.target(Target::Pipe(Box::new(log_file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    builder
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}
