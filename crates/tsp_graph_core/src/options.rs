use std::{
    env, fmt,
    path::{Path, PathBuf},
};

use log::LevelFilter;

use crate::{Error, Result};

const DEFAULT_OUTPUT_DIR: &str = "graphs";

/// Runtime options for the instance-to-graph converter.
#[derive(Clone, Debug)]
pub struct ConverterOptions {
    /// Instance files, or directories scanned for `.tsp` files.
    pub inputs: Vec<PathBuf>,
    /// Directory receiving one `<file name>.json` document per instance.
    pub output_dir: PathBuf,
    /// Worker threads for batch conversion. 0 means the rayon default.
    pub threads: usize,
    /// Indent JSON output with four spaces when true, compact when false.
    pub pretty: bool,
    /// Structured logging level.
    pub log_level: LogLevel,
    /// Logging output format.
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    pub log_timestamp: bool,
    /// Optional output file path for logs. Empty means stderr.
    pub log_output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "off" => Ok(Self::Off),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --log-level: {value} (expected error|warn|info|debug|trace|off)"
            ))),
        }
    }

    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::Off => "off",
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl LogFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --log-format: {value} (expected compact|pretty)"
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Compact => "compact",
            Self::Pretty => "pretty",
        })
    }
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            threads: 0,
            pretty: true,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: true,
            log_output: String::new(),
        }
    }
}

impl ConverterOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = split_arg(raw_name, &mut args);

            match name.as_str() {
                "input" => {
                    options.inputs.push(parse_value::<PathBuf>(&name, value)?);
                }
                "output-dir" => {
                    options.output_dir = parse_value::<PathBuf>(&name, value)?;
                }
                "threads" => {
                    options.threads = parse_value::<usize>(&name, value)?;
                }
                "pretty" => {
                    options.pretty = match value {
                        Some(v) => parse_bool(&name, &v)?,
                        None => true,
                    };
                }
                "no-pretty" => {
                    if value.is_some() {
                        return Err(Error::invalid_input(format!(
                            "Flag --{name} does not take a value"
                        )));
                    }
                    options.pretty = false;
                }
                "log-level" => {
                    options.log_level = LogLevel::parse(&require_value(&name, value)?)?;
                }
                "log-format" => {
                    options.log_format = LogFormat::parse(&require_value(&name, value)?)?;
                }
                "log-timestamp" => {
                    options.log_timestamp = match value {
                        Some(v) => parse_bool(&name, &v)?,
                        None => true,
                    };
                }
                "no-log-timestamp" => {
                    if value.is_some() {
                        return Err(Error::invalid_input(format!(
                            "Flag --{name} does not take a value"
                        )));
                    }
                    options.log_timestamp = false;
                }
                "log-output" => {
                    options.log_output = require_value(&name, value)?;
                }
                _ => {
                    return Err(Error::invalid_input(format!(
                        "Unknown option: --{name}\n\n{}",
                        Self::usage()
                    )));
                }
            }
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  tsp-graph --input <path> [options]\n\n",
            "Options:\n",
            "  --input <path>\n",
            "  --output-dir <path>\n",
            "  --threads <usize>\n",
            "  --pretty[=<bool>]\n",
            "  --no-pretty\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  tsp-graph --input tsplib/a280.tsp\n",
            "  tsp-graph --input tsplib --output-dir graphs --threads 4\n",
            "  tsp-graph --input a.tsp --input b.tsp --no-pretty\n",
            "  tsp-graph --input tsplib --log-level=info --log-format=pretty --log-output run.log\n",
        )
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        let log_output = self.log_output.trim();
        if log_output.is_empty() || log_output == "-" {
            None
        } else {
            Some(Path::new(log_output))
        }
    }
}

impl fmt::Display for ConverterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inputs = self
            .inputs
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "\n\tinputs        = {inputs}")?;
        write!(f, "\n\toutput_dir    = {}", self.output_dir.display())?;
        write!(f, "\n\tthreads       = {}", self.threads)?;
        write!(f, "\n\tpretty        = {}", self.pretty)?;
        write!(f, "\n\tlog_level     = {}", self.log_level)?;
        write!(f, "\n\tlog_format    = {}", self.log_format)?;
        write!(f, "\n\tlog_timestamp = {}", self.log_timestamp)?;
        write!(f, "\n\tlog_output    = {}", self.log_output)
    }
}

fn split_arg(
    raw_name: &str,
    args: &mut std::iter::Peekable<impl Iterator<Item = String>>,
) -> (String, Option<String>) {
    if let Some((k, v)) = raw_name.split_once('=') {
        return (k.to_string(), Some(v.to_string()));
    }

    let value = match args.peek() {
        Some(next) if !next.starts_with("--") => args.next(),
        _ => None,
    };

    (raw_name.to_string(), value)
}

fn require_value(name: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::invalid_input(format!("Missing value for --{name}")))
}

fn parse_value<T>(name: &str, value: Option<String>) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let raw = require_value(name, value)?;
    raw.parse::<T>()
        .map_err(|e| Error::invalid_input(format!("Invalid value for --{name}: {raw} ({e})")))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "off" | "OFF" => Ok(false),
        _ => Err(Error::invalid_input(format!(
            "Invalid boolean for --{name}: {value} (expected true/false)"
        ))),
    }
}
