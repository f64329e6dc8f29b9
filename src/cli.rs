use crate::{
    base58::{self, Alphabet, Decoder, Encoder},
    configuration::Configuration,
    error::{ConfigError, Error},
    logger::{Logger, PartialLogger},
};
use clap::{error::ErrorKind, ArgAction, Parser};
use regex::bytes::Regex;
use serde::Serialize;
use std::{
    borrow::Cow,
    ffi::OsString,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

pub const EXIT_OK: i32 = 0;
pub const EXIT_ERR: i32 = 1;

const STDIO: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "base58", version, about = "Encode decimal numbers in base58, or decode them back")]
#[command(disable_version_flag = true)]
pub struct Arguments {
    /// Decode input
    #[arg(short = 'D', long)]
    decode: bool,

    /// Encoding name [default: flickr, or $BASE58_ENCODING]
    #[arg(short, long, value_parser = base58::NAMES)]
    encoding: Option<String>,

    /// Custom alphabet of 58 distinct ASCII characters
    #[arg(short, long, conflicts_with = "encoding")]
    alphabet: Option<String>,

    /// Input file
    #[arg(short, long)]
    input: Vec<String>,

    /// Output file
    #[arg(short, long, default_value = STDIO)]
    output: String,

    /// Write one JSON object per input line
    #[arg(long)]
    json: bool,

    /// Log progress to standard error
    #[arg(long)]
    verbose: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Input files; when any are given, --input is ignored
    #[arg(value_name = "FILE")]
    files: Vec<String>,
}

impl Arguments {
    fn select_alphabet(&self, configuration: &Configuration) -> Result<Alphabet<58>, ConfigError> {
        match &self.alphabet {
            Some(symbols) => Ok(Alphabet::from_slice(symbols.as_bytes())?),
            None => {
                let name = self.encoding.as_deref().unwrap_or(configuration.encoding());
                base58::alphabet_by_name(name).copied()
            }
        }
    }

    fn inputs(&self) -> Vec<&str> {
        if !self.files.is_empty() {
            self.files.iter().map(String::as_str).collect()
        } else if !self.input.is_empty() {
            self.input.iter().map(String::as_str).collect()
        } else {
            vec![STDIO]
        }
    }
}

/// Applies the selected direction to a single token.
pub struct Converter<'a> {
    encoder: Encoder<'a>,
    decoder: Decoder<'a>,
    decode: bool,
}

impl<'a> Converter<'a> {
    pub fn new(alphabet: &'a Alphabet<58>, decode: bool) -> Self {
        Self {
            encoder: Encoder::new(alphabet),
            decoder: Decoder::new(alphabet),
            decode,
        }
    }

    pub fn convert(&self, token: &[u8]) -> Result<String, Error> {
        if self.decode {
            Ok(self.decoder.decode(token)?)
        } else {
            Ok(self.encoder.encode(token)?)
        }
    }
}

/// Splits lines into runs of ASCII whitespace and runs of anything else.
pub struct Tokenizer {
    regex: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(r"(?-u)(\s+)|(\S+)").expect("token pattern compiles"),
        }
    }

    /// Converts every non-whitespace run of `line` and copies the whitespace in between unchanged.
    /// Stops at the first token that fails.
    pub fn convert_line(&self, line: &[u8], converter: &Converter) -> Result<Vec<u8>, Error> {
        let mut output = Vec::with_capacity(line.len() * 2);
        for captures in self.regex.captures_iter(line) {
            if let Some(whitespace) = captures.get(1) {
                output.extend_from_slice(whitespace.as_bytes());
            } else if let Some(token) = captures.get(2) {
                output.extend_from_slice(converter.convert(token.as_bytes())?.as_bytes());
            }
        }
        Ok(output)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct Record<'a> {
    line: usize,
    input: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

struct Processor<'a> {
    converter: Converter<'a>,
    tokenizer: Tokenizer,
    json: bool,
    log_interval: usize,
    logger: &'a Logger,
}

impl Processor<'_> {
    /// Converts `input` line by line. Failed lines are reported and skipped.
    fn process(&self, name: &str, input: &mut dyn BufRead, output: &mut dyn Write, errors: &mut dyn Write) -> Result<i32, Error> {
        let write_error = |error| Error::io(format!("write {}", name), error);
        let mut partial = PartialLogger::new(self.log_interval, self.logger);
        let mut status = EXIT_OK;
        let mut failures = 0;
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = input
                .read_until(b'\n', &mut line)
                .map_err(|error| Error::io(format!("read {}", name), error))?;
            if read == 0 {
                break;
            }
            if line.last() == Some(&b'\n') {
                line.pop();
            }
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            partial.log(|index| format!("{}: {} lines processed", name, index));

            let result = self.tokenizer.convert_line(&line, &self.converter);
            if result.is_err() {
                status = EXIT_ERR;
                failures += 1;
            }
            if self.json {
                let (converted, error) = match &result {
                    Ok(converted) => (Some(String::from_utf8_lossy(converted)), None),
                    Err(error) => (None, Some(error.to_string())),
                };
                let record = Record {
                    line: partial.count(),
                    input: String::from_utf8_lossy(&line),
                    output: converted,
                    error,
                };
                serde_json::to_writer(&mut *output, &record).map_err(|error| write_error(error.into()))?;
                output.write_all(b"\n").map_err(write_error)?;
            } else {
                match result {
                    Ok(converted) => {
                        output.write_all(&converted).map_err(write_error)?;
                        output.write_all(b"\n").map_err(write_error)?;
                    }
                    Err(error) => {
                        let _ = writeln!(errors, "{}", error);
                    }
                }
            }
        }
        self.logger.log(format!("{}: {} lines, {} failed", name, partial.count(), failures));
        Ok(status)
    }
}

fn execute(
    arguments: &Arguments,
    configuration: &Configuration,
    stdin: &mut dyn BufRead,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<i32, Error> {
    let alphabet = arguments.select_alphabet(configuration)?;
    let logger = Logger::new(arguments.verbose || configuration.verbose());
    let processor = Processor {
        converter: Converter::new(&alphabet, arguments.decode),
        tokenizer: Tokenizer::new(),
        json: arguments.json,
        log_interval: configuration.log_interval(),
        logger: &logger,
    };

    let mut output: Box<dyn Write + '_> = if arguments.output == STDIO {
        Box::new(stdout)
    } else {
        let file = File::create(&arguments.output).map_err(|error| Error::io(format!("create {}", arguments.output), error))?;
        Box::new(BufWriter::new(file))
    };

    let mut status = EXIT_OK;
    for name in arguments.inputs() {
        let result = if name == STDIO {
            processor.process(name, stdin, &mut output, stderr)?
        } else {
            match File::open(name) {
                Ok(file) => processor.process(name, &mut BufReader::new(file), &mut output, stderr)?,
                Err(error) => {
                    let _ = writeln!(stderr, "base58: {}", Error::io(format!("open {}", name), error));
                    EXIT_ERR
                }
            }
        };
        status = status.max(result);
    }
    output
        .flush()
        .map_err(|error| Error::io(format!("write {}", arguments.output), error))?;
    Ok(status)
}

/// Runs the tool with explicit streams and returns the process exit code.
pub fn run<I, T>(args: I, configuration: &Configuration, stdin: &mut dyn BufRead, stdout: &mut dyn Write, stderr: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let arguments = match Arguments::try_parse_from(args) {
        Ok(arguments) => arguments,
        Err(error) => {
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(stdout, "{}", error);
                    EXIT_OK
                }
                _ => {
                    let _ = write!(stderr, "{}", error);
                    EXIT_ERR
                }
            };
        }
    };
    match execute(&arguments, configuration, stdin, stdout, stderr) {
        Ok(status) => status,
        Err(error) => {
            let _ = writeln!(stderr, "base58: {}", error);
            EXIT_ERR
        }
    }
}
