use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

const HELP_ALIASES: [&str; 3] = ["--help", "-h", "/help"];
const COPYRIGHT_ALIASES: [&str; 3] = ["--copyright", "-c", "/c"];

#[derive(Parser, Debug)]
#[command(
    name = "file_gzip",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// File to compress, or a help/copyright switch
    #[arg(allow_hyphen_values = true)]
    pub input: Option<OsString>,
    /// Output file, or an existing directory to place the output in
    #[arg(allow_hyphen_values = true)]
    pub output: Option<OsString>,
}

/// What a single run of the program has been asked to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Usage,
    Help,
    Copyright,
    Compress {
        input: PathBuf,
        output: Option<PathBuf>,
    },
}

impl Invocation {
    /// Classifies the raw arguments (without the program name).
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if raw.is_empty() || raw.len() > 2 {
            return Invocation::Usage;
        }
        // a leading `--` makes clap take every raw argument, `--` included, as a value
        let argv = [OsString::from("file_gzip"), OsString::from("--")]
            .into_iter()
            .chain(raw);
        match CliArgs::try_parse_from(argv) {
            Ok(parsed) => parsed.into(),
            Err(_) => Invocation::Usage,
        }
    }
}

impl From<CliArgs> for Invocation {
    fn from(args: CliArgs) -> Self {
        let Some(input) = args.input else {
            return Invocation::Usage;
        };
        if is_alias(&input, &HELP_ALIASES) {
            Invocation::Help
        } else if is_alias(&input, &COPYRIGHT_ALIASES) {
            Invocation::Copyright
        } else {
            Invocation::Compress {
                input: PathBuf::from(input),
                output: args.output.map(PathBuf::from),
            }
        }
    }
}

fn is_alias(arg: &OsStr, aliases: &[&str]) -> bool {
    aliases.iter().any(|alias| arg == OsStr::new(alias))
}
