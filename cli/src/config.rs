use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

/// Environment variable holding the default output format.
pub const FORMAT_ENV: &str = "ROUTE_GRAPH_FORMAT";

/// Answer rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `OUTPUT #k: value` lines.
    Text,
    /// One JSON object per answer.
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" | "ndjson" => Ok(OutputFormat::Json),
            other => Err(anyhow!(
                "invalid format '{}', use 'text' or 'json'",
                other
            )),
        }
    }
}

/// Runtime settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Input file; `None` reads stdin.
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    /// Log filter directive, overrides `ROUTE_GRAPH_LOG` when set.
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: None,
            format: OutputFormat::Text,
            log_filter: None,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Settings),
    Help,
}

pub fn usage() -> String {
    [
        "Usage: route-graph [--input <path>] [--format text|json] [--log <filter>]",
        "",
        "Reads a graph and route queries (stdin by default):",
        "  line 1: edges as XYN, e.g. AB5 BC4 CD8",
        "  line 2: number of queries",
        "  then:   P1 X1 X2 ... | P2 X Y N | P3 X Y N | P4 X Y | P5 X Y N",
        "",
        "Environment:",
        "  ROUTE_GRAPH_FORMAT  default output format (text)",
        "  ROUTE_GRAPH_LOG     log filter, e.g. debug or route_graph_core=trace (warn)",
    ]
    .join("\n")
}

/// Parse command-line arguments (excluding the binary name).
///
/// `env_format` is the value of [`FORMAT_ENV`], if set; flags win over it.
pub fn parse_args<S: AsRef<str>>(args: &[S], env_format: Option<&str>) -> Result<Command> {
    let mut settings = Settings::default();
    if let Some(format) = env_format.filter(|s| !s.is_empty()) {
        settings.format = OutputFormat::parse(format)?;
    }

    let mut i = 0;
    while i < args.len() {
        match args[i].as_ref() {
            "-i" | "--input" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --input\n\n{}", usage()))?;
                settings.input = Some(PathBuf::from(path.as_ref()));
            }
            "-f" | "--format" => {
                i += 1;
                let format = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --format\n\n{}", usage()))?;
                settings.format = OutputFormat::parse(format.as_ref())?;
            }
            "--log" => {
                i += 1;
                let filter = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log\n\n{}", usage()))?;
                settings.log_filter = Some(filter.as_ref().to_string());
            }
            "-h" | "--help" => return Ok(Command::Help),
            other => bail!("unknown arg: {other}\n\n{}", usage()),
        }
        i += 1;
    }

    Ok(Command::Run(settings))
}
