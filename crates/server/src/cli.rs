use clap::{Args, Parser, Subcommand};

/// SimpleJson datasource for Grafana, backed by MongoDB.
///
/// Serves `/`, `/search` and `/query`; runs `serve` when no subcommand is given.
#[derive(Parser, Debug)]
#[command(name = "docdash", version, about = "SimpleJson datasource for Grafana, backed by MongoDB")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the dataset names `/search` would return, as JSON
    Datasets,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Bind address (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,
}

impl CliArgs {
    pub fn command(self) -> Command {
        self.command.unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_serves() {
        let args = CliArgs::parse_from(["docdash"]);
        assert!(matches!(args.command(), Command::Serve(ServeArgs { host: None, port: None })));
    }

    #[test]
    fn serve_flags_parse() {
        let args = CliArgs::parse_from(["docdash", "serve", "--host", "127.0.0.1", "--port", "8080"]);
        match args.command() {
            Command::Serve(serve) => {
                assert_eq!(serve.host.as_deref(), Some("127.0.0.1"));
                assert_eq!(serve.port, Some(8080));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn datasets_subcommand_parses() {
        let args = CliArgs::parse_from(["docdash", "datasets"]);
        assert!(matches!(args.command(), Command::Datasets));
    }
}
