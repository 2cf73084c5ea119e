//! Write the registry's OpenAPI document as JSON.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use registry_backend::ApiDoc;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Print the licence registry OpenAPI document",
    version
)]
struct CliArgs {
    /// Write to this file instead of standard output.
    #[arg(long, short, value_name = "path")]
    output: Option<PathBuf>,
    /// Emit single-line JSON.
    #[arg(long)]
    compact: bool,
}

fn render(compact: bool) -> io::Result<String> {
    let doc = ApiDoc::openapi();
    let rendered = if compact {
        doc.to_json()
    } else {
        doc.to_pretty_json()
    };
    rendered.map_err(|err| io::Error::other(format!("serialise OpenAPI document: {err}")))
}

fn main() -> io::Result<()> {
    let args = CliArgs::parse();
    let json = render(args.compact)?;
    match args.output {
        Some(path) => fs::write(&path, format!("{json}\n"))
            .map_err(|err| io::Error::other(format!("write {}: {err}", path.display()))),
        None => writeln!(io::stdout().lock(), "{json}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case::pretty(false, true)]
    #[case::compact(true, false)]
    fn renders_document_in_requested_layout(#[case] compact: bool, #[case] multiline: bool) {
        let json = render(compact).expect("document renders");

        assert_eq!(json.contains('\n'), multiline);
        assert!(json.contains("/api/licence-holders/search"));
    }

    #[rstest]
    fn parses_output_flag() {
        let args = CliArgs::try_parse_from(["openapi-dump", "--output", "api.json", "--compact"])
            .expect("arguments parse");

        assert_eq!(args.output, Some(PathBuf::from("api.json")));
        assert!(args.compact);
    }

    #[rstest]
    #[case::help("--help", ErrorKind::DisplayHelp)]
    #[case::version("--version", ErrorKind::DisplayVersion)]
    fn informational_flags_exit_successfully(#[case] flag: &str, #[case] kind: ErrorKind) {
        let err = CliArgs::try_parse_from(["openapi-dump", flag]).expect_err("flag short-circuits");

        assert_eq!(err.kind(), kind);
        assert_eq!(err.exit_code(), 0);
    }
}
