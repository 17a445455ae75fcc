mod cli;

use std::process::ExitCode;

use lighten_color::lighten;
use tracing_subscriber::EnvFilter;

/// Printed on stdout when the arguments are unusable, so a pipeline
/// substituting our output into a theme still gets a valid color.
const FALLBACK_COLOR: &str = "#000000";

// Quiet by default: this runs inline in shell pipelines, and anything
// on stderr beyond real errors is noise there. Both targets need a
// directive: the binary logs under `lighten`, the library under
// `lighten_color`.
fn default_filter() -> EnvFilter {
    EnvFilter::from_default_env()
        .add_directive("lighten=warn".parse().expect("static directive parses"))
        .add_directive("lighten_color=warn".parse().expect("static directive parses"))
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let args = match cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                let _ = e.print();
                return ExitCode::SUCCESS;
            }
            // Wrong argument count. Keep stdout hex-shaped anyway.
            eprintln!("{e}");
            println!("{FALLBACK_COLOR}");
            return ExitCode::from(1);
        }
    };

    let factor: f64 = match args.factor.parse() {
        Ok(f) => f,
        Err(_) => {
            eprintln!("error: factor must be a number (e.g. 1.2), got '{}'", args.factor);
            println!("{}", args.color);
            return ExitCode::from(1);
        }
    };

    let result = lighten(&args.color, factor);
    if result.is_degraded() {
        tracing::debug!("color '{}' did not parse, echoing it back", args.color);
    }
    println!("{}", result.render());
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_covers_both_targets() {
        let directives = default_filter().to_string();
        assert!(directives.contains("lighten=warn"), "{directives}");
        assert!(directives.contains("lighten_color=warn"), "{directives}");
    }
}
