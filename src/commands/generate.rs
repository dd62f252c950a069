use std::path::PathBuf;

use console::style;
use miette::Result;
use nullgen::output::OutputSink;
use nullgen::GenerateOptions;

pub fn run(
    package: Option<String>,
    type_name: Option<String>,
    dest: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    if verbose {
        if let Some(path) = dest.as_ref().filter(|p| p.exists()) {
            eprintln!(
                "{} overwriting {}",
                style("warning:").yellow().bold(),
                style(path.display()).yellow()
            );
        }
    }

    let generated = nullgen::run_generation(GenerateOptions {
        package,
        type_name,
        dest,
    })?;

    if verbose {
        let target = match &generated.sink {
            OutputSink::Stdout => style("stdout".to_string()).dim(),
            sink => style(sink.to_string()).cyan(),
        };
        eprintln!(
            "{} Rendered {} for {} \u{2192} {} ({} bytes)",
            style("✓").green().bold(),
            style(generated.param.wrapper_name()).bold(),
            generated.param.package(),
            target,
            generated.bytes
        );
    }

    Ok(())
}
