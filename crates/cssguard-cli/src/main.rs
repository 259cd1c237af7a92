mod cli;

use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use cssguard::CssSanitizer;
use cssguard_common::Result;
use cssguard_config::GuardSettings;
use tracing_subscriber::EnvFilter;

fn init_logging(directive: Option<&str>) {
    let directive = directive.unwrap_or("cssguard=info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "cssguard=info".parse().unwrap()),
            ),
        )
        .init();
}

/// Load settings, falling back to defaults when the file is unusable.
fn load_settings(path: Option<&Path>) -> GuardSettings {
    cssguard_config::load_config(path).unwrap_or_else(|e| {
        tracing::warn!("settings load failed, using defaults: {e}");
        GuardSettings::default()
    })
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read(path)?),
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, css: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, css)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(css.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn run(args: &cli::Args) -> Result<()> {
    if let Some(path) = &args.init_config {
        cssguard_config::create_default_config(path)?;
        return Ok(());
    }

    let settings = load_settings(args.config.as_deref());
    if args.print_config {
        println!("{}", cssguard_config::settings_to_json(&settings));
        return Ok(());
    }

    let sanitizer = CssSanitizer::new(settings.to_overrides());
    let input = read_input(args.input.as_deref())?;
    let output = sanitizer.sanitize_bytes(&input);
    tracing::info!(
        input_bytes = input.len(),
        output_bytes = output.len(),
        "stylesheet sanitized"
    );

    write_output(args.output.as_deref(), &output)
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use cssguard_common::CssGuardError;
    use std::ffi::OsStr;

    fn parse(parts: &[&OsStr]) -> cli::Args {
        cli::Args::try_parse_from(parts.iter().copied()).unwrap()
    }

    #[test]
    fn run_sanitizes_file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.css");
        let output = dir.path().join("out.css");
        let config = dir.path().join("guard.toml");
        std::fs::write(&input, ".a { color: red; gap: 4px; behavior: x; }").unwrap();
        std::fs::write(&config, "[allow]\nproperties = [\"gap\"]\n").unwrap();

        let args = parse(&[
            OsStr::new("cssguard"),
            input.as_os_str(),
            OsStr::new("--output"),
            output.as_os_str(),
            OsStr::new("--config"),
            config.as_os_str(),
        ]);
        run(&args).unwrap();

        let css = std::fs::read_to_string(&output).unwrap();
        assert_eq!(css, ".a {color: red; gap: 4px;}");
    }

    #[test]
    fn run_reports_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.css");
        let config = dir.path().join("none.toml");
        let args = parse(&[
            OsStr::new("cssguard"),
            missing.as_os_str(),
            OsStr::new("--config"),
            config.as_os_str(),
        ]);
        let err = run(&args).unwrap_err();
        assert!(matches!(err, CssGuardError::Io(_)));
    }

    #[test]
    fn run_writes_default_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let args = parse(&[
            OsStr::new("cssguard"),
            OsStr::new("--init-config"),
            path.as_os_str(),
        ]);
        run(&args).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unreadable_settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        let settings = load_settings(Some(path.as_path()));
        assert_eq!(settings.limits.max_length, 65536);
    }
}
