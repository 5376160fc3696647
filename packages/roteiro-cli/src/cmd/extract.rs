//! `roteiro extract`: run the extractor over saved model output.

use anyhow::{Context, Result};
use itinerary_extract::{DisplayContext, Extractor, View};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use crate::config::Config;
use crate::output::{print_report, print_view};

pub struct ExtractArgs<'a> {
    pub input: Option<&'a Path>,
    pub city: Option<String>,
    pub days: Option<u32>,
    pub json: bool,
    pub explain: bool,
}

pub fn run(config: &Config, args: ExtractArgs<'_>) -> Result<ExitCode> {
    let raw = read_input(args.input)?;

    let report = Extractor::new(config.extractor.clone()).extract_with_report(&raw);
    if args.explain {
        print_report(&report);
    }

    let context = DisplayContext {
        city: args.city,
        requested_days: args.days,
    };
    print_view(&View::select(report.outcome, context), args.json)?;
    Ok(ExitCode::SUCCESS)
}

/// Read from `path`, or stdin when absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_from_file() {
        let path = std::env::temp_dir().join(format!("roteiro-extract-{}.txt", std::process::id()));
        fs::write(&path, "```json\n{\"routes\": [{}]}\n```").unwrap();

        let raw = read_input(Some(&path)).unwrap();
        fs::remove_file(&path).ok();

        assert!(raw.starts_with("```json"));
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read /definitely/not/here.txt"));
    }
}
