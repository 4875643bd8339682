// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search command implementation shared by `matches`, `gaps` and `count`.

use std::path::Path;

use kwtrie::cli::{Cli, Command, OutputFormat, SearchArgs};
use kwtrie::color;
use kwtrie::config::{self, Config};
use kwtrie::discovery;
use kwtrie::error::{Error, ExitCode};
use kwtrie::output::json::JsonFormatter;
use kwtrie::output::text::TextFormatter;
use kwtrie::output::{Findings, InputReport};
use kwtrie::reader::{FileReader, Input};
use kwtrie::trie::Trie;

/// Run a search command.
pub fn run(cli: &Cli, command: &Command) -> anyhow::Result<ExitCode> {
    let args = command.args();
    let cwd = std::env::current_dir()?;

    let source = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let (config, mut keywords) = match source.path() {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let config = config::load_with_warnings(path)?;
            let keywords = config.all_keywords(path)?;
            (config, keywords)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    if let Some(file) = &args.keywords_file {
        keywords.extend(config::read_keywords_file(file)?);
    }
    keywords.extend(args.keywords.iter().cloned());

    if keywords.is_empty() {
        return Err(Error::Argument(
            "no keywords given (use -k, -f, or a kwtrie.toml)".to_string(),
        )
        .into());
    }

    let options = args.apply(config.options);
    tracing::debug!(?options, keywords = keywords.len(), "search options");
    let trie = Trie::new(&keywords, options)?;

    let mut found_any = false;
    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(color::choose(args.color, args.no_color));
            for_each_input(args, |input| {
                let report = search(&trie, command, input);
                found_any |= !report.findings.is_empty();
                formatter.write_report(&report)?;
                Ok(())
            })?;
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout());
            for_each_input(args, |input| {
                let report = search(&trie, command, input);
                found_any |= !report.findings.is_empty();
                formatter.push(report);
                Ok(())
            })?;
            formatter.finish()?;
        }
    }

    // Gaps always succeed: an empty gap list means the text is fully covered.
    if found_any || matches!(command, Command::Gaps(_)) {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::NoMatches)
    }
}

fn search(trie: &Trie, command: &Command, input: Input) -> InputReport {
    let findings = match command {
        Command::Matches(_) => Findings::Matches(trie.matches(&input.text)),
        Command::Gaps(_) => Findings::Gaps(trie.non_matches(&input.text)),
        Command::Count(_) => Findings::Counts(trie.string_occurrences(&input.text)),
    };
    InputReport::new(input.path, findings)
}

/// Read each input in order (stdin when no paths are given).
fn for_each_input(
    args: &SearchArgs,
    mut visit: impl FnMut(Input) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let reader = FileReader::new();
    if args.paths.is_empty() {
        return visit(reader.read_stdin(std::io::stdin().lock())?);
    }
    for path in &args.paths {
        visit(read_path(&reader, path)?)?;
    }
    Ok(())
}

fn read_path(reader: &FileReader, path: &Path) -> kwtrie::Result<Input> {
    if path == Path::new(kwtrie::reader::STDIN_PATH) {
        reader.read_stdin(std::io::stdin().lock())
    } else {
        reader.read(path)
    }
}
