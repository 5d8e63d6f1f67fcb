use std::process::ExitCode;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ena_errors::{Renderer, Report};

/// Debug driver for the ena front end.
#[derive(Parser)]
enum Options {
    /// Print the token stream, one token per line
    Tokens { path: Utf8PathBuf },
    /// Print the syntax tree
    Ast { path: Utf8PathBuf },
}

fn main() -> anyhow::Result<ExitCode> {
    let ok = match Options::parse() {
        Options::Tokens { path } => {
            let text = read(&path)?;
            let (tokens, report) = ena_tokenizer::tokenize(&text);

            for token in &tokens {
                println!("{token}");
            }

            emit(&path, &text, &[report])
        }
        Options::Ast { path } => {
            let text = read(&path)?;
            let parse = ena_parse::parse(&text);

            print!("{}", parse.tree.debug_tree());

            emit(&path, &text, &[parse.tokenize, parse.build])
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn read(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read `{path}`"))
}

/// Renders every fault on stderr. Returns `true` when there were none.
fn emit(path: &Utf8Path, text: &str, reports: &[Report]) -> bool {
    let renderer = Renderer::styled();
    let mut ok = true;

    for report in reports {
        if let Some(diagnostic) = report.to_diagnostic(text) {
            eprintln!("{}", diagnostic.render(&renderer, path.as_str(), text));
            eprintln!("{report}");
            ok = false;
        }
    }

    ok
}
