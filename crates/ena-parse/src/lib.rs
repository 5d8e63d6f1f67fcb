use ena_errors::{Diagnostic, Report};
use ena_syntax::Node;
use ena_tokenizer::TokenList;

mod builder;

pub use builder::{build, walk};

/// Both stages of the front end run over one source text.
#[derive(Debug)]
pub struct Parse {
    pub tokens: TokenList,
    pub tree: Node,
    pub tokenize: Report,
    pub build: Report,
}

impl Parse {
    pub fn is_ok(&self) -> bool {
        self.tokenize.is_ok() && self.build.is_ok()
    }

    pub fn diagnostics(&self, text: &str) -> Vec<Diagnostic> {
        [self.tokenize, self.build].iter().filter_map(|report| report.to_diagnostic(text)).collect()
    }
}

/// Tokenizes `text` and builds a program from whatever tokens were
/// produced, even when tokenizing stopped early.
pub fn parse(text: &str) -> Parse {
    let (tokens, tokenize) = ena_tokenizer::tokenize(text);
    let (tree, build) = build(&tokens);
    Parse { tokens, tree, tokenize, build }
}
