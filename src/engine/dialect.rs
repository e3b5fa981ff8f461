//! Per-dialect engine behavior.
//!
//! Script dialects differ in ways the proxy has to compensate for. A
//! [`Dialect`] carries those differences as data instead of type checks:
//!
//! - whether invocations with no arguments must be padded with a placeholder
//!   (JScript refuses to invoke a function with zero arguments), and
//! - the runtime error table used to turn `FACILITY_CONTROL` status codes
//!   into the engine's own diagnostic text.
//!
//! Definitions are read from a small text format:
//!
//! ```text
//! # comment
//! [dialect "JScript"]
//! pad_empty_invoke = true
//! 5009 = "Undefined identifier"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use pest_consume::{match_nodes, Error, Parser};

use crate::item::value::HostValue;

lazy_static! {
    static ref JSCRIPT: Dialect = load_builtin(include_str!("dialects/jscript.dialect"));
    static ref VBSCRIPT: Dialect = load_builtin(include_str!("dialects/vbscript.dialect"));
}

fn load_builtin(source: &str) -> Dialect {
    match Dialect::parse(source) {
        Ok(mut dialects) if dialects.len() == 1 => dialects.remove(0),
        Ok(dialects) => panic!(
            "built-in dialect file must define one dialect, found {}",
            dialects.len()
        ),
        Err(e) => panic!("malformed built-in dialect file: {}", e),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    #[error("failed to read dialect definitions from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dialect definitions: {0}")]
    Syntax(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dialect {
    name: String,
    pad_empty_invoke: bool,
    runtime_errors: HashMap<u16, String>,
}

impl Dialect {
    /// A dialect with no quirks and an empty runtime error table.
    pub fn new(name: impl Into<String>) -> Self {
        Dialect {
            name: name.into(),
            pad_empty_invoke: false,
            runtime_errors: HashMap::new(),
        }
    }

    pub fn jscript() -> &'static Dialect {
        &JSCRIPT
    }

    pub fn vbscript() -> &'static Dialect {
        &VBSCRIPT
    }

    pub fn with_padded_empty_invoke(mut self, pad: bool) -> Self {
        self.pad_empty_invoke = pad;
        self
    }

    pub fn with_runtime_error(mut self, code: u16, message: impl Into<String>) -> Self {
        self.runtime_errors.insert(code, message.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pads_empty_invoke(&self) -> bool {
        self.pad_empty_invoke
    }

    /// Diagnostic text for a `FACILITY_CONTROL` sub-code.
    pub fn runtime_error(&self, code: u16) -> Option<&str> {
        self.runtime_errors.get(&code).map(|m| m.as_str())
    }

    pub fn runtime_error_count(&self) -> usize {
        self.runtime_errors.len()
    }

    /// Injects a numeric zero placeholder into an empty argument list when
    /// the dialect cannot invoke with zero arguments.
    pub fn adjust_invoke_args(&self, args: Vec<HostValue>) -> Vec<HostValue> {
        if self.pad_empty_invoke && args.is_empty() {
            vec![HostValue::Number(0.0)]
        } else {
            args
        }
    }

    pub fn parse(source: &str) -> Result<Vec<Dialect>, DialectError> {
        parse_dialects(source).map_err(|e| DialectError::Syntax(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Vec<Dialect>, DialectError> {
        let source = fs::read_to_string(path).map_err(|source| DialectError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&source)
    }
}

type ParseResult<T> = std::result::Result<T, Error<Rule>>;
type Node<'i> = pest_consume::Node<'i, Rule, ()>;

enum Setting {
    PadEmptyInvoke(bool),
    RuntimeError(u16, String),
}

#[derive(Parser)]
#[grammar = "engine/dialect.pest"] // relative to src
struct DialectParser;

#[pest_consume::parser]
impl DialectParser {
    fn EOI(_input: Node) -> ParseResult<()> {
        Ok(())
    }

    fn text(input: Node) -> ParseResult<String> {
        Ok(input.as_str().to_string())
    }

    fn string(input: Node) -> ParseResult<String> {
        Ok(match_nodes!(input.into_children();
            [text(t)] => t,
        ))
    }

    fn boolean(input: Node) -> ParseResult<bool> {
        Ok(input.as_str() == "true")
    }

    fn flag_name(input: Node) -> ParseResult<String> {
        Ok(input.as_str().to_string())
    }

    fn code(input: Node) -> ParseResult<u16> {
        input.as_str().parse::<u16>().map_err(|e| input.error(e))
    }

    fn flag(input: Node) -> ParseResult<Setting> {
        let (name, value) = match_nodes!(input.children();
            [flag_name(n), boolean(b)] => (n, b),
        );
        match name.as_str() {
            "pad_empty_invoke" => Ok(Setting::PadEmptyInvoke(value)),
            other => Err(input.error(format!("unknown setting '{}'", other))),
        }
    }

    fn error_entry(input: Node) -> ParseResult<Setting> {
        Ok(match_nodes!(input.into_children();
            [code(c), string(m)] => Setting::RuntimeError(c, m),
        ))
    }

    fn entry(input: Node) -> ParseResult<Setting> {
        Ok(match_nodes!(input.into_children();
            [flag(s)] => s,
            [error_entry(s)] => s,
        ))
    }

    fn header(input: Node) -> ParseResult<String> {
        Ok(match_nodes!(input.into_children();
            [string(name)] => name,
        ))
    }

    fn section(input: Node) -> ParseResult<Dialect> {
        Ok(match_nodes!(input.into_children();
            [header(name), entry(settings)..] => {
                let mut dialect = Dialect::new(name);
                for setting in settings {
                    match setting {
                        Setting::PadEmptyInvoke(pad) => dialect.pad_empty_invoke = pad,
                        Setting::RuntimeError(code, message) => {
                            dialect.runtime_errors.insert(code, message);
                        }
                    }
                }
                dialect
            },
        ))
    }

    fn file(input: Node) -> ParseResult<Vec<Dialect>> {
        Ok(match_nodes!(input.into_children();
            [section(dialects).., EOI(_)] => dialects.collect(),
        ))
    }
}

fn parse_dialects(source: &str) -> ParseResult<Vec<Dialect>> {
    let inputs = DialectParser::parse(Rule::file, source)?;
    let input = inputs.single()?;
    DialectParser::file(input)
}
