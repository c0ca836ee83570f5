//! Per-language rule sets and the table that maps language names to them.
//!
//! Grammars are plain data: an ordered list of (regex, tag) token rules plus
//! indentation settings, parsed from YAML. The built-in Python grammar is
//! embedded at compile time; more languages can be registered by name or
//! loaded from `~/.config/quill/languages/{name}.yaml`.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use super::highlights::Tag;

/// Embedded built-in grammar
pub const PYTHON_GRAMMAR_YAML: &str = include_str!("../../languages/python.yaml");

/// Raw grammar file as parsed from YAML
#[derive(Debug, Deserialize)]
pub struct GrammarData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tokens: Vec<TokenRuleData>,
    #[serde(default)]
    pub indent: IndentData,
}

#[derive(Debug, Deserialize)]
pub struct TokenRuleData {
    pub pattern: String,
    pub tag: String,
}

#[derive(Debug, Deserialize)]
pub struct IndentData {
    #[serde(default = "default_indent_size")]
    pub size: usize,
    #[serde(default)]
    pub after: Vec<String>,
    #[serde(default)]
    pub block_enders: Vec<String>,
    #[serde(default)]
    pub tab: Option<String>,
}

fn default_indent_size() -> usize {
    4
}

impl Default for IndentData {
    fn default() -> Self {
        Self {
            size: default_indent_size(),
            after: Vec::new(),
            block_enders: Vec::new(),
            tab: None,
        }
    }
}

/// Errors from loading a grammar
#[derive(Debug)]
pub enum GrammarError {
    Io(String),
    Parse(String),
    InvalidPattern { pattern: String, message: String },
    UnknownTag(String),
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarError::Io(e) => write!(f, "IO error: {}", e),
            GrammarError::Parse(e) => write!(f, "Parse error: {}", e),
            GrammarError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid pattern {:?}: {}", pattern, message)
            }
            GrammarError::UnknownTag(t) => write!(f, "Unknown tag: {}", t),
        }
    }
}

impl std::error::Error for GrammarError {}

/// A compiled token rule
#[derive(Debug, Clone)]
pub struct TokenRule {
    pub pattern: Regex,
    pub tag: Tag,
}

/// Indentation settings for a language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentRules {
    /// Spaces per indentation level
    pub size: usize,
    /// Substrings that indent the following line
    pub after: Vec<String>,
    /// Leading keywords that dedent the following line
    pub block_enders: Vec<String>,
    /// Text inserted by the Tab key
    pub tab: String,
}

/// Immutable highlighting and indentation rules for one language
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    tokens: Vec<TokenRule>,
    indent: IndentRules,
}

impl RuleSet {
    pub fn new(name: impl Into<String>, tokens: Vec<TokenRule>, indent: IndentRules) -> Self {
        Self {
            name: name.into(),
            tokens,
            indent,
        }
    }

    /// Parse and compile a grammar from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, GrammarError> {
        let data: GrammarData =
            serde_yaml::from_str(yaml).map_err(|e| GrammarError::Parse(e.to_string()))?;
        Self::from_data(data)
    }

    /// Compile raw grammar data
    pub fn from_data(data: GrammarData) -> Result<Self, GrammarError> {
        let tokens = data
            .tokens
            .into_iter()
            .map(|rule| {
                let tag = Tag::from_name(&rule.tag)
                    .ok_or_else(|| GrammarError::UnknownTag(rule.tag.clone()))?;
                let pattern =
                    Regex::new(&rule.pattern).map_err(|e| GrammarError::InvalidPattern {
                        pattern: rule.pattern.clone(),
                        message: e.to_string(),
                    })?;
                Ok(TokenRule { pattern, tag })
            })
            .collect::<Result<Vec<_>, GrammarError>>()?;

        let size = data.indent.size;
        let indent = IndentRules {
            size,
            after: data.indent.after,
            block_enders: data.indent.block_enders,
            tab: data.indent.tab.unwrap_or_else(|| " ".repeat(size)),
        };

        Ok(Self {
            name: data.name.unwrap_or_default(),
            tokens,
            indent,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token rules in application order
    pub fn tokens(&self) -> &[TokenRule] {
        &self.tokens
    }

    pub fn indent(&self) -> &IndentRules {
        &self.indent
    }
}

/// Language name → rule set
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    sets: HashMap<String, RuleSet>,
}

impl RuleTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the built-in grammars registered
    pub fn builtin() -> Self {
        let mut table = Self::new();
        match RuleSet::from_yaml(PYTHON_GRAMMAR_YAML) {
            Ok(rules) => table.register("python", rules),
            Err(e) => tracing::error!("Built-in python grammar failed to load: {}", e),
        }
        table
    }

    /// Register (or replace) the rules for `language`
    pub fn register(&mut self, language: impl Into<String>, rules: RuleSet) {
        let language = language.into();
        tracing::debug!(language = %language, tokens = rules.tokens().len(), "registered rule set");
        self.sets.insert(language, rules);
    }

    /// Rules for `language`, or None if unknown
    pub fn rules_for(&self, language: &str) -> Option<&RuleSet> {
        self.sets.get(language)
    }

    /// Registered language names, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Load `{name}.yaml` grammars from `dir`, registering each under its file
    /// stem. Files that fail to load are logged and skipped; user grammars
    /// replace built-ins of the same name. Returns how many were registered.
    pub fn load_user_languages(&mut self, dir: &Path) -> usize {
        let Ok(entries) = std::fs::read_dir(dir) else {
            tracing::debug!("No user languages directory at {}", dir.display());
            return 0;
        };

        let mut loaded = 0;
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match load_grammar_file(&path) {
                Ok(rules) => {
                    tracing::info!("Loaded grammar {} from {}", name, path.display());
                    self.register(name, rules);
                    loaded += 1;
                }
                Err(e) => tracing::warn!("Skipping grammar {}: {}", path.display(), e),
            }
        }
        loaded
    }
}

/// Load a grammar from a YAML file
pub fn load_grammar_file(path: &Path) -> Result<RuleSet, GrammarError> {
    let content = std::fs::read_to_string(path).map_err(|e| GrammarError::Io(e.to_string()))?;
    RuleSet::from_yaml(&content)
}
