//! Static pattern tables
//!
//! All regexes are case-insensitive and compiled once per process. The
//! false-positive catalog is ordered: detectors report the first match.

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

/// A known shape of incorrect inference
#[derive(Debug, Clone)]
pub struct FalsePositivePattern {
    /// Short identifier used in evidence and listings
    pub name: String,
    /// Compiled case-insensitive matcher
    pub regex: Regex,
}

impl FalsePositivePattern {
    /// Compile a pattern, forcing case-insensitive matching
    pub fn compile(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            regex: Regex::new(&format!("(?i){pattern}"))?,
        })
    }

    /// Check the claim against this pattern
    #[inline]
    #[must_use]
    pub fn is_match(&self, claim: &str) -> bool {
        self.regex.is_match(claim)
    }
}

/// Built-in false-positive shapes, in match priority order
const FALSE_POSITIVE_SOURCES: &[(&str, &str)] = &[
    (
        "cypress_extension_confusion",
        r"\.cy\.js\b.*\bwhen\b.*\bactual\b.*\.js\b",
    ),
    (
        "cypress_extension_contradiction",
        r"\.cy\.js\b.*\b(?:but|however)\b.*\bonly\b.*\.js\b",
    ),
    (
        "unverified_mobx_dependency",
        r"mobx.*dependency.*without.*package\.json.*verification",
    ),
    (
        "unverified_dependency_issue",
        r"dependency.*(?:issues?|problems?).*without.*package\.json",
    ),
    (
        "verified_without_verification",
        r"\bverified\b.*\bwithout\b.*\bverification\b",
    ),
    (
        "confirmed_without_checking",
        r"\bconfirmed\b.*\bwithout\b.*\b(?:checking|verification)\b",
    ),
];

/// Compiled built-in false-positive catalog
pub static FALSE_POSITIVE_CATALOG: Lazy<Vec<FalsePositivePattern>> = Lazy::new(|| {
    FALSE_POSITIVE_SOURCES
        .iter()
        .map(|(name, pattern)| {
            FalsePositivePattern::compile(*name, pattern).expect("built-in pattern compiles")
        })
        .collect()
});

/// Extension tokens, phrases and count shapes marking a file-extension claim
pub(crate) static EXTENSION_CLAIM: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)\.cy\.js",
        r"(?i)\.js",
        r"(?i)\.ts",
        r"(?i)\.jsx",
        r"(?i)\.tsx",
        r"(?i)file extension",
        r"(?i)\bfound\s+\d+\s+\.\w+",
        r"(?i)\.spec\.",
        r"(?i)\.test\.",
    ])
    .expect("extension claim patterns compile")
});

/// Static dependency-claim shapes; tracked keywords come from config
pub(crate) static DEPENDENCY_CLAIM: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)package\.json",
        r"(?i)dependency",
        r"(?i)cypress.*version",
        r"(?i)npm\s+install",
        r"(?i)dependency.*version",
        r"(?i)framework.*version",
    ])
    .expect("dependency claim patterns compile")
});

/// Bracketed citation tags or URLs into investigated systems
pub(crate) static CITATION_CLAIM: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)\[(?:Jenkins|Repo|Env|Fix|JIRA):",
        r"(?i)https?://\S*(?:jenkins|github|jira)",
    ])
    .expect("citation claim patterns compile")
});

/// Word token following each `.`
pub(crate) static CLAIMED_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(\w+)").expect("extension capture compiles"));

/// `[Jenkins:...]` citations; group 1 is the job segment
pub(crate) static JENKINS_CITATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[Jenkins:([^:\]]+)[^\]]*\]").expect("jenkins citation compiles")
});

/// `[Repo:...]` citations
pub(crate) static REPO_CITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[Repo:[^\]]*\]").expect("repo citation compiles"));

/// Path-like tokens: at least one directory segment and an extension
pub(crate) static FILE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[\w.-]+/)+[\w-]+(?:\.[\w-]+)*\.[A-Za-z][A-Za-z0-9]*")
        .expect("file path pattern compiles")
});

/// Words signalling the author considers the claim settled
pub(crate) const CONFIDENT_WORDS: &[&str] = &["verified", "confirmed", "validated", "proven"];

/// Hedging words
pub(crate) const UNCERTAIN_WORDS: &[&str] = &["likely", "probably", "appears", "seems"];

/// Keywords that make a numeric claim specific
pub(crate) const SPECIFICITY_WORDS: &[&str] = &["version", "line", "file", "commit"];
