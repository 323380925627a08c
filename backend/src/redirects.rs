//! The `_redirects` manifest copied to the bundle root.
//!
//! One rule per line: `from to [status]`. `from` is an absolute path, optionally ending in
//! `/*` to match a whole subtree; the matched remainder is substituted for `:splat` in `to`.
//! Status 200 and 404 serve `to` from the bundle in place of the requested path, 3xx
//! statuses answer with a redirect. A `!` after the status forces the rule to apply even
//! when a file exists at the requested path. The first matching rule wins.

use std::path::{Path, PathBuf};

use axum::http::StatusCode;
use thiserror::Error;

const SPLAT: &str = ":splat";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read redirect manifest {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: source `{value}` must be an absolute path")]
    InvalidSource { line: usize, value: String },
    #[error("line {line}: rule has no target")]
    MissingTarget { line: usize },
    #[error("line {line}: `{value}` is not a status code")]
    InvalidStatus { line: usize, value: String },
    #[error("line {line}: status {status} is not supported")]
    UnsupportedStatus { line: usize, status: u16 },
    #[error("line {line}: rewrite target `{target}` must stay inside the bundle")]
    ExternalRewrite { line: usize, target: String },
    #[error("line {line}: unexpected `{token}`")]
    UnexpectedToken { line: usize, token: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Exact(String),
    /// Prefix up to and including the slash before `*`.
    Subtree(String),
}

impl Source {
    fn parse(raw: &str) -> Self {
        match raw.strip_suffix('*') {
            Some(prefix) if prefix.ends_with('/') => Source::Subtree(prefix.to_string()),
            _ => Source::Exact(trim_trailing_slash(raw).to_string()),
        }
    }

    /// Returns the splat for a matching path (empty for exact matches).
    fn capture<'a>(&self, path: &'a str) -> Option<&'a str> {
        match self {
            Source::Exact(exact) => (trim_trailing_slash(path) == exact).then_some(""),
            Source::Subtree(prefix) => {
                if let Some(rest) = path.strip_prefix(prefix.as_str()) {
                    Some(rest)
                } else if path == trim_trailing_slash(prefix) {
                    Some("")
                } else {
                    None
                }
            }
        }
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Serve this bundle path instead, answering with `status`.
    Rewrite { path: String, status: StatusCode },
    Redirect { location: String, status: StatusCode },
}

#[derive(Debug, Clone)]
struct Rule {
    source: Source,
    target: String,
    status: StatusCode,
    force: bool,
}

impl Rule {
    fn resolve(&self, path: &str) -> Option<Resolution> {
        let splat = self.source.capture(path)?;
        let target = self.target.replace(SPLAT, splat);
        Some(if is_rewrite(self.status) {
            Resolution::Rewrite { path: target, status: self.status }
        } else {
            Resolution::Redirect { location: target, status: self.status }
        })
    }
}

fn is_rewrite(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::NOT_FOUND
}

#[derive(Debug, Clone, Default)]
pub struct RedirectManifest {
    rules: Vec<Rule>,
}

impl RedirectManifest {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        let mut rules = Vec::new();
        for (idx, raw_line) in text.lines().enumerate() {
            let line = idx + 1;
            let mut tokens = raw_line.split_whitespace().take_while(|token| !token.starts_with('#'));
            let Some(from) = tokens.next() else {
                continue;
            };
            if !from.starts_with('/') {
                return Err(ManifestError::InvalidSource { line, value: from.to_string() });
            }
            let target = tokens.next().ok_or(ManifestError::MissingTarget { line })?;
            let (status, force) = match tokens.next() {
                Some(raw) => parse_status(line, raw)?,
                None => (StatusCode::MOVED_PERMANENTLY, false),
            };
            if let Some(token) = tokens.next() {
                return Err(ManifestError::UnexpectedToken { line, token: token.to_string() });
            }
            if is_rewrite(status) && !is_bundle_path(target) {
                return Err(ManifestError::ExternalRewrite { line, target: target.to_string() });
            }

            rules.push(Rule {
                source: Source::parse(from),
                target: target.to_string(),
                status,
                force,
            });
        }
        Ok(RedirectManifest { rules })
    }

    /// First rule matching `path`, for requests that found no file in the bundle.
    pub fn resolve(&self, path: &str) -> Option<Resolution> {
        self.rules.iter().find_map(|rule| rule.resolve(path))
    }

    /// First forced rule matching `path`; these shadow files in the bundle.
    pub fn resolve_forced(&self, path: &str) -> Option<Resolution> {
        self.rules
            .iter()
            .filter(|rule| rule.force)
            .find_map(|rule| rule.resolve(path))
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

fn parse_status(line: usize, raw: &str) -> Result<(StatusCode, bool), ManifestError> {
    let (code, force) = match raw.strip_suffix('!') {
        Some(code) => (code, true),
        None => (raw, false),
    };
    let code: u16 = code
        .parse()
        .map_err(|_| ManifestError::InvalidStatus { line, value: raw.to_string() })?;
    match code {
        200 | 404 | 301 | 302 | 303 | 307 | 308 => {
            let status = StatusCode::from_u16(code)
                .map_err(|_| ManifestError::InvalidStatus { line, value: raw.to_string() })?;
            Ok((status, force))
        }
        other => Err(ManifestError::UnsupportedStatus { line, status: other }),
    }
}

/// Absolute path with no `..` segment.
fn is_bundle_path(target: &str) -> bool {
    target.starts_with('/') && !target.split('/').any(|segment| segment == "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(path: &str, status: StatusCode) -> Option<Resolution> {
        Some(Resolution::Rewrite { path: path.to_string(), status })
    }

    fn redirect(location: &str, status: StatusCode) -> Option<Resolution> {
        Some(Resolution::Redirect { location: location.to_string(), status })
    }

    #[test]
    fn bundled_manifest_rewrites_everything_to_index() {
        let manifest = RedirectManifest::parse(include_str!("../../frontend/public/_redirects")).unwrap();
        assert_eq!(manifest.rule_count(), 1);
        for path in ["/", "/about", "/tours/2024/spring", "/index.html"] {
            assert_eq!(manifest.resolve(path), rewrite("/index.html", StatusCode::OK), "{path}");
        }
        assert_eq!(manifest.resolve_forced("/about"), None);
    }

    #[test]
    fn exact_rules_ignore_trailing_slash() {
        let manifest = RedirectManifest::parse("/visit   /#contact\n").unwrap();
        assert_eq!(manifest.resolve("/visit"), redirect("/#contact", StatusCode::MOVED_PERMANENTLY));
        assert_eq!(manifest.resolve("/visit/"), redirect("/#contact", StatusCode::MOVED_PERMANENTLY));
        assert_eq!(manifest.resolve("/visitor"), None);
    }

    #[test]
    fn subtree_rules_carry_the_splat() {
        let manifest = RedirectManifest::parse("/old/*  /archive/:splat  302").unwrap();
        assert_eq!(manifest.resolve("/old/rules/1"), redirect("/archive/rules/1", StatusCode::FOUND));
        assert_eq!(manifest.resolve("/old"), redirect("/archive/", StatusCode::FOUND));
        assert_eq!(manifest.resolve("/older"), None);
    }

    #[test]
    fn first_matching_rule_wins() {
        let text = "\
# legacy tour pages
/tours/*    https://tours.example.org/:splat  308
/*          /index.html                        200
";
        let manifest = RedirectManifest::parse(text).unwrap();
        assert_eq!(
            manifest.resolve("/tours/spring"),
            redirect("https://tours.example.org/spring", StatusCode::PERMANENT_REDIRECT)
        );
        assert_eq!(manifest.resolve("/life"), rewrite("/index.html", StatusCode::OK));
    }

    #[test]
    fn forced_rules_are_listed_separately() {
        let manifest = RedirectManifest::parse("/index.html  /  301!\n/*  /404.html  404").unwrap();
        assert_eq!(manifest.resolve_forced("/index.html"), redirect("/", StatusCode::MOVED_PERMANENTLY));
        assert_eq!(manifest.resolve_forced("/missing"), None);
        assert_eq!(manifest.resolve("/missing"), rewrite("/404.html", StatusCode::NOT_FOUND));
    }

    #[test]
    fn reports_offending_line() {
        let err = RedirectManifest::parse("/a /b\n\n/c\n").unwrap_err();
        assert!(matches!(err, ManifestError::MissingTarget { line: 3 }));

        let err = RedirectManifest::parse("/a /b 418").unwrap_err();
        assert!(matches!(err, ManifestError::UnsupportedStatus { line: 1, status: 418 }));

        let err = RedirectManifest::parse("/a /b ok").unwrap_err();
        assert!(matches!(err, ManifestError::InvalidStatus { line: 1, .. }));

        let err = RedirectManifest::parse("about /b").unwrap_err();
        assert!(matches!(err, ManifestError::InvalidSource { line: 1, .. }));

        let err = RedirectManifest::parse("/a /b 301 Country=fi").unwrap_err();
        assert!(matches!(err, ManifestError::UnexpectedToken { line: 1, .. }));
    }

    #[test]
    fn rewrites_cannot_leave_the_bundle() {
        for text in ["/* https://example.org/ 200", "/* /../secrets 200", "/x/* /a/../../b 404"] {
            assert!(
                matches!(RedirectManifest::parse(text), Err(ManifestError::ExternalRewrite { .. })),
                "{text}"
            );
        }
        assert!(RedirectManifest::parse("/* https://example.org/ 301").is_ok());
    }
}
