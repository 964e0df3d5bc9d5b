use regex::Regex;
use std::{fmt, sync::OnceLock};

static DOC_LINK_RE: OnceLock<Regex> = OnceLock::new();

/// First-match pattern for Feishu/Lark document links: lowercase `https`, a
/// tenant subdomain, one of the six known document path segments, and a
/// `[A-Za-z0-9_-]` token. Query strings and fragments fall outside the token
/// charset and are cut from the match.
fn doc_link_regex() -> &'static Regex {
    DOC_LINK_RE.get_or_init(|| {
        Regex::new(
            r"https://(?P<host>[A-Za-z0-9-]+\.(?:feishu|larkoffice)\.(?:cn|com))/(?P<kind>docx|wiki|docs|sheets|base|file)/(?P<token>[A-Za-z0-9_-]+)",
        )
        .expect("failed to compile doc link regex")
    })
}

/// Document-hosting path segment a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Docx,
    Wiki,
    Docs,
    Sheets,
    Base,
    File,
}

impl DocKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Docx => "docx",
            Self::Wiki => "wiki",
            Self::Docs => "docs",
            Self::Sheets => "sheets",
            Self::Base => "base",
            Self::File => "file",
        }
    }

    #[must_use]
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Some(match segment {
            "docx" => Self::Docx,
            "wiki" => Self::Wiki,
            "docs" => Self::Docs,
            "sheets" => Self::Sheets,
            "base" => Self::Base,
            "file" => Self::File,
            _ => return None,
        })
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated Feishu/Lark document link: the canonical matched URL plus the
/// pieces the rest of the tool cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLink {
    url: String,
    host: String,
    kind: DocKind,
    token: String,
}

impl DocLink {
    /// Extract the first document link from arbitrary text.
    ///
    /// Search semantics, not full-match: a link pasted inside a chat message
    /// is found, and trailing text outside the token charset is not part of
    /// the canonical link. Returns `None` when no link matches.
    #[must_use]
    pub fn extract(text: &str) -> Option<Self> {
        let caps = doc_link_regex().captures(text)?;
        let url = caps.get(0)?.as_str().to_owned();
        let host = caps.name("host")?.as_str().to_owned();
        let kind = DocKind::from_path_segment(caps.name("kind")?.as_str())?;
        let token = caps.name("token")?.as_str().to_owned();
        Some(Self {
            url,
            host,
            kind,
            token,
        })
    }

    /// The canonical link, exactly as matched. This is what goes on the wire.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    #[inline]
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> DocKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for DocLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
