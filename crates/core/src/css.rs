//! `@font-face` rule generation.

use std::fmt::{self, Write as _};

use crate::{catalog::FontEntry, config::FONT_FORMAT};

/// A Unicode block included in every generated rule.
#[derive(Debug, Clone, Copy)]
pub struct UnicodeBlock {
    pub range: &'static str,
    pub name: &'static str,
}

/// Static coverage emitted for every font, independent of its glyphs.
pub const UNICODE_BLOCKS: &[UnicodeBlock] = &[
    UnicodeBlock { range: "U+0000-00FF", name: "Basic Latin + Latin-1 Supplement" },
    UnicodeBlock { range: "U+0100-017F", name: "Latin Extended-A" },
    UnicodeBlock { range: "U+0180-024F", name: "Latin Extended-B" },
    UnicodeBlock { range: "U+1E00-1EFF", name: "Latin Extended Additional" },
    UnicodeBlock { range: "U+2000-206F", name: "General Punctuation" },
    UnicodeBlock { range: "U+2070-209F", name: "Superscripts and Subscripts" },
    UnicodeBlock { range: "U+20A0-20CF", name: "Currency Symbols" },
    UnicodeBlock { range: "U+2100-214F", name: "Letterlike Symbols" },
    UnicodeBlock { range: "U+2150-218F", name: "Number Forms" },
];

const UNICODE_RANGE_LABEL: &str = "  unicode-range: ";

/// The `unicode-range` value, one annotated block per line.
pub fn unicode_range() -> String {
    let indent = " ".repeat(UNICODE_RANGE_LABEL.len());
    let mut out = String::new();
    for (i, block) in UNICODE_BLOCKS.iter().enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(&indent);
        }
        let sep = if i + 1 == UNICODE_BLOCKS.len() { ';' } else { ',' };
        let _ = write!(out, "{}{sep} /* {} */", block.range, block.name);
    }
    out
}

/// One `@font-face` rule, optionally followed by a license comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFaceRule {
    pub family: String,
    pub url: String,
    pub license: Option<String>,
}

impl FontFaceRule {
    /// Rule for `font` served from `url_prefix`.
    pub fn new(font: &FontEntry, url_prefix: &str, license: Option<String>) -> Self {
        Self {
            family: font.stem().to_string(),
            url: format!("{}/{}", url_prefix.trim_end_matches('/'), font.file_name()),
            license: license.filter(|l| !l.is_empty()),
        }
    }
}

impl fmt::Display for FontFaceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@font-face {{")?;
        writeln!(f, "  font-family: '{}';", self.family)?;
        writeln!(f, "  src: url('{}') format('{FONT_FORMAT}');", self.url)?;
        writeln!(f, "  font-weight: 400;")?;
        writeln!(f, "  font-style: normal;")?;
        writeln!(f, "  font-display: swap;")?;
        writeln!(f, "{UNICODE_RANGE_LABEL}{}", unicode_range())?;
        write!(f, "}}")?;
        if let Some(license) = &self.license {
            write!(f, " /* {license} */")?;
        }
        Ok(())
    }
}

/// Render the rule for `font` as CSS text.
pub fn generate_rule(font: &FontEntry, url_prefix: &str, license: Option<String>) -> String {
    FontFaceRule::new(font, url_prefix, license).to_string()
}
