//! Placeholder tokens and the ordered substitution pass.
//!
//! Tokens are literal strings. Some are substrings of others
//! (`sharedlib_name` sits inside `___sharedlib_name___`), so the tables are
//! ordered: decorated forms first, then bare forms, longer before shorter.
//! Every pass replaces all non-overlapping occurrences.

use std::path::{Component, Path, PathBuf};

use crate::error::Result;
use crate::ext::PathExt;
use crate::params::Parameters;

/// A [`Parameters`] field a token is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    UpperName,
    ShrinkName,
    HumpName,
    LittleHumpName,
    DashName,
    Author,
    Date,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub pattern: &'static str,
    pub field: Field,
}

const fn token(pattern: &'static str, field: Field) -> Token {
    Token { pattern, field }
}

/// Tokens replaced in file contents, in application order.
///
/// `___sharedlibname___` is replaced here as well as in paths, so it never
/// survives as `___<shrink_name>___` in generated text.
pub const CONTENT_TOKENS: &[Token] = &[
    token("%username%", Field::Author),
    token("%date%", Field::Date),
    token("%year%", Field::Year),
    token("%SharedlibName%", Field::HumpName),
    token("___sharedlib_name___", Field::Name),
    token("___SharedlibName___", Field::HumpName),
    token("___sharedlibname___", Field::ShrinkName),
    token("---SharedlibName---", Field::HumpName),
    token("sharedlib_name", Field::Name),
    token("SHAREDLIB_NAME", Field::UpperName),
    token("sharedlibname", Field::ShrinkName),
    token("SharedlibName", Field::HumpName),
    token("sharedlibName", Field::LittleHumpName),
    token("sharedlib-name", Field::DashName),
];

/// Tokens replaced in path components, in application order.
///
/// Date and author tokens are left out: their values may contain separators.
pub const PATH_TOKENS: &[Token] = &[
    token("___sharedlib_name___", Field::Name),
    token("___SharedlibName___", Field::HumpName),
    token("___sharedlibname___", Field::ShrinkName),
    token("sharedlib_name", Field::Name),
    token("sharedlibname", Field::ShrinkName),
    token("SharedlibName", Field::HumpName),
];

/// Applies every token of `tokens` to `input`, in order.
pub fn substitute(input: &str, params: &Parameters, tokens: &[Token]) -> String {
    tokens.iter().fold(input.to_string(), |acc, token| {
        if acc.contains(token.pattern) {
            acc.replace(token.pattern, params.value(token.field))
        } else {
            acc
        }
    })
}

/// Substitutes [`CONTENT_TOKENS`] in a file's text.
pub fn substitute_content(content: &str, params: &Parameters) -> String {
    substitute(content, params, CONTENT_TOKENS)
}

/// Substitutes [`PATH_TOKENS`] in every normal component of `relative`.
pub fn substitute_path(relative: &Path, params: &Parameters) -> Result<PathBuf> {
    let mut rendered = PathBuf::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = Path::new(part).to_str_checked()?;
                rendered.push(substitute(part, params, PATH_TOKENS));
            }
            other => rendered.push(other.as_os_str()),
        }
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn params() -> Parameters {
        Parameters::derive(
            "video_codec",
            "/tmp/out",
            Some("Jane Doe".to_string()),
            NaiveDate::from_ymd_opt(2023, 11, 5).unwrap(),
        )
    }

    /// Asserts that no token appears inside the pattern of a token applied
    /// before it, i.e. decorated forms always precede the bare ones they wrap.
    fn assert_wrapped_before_bare(tokens: &[Token]) {
        for (i, earlier) in tokens.iter().enumerate() {
            for later in &tokens[i + 1..] {
                assert!(
                    !later.pattern.contains(earlier.pattern),
                    "'{}' must be applied before '{}'",
                    later.pattern,
                    earlier.pattern
                );
            }
        }
    }

    #[test]
    fn content_table_order() {
        assert_wrapped_before_bare(CONTENT_TOKENS);
        let patterns: Vec<&str> = CONTENT_TOKENS.iter().map(|t| t.pattern).collect();
        assert_eq!(
            patterns,
            vec![
                "%username%",
                "%date%",
                "%year%",
                "%SharedlibName%",
                "___sharedlib_name___",
                "___SharedlibName___",
                "___sharedlibname___",
                "---SharedlibName---",
                "sharedlib_name",
                "SHAREDLIB_NAME",
                "sharedlibname",
                "SharedlibName",
                "sharedlibName",
                "sharedlib-name",
            ]
        );
    }

    #[test]
    fn path_table_order() {
        assert_wrapped_before_bare(PATH_TOKENS);
        let patterns: Vec<&str> = PATH_TOKENS.iter().map(|t| t.pattern).collect();
        assert_eq!(
            patterns,
            vec![
                "___sharedlib_name___",
                "___SharedlibName___",
                "___sharedlibname___",
                "sharedlib_name",
                "sharedlibname",
                "SharedlibName",
            ]
        );
    }

    #[test]
    fn wrapped_and_bare_tokens_do_not_interfere() {
        let content = "mod ___sharedlib_name___; use sharedlib_name::SharedlibName; \
                       struct ___SharedlibName___; const ---SharedlibName--- = 1;";
        assert_eq!(
            substitute_content(content, &params()),
            "mod video_codec; use video_codec::VideoCodec; \
             struct VideoCodec; const VideoCodec = 1;"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let content = "sharedlib_name sharedlib_name\nsharedlib_name";
        assert_eq!(
            substitute_content(content, &params()),
            "video_codec video_codec\nvideo_codec"
        );
    }

    #[test]
    fn replaces_all_content_fields() {
        let content = "// Copyright %year% %username%, created %date%\n\
                       #define SHAREDLIB_NAME_EXPORT\n\
                       package com.example.sharedlibname;\n\
                       class %SharedlibName% { val sharedlibName = \"sharedlib-name\" }";
        assert_eq!(
            substitute_content(content, &params()),
            "// Copyright 2023 Jane Doe, created 2023/11/05\n\
             #define VIDEO_CODEC_EXPORT\n\
             package com.example.videocodec;\n\
             class VideoCodec { val videoCodec = \"video-codec\" }"
        );
    }

    #[test]
    fn leaves_unrelated_text_alone() {
        let content = "fn main() { println!(\"50% done\"); }";
        assert_eq!(substitute_content(content, &params()), content);
    }

    #[test]
    fn substitutes_each_path_component() {
        let relative = Path::new(
            "android/sharedlib_name/src/main/java/com/example/sharedlibname/SharedlibName.kt",
        );
        assert_eq!(
            substitute_path(relative, &params()).unwrap(),
            PathBuf::from(
                "android/video_codec/src/main/java/com/example/videocodec/VideoCodec.kt"
            )
        );
    }

    #[test]
    fn path_substitution_skips_content_only_tokens() {
        let relative = Path::new("%year%/sharedlib-name/SHAREDLIB_NAME.txt");
        assert_eq!(
            substitute_path(relative, &params()).unwrap(),
            PathBuf::from("%year%/sharedlib-name/SHAREDLIB_NAME.txt")
        );
    }

    #[test]
    fn wrapped_path_tokens_drop_their_markers() {
        let relative = Path::new("___sharedlib_name___/___SharedlibName___.h");
        assert_eq!(
            substitute_path(relative, &params()).unwrap(),
            PathBuf::from("video_codec/VideoCodec.h")
        );
    }
}
