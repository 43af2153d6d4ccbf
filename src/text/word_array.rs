//! Extracting word rows from a C array listing.

use std::sync::LazyLock;

use regex::Regex;

/// `name[][N] = { ... };`, possibly spanning lines.
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(\w+)\s*\[\s*\]\s*\[\s*\d+\s*\]\s*=\s*\{(.*?)\}\s*;")
        .expect("declaration pattern is valid")
});

/// One innermost brace-delimited row.
static ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("row pattern is valid"));

/// Errors extracting rows from a listing.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("No animation array declaration (name[][N] = {{ ... }};) found")]
    NoArray,
}

/// Parse one token: `0x`/`0X` prefixed hexadecimal, otherwise decimal.
pub fn parse_token(token: &str) -> Option<u32> {
    match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => token.parse().ok(),
    }
}

/// Identifier of the first animation array in the listing.
pub fn extract_declaration_name(source: &str) -> Option<&str> {
    DECLARATION
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Pull integer rows out of the first `name[][N] = { ... };` declaration.
///
/// Tokens that do not parse as `u32` are skipped, and rows left empty are
/// dropped. Row length is not checked; that is the sequence's job.
pub fn extract_word_rows(source: &str) -> Result<Vec<Vec<u32>>, ExtractError> {
    let body = DECLARATION
        .captures(source)
        .and_then(|caps| caps.get(2))
        .ok_or(ExtractError::NoArray)?
        .as_str();

    Ok(brace_rows(body))
}

/// Pull integer rows out of every `{ ... }` group in the text.
///
/// No declaration is needed, so pasted rows like `{0x0, 0x0, 0x0, 0x0, 55},`
/// are accepted. Token and row handling match [`extract_word_rows`].
pub fn extract_brace_rows(source: &str) -> Vec<Vec<u32>> {
    brace_rows(source)
}

/// [`extract_word_rows`], falling back to [`extract_brace_rows`] when the
/// text has no declaration. Fails only if no row is found either way.
pub fn extract_word_rows_lenient(source: &str) -> Result<Vec<Vec<u32>>, ExtractError> {
    match extract_word_rows(source) {
        Ok(rows) => Ok(rows),
        Err(ExtractError::NoArray) => {
            let rows = extract_brace_rows(source);
            if rows.is_empty() {
                return Err(ExtractError::NoArray);
            }
            log::debug!("no array declaration; scanned {} bare rows", rows.len());
            Ok(rows)
        }
    }
}

fn brace_rows(body: &str) -> Vec<Vec<u32>> {
    let mut rows = Vec::new();
    for (i, caps) in ROW.captures_iter(body).enumerate() {
        let mut values = Vec::new();
        for token in caps[1].split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match parse_token(token) {
                Some(v) => values.push(v),
                None => log::debug!("row {}: skipping unparseable token {:?}", i, token),
            }
        }
        if values.is_empty() {
            log::debug!("row {}: no values, dropped", i);
        } else {
            rows.push(values);
        }
    }
    rows
}
