use crate::data::models::{DictEntry, ParseError};

/// Parses one CC-CEDICT line.
///
/// Returns `Ok(None)` for comment lines. The line format is
/// `TRADITIONAL SIMPLIFIED [pin1 yin1] /sense/sense;gloss/`.
pub fn parse_line(line: &str) -> Result<Option<DictEntry>, ParseError> {
    if line.starts_with('#') {
        return Ok(None);
    }

    let line = line.trim();
    let line = line.strip_suffix('/').unwrap_or(line);

    let (chinese, english) = line.split_once('/').ok_or(ParseError::MissingSlash)?;
    let (headwords, pinyin) = chinese
        .trim()
        .split_once('[')
        .ok_or(ParseError::MissingBracket)?;

    let chars: Vec<_> = headwords.split_whitespace().collect();
    let &[traditional, simplified] = chars.as_slice() else {
        return Err(ParseError::HeadwordCount { found: chars.len() });
    };

    // Drops the closing bracket without checking it.
    let mut pinyin = pinyin.chars();
    pinyin.next_back();

    Ok(Some(DictEntry {
        traditional: traditional.to_string(),
        simplified: simplified.to_string(),
        pinyin: pinyin.as_str().to_string(),
        definitions: english
            .split('/')
            .flat_map(|sense| sense.split(';'))
            .map(str::to_string)
            .collect(),
    }))
}
