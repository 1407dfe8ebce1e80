use crate::domain::model::CodeList;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Splits airport code file content into codes, one per line.
///
/// Both `\n` and `\r\n` terminators are removed, and a last line without a
/// terminator keeps all of its characters. Blank lines become empty codes;
/// nothing else is trimmed or validated.
pub fn parse_codes(content: &str) -> CodeList {
    content.lines().map(str::to_string).collect()
}

pub fn load_codes<S: Storage>(storage: &S, path: &str) -> Result<CodeList> {
    let raw = storage.read_file(path)?;
    let content = String::from_utf8(raw)?;
    let codes = parse_codes(&content);

    tracing::debug!("Loaded {} airport codes from {}", codes.len(), storage.location(path));
    if codes.is_empty() {
        tracing::warn!("Airport code file {} is empty", storage.location(path));
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes_preserves_order_and_duplicates() {
        let codes = parse_codes("LAX\nSFO\nLAX\nOAK\n");
        assert_eq!(codes.as_slice(), &["LAX", "SFO", "LAX", "OAK"]);
    }

    #[test]
    fn test_parse_codes_handles_crlf() {
        let codes = parse_codes("LAX\r\nSFO\r\n");
        assert_eq!(codes.as_slice(), &["LAX", "SFO"]);
    }

    #[test]
    fn test_parse_codes_keeps_last_character_without_trailing_newline() {
        let codes = parse_codes("LAX\nSFO");
        assert_eq!(codes.as_slice(), &["LAX", "SFO"]);
    }

    #[test]
    fn test_parse_codes_keeps_blank_lines() {
        let codes = parse_codes("LAX\n\nSFO\n");
        assert_eq!(codes.as_slice(), &["LAX", "", "SFO"]);
    }

    #[test]
    fn test_parse_codes_empty_input() {
        assert!(parse_codes("").is_empty());
    }
}
