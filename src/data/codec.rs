//! CSV text ⇄ [`Grid`] conversion.
//!
//! Decoding is line-oriented: the text is split into lines first and each
//! line is scanned for quotes afterwards, so a quoted field can never span
//! a line break.

use super::model::{Grid, Row};
use crate::error::EncodeError;

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decode CSV text into a [`Grid`].
///
/// Never fails: any text decodes to some grid, possibly an empty one.
/// Empty lines are skipped and both `\n` and `\r\n` end a line.
pub fn decode(text: &str) -> Grid {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect::<Vec<Row>>()
        .into()
}

/// Split one line into fields.
///
/// A `"` toggles the quoted state and is dropped; `,` separates fields only
/// outside quotes.  The trailing field is always emitted, so the result is
/// never empty.
pub fn parse_line(line: &str) -> Row {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Encode a grid as CSV text without quoting.
///
/// Fields are joined with `,` and rows with `\n`; there is no trailing
/// newline.  Fields containing `,` or `"` do not survive a decode of the
/// output; use [`encode_quoted`] for that.
pub fn encode(grid: &Grid) -> String {
    grid.rows()
        .iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Encode a grid as CSV text, quoting fields that need it.
///
/// Fields containing `,`, `"` or a line break are wrapped in quotes with
/// inner quotes doubled.  Layout otherwise matches [`encode`]: `\n` between
/// rows, no trailing newline, ragged rows allowed.
pub fn encode_quoted(grid: &Grid) -> Result<String, EncodeError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in grid.rows() {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EncodeError::Flush(e.error().to_string()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        rows.iter()
            .map(|r| r.iter().map(|f| f.to_string()).collect())
            .collect::<Vec<Row>>()
            .into()
    }

    #[test]
    fn test_decode_simple() {
        let g = decode("a,b,c\n1,2,3");
        assert_eq!(g, grid(&[&["a", "b", "c"], &["1", "2", "3"]]));
    }

    #[test]
    fn test_decode_comma_inside_quotes_is_literal() {
        let g = decode("a,\"b,c\",d");
        assert_eq!(g, grid(&[&["a", "b,c", "d"]]));
    }

    #[test]
    fn test_decode_crlf_leaves_no_carriage_return() {
        assert_eq!(decode("x\r\ny"), grid(&[&["x"], &["y"]]));
        assert_eq!(decode("a,b\r\n1,2\r\n"), grid(&[&["a", "b"], &["1", "2"]]));
    }

    #[test]
    fn test_decode_empty_text_is_empty_grid() {
        assert!(decode("").is_empty());
        assert!(decode("\n\n\r\n").is_empty());
    }

    #[test]
    fn test_decode_skips_blank_lines_only() {
        let g = decode("h\n\n1\n");
        assert_eq!(g, grid(&[&["h"], &["1"]]));
        // whitespace is content, not a blank line
        assert_eq!(decode("  \n"), grid(&[&["  "]]));
    }

    #[test]
    fn test_decode_keeps_empty_fields() {
        assert_eq!(decode(",,"), grid(&[&["", "", ""]]));
        assert_eq!(decode("a,"), grid(&[&["a", ""]]));
        assert_eq!(decode("\"\""), grid(&[&[""]]));
    }

    #[test]
    fn test_decode_doubled_quotes_are_dropped() {
        assert_eq!(decode("say \"\"hi\"\""), grid(&[&["say hi"]]));
        assert_eq!(decode("a\"b\"c"), grid(&[&["abc"]]));
    }

    #[test]
    fn test_decode_unterminated_quote_swallows_commas() {
        assert_eq!(decode("\"a,b,c"), grid(&[&["a,b,c"]]));
        // the quoted state does not carry over to the next line
        assert_eq!(decode("\"a,b\nc,d"), grid(&[&["a,b"], &["c", "d"]]));
    }

    #[test]
    fn test_decode_no_trimming_or_coercion() {
        assert_eq!(decode(" 1 , 2.50 "), grid(&[&[" 1 ", " 2.50 "]]));
    }

    #[test]
    fn test_decode_ragged_rows() {
        let g = decode("a,b,c\n1\n1,2,3,4");
        assert_eq!(g.rows()[1].len(), 1);
        assert_eq!(g.rows()[2].len(), 4);
    }

    #[test]
    fn test_decode_every_row_has_a_field() {
        let inputs = ["", ",", "\r", "\"", "\n,\n", "a\r\r\nb", "\",\",\"\n\r\n\"", "ü,ß\n"];
        for input in inputs {
            for row in decode(input).rows() {
                assert!(!row.is_empty(), "empty row decoding {input:?}");
            }
        }
    }

    #[test]
    fn test_decode_lone_carriage_return_is_content() {
        assert_eq!(decode("a\rb"), grid(&[&["a\rb"]]));
    }

    #[test]
    fn test_encode_joins_without_quoting() {
        let g = grid(&[&["a", "b,c"], &["1", ""]]);
        assert_eq!(encode(&g), "a,b,c\n1,");
    }

    #[test]
    fn test_encode_empty_grid() {
        assert_eq!(encode(&Grid::default()), "");
    }

    #[test]
    fn test_decode_inverts_encode_for_plain_fields() {
        let g = grid(&[&["id", "name", "score"], &["1", "ann", "9.5"], &["2", "", "7"], &["3"]]);
        assert_eq!(decode(&encode(&g)), g);
    }

    #[test]
    fn test_encode_quoted_quotes_only_when_needed() {
        let g = grid(&[&["a", "b,c"], &["say \"hi\"", "3"]]);
        assert_eq!(encode_quoted(&g).unwrap(), "a,\"b,c\"\n\"say \"\"hi\"\"\",3");
    }

    #[test]
    fn test_decode_inverts_encode_quoted_for_commas() {
        let g = grid(&[&["city", "note"], &["Paris", "big, old"], &["Rome"]]);
        assert_eq!(decode(&encode_quoted(&g).unwrap()), g);
    }
}
