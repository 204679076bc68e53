//! Spaced, ASCII-only JSON text.
//!
//! Items are separated by `", "`, keys by `": "`, and every character outside
//! printable ASCII is written as a `\uXXXX` escape (UTF-16 code units).

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// `serde_json` formatter with spaced separators and ASCII-only output
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.bytes().all(is_printable_ascii) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() && is_printable_ascii(ch as u8) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

fn is_printable_ascii(b: u8) -> bool {
    (0x20..0x7f).contains(&b)
}

/// Serialize to bytes
pub fn to_vec<T>(value: &T) -> serde_json::Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut out = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut out, SpacedAsciiFormatter);
    value.serialize(&mut ser)?;
    Ok(out)
}

/// Serialize to a `String`
pub fn to_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    String::from_utf8(to_vec(value)?).map_err(serde_json::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_separators() {
        let text = to_string(&json!({"prediction": "Not Corrosion"})).unwrap();
        assert_eq!(text, r#"{"prediction": "Not Corrosion"}"#);
    }

    #[test]
    fn test_nested_arrays() {
        let text = to_string(&json!({"instances": [[[0.0, 1.0], [0.5, 0.25]]]})).unwrap();
        assert_eq!(text, r#"{"instances": [[[0.0, 1.0], [0.5, 0.25]]]}"#);
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        let text = to_string(&json!({"error": "caf\u{e9} \u{1f600}"})).unwrap();
        assert_eq!(text, r#"{"error": "caf\u00e9 \ud83d\ude00"}"#);
    }

    #[test]
    fn test_control_and_quote_escapes() {
        let text = to_string(&json!({"error": "a\"b\n\u{7f}"})).unwrap();
        assert_eq!(text, r#"{"error": "a\"b\n\u007f"}"#);
    }

    #[test]
    fn test_output_parses_back() {
        let value = json!({"a": [1, 2, {"b": null}], "c": "d"});
        let bytes = to_vec(&value).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, value);
    }
}
