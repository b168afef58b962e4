use crate::transcode::hex_literal;
use crate::types::Identifier;
use std::io::{self, Write};

const ROW_WIDTH: usize = 8;

/// Quote raw bytes as a C string literal. Works on bytes rather than `str`
/// so file names that aren't UTF-8 survive unchanged.
pub fn c_string(s: &[u8]) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for &byte in s {
        match byte {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(byte as char),
            // Octal keeps following hex-looking chars from being swallowed.
            _ => out.push_str(&format!("\\{:03o}", byte)),
        }
    }
    out.push('"');
    out
}

/// Write the `_name`, array and `_len` declarations for one asset.
pub fn emit_file<W: Write>(
    out: &mut W,
    ident: &Identifier,
    page_name: &[u8],
    bytes: &[u8],
) -> io::Result<()> {
    writeln!(
        out,
        "const char {}_name[] PROGMEM = {};",
        ident,
        c_string(page_name)
    )?;
    writeln!(out)?;
    writeln!(out, "const byte {}[] PROGMEM = {{", ident)?;
    for row in bytes.chunks(ROW_WIDTH) {
        let literals: Vec<String> = row.iter().map(|b| hex_literal(*b)).collect();
        writeln!(out, "\t{},", literals.join(", "))?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out, "const unsigned int {}_len PROGMEM = {};", ident, bytes.len())?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(ident: &str, page_name: &str, bytes: &[u8]) -> String {
        let mut out = Vec::new();
        emit_file(
            &mut out,
            &Identifier::new(ident.to_string()),
            page_name.as_bytes(),
            bytes,
        ).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_single_byte() {
        let text = render("index_html", "/index.html", &[0x41]);
        assert_eq!(
            text,
            "const char index_html_name[] PROGMEM = \"/index.html\";\n\
             \n\
             const byte index_html[] PROGMEM = {\n\
             \t0x41,\n\
             };\n\
             \n\
             const unsigned int index_html_len PROGMEM = 1;\n\
             \n"
        );
    }

    #[test]
    fn test_rows_of_eight() {
        let bytes: Vec<u8> = (0u8..10).collect();
        let text = render("x", "/x", &bytes);
        assert!(text.contains(
            "\t0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,\n\t0x08, 0x09,\n};"
        ));
        assert!(text.contains("x_len PROGMEM = 10;"));
    }

    #[test]
    fn test_empty_file() {
        let text = render("empty_txt", "/empty.txt", &[]);
        assert!(text.contains("const byte empty_txt[] PROGMEM = {\n};"));
        assert!(text.contains("empty_txt_len PROGMEM = 0;"));
    }

    #[test]
    fn test_c_string_escapes() {
        assert_eq!(c_string(b"/a.html"), "\"/a.html\"");
        assert_eq!(c_string(b"/q\"b\\"), "\"/q\\\"b\\\\\"");
        assert_eq!(c_string("/\u{e9}".as_bytes()), "\"/\\303\\251\"");
        assert_eq!(c_string(b"/caf\xe9"), "\"/caf\\351\"");
    }
}
