//! Byte-level decoding of `settings.ini`.
//!
//! The game writes plain ASCII, but nothing stops a user or another tool from
//! leaving Latin-1 bytes behind. A file that is not valid UTF-8 is decoded one
//! byte per char and written back the same way, so every byte survives.

use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl TextEncoding {
    /// Decode `bytes`, preferring UTF-8.
    pub fn decode(bytes: Vec<u8>) -> (String, Self) {
        match String::from_utf8(bytes) {
            Ok(text) => (text, TextEncoding::Utf8),
            Err(err) => {
                let text = err.as_bytes().iter().copied().map(char::from).collect();
                (text, TextEncoding::Latin1)
            }
        }
    }

    /// Encode `text` for disk. Under Latin-1, chars above U+00FF have no byte
    /// and are written as `?`.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Latin1 => {
                let mut replaced = 0usize;
                let bytes: Vec<u8> = text
                    .chars()
                    .map(|ch| {
                        u8::try_from(u32::from(ch)).unwrap_or_else(|_| {
                            replaced += 1;
                            b'?'
                        })
                    })
                    .collect();
                if replaced > 0 {
                    warn!(replaced, "Characters outside Latin-1 written as '?'");
                }
                bytes
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_stays_utf8() {
        let (text, encoding) = TextEncoding::decode("; café\n".as_bytes().to_vec());
        assert_eq!(text, "; café\n");
        assert_eq!(encoding, TextEncoding::Utf8);
        assert_eq!(encoding.encode(&text), "; café\n".as_bytes());
    }

    #[test]
    fn stray_latin1_byte_round_trips() {
        let bytes = b"; caf\xE9\n[localization]\nlanguage=2\n".to_vec();
        let (text, encoding) = TextEncoding::decode(bytes.clone());
        assert_eq!(encoding, TextEncoding::Latin1);
        assert!(text.starts_with("; café\n"));
        assert_eq!(encoding.encode(&text), bytes);
    }

    #[test]
    fn latin1_replaces_unencodable_chars() {
        assert_eq!(TextEncoding::Latin1.encode("a€b"), b"a?b");
    }
}
