use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

/// Decodes base64 resume content to text.
///
/// Never fails: content that is not valid base64 is returned unchanged, and
/// decoded bytes that are not UTF-8 are converted lossily.
pub fn decode_resume_content(content: &str) -> String {
    // Uploads are stored unwrapped; any whitespace means this is plain text
    match STANDARD.decode(content.as_bytes()) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            debug!("Resume content is not base64 ({e}); scoring raw text");
            content.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_valid_base64() {
        let encoded = STANDARD.encode("Senior Rust engineer");
        assert_eq!(decode_resume_content(&encoded), "Senior Rust engineer");
    }

    #[test]
    fn test_space_separated_words_stay_literal() {
        // Joined without spaces this would be 16 valid base64 characters
        let raw = "Rust Java Python Go";
        assert_eq!(decode_resume_content(raw), raw);
    }

    #[test]
    fn test_wrapped_base64_is_not_unwrapped() {
        let encoded = STANDARD.encode("Built distributed systems in Rust and Go");
        let (head, tail) = encoded.split_at(20);
        let wrapped = format!("{head}\n{tail}");
        assert_eq!(decode_resume_content(&wrapped), wrapped);
    }

    #[test]
    fn test_garbage_falls_back_to_raw() {
        let raw = "not base64 at all!! <resume>";
        assert_eq!(decode_resume_content(raw), raw);
    }

    #[test]
    fn test_empty_content_decodes_to_empty() {
        assert_eq!(decode_resume_content(""), "");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let encoded = STANDARD.encode([0x52, 0x75, 0x73, 0x74, 0xff]);
        let decoded = decode_resume_content(&encoded);
        assert!(decoded.starts_with("Rust"));
        assert!(decoded.contains('\u{FFFD}'));
    }
}
