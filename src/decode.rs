//! Decoder for the catalog's email-style obfuscation.
//!
//! DrugBank pages pass through Cloudflare's email protection, which hides
//! anything resembling an email address behind a reversible byte-XOR
//! encoding. SMILES strings trip the filter because of their `@` stereo
//! descriptors, so the descriptor field arrives partially encoded.
//!
//! The encoding is a hex string: the first digit pair is a one-byte XOR key,
//! every following pair is one payload byte XORed with that key.

use crate::error::{Error, Result};

/// Decode an obfuscated `data-cfemail` token back to its plain text.
///
/// Input is expected to be well-formed (even length, valid hex digits,
/// UTF-8 payload). Anything else is a malformed document, not a condition
/// to paper over.
pub fn decode_obfuscated(token: &str) -> Result<String> {
    if token.len() < 2 || token.len() % 2 != 0 {
        return Err(Error::MalformedDocument(format!(
            "obfuscated token has invalid length {}",
            token.len()
        )));
    }

    let mut bytes = Vec::with_capacity(token.len() / 2);
    for pair in token.as_bytes().chunks_exact(2) {
        bytes.push(hex_pair(pair[0], pair[1])?);
    }

    let key = bytes[0];
    let decoded: Vec<u8> = bytes[1..].iter().map(|b| b ^ key).collect();

    String::from_utf8(decoded)
        .map_err(|_| Error::MalformedDocument("obfuscated token decodes to invalid UTF-8".into()))
}

fn hex_pair(hi: u8, lo: u8) -> Result<u8> {
    let digit = |c: u8| -> Result<u8> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(Error::MalformedDocument(format!(
                "invalid hex digit {:?} in obfuscated token",
                char::from(c)
            ))),
        }
    };
    Ok((digit(hi)? << 4) | digit(lo)?)
}
