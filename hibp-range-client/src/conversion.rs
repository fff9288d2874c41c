use compact_str::CompactString;
use sha1::{Digest, Sha1};

/// Length of an uppercase hex SHA-1 digest.
pub const DIGEST_LEN: usize = 40;

/// Length of the digest prefix sent to the range API (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// Length of the digest suffix matched locally.
pub const SUFFIX_LEN: usize = DIGEST_LEN - PREFIX_LEN;

/// Hex lookup table, uppercase to match the range API.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// SHA-1 of the UTF-8 bytes of `password` as 40 uppercase hex characters.
#[inline]
pub fn sha1_hex(password: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    let hash: [u8; 20] = hasher.finalize().into();

    let mut out = [0u8; DIGEST_LEN];
    for (i, byte) in hash.iter().enumerate() {
        out[i * 2] = HEX_CHARS[(byte >> 4) as usize];
        out[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
    }
    out
}

/// A password digest split into the prefix sent over the wire and the suffix
/// kept for local matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashSplit {
    prefix: CompactString,
    suffix: CompactString,
}

impl HashSplit {
    /// Hashes `password` and splits the digest at [`PREFIX_LEN`].
    pub fn new(password: &str) -> Self {
        let digest = sha1_hex(password);
        let (head, tail) = digest.split_at(PREFIX_LEN);

        // Every byte comes from HEX_CHARS, so the char conversion is lossless.
        Self {
            prefix: head.iter().map(|&b| b as char).collect(),
            suffix: tail.iter().map(|&b| b as char).collect(),
        }
    }

    /// First 5 hex characters of the digest.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Remaining 35 hex characters of the digest.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The full 40 character digest, prefix followed by suffix.
    pub fn digest(&self) -> CompactString {
        let mut digest = CompactString::with_capacity(DIGEST_LEN);
        digest.push_str(&self.prefix);
        digest.push_str(&self.suffix);
        digest
    }
}
