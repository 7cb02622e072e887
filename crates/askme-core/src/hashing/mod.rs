//! Content fingerprints for loaded FAQ corpora.

use blake3::Hasher;

use crate::faq::FaqEntry;

/// Hashes every entry's id, question and answer, in order, truncated to 64 bits.
///
/// The value identifies a corpus revision in logs and readiness reports. It is never used
/// for lookups, so a collision only makes two revisions look alike to an operator.
///
/// Fields are length-prefixed so `("ab", "c")` and `("a", "bc")` hash differently.
pub fn hash_faq_entries(entries: &[FaqEntry]) -> u64 {
    let mut hasher = Hasher::new();
    for entry in entries {
        hasher.update(&entry.id.to_le_bytes());
        update_field(&mut hasher, &entry.question);
        update_field(&mut hasher, &entry.answer);
    }
    truncate(hasher.finalize().as_bytes())
}

fn update_field(hasher: &mut Hasher, field: &str) {
    hasher.update(&(field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
}

fn truncate(bytes: &[u8; 32]) -> u64 {
    let mut head = [0u8; 8];
    head.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(head)
}
