use bytes::{BufMut, BytesMut};

use super::cursor::Cursor;

/// Finds the longest option that matches the source at `cursor`, ignoring case.
///
/// The probe grows one lower-cased byte at a time. After each byte, options that
/// are shorter than the probe or no longer share its prefix are dropped, and an
/// option equal to the probe becomes the current match and is dropped too. Since
/// the probe only grows, a later match is never shorter than an earlier one.
pub fn longest_match(source: &str, cursor: Cursor, options: &[&'static str]) -> Option<&'static str> {
    let bytes = source.as_bytes();
    let mut probe = BytesMut::with_capacity(16);
    let mut dead = vec![false; options.len()];
    let mut remaining = options.len();
    let mut found = None;

    for &b in &bytes[cursor.pointer.min(bytes.len())..] {
        if remaining == 0 {
            break;
        }
        probe.put_u8(b.to_ascii_lowercase());

        for (i, option) in options.iter().enumerate() {
            if dead[i] {
                continue;
            }
            let option = option.as_bytes();
            if option == &probe[..] {
                found = Some(options[i]);
                dead[i] = true;
                remaining -= 1;
            } else if option.len() < probe.len() || !option.starts_with(&probe[..]) {
                dead[i] = true;
                remaining -= 1;
            }
        }
    }

    found
}
