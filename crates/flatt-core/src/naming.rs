//! Stable identifiers and qualified-name handling.

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Computes the stable id of a name: 32-bit FNV-1a over its UTF-8 bytes.
///
/// Ids are reproducible across runs and platforms, so templates can use them
/// as compact keys (e.g. `switch` labels) without a registry.
pub const fn stable_id(name: &str) -> u32 {
    let bytes = name.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Splits `Game.Sub.Player` into (`Game.Sub`, `Player`).
///
/// A name without a `.` has an empty namespace.
pub fn split_qualified(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) => (&name[..dot], &name[dot + 1..]),
        None => ("", name),
    }
}
