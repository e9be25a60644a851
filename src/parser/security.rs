//! Unlocking of encrypted documents with either the user or the owner password.

use lopdf::encryption::PasswordAlgorithm;
use lopdf::{Document, Object};

/// Padding string of the standard security handler.
const PAD_BYTES: [u8; 32] = [
    0x28, 0xBF, 0x4E, 0x5E, 0x4E, 0x75, 0x8A, 0x41, 0x64, 0x00, 0x4E, 0x56, 0xFF, 0xFA, 0x01, 0x08,
    0x2E, 0x2E, 0x00, 0xB6, 0xD0, 0x68, 0x3E, 0x80, 0x2F, 0x0C, 0xA9, 0xFE, 0x64, 0x53, 0x69, 0x7A,
];

/// Decrypt `document` in place.
///
/// A user password unlocks the document directly. For revision 2-4 handlers
/// the file key is derived from the user password only, so an owner password
/// is first used to recover the user password stored in `/O`. Revision 5-6
/// handlers derive the key from either password.
pub fn unlock(document: &mut Document, password: &str) -> lopdf::Result<()> {
    if document.authenticate_user_password(password).is_ok() {
        return document.decrypt(password);
    }

    document.authenticate_owner_password(password)?;

    let algorithm = PasswordAlgorithm::try_from(&*document)?;
    let owner_password = algorithm.sanitize_password(password)?;
    match recover_user_password(document, &owner_password) {
        Some(user_password) => document.decrypt_raw(user_password),
        None => document.decrypt(password),
    }
}

/// The padded user password encrypted in `/O`, for revision 2-4 handlers.
fn recover_user_password(document: &Document, owner_password: &[u8]) -> Option<Vec<u8>> {
    let encrypt = document.get_encrypted().ok()?;
    let revision = encrypt.get(b"R").and_then(Object::as_i64).ok()?;
    if !(2..=4).contains(&revision) {
        return None;
    }
    let owner_value = encrypt.get(b"O").and_then(Object::as_str).ok()?;

    let key_len = if revision == 2 {
        5
    } else {
        encrypt
            .get(b"Length")
            .and_then(Object::as_i64)
            .map_or(5, |bits| (bits / 8) as usize)
            .clamp(5, 16)
    };

    let mut digest = md5::compute(pad_password(owner_password)).0;
    if revision >= 3 {
        for _ in 0..50 {
            digest = md5::compute(digest).0;
        }
    }
    let key = &digest[..key_len];

    if revision == 2 {
        return Some(rc4(key, owner_value));
    }

    let mut user_password = owner_value.to_vec();
    for round in (0..=19u8).rev() {
        let round_key: Vec<u8> = key.iter().map(|byte| byte ^ round).collect();
        user_password = rc4(&round_key, &user_password);
    }
    Some(user_password)
}

fn pad_password(password: &[u8]) -> Vec<u8> {
    let len = password.len().min(32);
    let mut padded = Vec::with_capacity(32);
    padded.extend_from_slice(&password[..len]);
    padded.extend_from_slice(&PAD_BYTES[..32 - len]);
    padded
}

fn rc4(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut s: Vec<u8> = (0..=255).collect();
    let mut j: usize = 0;
    for i in 0..256 {
        j = (j + s[i] as usize + key[i % key.len()] as usize) & 0xFF;
        s.swap(i, j);
    }

    let mut out = Vec::with_capacity(data.len());
    let mut i: usize = 0;
    j = 0;
    for &byte in data {
        i = (i + 1) & 0xFF;
        j = (j + s[i] as usize) & 0xFF;
        s.swap(i, j);
        out.push(byte ^ s[(s[i] as usize + s[j] as usize) & 0xFF]);
    }
    out
}
