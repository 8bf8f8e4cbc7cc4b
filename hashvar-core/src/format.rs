//! Uppercase hexadecimal formatting of digests.

/// Writes `digest` as uppercase hex into `out`.
///
/// Every byte becomes two characters, most significant nibble first, in
/// byte order and without separators. `out` must be exactly twice as long
/// as `digest`.
pub fn encode_upper(digest: &[u8], out: &mut [u8]) -> Result<(), hex::FromHexError> {
    hex::encode_to_slice(digest, out)?;
    out.make_ascii_uppercase();
    Ok(())
}
