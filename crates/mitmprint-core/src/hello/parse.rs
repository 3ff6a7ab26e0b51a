use tracing::trace;

use crate::hello::cursor::{be_u16_values, Cursor};
use crate::hello::types::ParsedHello;

/// TLS `HandshakeType` for `ClientHello`
pub const HANDSHAKE_CLIENT_HELLO: u8 = 0x01;

/// Extension type: supported_groups (formerly elliptic_curves)
pub const EXT_SUPPORTED_GROUPS: u16 = 0x000a;

/// Extension type: ec_point_formats
pub const EXT_EC_POINT_FORMATS: u16 = 0x000b;

const RANDOM_LEN: usize = 32;

/// Parse a ClientHello handshake message into a `ParsedHello`.
///
/// `data` is either the full handshake message (type byte `0x01` plus the
/// 3-byte length, as found inside a TLS record) or the bare ClientHello body
/// starting at `client_version`. The two are told apart by the first byte.
///
/// Never fails: malformed or truncated input yields whatever was decoded
/// before the first inconsistency, and all-empty fields when not even the
/// fixed prefix is present.
pub fn parse_hello(data: &[u8]) -> ParsedHello {
    let mut hello = ParsedHello::default();
    let mut cursor = Cursor::new(handshake_body(data));

    if decode_body(&mut cursor, &mut hello).is_none() {
        trace!(
            remaining = cursor.remaining(),
            "ClientHello decoding stopped early"
        );
    }

    hello
}

/// Strip the handshake header if present, bounding the body to the declared
/// length.
fn handshake_body(data: &[u8]) -> &[u8] {
    if data.first() != Some(&HANDSHAKE_CLIENT_HELLO) {
        return data;
    }

    let mut cursor = Cursor::new(data);
    // msg_type(1) + length(3)
    let _msg_type = cursor.read_u8();
    match cursor.read_u24() {
        Some(declared) => cursor.take_clamped(declared as usize),
        None => &[],
    }
}

/// RFC 5246 §7.4.1.2 walk. Returns `None` as soon as a read runs out of
/// input; everything stored in `hello` up to that point stays.
fn decode_body(c: &mut Cursor<'_>, hello: &mut ParsedHello) -> Option<()> {
    let version = c.read_u16()?;
    c.take(RANDOM_LEN)?;
    hello.version = version;

    // session_id<0..32>
    c.read_vec_u8()?;

    // cipher_suites<2..2^16-2>
    let suites = c.read_vec_u16()?;
    hello.cipher_suites = be_u16_values(suites).collect();

    // compression_methods<1..2^8-1>
    let methods = c.read_vec_u8()?;
    hello.compression_methods = methods.to_vec();

    if c.is_empty() {
        return Some(());
    }

    let block = c.read_vec_u16()?;
    decode_extensions(&mut Cursor::new(block), hello)
}

fn decode_extensions(c: &mut Cursor<'_>, hello: &mut ParsedHello) -> Option<()> {
    while !c.is_empty() {
        let ext_type = c.read_u16()?;
        let data = c.read_vec_u16()?;
        hello.extensions.push(ext_type);

        match ext_type {
            EXT_SUPPORTED_GROUPS => {
                if let Some(list) = Cursor::new(data).read_vec_u16() {
                    hello.curves.extend(be_u16_values(list));
                }
            }
            EXT_EC_POINT_FORMATS => {
                if let Some(list) = Cursor::new(data).read_vec_u8() {
                    hello.points.extend_from_slice(list);
                }
            }
            _ => {}
        }
    }
    Some(())
}
