/* RFC 1950 CMF byte
   low nibble  - compression method, 8 = deflate
   high nibble - window size
   A "deflate" body whose first byte fails this check was sent without the
   zlib wrapper and must be inflated raw.
*/
const ZLIB_METHOD_DEFLATE: u8 = 8;

pub fn is_zlib_framed(input: &[u8]) -> bool {
    matches!(input, [first, ..] if first & 0x0f == ZLIB_METHOD_DEFLATE)
}
