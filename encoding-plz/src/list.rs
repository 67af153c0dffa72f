use crate::coding::ContentCoding;

// Split a header value on commas, trimming whitespace and dropping empty
// segments. Unknown tokens are kept, resolution decides their fate.
pub fn iter_from_str(val: &str) -> impl Iterator<Item = ContentCoding> + '_ {
    val.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ContentCoding::from)
}

// Ordered codec list for a header value. No-op aliases never make it into
// the list, so an unencoded body yields an empty list.
pub fn parse(val: &str) -> Vec<ContentCoding> {
    iter_from_str(val).filter(|c| !c.is_noop()).collect()
}

pub fn parse_tokens<'a, I>(tokens: I) -> Vec<ContentCoding>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .map(ContentCoding::from)
        .filter(|c| !c.is_noop())
        .collect()
}
