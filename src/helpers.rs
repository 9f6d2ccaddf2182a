/// Trim leading and trailing C0 controls and spaces.
/// Internal whitespace is kept; escaping it is the normalizer's job.
pub fn trim_c0_and_space(input: &str) -> &str {
    input.trim_matches(|c: char| c as u32 <= 0x20)
}

/// Find the end of an authority span: the first `/`, `?`, `#`, or `\` when
/// backslashes separate segments.
/// Uses SIMD-accelerated memchr for the common delimiters
pub fn find_authority_end(input: &str, backslash: bool, fragments: bool) -> usize {
    let bytes = input.as_bytes();
    let mut end = memchr::memchr2(b'/', b'?', bytes).unwrap_or(bytes.len());
    if fragments && let Some(pos) = memchr::memchr(b'#', &bytes[..end]) {
        end = pos;
    }
    if backslash && let Some(pos) = memchr::memchr(b'\\', &bytes[..end]) {
        end = pos;
    }
    end
}

/// Split off the fragment (`#...`, delimiter included).
/// Returns (`before_fragment`, `fragment_with_hash`)
pub fn split_fragment(input: &str, fragments: bool) -> (&str, Option<&str>) {
    if !fragments {
        return (input, None);
    }
    memchr::memchr(b'#', input.as_bytes())
        .map_or((input, None), |pos| (&input[..pos], Some(&input[pos..])))
}

/// Split off the query (`?...`, delimiter included).
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes())
        .map_or((input, None), |pos| (&input[..pos], Some(&input[pos..])))
}
