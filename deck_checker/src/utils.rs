/// Lenient integer parse: reads the leading ASCII digits and ignores the rest.
///
/// `"2"` and `"2x"` give 2; `""`, `"x2"` and `"-1"` give `None`, as does a
/// digit run too large for `u32`.
pub fn parse_quantity(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let digits_end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..digits_end].parse::<u32>().ok()
}
