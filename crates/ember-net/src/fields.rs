//! Comma-separated header-value tokenization (HTTP/1.1 list grammar).

/// Walks the comma-separated subsections of a header value, invoking
/// `callback` once per non-empty subsection until it returns `false`.
///
/// Commas inside a quoted section (`"..."`) do not delimit; a quote
/// immediately preceded by `\` does not open or close a quoted section.
/// Leading whitespace is always stripped, trailing whitespace only when
/// `ignore_trailing_whitespace` is set. Subsections that are empty after
/// stripping are skipped without invoking the callback.
///
/// Returns `false` as soon as a callback invocation returns `false`,
/// otherwise `true` once the whole value has been walked.
pub fn for_each_field_value<F>(
    value: &str,
    ignore_trailing_whitespace: bool,
    mut callback: F,
) -> bool
where
    F: FnMut(&str) -> bool,
{
    let bytes = value.as_bytes();
    let mut in_quoted_section = false;
    let mut start = 0_usize;

    for index in 0..bytes.len() {
        match bytes[index] {
            b'"' if index == 0 || bytes[index - 1] != b'\\' => {
                in_quoted_section = !in_quoted_section;
            }
            b',' if !in_quoted_section => {
                if !emit_subsection(value, start, index, ignore_trailing_whitespace, &mut callback)
                {
                    return false;
                }
                start = index + 1;
            }
            _ => {}
        }
    }

    // Final subsection after the last delimiter; a trailing comma leaves
    // nothing to emit.
    if start < bytes.len()
        && !emit_subsection(
            value,
            start,
            bytes.len(),
            ignore_trailing_whitespace,
            &mut callback,
        )
    {
        return false;
    }

    true
}

fn emit_subsection<F>(
    value: &str,
    mut start: usize,
    mut end: usize,
    ignore_trailing_whitespace: bool,
    callback: &mut F,
) -> bool
where
    F: FnMut(&str) -> bool,
{
    let bytes = value.as_bytes();

    while start < end && bytes[start].is_ascii_whitespace() {
        start += 1;
    }

    if start == end {
        return true;
    }

    if ignore_trailing_whitespace {
        // Length never drops below 1; an all-whitespace subsection was
        // already filtered out above.
        while end - start > 1 && bytes[end - 1].is_ascii_whitespace() {
            end -= 1;
        }
    }

    callback(&value[start..end])
}

#[cfg(test)]
mod tests {
    use super::for_each_field_value;

    fn collect(value: &str, ignore_trailing_whitespace: bool) -> Vec<String> {
        let mut seen = Vec::new();
        let finished = for_each_field_value(value, ignore_trailing_whitespace, |token| {
            seen.push(token.to_owned());
            true
        });
        assert!(finished);
        seen
    }

    #[test]
    fn splits_simple_list() {
        assert_eq!(collect("a,b,c", true), ["a", "b", "c"]);
    }

    #[test]
    fn quoted_comma_is_not_a_delimiter() {
        assert_eq!(collect("a=\"b,c\",d", true), ["a=\"b,c\"", "d"]);
    }

    #[test]
    fn escaped_quote_does_not_close_quoted_section() {
        assert_eq!(collect("a=\"x\\\"y,z\",b", true), ["a=\"x\\\"y,z\"", "b"]);
    }

    #[test]
    fn trims_leading_and_trailing_whitespace() {
        assert_eq!(collect(" a , b ", true), ["a", "b"]);
    }

    #[test]
    fn keeps_trailing_whitespace_when_asked() {
        assert_eq!(collect(" a , b ", false), ["a ", "b "]);
    }

    #[test]
    fn skips_all_whitespace_subsections() {
        assert_eq!(collect("a,  ,b", true), ["a", "b"]);
    }

    #[test]
    fn trailing_comma_yields_no_final_subsection() {
        assert_eq!(collect("a,b,", true), ["a", "b"]);
    }

    #[test]
    fn whole_value_without_commas_is_one_subsection() {
        assert_eq!(collect("no-cache", true), ["no-cache"]);
    }

    #[test]
    fn callback_returning_false_stops_the_walk() {
        let mut seen = Vec::new();
        let finished = for_each_field_value("a,b,c", true, |token| {
            seen.push(token.to_owned());
            token != "b"
        });
        assert!(!finished);
        assert_eq!(seen, ["a", "b"]);
    }
}
