//! Markup sanitizer for user-supplied free text
//!
//! Strips every HTML/XML tag while keeping the surrounding text content.
//! `<script>` and `<style>` elements are removed together with their
//! contents, since their body is code rather than text. Comments are
//! dropped. Anything that only looks like a `<` in prose is left alone.

/// Strip markup from free text, keeping the text content.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let tail = &rest[lt..];

        // Comments: <!-- ... -->
        if tail.starts_with("<!--") {
            match tail.find("-->") {
                Some(end) => {
                    rest = &tail[end + 3..];
                    continue;
                }
                // Unterminated comment swallows the remainder
                None => return out,
            }
        }

        // A '<' not followed by a tag-ish character is plain text
        let after = &tail[1..];
        let looks_like_tag = after.starts_with('/')
            || after.starts_with('!')
            || after.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !looks_like_tag {
            out.push('<');
            rest = after;
            continue;
        }

        // Unterminated tag swallows the remainder
        let Some(gt) = tail.find('>') else { return out };
        let tag_body = &tail[1..gt];
        let name: String = tag_body
            .trim_start_matches('/')
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        rest = &tail[gt + 1..];

        // script/style bodies are dropped entirely, up to the closing tag
        if !tag_body.starts_with('/')
            && (name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style"))
        {
            let close = format!("</{}", name.to_ascii_lowercase());
            match rest.to_ascii_lowercase().find(&close) {
                Some(pos) => {
                    let after_close = &rest[pos..];
                    match after_close.find('>') {
                        Some(g) => rest = &after_close[g + 1..],
                        None => return out,
                    }
                }
                None => return out,
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_including_body() {
        assert_eq!(sanitize("<script>alert(1)</script>hello"), "hello");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(sanitize("back by Thursday"), "back by Thursday");
    }

    #[test]
    fn strips_nested_tags_keeps_text() {
        assert_eq!(sanitize("<b>bold <i>and italic</i></b> text"), "bold and italic text");
    }

    #[test]
    fn strips_comments() {
        assert_eq!(sanitize("before<!-- hidden -->after"), "beforeafter");
    }

    #[test]
    fn keeps_literal_less_than() {
        assert_eq!(sanitize("a < b and c<5"), "a < b and c<5");
    }

    #[test]
    fn strips_style_including_body() {
        assert_eq!(sanitize("<style>body{display:none}</style>visible"), "visible");
    }

    #[test]
    fn unterminated_script_drops_remainder() {
        assert_eq!(sanitize("ok<script>evil()"), "ok");
    }

    #[test]
    fn attributes_are_dropped_with_the_tag() {
        assert_eq!(
            sanitize(r#"<a href="https://example.com">link</a> done"#),
            "link done"
        );
    }
}
