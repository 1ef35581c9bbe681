/// Removes markup tags and comments, keeping only the text between them.
///
/// Quoted attribute values may contain `>` without closing the tag. An
/// unterminated tag swallows the rest of the input.
pub fn strip_markup(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        output.push_str(&rest[..open]);
        let tail = &rest[open..];

        if let Some(comment) = tail.strip_prefix("<!--") {
            rest = match comment.find("-->") {
                Some(end) => &comment[end + 3..],
                None => "",
            };
            continue;
        }

        rest = match tag_end(tail) {
            Some(end) => &tail[end + 1..],
            None => "",
        };
    }

    output.push_str(rest);
    output
}

fn tag_end(tag: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (index, ch) in tag.char_indices().skip(1) {
        match (quote, ch) {
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '>') => return Some(index),
            (None, _) => {}
        }
    }
    None
}
