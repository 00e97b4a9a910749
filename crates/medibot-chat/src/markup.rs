//! Translation of the two markers bot messages use: `**bold**` and `\n`.

/// A run of text within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub bold: bool,
}

/// Split one line into plain and bold runs. An unclosed `**` leaves the
/// rest of the line plain, markers included.
pub fn segments(line: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut remaining = line;

    while let Some(start) = remaining.find("**") {
        let after_start = &remaining[start + 2..];
        let Some(end) = after_start.find("**") else {
            break;
        };

        if start > 0 {
            out.push(Segment {
                text: &remaining[..start],
                bold: false,
            });
        }
        out.push(Segment {
            text: &after_start[..end],
            bold: true,
        });
        remaining = &after_start[end + 2..];
    }

    if !remaining.is_empty() {
        out.push(Segment {
            text: remaining,
            bold: false,
        });
    }
    out
}

/// HTML for a chat bubble: text escaped, bold as `<strong>`, newlines as `<br>`.
pub fn to_html(message: &str) -> String {
    message
        .split('\n')
        .map(|line| {
            segments(line)
                .into_iter()
                .map(|s| {
                    let text = escape_html(s.text);
                    if s.bold {
                        format!("<strong>{text}</strong>")
                    } else {
                        text
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Drop the bold markers, keeping the text.
pub fn to_plain(message: &str) -> String {
    message
        .split('\n')
        .map(|line| segments(line).into_iter().map(|s| s.text).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
