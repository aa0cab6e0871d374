//! HTML rendering of syllables

/// Class used by [`render_html`]
pub const DEFAULT_CLASS: &str = "silaba";

/// Wrap each syllable in `<span class="silaba">`, escaping its text
pub fn render_html<S: AsRef<str>>(syllables: &[S]) -> String {
    render_html_with_class(syllables, DEFAULT_CLASS)
}

/// Like [`render_html`] with a custom class name
pub fn render_html_with_class<S: AsRef<str>>(syllables: &[S], class: &str) -> String {
    let class = escape(class);
    syllables
        .iter()
        .map(|s| format!("<span class=\"{class}\">{}</span>", escape(s.as_ref())))
        .collect()
}

/// Escape `& < > " '`
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}
