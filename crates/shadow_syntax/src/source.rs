use crate::Span;

/// An argument vector plus a single-line rendering of it.
///
/// Index 0 is conventionally the program name. Each argument keeps a span
/// into the rendered text so diagnostics can point at the offending word.
/// Arguments that would not survive a shell round-trip (empty words, words
/// containing whitespace or quotes) are rendered single-quoted.
#[derive(Clone, Debug, Default)]
pub struct CommandLine {
    args: Vec<String>,
    spans: Vec<Span>,
    text: String,
}

impl CommandLine {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut text = String::with_capacity(args.iter().map(|a| a.len() + 1).sum());
        let mut spans = Vec::with_capacity(args.len());
        for (idx, arg) in args.iter().enumerate() {
            if idx > 0 {
                text.push(' ');
            }
            let start = text.len() as u32;
            push_display(&mut text, arg);
            spans.push(Span::new(start, text.len() as u32));
        }
        Self { args, spans, text }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn program(&self) -> Option<&str> {
        self.arg(0)
    }

    pub fn span(&self, index: usize) -> Option<Span> {
        self.spans.get(index).copied()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn slice(&self, span: Span) -> &str {
        &self.text[span.range()]
    }

    /// Column (in chars) of a byte offset in the rendered text.
    pub fn column(&self, byte: u32) -> u32 {
        let mut target = (byte as usize).min(self.text.len());
        while target > 0 && !self.text.is_char_boundary(target) {
            target -= 1;
        }
        self.text[..target].chars().count() as u32
    }
}

fn push_display(out: &mut String, arg: &str) {
    let needs_quotes =
        arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"');
    if !needs_quotes {
        out.push_str(arg);
        return;
    }
    out.push('\'');
    for c in arg.chars() {
        if c == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(c);
        }
    }
    out.push('\'');
}
