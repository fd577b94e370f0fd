//! Content Rendering Support
//!
//! Lesson content is authored as formatted-markup blobs. This module
//! parses the supported tag subset into structured blocks the UI can
//! draw, strips markup for the chat context string, and auto-links URLs
//! in syntax reference bodies.
//!
//! Supported tags: `h1`..`h4`, `p`, `ul`/`ol`/`li`, `pre`, `code`,
//! `strong`/`b`, `em`/`i`, `br`. Unknown tags are dropped; entities
//! `&amp; &lt; &gt; &quot; &#39; &nbsp;` are decoded.

use once_cell::sync::Lazy;
use regex::Regex;

/// Inline styling of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanStyle {
    #[default]
    Normal,
    /// Inline code, rendered monospace
    Code,
    /// Strong emphasis
    Strong,
    /// Light emphasis (italics)
    Emphasis,
}

/// A styled text run inside a paragraph or bullet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    fn new(text: String, style: SpanStyle) -> Self {
        Self { text, style }
    }
}

/// One block-level element of parsed lesson content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section heading
    Heading(String),
    /// Paragraph of styled spans
    Paragraph(Vec<Span>),
    /// Bulleted list; each item is a sequence of styled spans
    Bullets(Vec<Vec<Span>>),
    /// Preformatted code block, monospace verbatim
    Code(String),
}

/// A piece of a linkified string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkSegment {
    Text(String),
    Url(String),
}

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    // Trailing sentence punctuation is left out of the link
    Regex::new(r#"https?://[^\s<>"')]+[^\s<>"').,;:!?]"#)
        .unwrap_or_else(|e| panic!("url regex: {}", e))
});

/// Split free text into plain and URL segments for auto-linking
pub fn linkify(text: &str) -> Vec<LinkSegment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in URL_RE.find_iter(text) {
        if m.start() > last {
            segments.push(LinkSegment::Text(text[last..m.start()].to_string()));
        }
        segments.push(LinkSegment::Url(m.as_str().to_string()));
        last = m.end();
    }
    if last < text.len() {
        segments.push(LinkSegment::Text(text[last..].to_string()));
    }
    segments
}

/// Remove markup and collapse whitespace, for the chat context string
pub fn strip_markup(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '<' {
            // Skip to the closing '>', emitting a space so adjacent
            // words from different elements do not fuse
            let rest = &content[i..];
            if let Some(end) = rest.find('>') {
                for _ in 0..rest[..end].chars().count() {
                    chars.next();
                }
                out.push(' ');
                continue;
            }
        }
        out.push(c);
    }

    let decoded = decode_entities(&out);
    let mut collapsed = String::with_capacity(decoded.len());
    let mut in_space = true;
    for c in decoded.chars() {
        if c.is_whitespace() {
            if !in_space {
                collapsed.push(' ');
                in_space = true;
            }
        } else {
            collapsed.push(c);
            in_space = false;
        }
    }
    collapsed.trim_end().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Parse a content blob into drawable blocks
pub fn parse_markup(content: &str) -> Vec<Block> {
    Parser::new(content).run()
}

struct Parser<'a> {
    rest: &'a str,
    blocks: Vec<Block>,
    // current inline accumulation
    spans: Vec<Span>,
    text: String,
    style: SpanStyle,
    mode: Mode,
    bullets: Vec<Vec<Span>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Flow,
    Heading,
    ListItem,
    Pre,
}

impl<'a> Parser<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            rest: content,
            blocks: Vec::new(),
            spans: Vec::new(),
            text: String::new(),
            style: SpanStyle::Normal,
            mode: Mode::Flow,
            bullets: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Block> {
        while !self.rest.is_empty() {
            match self.rest.find('<') {
                None => {
                    let chunk = std::mem::take(&mut self.rest);
                    self.push_text(chunk);
                }
                Some(start) => {
                    let (before, after) = self.rest.split_at(start);
                    self.push_text(before);
                    match after[1..].find('>') {
                        None => {
                            // Dangling '<' with no close; treat as text
                            self.push_text(after);
                            self.rest = "";
                        }
                        Some(end) => {
                            let tag = &after[1..end + 1];
                            self.rest = &after[end + 2..];
                            self.handle_tag(tag);
                        }
                    }
                }
            }
        }
        self.flush_paragraph();
        self.flush_bullets();
        self.blocks
    }

    fn push_text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        if self.mode == Mode::Pre {
            self.text.push_str(&decode_entities(raw));
            return;
        }
        // Collapse authoring whitespace inside flow text. A space is
        // kept between spans (e.g. around an inline code run) but never
        // doubled and never at the very start of a run.
        let decoded = decode_entities(raw);
        for c in decoded.chars() {
            if c.is_whitespace() {
                let at_run_start = self.text.is_empty() && self.spans.is_empty();
                let prev_is_space = if self.text.is_empty() {
                    self.spans
                        .last()
                        .map(|s| s.text.ends_with(' '))
                        .unwrap_or(false)
                } else {
                    self.text.ends_with(' ')
                };
                if !at_run_start && !prev_is_space {
                    self.text.push(' ');
                }
            } else {
                self.text.push(c);
            }
        }
    }

    fn flush_span(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.spans.push(Span::new(text, self.style));
        }
    }

    fn take_spans(&mut self) -> Vec<Span> {
        self.flush_span();
        let mut spans = std::mem::take(&mut self.spans);
        // Trim the outer edges of the inline run
        if let Some(first) = spans.first_mut() {
            first.text = first.text.trim_start().to_string();
        }
        if let Some(last) = spans.last_mut() {
            last.text = last.text.trim_end().to_string();
        }
        spans.retain(|s| !s.text.is_empty());
        spans
    }

    fn flush_paragraph(&mut self) {
        let spans = self.take_spans();
        if !spans.is_empty() {
            self.blocks.push(Block::Paragraph(spans));
        }
    }

    fn flush_bullets(&mut self) {
        if !self.bullets.is_empty() {
            let items = std::mem::take(&mut self.bullets);
            self.blocks.push(Block::Bullets(items));
        }
    }

    fn handle_tag(&mut self, raw_tag: &str) {
        let tag = raw_tag
            .trim_start_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_lowercase();
        let closing = raw_tag.starts_with('/');

        match (tag.as_str(), closing) {
            ("h1" | "h2" | "h3" | "h4", false) => {
                self.flush_paragraph();
                self.flush_bullets();
                self.mode = Mode::Heading;
            }
            ("h1" | "h2" | "h3" | "h4", true) => {
                let spans = self.take_spans();
                let title: String = spans.into_iter().map(|s| s.text).collect();
                if !title.is_empty() {
                    self.blocks.push(Block::Heading(title));
                }
                self.mode = Mode::Flow;
            }
            ("p", false) => {
                self.flush_paragraph();
                self.flush_bullets();
            }
            ("p", true) => self.flush_paragraph(),
            ("ul" | "ol", false) => {
                self.flush_paragraph();
            }
            ("ul" | "ol", true) => {
                self.flush_bullets();
                self.mode = Mode::Flow;
            }
            ("li", false) => {
                self.flush_span();
                self.spans.clear();
                self.text.clear();
                self.mode = Mode::ListItem;
            }
            ("li", true) => {
                let spans = self.take_spans();
                if !spans.is_empty() {
                    self.bullets.push(spans);
                }
                self.mode = Mode::Flow;
            }
            ("pre", false) => {
                self.flush_paragraph();
                self.flush_bullets();
                self.mode = Mode::Pre;
                self.text.clear();
            }
            ("pre", true) => {
                let code = std::mem::take(&mut self.text);
                self.blocks.push(Block::Code(code.trim_matches('\n').to_string()));
                self.mode = Mode::Flow;
            }
            ("code", false) if self.mode != Mode::Pre => {
                self.flush_span();
                self.style = SpanStyle::Code;
            }
            ("code", true) if self.mode != Mode::Pre => {
                self.flush_span();
                self.style = SpanStyle::Normal;
            }
            ("strong" | "b", false) => {
                self.flush_span();
                self.style = SpanStyle::Strong;
            }
            ("strong" | "b", true) => {
                self.flush_span();
                self.style = SpanStyle::Normal;
            }
            ("em" | "i", false) => {
                self.flush_span();
                self.style = SpanStyle::Emphasis;
            }
            ("em" | "i", true) => {
                self.flush_span();
                self.style = SpanStyle::Normal;
            }
            ("br", _) => {
                if self.mode == Mode::Pre {
                    self.text.push('\n');
                } else {
                    self.push_text(" ");
                }
            }
            // Unknown tags are dropped
            _ => {}
        }
    }
}
