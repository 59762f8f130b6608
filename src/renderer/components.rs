//! Stateless helpers shared by the value renderer: token styling, string
//! quoting, and the single-line vs multi-line layout decision.

/// Token category driving color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Str,
    Number,
    Boolean,
    Null,
    Symbol,
    /// Type labels and placeholder markers (`Map(2)`, `[Circular]`, ...).
    Label,
    Punct,
}

/// Wraps token text in ANSI open/close code pairs when enabled.
///
/// Painting is purely additive: stripping the escapes from a painted
/// rendering reproduces the unpainted rendering byte for byte.
pub struct StylePainter {
    enabled: bool,
}

impl StylePainter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, token: Token, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let codes = match token {
            Token::Str | Token::Symbol => Some((32, 39)),
            Token::Number | Token::Boolean => Some((33, 39)),
            Token::Null => Some((1, 22)),
            Token::Label => Some((36, 39)),
            Token::Punct => None,
        };
        match codes {
            Some((open, close)) => format!("\x1b[{}m{}\x1b[{}m", open, text, close),
            None => text.to_string(),
        }
    }
}

/// Removes ANSI style escapes, recovering the structural content.
pub fn strip_styles(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for esc in chars.by_ref() {
                if esc == 'm' {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Character count excluding ANSI style escapes, so colors never influence
/// layout decisions.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for esc in chars.by_ref() {
                if esc == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Quotes a string literal, preferring a quote character that does not occur
/// in the string (`'`, then `"`, then backtick) and falling back to escaped
/// single quotes. Control characters are always escaped.
pub fn quote_string(s: &str) -> String {
    let quote = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') {
        '`'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Whether a record key can be printed bare, without quotes.
pub fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Decides single-line vs multi-line layout for one composite node.
///
/// The decision is local: each node compares its own single-line candidate
/// against the configured width, so a small nested value can stay on one
/// line inside an otherwise multi-line parent.
pub struct LayoutEngine {
    break_length: usize,
}

const INDENT: &str = "  ";

impl LayoutEngine {
    pub fn new(break_length: usize) -> Self {
        Self { break_length }
    }

    /// Assembles a composite from its already-rendered children. `label` may
    /// be empty (records and sequences carry none).
    pub fn compose(&self, label: &str, children: &[String], open: char, close: char) -> String {
        if children.is_empty() {
            return if label.is_empty() {
                format!("{}{}", open, close)
            } else {
                format!("{} {}{}", label, open, close)
            };
        }

        let single = self.single_line(label, children, open, close);
        let fits = visible_width(&single) <= self.break_length;
        let broken = children.iter().any(|child| child.contains('\n'));
        if fits && !broken {
            return single;
        }
        self.multi_line(label, children, open, close)
    }

    fn single_line(&self, label: &str, children: &[String], open: char, close: char) -> String {
        let mut out = String::new();
        if !label.is_empty() {
            out.push_str(label);
            out.push(' ');
        }
        out.push(open);
        out.push(' ');
        out.push_str(&children.join(", "));
        out.push(' ');
        out.push(close);
        out
    }

    fn multi_line(&self, label: &str, children: &[String], open: char, close: char) -> String {
        let mut out = String::new();
        if !label.is_empty() {
            out.push_str(label);
            out.push(' ');
        }
        out.push(open);
        out.push('\n');
        let last = children.len() - 1;
        for (i, child) in children.iter().enumerate() {
            for (j, line) in child.lines().enumerate() {
                if j > 0 {
                    out.push('\n');
                }
                out.push_str(INDENT);
                out.push_str(line);
            }
            if i < last {
                out.push(',');
            }
            out.push('\n');
        }
        out.push(close);
        out
    }
}
