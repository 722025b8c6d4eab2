//! Character-level CSV line tokenizing
//!
//! A `"` toggles quote mode. Inside quote mode a doubled `""` emits one
//! literal quote and consumes both characters. A `,` outside quote mode ends
//! the current field; every other character is appended to it. Fields are
//! trimmed once tokenizing is complete.

/// One tokenized cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Trimmed cell text with quoting removed
    pub text: String,

    /// Whether any quote character appeared in the cell
    pub quoted: bool,
}

impl Token {
    fn finish(buffer: &mut String, quoted: &mut bool) -> Self {
        let token = Token {
            text: buffer.trim().to_string(),
            quoted: *quoted,
        };
        buffer.clear();
        *quoted = false;
        token
    }
}

/// Split a single CSV line into tokens
pub fn tokenize_line(line: &str) -> Vec<Token> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' => {
                quoted = true;
                if in_quotes && chars.get(i + 1) == Some(&'"') {
                    buffer.push('"');
                    i += 2;
                    continue;
                }
                in_quotes = !in_quotes;
            }
            ',' if !in_quotes => {
                tokens.push(Token::finish(&mut buffer, &mut quoted));
            }
            _ => buffer.push(c),
        }
        i += 1;
    }

    tokens.push(Token::finish(&mut buffer, &mut quoted));
    tokens
}

/// Tokenize a line and keep only the cell text
pub fn split_fields(line: &str) -> Vec<String> {
    tokenize_line(line).into_iter().map(|t| t.text).collect()
}
