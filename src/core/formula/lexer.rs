//! Zerlegt einen Ausdruck in Tokens.

use super::FormulaError;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
}

/// Token mit Byte-Offset im Quelltext (für Fehlermeldungen).
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Spanned {
    pub token: Token,
    pub offset: usize,
}

pub(super) fn tokenize(source: &str) -> Result<Vec<Spanned>, FormulaError> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(offset, ch)) = chars.peek() {
        let simple = match ch {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            '^' => Some(Token::Caret),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            ',' => Some(Token::Comma),
            _ => None,
        };
        if let Some(token) = simple {
            chars.next();
            tokens.push(Spanned { token, offset });
            continue;
        }

        if ch.is_whitespace() {
            chars.next();
        } else if ch.is_ascii_digit() || ch == '.' {
            let end = scan_number(source, offset);
            let text = &source[offset..end];
            let value = text
                .parse::<f64>()
                .map_err(|_| FormulaError::InvalidNumber(text.to_string()))?;
            tokens.push(Spanned {
                token: Token::Number(value),
                offset,
            });
            while chars.peek().is_some_and(|&(i, _)| i < end) {
                chars.next();
            }
        } else if ch.is_ascii_alphabetic() || ch == '_' {
            let mut end = offset;
            while let Some(&(i, c)) = chars.peek() {
                if c.is_ascii_alphanumeric() || c == '_' {
                    end = i + c.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Spanned {
                token: Token::Ident(source[offset..end].to_string()),
                offset,
            });
        } else {
            return Err(FormulaError::UnexpectedChar { ch, offset });
        }
    }

    Ok(tokens)
}

/// Ende eines Zahlenliterals: Ziffern, optional `.`, optional Exponent `e[+-]d`.
fn scan_number(source: &str, start: usize) -> usize {
    let bytes = source.as_bytes();
    let digits = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = digits(start);
    if end < bytes.len() && bytes[end] == b'.' {
        end = digits(end + 1);
    }
    // Exponent nur übernehmen, wenn wirklich Ziffern folgen ("2e" bleibt 2 * e)
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_end = digits(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("tokenize ok")
            .into_iter()
            .map(|s| s.token)
            .collect()
    }

    #[test]
    fn tokenizes_operators_numbers_and_idents() {
        assert_eq!(
            kinds("sin(2.5*x)^2"),
            vec![
                Token::Ident("sin".into()),
                Token::LParen,
                Token::Number(2.5),
                Token::Star,
                Token::Ident("x".into()),
                Token::RParen,
                Token::Caret,
                Token::Number(2.0),
            ]
        );
    }

    #[test]
    fn scientific_notation_needs_exponent_digits() {
        assert_eq!(kinds("1e3"), vec![Token::Number(1000.0)]);
        assert_eq!(kinds("2.5e-1"), vec![Token::Number(0.25)]);
        assert_eq!(
            kinds("2ex"),
            vec![Token::Number(2.0), Token::Ident("ex".into())]
        );
    }

    #[test]
    fn comma_separates_arguments() {
        assert_eq!(
            kinds("max(x,1)"),
            vec![
                Token::Ident("max".into()),
                Token::LParen,
                Token::Ident("x".into()),
                Token::Comma,
                Token::Number(1.0),
                Token::RParen,
            ]
        );
        assert_eq!(kinds("log10"), vec![Token::Ident("log10".into())]);
    }

    #[test]
    fn leading_dot_number() {
        assert_eq!(kinds(".5"), vec![Token::Number(0.5)]);
    }

    #[test]
    fn lone_dot_is_invalid_number() {
        assert!(matches!(
            tokenize("x + ."),
            Err(FormulaError::InvalidNumber(_))
        ));
    }

    #[test]
    fn rejects_unknown_characters_with_offset() {
        assert_eq!(
            tokenize("x $ 2"),
            Err(FormulaError::UnexpectedChar { ch: '$', offset: 2 })
        );
    }
}
