//! Formelsprache des Funktionsplotters: Parser und Auswertung für `f(x)`.
//!
//! Akzeptiert wird genau die Syntax, die `normalize_expression` erzeugt:
//! Zahlen, die Variable `x`, `+ - * / ^`, Klammern und eine feste Menge
//! ein- und zweistelliger Funktionen (Argumente durch `,` getrennt).
//! Unbekannte Namen sind ein Fehler.

mod lexer;
mod parser;

/// Fehler beim Parsen eines Ausdrucks.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormulaError {
    #[error("leerer Ausdruck")]
    Empty,
    #[error("unerwartetes Zeichen '{ch}' an Position {offset}")]
    UnexpectedChar { ch: char, offset: usize },
    #[error("ungültige Zahl {0:?}")]
    InvalidNumber(String),
    #[error("unbekannter Name '{name}' an Position {offset}")]
    UnknownIdentifier { name: String, offset: usize },
    #[error("unerwartetes '{found}' an Position {offset}")]
    UnexpectedToken { found: String, offset: usize },
    #[error("unerwartetes Ende des Ausdrucks")]
    UnexpectedEnd,
    #[error("'{name}' erwartet {expected} Argument(e), gefunden {found} (Position {offset})")]
    ArgumentCount {
        name: String,
        expected: usize,
        found: usize,
        offset: usize,
    },
    #[error("unausgeglichene Klammer an Position {offset}")]
    UnbalancedParen { offset: usize },
    #[error("Ausdruck zu tief verschachtelt (Position {offset})")]
    TooDeep { offset: usize },
    #[error("Ausdruck zu lang ({len} Bytes, höchstens {max})")]
    TooLong { len: usize, max: usize },
}

/// Längste akzeptierte Eingabe in Bytes.
pub const MAX_SOURCE_LEN: usize = 1024;

/// Einstellige Standardfunktionen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Sqrt,
    Cbrt,
    Exp,
    Ln,
    Log,
    Log10,
    Log2,
    Abs,
    Floor,
    Ceil,
    Round,
    Trunc,
    Sign,
}

impl Function {
    /// Sucht eine Funktion nach ihrem (kleingeschriebenen) Namen.
    pub fn from_name(name: &str) -> Option<Self> {
        let function = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "sqrt" => Self::Sqrt,
            "cbrt" => Self::Cbrt,
            "exp" => Self::Exp,
            "ln" => Self::Ln,
            "log" => Self::Log,
            "log10" => Self::Log10,
            "log2" => Self::Log2,
            "abs" => Self::Abs,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            "round" => Self::Round,
            "trunc" => Self::Trunc,
            "sign" => Self::Sign,
            _ => return None,
        };
        Some(function)
    }

    fn apply(self, v: f64) -> f64 {
        match self {
            Self::Sin => v.sin(),
            Self::Cos => v.cos(),
            Self::Tan => v.tan(),
            Self::Asin => v.asin(),
            Self::Acos => v.acos(),
            Self::Atan => v.atan(),
            Self::Sinh => v.sinh(),
            Self::Cosh => v.cosh(),
            Self::Tanh => v.tanh(),
            Self::Sqrt => v.sqrt(),
            Self::Cbrt => v.cbrt(),
            Self::Exp => v.exp(),
            // `log` ist hier der natürliche Logarithmus
            Self::Ln | Self::Log => v.ln(),
            Self::Log10 => v.log10(),
            Self::Log2 => v.log2(),
            Self::Abs => v.abs(),
            Self::Floor => v.floor(),
            Self::Ceil => v.ceil(),
            Self::Round => v.round(),
            Self::Trunc => v.trunc(),
            Self::Sign => {
                if v == 0.0 || v.is_nan() {
                    v
                } else {
                    v.signum()
                }
            }
        }
    }
}

/// Zweistellige Standardfunktionen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryFunction {
    Pow,
    Min,
    Max,
    Atan2,
}

impl BinaryFunction {
    pub fn from_name(name: &str) -> Option<Self> {
        let function = match name {
            "pow" => Self::Pow,
            "min" => Self::Min,
            "max" => Self::Max,
            "atan2" => Self::Atan2,
            _ => return None,
        };
        Some(function)
    }

    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Pow => a.powf(b),
            Self::Min => a.min(b),
            Self::Max => a.max(b),
            // atan2(y, x) wie in der Mathematik üblich
            Self::Atan2 => a.atan2(b),
        }
    }
}

/// Syntaxbaum eines Ausdrucks in `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Var,
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(Function, Box<Expr>),
    Call2(BinaryFunction, Box<Expr>, Box<Expr>),
}

impl Expr {
    fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Number(value) => *value,
            Expr::Var => x,
            Expr::Neg(inner) => -inner.eval(x),
            Expr::Add(a, b) => a.eval(x) + b.eval(x),
            Expr::Sub(a, b) => a.eval(x) - b.eval(x),
            Expr::Mul(a, b) => a.eval(x) * b.eval(x),
            Expr::Div(a, b) => a.eval(x) / b.eval(x),
            Expr::Pow(a, b) => a.eval(x).powf(b.eval(x)),
            Expr::Call(function, arg) => function.apply(arg.eval(x)),
            Expr::Call2(function, a, b) => function.apply(a.eval(x), b.eval(x)),
        }
    }
}

/// Geparste, auswertbare Funktion `f(x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    expr: Expr,
}

impl Formula {
    /// Parst einen Ausdruck.
    pub fn parse(source: &str) -> Result<Self, FormulaError> {
        if source.len() > MAX_SOURCE_LEN {
            return Err(FormulaError::TooLong {
                len: source.len(),
                max: MAX_SOURCE_LEN,
            });
        }
        let tokens = lexer::tokenize(source)?;
        let expr = parser::Parser::new(&tokens, source.len()).parse()?;
        Ok(Self { expr })
    }

    /// Wertet `f(x)` aus. Definitionslücken liefern NaN oder ±∞.
    pub fn eval(&self, x: f64) -> f64 {
        self.expr.eval(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn eval(source: &str, x: f64) -> f64 {
        Formula::parse(source)
            .unwrap_or_else(|e| panic!("{source:?} sollte parsen: {e}"))
            .eval(x)
    }

    #[test]
    fn respects_operator_precedence() {
        assert_relative_eq!(eval("1+2*3", 0.0), 7.0);
        assert_relative_eq!(eval("(1+2)*3", 0.0), 9.0);
        assert_relative_eq!(eval("x^2/2-1", 4.0), 7.0);
        assert_relative_eq!(eval("8/4/2", 0.0), 1.0);
    }

    #[test]
    fn power_is_right_associative_and_binds_tighter_than_negation() {
        assert_relative_eq!(eval("2^3^2", 0.0), 512.0);
        assert_relative_eq!(eval("-x^2", 3.0), -9.0);
        assert_relative_eq!(eval("2^-1", 0.0), 0.5);
    }

    #[test]
    fn evaluates_functions_of_normalized_constants() {
        assert_relative_eq!(
            eval("sin((3.14159265358979)*x)", 0.5),
            1.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(eval("ln((2.718281828459045))", 0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eval("sqrt(abs(x))", -16.0), 4.0);
        assert_relative_eq!(eval("sign(x)", -0.1), -1.0);
    }

    #[test]
    fn evaluates_extended_function_vocabulary() {
        assert_relative_eq!(eval("cbrt(x)", -27.0), -3.0, epsilon = 1e-12);
        assert_relative_eq!(eval("trunc(x)", -2.7), -2.0);
        assert_relative_eq!(eval("log10(x)", 1000.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(eval("log2(x)", 8.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(eval("pow(x, 3)", 2.0), 8.0);
        assert_relative_eq!(eval("min(x, 1) + max(x, 1)", 4.0), 5.0);
        assert_relative_eq!(
            eval("atan2(1, x)", 1.0),
            std::f64::consts::FRAC_PI_4,
            epsilon = 1e-12
        );
        assert_relative_eq!(eval("max(-x^2, sin(x))", 0.0), 0.0);
    }

    #[test]
    fn rejects_wrong_argument_count() {
        assert_eq!(
            Formula::parse("pow(x)"),
            Err(FormulaError::ArgumentCount {
                name: "pow".into(),
                expected: 2,
                found: 1,
                offset: 0,
            })
        );
        assert_eq!(
            Formula::parse("2*sin(x, 1)"),
            Err(FormulaError::ArgumentCount {
                name: "sin".into(),
                expected: 1,
                found: 2,
                offset: 2,
            })
        );
        assert!(matches!(
            Formula::parse("(x, 1)"),
            Err(FormulaError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            Formula::parse("x, 1"),
            Err(FormulaError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn rejects_unknown_identifiers() {
        assert!(matches!(
            Formula::parse("foo(x)"),
            Err(FormulaError::UnknownIdentifier { .. })
        ));
        assert!(matches!(
            Formula::parse("2*y"),
            Err(FormulaError::UnknownIdentifier { .. })
        ));
    }

    #[test]
    fn rejects_unbalanced_parentheses() {
        assert!(matches!(
            Formula::parse("sin(x"),
            Err(FormulaError::UnbalancedParen { offset: 0 })
        ));
        assert!(matches!(
            Formula::parse("(x+1))"),
            Err(FormulaError::UnbalancedParen { offset: 5 })
        ));
    }

    #[test]
    fn rejects_empty_and_dangling_operators() {
        assert_eq!(Formula::parse("   "), Err(FormulaError::Empty));
        assert_eq!(Formula::parse("x+"), Err(FormulaError::UnexpectedEnd));
        assert!(matches!(
            Formula::parse("x x"),
            Err(FormulaError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn function_name_without_call_is_an_error() {
        assert!(matches!(
            Formula::parse("sin+1"),
            Err(FormulaError::UnexpectedToken { .. })
        ));
        assert_eq!(Formula::parse("sin"), Err(FormulaError::UnexpectedEnd));
    }

    #[test]
    fn division_by_zero_is_not_a_parse_error() {
        let f = Formula::parse("1/x").unwrap();
        assert!(f.eval(0.0).is_infinite());
    }

    #[test]
    fn rejects_excessive_nesting_and_length() {
        let n = parser::MAX_DEPTH + 1;
        let deep = format!("{}x{}", "(".repeat(n), ")".repeat(n));
        assert!(matches!(
            Formula::parse(&deep),
            Err(FormulaError::TooDeep { .. })
        ));

        let shallow = format!("{}x{}", "(".repeat(10), ")".repeat(10));
        assert!(Formula::parse(&shallow).is_ok());

        let long = "x+".repeat(MAX_SOURCE_LEN) + "x";
        assert!(matches!(
            Formula::parse(&long),
            Err(FormulaError::TooLong { .. })
        ));
    }
}
