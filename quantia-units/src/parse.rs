//! Quantity parsing
//!
//! Two surface grammars, tried in order:
//!
//! - money: `[+-]? symbol digits[.digits] prefix? (op unit)*`, e.g. `-$3.5M`, `€20/h`
//! - physical: `[amount] ' '? '/'? unit (op unit)*`, e.g. `100km/h`, `9.81 m/s2`, `kg*m/s2`
//!
//! Scanning only checks the shape of the input. Tokens are resolved against a
//! registry afterwards so that errors can name the token at fault.

use quantia_core::{QuantityError, Result};
use crate::base_unit::CURRENCY_SYMBOLS;
use crate::prefix::CURRENCY_PREFIXES;
use crate::quantity::Quantity;
use crate::registry::Registry;
use crate::unit::{is_symbol_char, MAX_TOKEN_LETTERS};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    Multiply,
    Divide,
}

#[derive(Debug, Clone, PartialEq)]
struct UnitToken {
    op: Op,
    prefix_base: String,
    exponent: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
enum Syntax {
    Money {
        negative: bool,
        symbol: char,
        amount: String,
        prefix: Option<char>,
        units: Vec<UnitToken>,
    },
    Physical {
        amount: Option<String>,
        units: Vec<UnitToken>,
    },
}

/// Character cursor with backtracking
struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(text: &str) -> Self {
        Cursor { chars: text.chars().collect(), pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn accept(&mut self, what: char) -> bool {
        self.accept_if(|c| c == what).is_some()
    }

    fn accept_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        let c = self.peek().filter(|&c| pred(c))?;
        self.pos += 1;
        Some(c)
    }

    /// Consume a run of matching characters, returning how many were taken
    fn accept_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        while self.accept_if(&pred).is_some() {}
        self.pos - start
    }

    fn slice(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    /// `digits(.digits)?`; leaves the cursor untouched on failure
    fn decimal(&mut self) -> Option<String> {
        let start = self.pos;
        if self.accept_while(|c| c.is_ascii_digit()) == 0 {
            return None;
        }
        let before_point = self.pos;
        if self.accept('.') && self.accept_while(|c| c.is_ascii_digit()) == 0 {
            self.pos = before_point;
        }
        Some(self.slice(start))
    }

    /// `[+-]? decimal ([eE] [+-]? digits)?`
    fn float(&mut self) -> Option<String> {
        let start = self.pos;
        self.accept_if(|c| c == '+' || c == '-');
        if self.decimal().is_none() {
            self.pos = start;
            return None;
        }
        let before_exp = self.pos;
        if self.accept_if(|c| c == 'e' || c == 'E').is_some() {
            self.accept_if(|c| c == '+' || c == '-');
            if self.accept_while(|c| c.is_ascii_digit()) == 0 {
                self.pos = before_exp;
            }
        }
        Some(self.slice(start))
    }

    fn op(&mut self) -> Option<Op> {
        match self.accept_if(|c| matches!(c, '*' | '⋅' | '·' | '/'))? {
            '/' => Some(Op::Divide),
            _ => Some(Op::Multiply),
        }
    }

    /// `symbol{1,6} (-?digits)?`
    fn unit(&mut self, op: Op) -> Option<UnitToken> {
        let start = self.pos;
        let letters = self.accept_while(is_symbol_char);
        if letters == 0 || letters > MAX_TOKEN_LETTERS {
            self.pos = start;
            return None;
        }
        let prefix_base = self.slice(start);

        let exp_start = self.pos;
        let negative = self.accept('-');
        let exponent = if self.accept_while(|c| c.is_ascii_digit()) > 0 {
            let text = self.slice(exp_start);
            match text.parse::<i32>() {
                Ok(exp) => Some(exp),
                Err(_) => {
                    self.pos = start;
                    return None;
                }
            }
        } else {
            if negative {
                self.pos = exp_start;
            }
            None
        };
        Some(UnitToken { op, prefix_base, exponent })
    }

    /// `(op unit)*` up to the end of input
    fn trailing_units(&mut self, units: &mut Vec<UnitToken>) -> Option<()> {
        while !self.at_end() {
            let op = self.op()?;
            units.push(self.unit(op)?);
        }
        Some(())
    }
}

fn scan_money(text: &str) -> Option<Syntax> {
    let mut cursor = Cursor::new(text);
    let negative = matches!(cursor.accept_if(|c| c == '+' || c == '-'), Some('-'));
    let symbol = cursor.accept_if(|c| CURRENCY_SYMBOLS.contains(c))?;
    let amount = cursor.decimal()?;
    // Prefix letters match case-insensitively; resolution rejects the ones the unit lacks
    let prefix = cursor.accept_if(|c| CURRENCY_PREFIXES.contains(c.to_ascii_uppercase()));
    let mut units = Vec::new();
    cursor.trailing_units(&mut units)?;
    Some(Syntax::Money { negative, symbol, amount, prefix, units })
}

fn scan_physical(text: &str) -> Option<Syntax> {
    let mut cursor = Cursor::new(text);
    let amount = cursor.float();
    if amount.is_some() {
        cursor.accept(' ');
    }
    let op = if cursor.accept('/') { Op::Divide } else { Op::Multiply };
    let mut units = vec![cursor.unit(op)?];
    cursor.trailing_units(&mut units)?;
    Some(Syntax::Physical { amount, units })
}

fn scan(text: &str) -> Option<Syntax> {
    scan_money(text).or_else(|| scan_physical(text))
}

fn parse_amount(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| QuantityError::format(format!("Invalid amount '{}'.", text)))
}

impl Registry {
    /// Parse a quantity against this registry. Units are kept in the order written.
    pub fn parse_quantity(&self, text: &str) -> Result<Quantity> {
        let text = text.trim();
        let syntax = scan(text).ok_or_else(|| {
            QuantityError::format(format!("The string '{}' is not in the correct format.", text))
        })?;

        match syntax {
            Syntax::Money { negative, symbol, amount, prefix, units } => {
                let amount = parse_amount(&amount)?;
                let mut currency = self.resolve(&symbol.to_string(), 1).map_err(|_| {
                    QuantityError::format(format!("Currency unit '{}' is invalid or unknown.", symbol))
                })?;
                if let Some(p) = prefix {
                    let found = currency.base.find_prefix(&p.to_string()).ok_or_else(|| {
                        QuantityError::format(format!("Invalid currency prefix '{}'.", p))
                    })?;
                    currency.prefix = Some(found);
                }
                let mut quantity =
                    Quantity::from_unit(if negative { -amount } else { amount }, currency);
                self.push_tokens(&mut quantity, &units)?;
                Ok(quantity)
            }
            Syntax::Physical { amount, units } => {
                let amount = match amount {
                    Some(text) => parse_amount(&text)?,
                    None => 1.0,
                };
                let mut quantity = Quantity::new(amount);
                self.push_tokens(&mut quantity, &units)?;
                Ok(quantity)
            }
        }
    }

    fn push_tokens(&self, quantity: &mut Quantity, tokens: &[UnitToken]) -> Result<()> {
        for token in tokens {
            let unit = self.resolve(&token.prefix_base, token.exponent.unwrap_or(1))?;
            quantity.units.push(match token.op {
                Op::Multiply => unit,
                Op::Divide => unit.inverted()?,
            });
        }
        Ok(())
    }
}
