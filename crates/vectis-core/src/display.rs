//! Infix printing of expressions.
//!
//! Output follows the usual string form: `x + 2*y`, `-a*b`, `7/3`,
//! `sqrt(50)`, `x**2`, `1/x`, `sin(q)`.

use std::fmt;

use crate::expr::Expr;
use crate::number::Number;

const PREC_ADD: u8 = 10;
const PREC_MUL: u8 = 20;
const PREC_POW: u8 = 30;
const PREC_ATOM: u8 = 100;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

/// Binding strength of the outermost operator when printed.
fn precedence(e: &Expr) -> u8 {
    match e {
        Expr::Number(n) if n.is_negative() => PREC_ADD,
        Expr::Number(n) if !n.is_integer() => PREC_MUL,
        Expr::Add(_) => PREC_ADD,
        Expr::Mul(_) => {
            if e.is_negative_term() {
                PREC_ADD
            } else {
                PREC_MUL
            }
        }
        Expr::Pow(pair) => match pair.1.as_number() {
            Some(n) if n.is_negative() => PREC_MUL,
            Some(n) if *n == Number::ratio(1, 2) => PREC_ATOM,
            _ => PREC_POW,
        },
        _ => PREC_ATOM,
    }
}

/// Renders `e`, parenthesized if it binds looser than `min`.
fn paren(e: &Expr, min: u8) -> String {
    if precedence(e) < min {
        format!("({})", render(e))
    } else {
        render(e)
    }
}

/// Renders an expression to a string.
pub(crate) fn render(e: &Expr) -> String {
    match e {
        Expr::Number(n) => n.to_string(),
        Expr::Symbol(s) => s.to_string(),
        Expr::Coordinate(c) => c.to_string(),
        Expr::Add(args) => {
            let mut out = render(&args[0]);
            for term in &args[1..] {
                if term.is_negative_term() {
                    out.push_str(" - ");
                    out.push_str(&paren(&-term, PREC_ADD + 1));
                } else {
                    out.push_str(" + ");
                    out.push_str(&render(term));
                }
            }
            out
        }
        Expr::Mul(_) => render_mul(e),
        Expr::Pow(pair) => {
            let (base, exp) = (&pair.0, &pair.1);
            match exp.as_number() {
                Some(n) if n.is_negative() => {
                    let inverted = base.clone().pow(Expr::Number(-n));
                    format!("1/{}", paren(&inverted, PREC_POW))
                }
                Some(n) if *n == Number::ratio(1, 2) => format!("sqrt({})", render(base)),
                _ => format!("{}**{}", paren(base, PREC_POW + 1), paren(exp, PREC_POW + 1)),
            }
        }
        Expr::Function(func, arg) => format!("{}({})", func.name(), render(arg)),
    }
}

fn render_mul(e: &Expr) -> String {
    let (coeff, rest) = e.as_coeff_term();
    let factors = match rest {
        Expr::Mul(args) => args.to_vec(),
        other => vec![other],
    };

    let mut numer: Vec<Expr> = Vec::new();
    let mut denom: Vec<Expr> = Vec::new();
    for factor in factors {
        match &factor {
            Expr::Pow(pair) if pair.1.as_number().is_some_and(Number::is_negative) => {
                let positive = -&pair.1;
                denom.push(pair.0.clone().pow(positive));
            }
            _ => numer.push(factor),
        }
    }

    let mut out = String::new();
    let coeff = if coeff.is_negative() {
        out.push('-');
        -coeff
    } else {
        coeff
    };
    let unit = coeff == Number::new(1);

    let numer_str: Vec<String> = numer.iter().map(|f| paren(f, PREC_MUL)).collect();
    if numer_str.is_empty() {
        out.push_str(&coeff.to_string());
    } else {
        if !unit {
            out.push_str(&coeff.to_string());
            out.push('*');
        }
        out.push_str(&numer_str.join("*"));
    }

    if !denom.is_empty() {
        out.push('/');
        if denom.len() == 1 {
            out.push_str(&paren(&denom[0], PREC_POW));
        } else {
            let parts: Vec<String> = denom.iter().map(|f| paren(f, PREC_MUL)).collect();
            out.push('(');
            out.push_str(&parts.join("*"));
            out.push(')');
        }
    }
    out
}
