//! Dice formula parsing and evaluation.
//!
//! Grammar:
//!
//! ```text
//! formula    := count? ('d' | 'D') sides? (op multiplier)? (sign modifier)?
//! count      := integer            default 1, clamped to at least 1
//! sides      := integer            default 6, clamped to at least 2
//! op         := '/' | '÷' | 'x' | '*'
//! multiplier := positive integer   default 1
//! sign       := '+' | '-'
//! modifier   := digits             default 0, leading zeros allowed
//! ```
//!
//! The first formula found anywhere in the text is used, so
//! `"roll 3d6 for damage"` rolls `3d6`. An optional clause that does not
//! fit (`2d6/0`, a dangling `3d6+`) is left out and the rest is ignored.
//!
//! `/` and `÷` divide (rounding to the nearest integer, halves up);
//! `x` and `*` multiply. The multiplier is applied before the modifier.

use std::fmt;
use std::str::FromStr;

use chumsky::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::{clamp_count, clamp_sides, roll};
use crate::error::{DiceError, DiceResult};

/// Message returned by [`parse_formula`] when the text is not a formula.
pub const PARSE_ERROR_MESSAGE: &str = "Sorry, couldn't parse your dice formula";

/// How the multiplier clause scales the dice total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MultiplierOp {
    /// Multiply the total (`x` or `*`).
    #[default]
    Multiply,
    /// Divide the total, rounding to nearest (`/` or `÷`).
    Divide,
}

impl fmt::Display for MultiplierOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Multiply => write!(f, "x"),
            Self::Divide => write!(f, "÷"),
        }
    }
}

/// Whether the modifier clause adds or subtracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModifierSign {
    /// Add the modifier.
    #[default]
    Plus,
    /// Subtract the modifier.
    Minus,
}

impl fmt::Display for ModifierSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// A parsed dice formula such as `3d6x2+1`.
///
/// Values are always stored clamped: `count >= 1`, `sides >= 2`,
/// `multiplier >= 1`. Deserialized formulas are clamped the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "FormulaFields")]
pub struct DiceFormula {
    count: u32,
    sides: u32,
    multiplier_op: MultiplierOp,
    multiplier: u32,
    modifier_sign: ModifierSign,
    modifier: u32,
}

/// Unchecked wire form of a [`DiceFormula`].
#[derive(Deserialize)]
struct FormulaFields {
    count: u32,
    sides: u32,
    #[serde(default)]
    multiplier_op: MultiplierOp,
    #[serde(default = "one")]
    multiplier: u32,
    #[serde(default)]
    modifier_sign: ModifierSign,
    #[serde(default)]
    modifier: u32,
}

fn one() -> u32 {
    1
}

impl From<FormulaFields> for DiceFormula {
    fn from(raw: FormulaFields) -> Self {
        Self {
            count: clamp_count(raw.count),
            sides: clamp_sides(raw.sides),
            multiplier_op: raw.multiplier_op,
            multiplier: raw.multiplier.max(1),
            modifier_sign: raw.modifier_sign,
            modifier: raw.modifier,
        }
        .normalized()
    }
}

impl Default for DiceFormula {
    fn default() -> Self {
        Self::new(1, 6)
    }
}

impl DiceFormula {
    /// A plain `count`d`sides` formula with no multiplier or modifier.
    pub fn new(count: u32, sides: u32) -> Self {
        Self {
            count: clamp_count(count),
            sides: clamp_sides(sides),
            multiplier_op: MultiplierOp::Multiply,
            multiplier: 1,
            modifier_sign: ModifierSign::Plus,
            modifier: 0,
        }
    }

    /// Number of dice.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Faces per die.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Whether the multiplier multiplies or divides.
    pub fn multiplier_op(&self) -> MultiplierOp {
        self.multiplier_op
    }

    /// Scale factor applied to the dice total.
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Whether the modifier adds or subtracts.
    pub fn modifier_sign(&self) -> ModifierSign {
        self.modifier_sign
    }

    /// Flat adjustment applied after scaling.
    pub fn modifier(&self) -> u32 {
        self.modifier
    }

    /// Multiply the dice total by `factor` (at least 1).
    pub fn times(mut self, factor: u32) -> Self {
        self.multiplier_op = MultiplierOp::Multiply;
        self.multiplier = factor.max(1);
        self.normalized()
    }

    /// Divide the dice total by `divisor` (at least 1), rounding to nearest.
    pub fn divided_by(mut self, divisor: u32) -> Self {
        self.multiplier_op = MultiplierOp::Divide;
        self.multiplier = divisor.max(1);
        self.normalized()
    }

    /// Add `amount` after scaling.
    pub fn plus(mut self, amount: u32) -> Self {
        self.modifier_sign = ModifierSign::Plus;
        self.modifier = amount;
        self.normalized()
    }

    /// Subtract `amount` after scaling.
    pub fn minus(mut self, amount: u32) -> Self {
        self.modifier_sign = ModifierSign::Minus;
        self.modifier = amount;
        self.normalized()
    }

    // A multiplier of 1 and a modifier of 0 are no-ops; give them one spelling.
    fn normalized(mut self) -> Self {
        if self.multiplier == 1 {
            self.multiplier_op = MultiplierOp::Multiply;
        }
        if self.modifier == 0 {
            self.modifier_sign = ModifierSign::Plus;
        }
        self
    }

    /// Find and parse the first formula in `input`, reporting why none was found.
    pub fn parse(input: &str) -> DiceResult<Self> {
        formula_parser()
            .parse(input)
            .into_result()
            .map_err(|errs| {
                let reasons: Vec<String> = errs.iter().map(ToString::to_string).collect();
                DiceError::Parse(reasons.join("; "))
            })
    }

    /// Smallest value this formula can produce.
    pub fn min_value(&self) -> i64 {
        self.apply(u64::from(self.count))
    }

    /// Largest value this formula can produce.
    pub fn max_value(&self) -> i64 {
        self.apply(u64::from(self.count) * u64::from(self.sides))
    }

    /// Apply the multiplier and modifier clauses to a dice total.
    pub fn apply(&self, total: u64) -> i64 {
        let total = i64::try_from(total).unwrap_or(i64::MAX);
        let factor = i64::from(self.multiplier.max(1));
        let scaled = match self.multiplier_op {
            MultiplierOp::Multiply => total.saturating_mul(factor),
            // Totals are positive, so adding half the divisor rounds halves up.
            MultiplierOp::Divide => total.saturating_add(factor / 2) / factor,
        };
        let modifier = i64::from(self.modifier);
        match self.modifier_sign {
            ModifierSign::Plus => scaled.saturating_add(modifier),
            ModifierSign::Minus => scaled.saturating_sub(modifier),
        }
    }

    /// Roll the dice and apply the formula.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> FormulaRoll {
        let total = roll(rng, self.count, self.sides);
        FormulaRoll {
            formula: *self,
            dice_total: total,
            value: self.apply(total),
        }
    }
}

impl FromStr for DiceFormula {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical rendering: defaults are spelled out for count and sides,
/// while a multiplier of 1 and a modifier of 0 are left out.
impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.multiplier != 1 {
            write!(f, "{}{}", self.multiplier_op, self.multiplier)?;
        }
        if self.modifier != 0 {
            write!(f, "{}{}", self.modifier_sign, self.modifier)?;
        }
        Ok(())
    }
}

/// The result of rolling a [`DiceFormula`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaRoll {
    /// The formula that was rolled.
    pub formula: DiceFormula,
    /// Sum of the dice before scaling and modifier.
    pub dice_total: u64,
    /// Final value.
    pub value: i64,
}

impl fmt::Display for FormulaRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.formula, self.value)
    }
}

/// What [`parse_formula`] hands back: always something displayable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollOutput {
    /// Silent mode: just the number.
    Value(i64),
    /// Verbose mode: the canonical formula with its value, e.g. `1d20+5:17`.
    Verbose(FormulaRoll),
    /// The text was not a dice formula.
    Unparseable,
}

impl RollOutput {
    /// The rolled value, if the formula parsed.
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Verbose(roll) => Some(roll.value),
            Self::Unparseable => None,
        }
    }
}

impl fmt::Display for RollOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Verbose(roll) => write!(f, "{roll}"),
            Self::Unparseable => write!(f, "{PARSE_ERROR_MESSAGE}"),
        }
    }
}

/// Parse and roll a formula in one step.
///
/// Never fails: unparseable text yields [`RollOutput::Unparseable`],
/// which displays as [`PARSE_ERROR_MESSAGE`].
pub fn parse_formula<R: Rng + ?Sized>(rng: &mut R, formula: &str, verbose: bool) -> RollOutput {
    match DiceFormula::parse(formula) {
        Ok(parsed) => {
            let rolled = parsed.roll(rng);
            tracing::debug!(formula = %parsed, value = rolled.value, "rolled formula");
            if verbose {
                RollOutput::Verbose(rolled)
            } else {
                RollOutput::Value(rolled.value)
            }
        }
        Err(err) => {
            tracing::debug!(input = formula, error = %err, "unparseable formula");
            RollOutput::Unparseable
        }
    }
}

type FormulaExtra<'src> = extra::Err<Rich<'src, char>>;

fn to_u32<'src>(digits: &'src str, span: SimpleSpan) -> Result<u32, Rich<'src, char>> {
    digits
        .parse::<u32>()
        .map_err(|_| Rich::custom(span, format!("number {digits} is too large")))
}

// No leading zeros: `05d6` finds `5d6`, and `x05` is not a multiplier.
fn number<'src>() -> impl Parser<'src, &'src str, u32, FormulaExtra<'src>> + Clone {
    text::int(10).try_map(to_u32)
}

fn digit_run<'src>() -> impl Parser<'src, &'src str, u32, FormulaExtra<'src>> + Clone {
    text::digits(10).to_slice().try_map(to_u32)
}

fn formula<'src>() -> impl Parser<'src, &'src str, DiceFormula, FormulaExtra<'src>> + Clone {
    let op = choice((
        one_of("/÷").to(MultiplierOp::Divide),
        one_of("x*").to(MultiplierOp::Multiply),
    ));
    let multiplier = number().try_map(|n, span| {
        if n == 0 {
            Err(Rich::custom(span, "multiplier must be positive"))
        } else {
            Ok(n)
        }
    });
    let sign = choice((
        just('+').to(ModifierSign::Plus),
        just('-').to(ModifierSign::Minus),
    ));

    number()
        .or_not()
        .then_ignore(one_of("dD"))
        .then(number().or_not())
        .then(op.then(multiplier).or_not())
        .then(sign.then(digit_run()).or_not())
        .map(|(((count, sides), scale), adjust)| {
            let (multiplier_op, multiplier) = scale.unwrap_or((MultiplierOp::Multiply, 1));
            let (modifier_sign, modifier) = adjust.unwrap_or((ModifierSign::Plus, 0));
            DiceFormula {
                count: clamp_count(count.unwrap_or(1)),
                sides: clamp_sides(sides.unwrap_or(6)),
                multiplier_op,
                multiplier,
                modifier_sign,
                modifier,
            }
            .normalized()
        })
}

/// Skip ahead to the leftmost position where a formula matches, then
/// ignore whatever follows it.
fn formula_parser<'src>() -> impl Parser<'src, &'src str, DiceFormula, FormulaExtra<'src>> {
    any()
        .and_is(formula().not())
        .repeated()
        .ignore_then(formula())
        .then_ignore(any().repeated())
}
