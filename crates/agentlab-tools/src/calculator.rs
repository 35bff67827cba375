use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ToolError;
use crate::tool::{Tool, ToolResult};

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+\.?\d*").unwrap());
static DECIMAL_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{Nd}$").unwrap());

/// Arithmetic operation selected from the wording of the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Operators in the order their cues are checked. The first operator with
    /// any cue present in the text wins.
    const PRIORITY: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    pub fn cues(&self) -> &'static [&'static str] {
        match self {
            Operation::Addition => &["add", "+", "plus"],
            Operation::Subtraction => &["subtract", "-", "minus"],
            Operation::Multiplication => &["multiply", "*", "x", "times"],
            Operation::Division => &["divide", "/", "÷"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
        }
    }

    /// Find the operator named in already-lowercased text
    pub fn detect(text: &str) -> Option<Operation> {
        Self::PRIORITY
            .into_iter()
            .find(|op| op.cues().iter().any(|cue| text.contains(cue)))
    }

    fn apply(&self, a: f64, b: f64) -> Result<f64, ToolError> {
        match self {
            Operation::Addition => Ok(a + b),
            Operation::Subtraction => Ok(a - b),
            Operation::Multiplication => Ok(a * b),
            Operation::Division => {
                if b == 0.0 {
                    Err(ToolError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful calculator outcome
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub operation: Operation,
    pub result: f64,
}

impl Calculation {
    /// The result rendered for display (`8.0`, `2.5`, ...)
    pub fn formatted(&self) -> String {
        format_number(self.result)
    }
}

/// Render a float the way the transcripts show numbers: integral values
/// keep one decimal place, very large or very small magnitudes switch to
/// exponent form (`1e+16`, `1e-05`), everything else uses the shortest
/// exact form.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(value);
    }
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// `1e16` -> `1e+16`, `1.5e-7` -> `1.5e-07`
fn exponent_form(value: f64) -> String {
    let raw = format!("{:e}", value);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        Err(_) => raw,
    }
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Value of any Unicode decimal digit. Each script's digits form a
/// contiguous run starting at zero, so the value is the offset into it.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut zero = c as u32;
    while let Some(prev) = zero.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        zero -= 1;
    }
    Some((c as u32 - zero) % 10)
}

/// Rewrite a matched numeric token with ASCII digits so `f64` can parse it
fn ascii_digits(token: &str) -> String {
    token
        .chars()
        .map(|c| {
            digit_value(c)
                .and_then(|d| char::from_digit(d, 10))
                .unwrap_or(c)
        })
        .collect()
}

/// Parse two numbers and an operator keyword out of free text and apply it.
///
/// The text must contain exactly two numeric tokens; they are used in the
/// order they appear. A leading `-` directly before a digit is read as a
/// sign, so `"10-5"` parses as `10` and `-5`.
pub fn calculate(expression: &str) -> Result<Calculation, ToolError> {
    let expr = expression.trim().to_lowercase();

    let numbers = NUMBER_PATTERN
        .find_iter(&expr)
        .map(|m| {
            ascii_digits(m.as_str())
                .parse::<f64>()
                .map_err(|e| ToolError::Internal(format!("{}: '{}'", e, m.as_str())))
        })
        .collect::<Result<Vec<f64>, ToolError>>()?;

    let [a, b] = numbers[..] else {
        return Err(ToolError::Parse);
    };

    let operation = Operation::detect(&expr).ok_or(ToolError::UnknownOperation)?;
    let result = operation.apply(a, b)?;

    Ok(Calculation { operation, result })
}

/// Calculator tool
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, expression: &str) -> Result<Calculation, ToolError> {
        calculate(expression)
    }
}

#[async_trait]
impl Tool for Calculator {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "For math operations (add, subtract, multiply, divide)"
    }

    async fn execute(&self, input: &str) -> ToolResult {
        match self.calculate(input) {
            Ok(calculation) => ToolResult::success(calculation.formatted())
                .with_metadata("operation", calculation.operation.as_str())
                .with_metadata("result", calculation.result),
            Err(e) => ToolResult::error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plus_keyword() {
        let calc = calculate("5 plus 3").unwrap();
        assert_eq!(calc.operation, Operation::Addition);
        assert_eq!(calc.result, 8.0);
        assert_eq!(calc.formatted(), "8.0");
    }

    #[test]
    fn test_each_operator() {
        assert_eq!(calculate("add 2 and 3").unwrap().result, 5.0);
        assert_eq!(calculate("subtract 10 and 4").unwrap().result, 6.0);
        assert_eq!(calculate("multiply 6 and 7").unwrap().result, 42.0);
        assert_eq!(calculate("divide 9 and 2").unwrap().result, 4.5);
        assert_eq!(calculate("6 times 7").unwrap().operation, Operation::Multiplication);
        assert_eq!(calculate("8 / 2").unwrap().operation, Operation::Division);
        assert_eq!(calculate("8 ÷ 2").unwrap().result, 4.0);
    }

    #[test]
    fn test_numbers_used_in_order_found() {
        assert_eq!(calculate("subtract 3 and 10").unwrap().result, -7.0);
        assert_eq!(calculate("divide 1 and 4").unwrap().result, 0.25);
    }

    #[test]
    fn test_decimals_and_signs() {
        assert_eq!(calculate("add 1.5 and 2.25").unwrap().result, 3.75);
        // "-" glued to a digit is a sign, and the "-" cue then selects subtraction
        let calc = calculate("10-5").unwrap();
        assert_eq!(calc.operation, Operation::Subtraction);
        assert_eq!(calc.result, 15.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(calculate("10 divide by 0"), Err(ToolError::DivisionByZero));
    }

    #[test]
    fn test_wrong_number_count_is_parse_error() {
        assert_eq!(calculate("add these please"), Err(ToolError::Parse));
        assert_eq!(calculate("add 5"), Err(ToolError::Parse));
        assert_eq!(calculate("add 1 and 2 and 3"), Err(ToolError::Parse));
        assert_eq!(ToolError::Parse.to_string(), "Could not parse numbers");
    }

    #[test]
    fn test_unknown_operation() {
        assert_eq!(calculate("compare 4 and 5"), Err(ToolError::UnknownOperation));
    }

    #[test]
    fn test_addition_cue_wins_over_subtraction() {
        let calc = calculate("add 5 and 3 then subtract").unwrap();
        assert_eq!(calc.operation, Operation::Addition);
        assert_eq!(calc.result, 8.0);
    }

    #[test]
    fn test_case_insensitive_cues() {
        assert_eq!(calculate("MULTIPLY 3 AND 4").unwrap().result, 12.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(-7.0), "-7.0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_format_number_exponent_ranges() {
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(-2.5e20), "-2.5e+20");
        assert_eq!(format_number(1e-5), "1e-05");
        assert_eq!(format_number(1.5e-7), "1.5e-07");
        assert_eq!(format_number(1e-100), "1e-100");
    }

    #[test]
    fn test_exponent_results_from_calculate() {
        assert_eq!(calculate("multiply 100000000 and 100000000").unwrap().formatted(), "1e+16");
        assert_eq!(calculate("divide 1 and 100000").unwrap().formatted(), "1e-05");
    }

    #[test]
    fn test_non_ascii_digits() {
        // Arabic-Indic three
        assert_eq!(calculate("add \u{0663} and 4").unwrap().result, 7.0);
        // full-width digits
        assert_eq!(calculate("\u{FF13}\u{FF12} plus \u{FF18}").unwrap().result, 40.0);
        // Devanagari 1.5 times 2
        assert_eq!(calculate("\u{0967}.\u{096B} times 2").unwrap().result, 3.0);
    }

    #[tokio::test]
    async fn test_tool_execute_reports_metadata() {
        let result = Calculator::new().execute("5 plus 3").await;
        assert!(result.success);
        assert_eq!(result.content, "8.0");
        assert_eq!(result.metadata["operation"], "addition");
        assert_eq!(result.metadata["result"], 8.0);
    }

    #[tokio::test]
    async fn test_tool_execute_reports_error() {
        let result = Calculator::new().execute("10 divide by 0").await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Division by zero"));
    }
}
