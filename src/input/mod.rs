//! Array sources: generation, comma-separated parsing and CSV files
//!
//! The session assumes it is handed a valid integer sequence; everything that
//! can go wrong with user-supplied text is caught here and reported as an
//! [`InputError`].

use rand::Rng;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::session::constants::RANDOM_VALUE_MAX;

/// Shape of a generated array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayPattern {
    /// Uniform values in `1..=100`
    Random,
    /// `1, 2, ..., n`
    Sorted,
    /// `n, n-1, ..., 1`
    Reverse,
}

impl ArrayPattern {
    pub fn name(self) -> &'static str {
        match self {
            ArrayPattern::Random => "random",
            ArrayPattern::Sorted => "sorted",
            ArrayPattern::Reverse => "reverse",
        }
    }
}

impl fmt::Display for ArrayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArrayPattern {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(ArrayPattern::Random),
            "sorted" => Ok(ArrayPattern::Sorted),
            "reverse" | "reversed" => Ok(ArrayPattern::Reverse),
            other => Err(InputError::UnknownPattern {
                name: other.to_string(),
            }),
        }
    }
}

/// Errors in user-supplied array text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing but whitespace was supplied
    Empty,

    /// A comma-separated token is not an integer
    InvalidNumber { token: String },

    /// Unrecognized generation pattern
    UnknownPattern { name: String },

    /// The file could not be read
    Io { path: String, message: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "No numbers given (use comma-separated numbers, e.g. 5,3,8,1)"),
            InputError::InvalidNumber { token } => {
                write!(f, "Invalid number '{}' (use comma-separated numbers, e.g. 5,3,8,1)", token)
            }
            InputError::UnknownPattern { name } => {
                write!(f, "Unknown array pattern '{}' (expected random, sorted or reverse)", name)
            }
            InputError::Io { path, message } => write!(f, "Cannot read '{}': {}", path, message),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse `"5, 3, 8, 1"` into integers
pub fn parse_values(text: &str) -> Result<Vec<i32>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    text.split(',').map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<i32, InputError> {
    let token = token.trim();
    token.parse::<i32>().map_err(|_| InputError::InvalidNumber {
        token: token.to_string(),
    })
}

/// Read every line of `path` as comma-separated integers; blank lines are skipped
pub fn load_csv(path: &Path) -> Result<Vec<i32>, InputError> {
    let contents = fs::read_to_string(path).map_err(|e| InputError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_csv(&contents)
}

/// [`load_csv`] on text already in memory
pub fn parse_csv(contents: &str) -> Result<Vec<i32>, InputError> {
    let mut values = Vec::new();
    for line in contents.lines().filter(|line| !line.trim().is_empty()) {
        values.extend(parse_values(line)?);
    }
    if values.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(values)
}

/// Generate `size` values shaped by `pattern`
pub fn generate<R: Rng>(pattern: ArrayPattern, size: usize, rng: &mut R) -> Vec<i32> {
    match pattern {
        ArrayPattern::Random => (0..size)
            .map(|_| rng.gen_range(1..=RANDOM_VALUE_MAX))
            .collect(),
        ArrayPattern::Sorted => (1..=size).map(to_value).collect(),
        ArrayPattern::Reverse => (1..=size).rev().map(to_value).collect(),
    }
}

fn to_value(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_comma_separated_numbers() {
        assert_eq!(parse_values("5,3,8,1"), Ok(vec![5, 3, 8, 1]));
        assert_eq!(parse_values("  -2 , 0,17 "), Ok(vec![-2, 0, 17]));
        assert_eq!(parse_values("42"), Ok(vec![42]));
    }

    #[test]
    fn rejects_malformed_lists() {
        assert_eq!(parse_values("   "), Err(InputError::Empty));
        assert_eq!(
            parse_values("1,two,3"),
            Err(InputError::InvalidNumber {
                token: "two".to_string()
            })
        );
        assert_eq!(
            parse_values("1,,3"),
            Err(InputError::InvalidNumber {
                token: String::new()
            })
        );
    }

    #[test]
    fn csv_spans_lines() {
        assert_eq!(parse_csv("1,2\n\n3\n4,5\n"), Ok(vec![1, 2, 3, 4, 5]));
        assert_eq!(parse_csv("\n \n"), Err(InputError::Empty));
        assert!(matches!(
            load_csv(Path::new("/definitely/not/here.csv")),
            Err(InputError::Io { .. })
        ));
    }

    #[test]
    fn patterns_have_documented_shapes() {
        let mut rng = StdRng::seed_from_u64(1357);
        assert_eq!(generate(ArrayPattern::Sorted, 4, &mut rng), vec![1, 2, 3, 4]);
        assert_eq!(generate(ArrayPattern::Reverse, 4, &mut rng), vec![4, 3, 2, 1]);

        let random = generate(ArrayPattern::Random, 200, &mut rng);
        assert_eq!(random.len(), 200);
        assert!(random.iter().all(|v| (1..=RANDOM_VALUE_MAX).contains(v)));
        assert!(generate(ArrayPattern::Random, 0, &mut rng).is_empty());
    }

    #[test]
    fn pattern_names_parse() {
        assert_eq!("Reverse".parse::<ArrayPattern>(), Ok(ArrayPattern::Reverse));
        assert!("zigzag".parse::<ArrayPattern>().is_err());
    }
}
