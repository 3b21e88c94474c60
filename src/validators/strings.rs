//! Character-class string validators
//!
//! Classes are Unicode general categories: letters (L), marks (M), numbers
//! (N), punctuation (P) and symbols (S).

use unicode_general_category::{get_general_category, GeneralCategory as Gc};

use super::string_validator;

string_validator!(
    /// A string of lowercase letters (Ll).
    ///
    /// Digits and punctuation are not lowercase, so `"abc1"` is rejected.
    Lower,
    "string is not lowercase",
    |s| s.chars().all(|c| matches!(get_general_category(c), Gc::LowercaseLetter))
);

string_validator!(
    /// A string of uppercase letters (Lu).
    Upper,
    "string is not uppercase",
    |s| s.chars().all(|c| matches!(get_general_category(c), Gc::UppercaseLetter))
);

string_validator!(
    /// A string without whitespace.
    NoSpace,
    "string contains whitespace",
    |s| !s.chars().any(char::is_whitespace)
);

string_validator!(
    /// A string of printing characters: letters, marks, numbers, punctuation,
    /// symbols and the ASCII space.
    Printable,
    "string contains non-printing characters",
    |s| s.chars().all(is_printable)
);

string_validator!(
    /// A string of letters.
    Alpha,
    "string contains non-alpha characters",
    |s| s.chars().all(is_letter)
);

string_validator!(
    /// A string of numeric characters, in any script.
    Number,
    "string contains non-numeric characters",
    |s| s.chars().all(is_number)
);

string_validator!(
    /// A decimal number: an optional leading `-`, ASCII digits and at most
    /// one `.` that is neither first nor last.
    Float,
    "float contains non-numeric characters",
    is_float
);

string_validator!(
    /// A string of letters and numbers.
    Alphanumeric,
    "string contains non-alphanumeric characters",
    |s| s.chars().all(|c| is_letter(c) || is_number(c))
);

string_validator!(
    /// A string of ASCII characters.
    Ascii,
    "string contains non-ASCII characters",
    |s| s.is_ascii()
);

string_validator!(
    /// A non-empty string.
    Required,
    "string is required",
    |s| !s.is_empty()
);

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        Gc::UppercaseLetter
            | Gc::LowercaseLetter
            | Gc::TitlecaseLetter
            | Gc::ModifierLetter
            | Gc::OtherLetter
    )
}

fn is_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        Gc::DecimalNumber | Gc::LetterNumber | Gc::OtherNumber
    )
}

// L, M, N, P, S and the ASCII space; other separators, controls, format,
// private-use and unassigned code points are not printing.
fn is_printable(c: char) -> bool {
    c == ' '
        || is_letter(c)
        || is_number(c)
        || matches!(
            get_general_category(c),
            Gc::NonspacingMark
                | Gc::SpacingMark
                | Gc::EnclosingMark
                | Gc::ConnectorPunctuation
                | Gc::DashPunctuation
                | Gc::OpenPunctuation
                | Gc::ClosePunctuation
                | Gc::InitialPunctuation
                | Gc::FinalPunctuation
                | Gc::OtherPunctuation
                | Gc::MathSymbol
                | Gc::CurrencySymbol
                | Gc::ModifierSymbol
                | Gc::OtherSymbol
        )
}

fn is_float(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || digits.starts_with('.') || digits.ends_with('.') {
        return false;
    }
    digits.matches('.').count() <= 1 && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
}
