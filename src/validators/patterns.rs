//! Pattern validators
//!
//! The patterns compile once, on first use. Only [`Email`] matches anywhere
//! in the string; the others must match the whole string.

use once_cell::sync::Lazy;
use regex::Regex;

use super::string_validator;

// RFC 5322 "official" address pattern
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?:[a-z0-9!#$%&'*+/=?^_{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_{|}~-]+)*"#,
        r#"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"#,
        r#"@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?"#,
        r#"|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}"#,
        r#"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?"#,
        r#"|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])"#,
    ))
    .expect("email pattern compiles")
});

static CREDIT_CARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|6(?:011|5[0-9][0-9])[0-9]{12}",
        r"|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35[0-9]{3})[0-9]{11})$",
    ))
    .expect("credit card pattern compiles")
});

static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid pattern compiles")
});

static UUID3: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid3 pattern compiles")
});

static UUID4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid4 pattern compiles")
});

static UUID5: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid5 pattern compiles")
});

string_validator!(
    /// A string containing an RFC 5322 email address.
    ///
    /// The address may be surrounded by other text: `"Ada <ada@example.com>"`
    /// is accepted.
    Email,
    "invalid email",
    |s| EMAIL.is_match(s)
);

string_validator!(
    /// A Visa, MasterCard, American Express, Diners Club, Discover or JCB
    /// card number, digits only.
    CreditCard,
    "invalid credit card",
    |s| CREDIT_CARD.is_match(s)
);

string_validator!(
    /// A lowercase hyphenated UUID of any version.
    Uuid,
    "invalid uuid",
    |s| UUID.is_match(s)
);

string_validator!(
    /// A lowercase hyphenated version 3 UUID.
    Uuid3,
    "invalid uuid3",
    |s| UUID3.is_match(s)
);

string_validator!(
    /// A lowercase hyphenated version 4 UUID.
    Uuid4,
    "invalid uuid4",
    |s| UUID4.is_match(s)
);

string_validator!(
    /// A lowercase hyphenated version 5 UUID.
    Uuid5,
    "invalid uuid5",
    |s| UUID5.is_match(s)
);
