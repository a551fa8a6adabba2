//! Section validation schemas.
//!
//! Validation is synchronous and section-scoped. A schema lists the
//! rules per field; validating yields the first violated message per
//! field, keyed by the field name the storefront uses. Submitting the
//! whole order runs every schema and prefixes keys with the section
//! (`payment.ageVerified`).

use std::collections::BTreeMap;

/// A field's current value, as the rules see it.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// Free-text input (empty string means unset).
    Text(&'a str),
    /// A checkbox-style flag.
    Flag(bool),
}

/// A single validation rule.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// The field must be non-empty.
    Required,
    /// Must look like an e-mail address.
    Email,
    /// Dutch postcode: four digits (not starting with 0) plus two letters.
    DutchPostcode,
    /// Dutch phone number (06..., 010..., or +31...).
    DutchPhone,
    /// Maximum number of characters.
    MaxLen(usize),
    /// The flag must be exactly `true` (18+ confirmation).
    MustBeTrue,
}

impl Rule {
    /// Check a value; `Some(message)` on violation.
    fn check(&self, value: FieldValue<'_>) -> Option<String> {
        match (self, value) {
            (Rule::Required, FieldValue::Text(s)) => {
                if s.trim().is_empty() {
                    Some("Dit veld is verplicht".to_string())
                } else {
                    None
                }
            }
            (Rule::Email, FieldValue::Text(s)) => {
                if s.trim().is_empty() || is_email(s.trim()) {
                    None
                } else {
                    Some("Voer een geldig e-mailadres in".to_string())
                }
            }
            (Rule::DutchPostcode, FieldValue::Text(s)) => {
                if s.trim().is_empty() || is_dutch_postcode(s.trim()) {
                    None
                } else {
                    Some("Voer een geldige postcode in (bijv. 1234 AB)".to_string())
                }
            }
            (Rule::DutchPhone, FieldValue::Text(s)) => {
                if s.trim().is_empty() || is_dutch_phone(s.trim()) {
                    None
                } else {
                    Some("Voer een geldig telefoonnummer in".to_string())
                }
            }
            (Rule::MaxLen(max), FieldValue::Text(s)) => {
                if s.chars().count() > *max {
                    Some(format!("Maximaal {max} tekens"))
                } else {
                    None
                }
            }
            (Rule::MustBeTrue, FieldValue::Flag(flag)) => {
                if flag {
                    None
                } else {
                    Some("Je moet bevestigen dat je 18 jaar of ouder bent".to_string())
                }
            }
            // A rule paired with the wrong value kind never matches
            _ => None,
        }
    }
}

/// Rules for one field of a section.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field key as the storefront names it.
    pub field: &'static str,
    /// Rules in evaluation order.
    pub rules: &'static [Rule],
}

/// Contact section schema.
pub const CONTACT_SCHEMA: &[FieldRule] = &[
    FieldRule {
        field: "email",
        rules: &[Rule::Required, Rule::Email],
    },
    FieldRule {
        field: "firstName",
        rules: &[Rule::Required],
    },
    FieldRule {
        field: "lastName",
        rules: &[Rule::Required],
    },
    FieldRule {
        field: "phone",
        rules: &[Rule::Required, Rule::DutchPhone],
    },
];

/// Delivery section schema.
pub const DELIVERY_SCHEMA: &[FieldRule] = &[
    FieldRule {
        field: "postcode",
        rules: &[Rule::Required, Rule::DutchPostcode],
    },
    FieldRule {
        field: "houseNumber",
        rules: &[Rule::Required],
    },
    FieldRule {
        field: "street",
        rules: &[Rule::Required],
    },
    FieldRule {
        field: "city",
        rules: &[Rule::Required],
    },
];

/// Gift section schema: everything optional, message bounded.
pub const GIFT_SCHEMA: &[FieldRule] = &[FieldRule {
    field: "message",
    rules: &[Rule::MaxLen(240)],
}];

/// Shipping section schema: the method always has a value.
pub const SHIPPING_SCHEMA: &[FieldRule] = &[];

/// Payment section schema.
pub const PAYMENT_SCHEMA: &[FieldRule] = &[
    FieldRule {
        field: "method",
        rules: &[Rule::Required],
    },
    FieldRule {
        field: "ageVerified",
        rules: &[Rule::MustBeTrue],
    },
];

/// Validate a section's values against its schema.
///
/// Returns field → first violated message. Fields without violations
/// are absent from the map; an empty map means the section is valid.
pub fn validate_section(
    schema: &[FieldRule],
    values: &[(&'static str, FieldValue<'_>)],
) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    for field_rule in schema {
        let Some((_, value)) = values.iter().find(|(name, _)| *name == field_rule.field) else {
            continue;
        };
        for rule in field_rule.rules {
            if let Some(message) = rule.check(*value) {
                errors.insert(field_rule.field.to_string(), message);
                break;
            }
        }
    }

    errors
}

fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !s.contains(char::is_whitespace)
}

fn is_dutch_postcode(s: &str) -> bool {
    let compact: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() != 6 {
        return false;
    }
    let (digits, letters) = compact.split_at(4);
    digits.iter().all(|c| c.is_ascii_digit())
        && digits[0] != '0'
        && letters.iter().all(|c| c.is_ascii_alphabetic())
}

fn is_dutch_phone(s: &str) -> bool {
    let compact: String = s
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let national = if let Some(rest) = compact.strip_prefix("+31") {
        format!("0{rest}")
    } else {
        compact
    };
    national.len() == 10 && national.starts_with('0') && national.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_reports_first_violation_only() {
        let errors = validate_section(
            CONTACT_SCHEMA,
            &[
                ("email", FieldValue::Text("")),
                ("firstName", FieldValue::Text("Anna")),
                ("lastName", FieldValue::Text("")),
                ("phone", FieldValue::Text("niet-een-nummer")),
            ],
        );

        // Empty email trips Required, never reaching the Email rule
        assert_eq!(errors.get("email").unwrap(), "Dit veld is verplicht");
        assert!(!errors.contains_key("firstName"));
        assert_eq!(errors.get("lastName").unwrap(), "Dit veld is verplicht");
        assert_eq!(
            errors.get("phone").unwrap(),
            "Voer een geldig telefoonnummer in"
        );
    }

    #[test]
    fn test_valid_contact_yields_empty_map() {
        let errors = validate_section(
            CONTACT_SCHEMA,
            &[
                ("email", FieldValue::Text("anna@example.nl")),
                ("firstName", FieldValue::Text("Anna")),
                ("lastName", FieldValue::Text("de Vries")),
                ("phone", FieldValue::Text("06 12 34 56 78")),
            ],
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_postcode_formats() {
        assert!(is_dutch_postcode("1234 AB"));
        assert!(is_dutch_postcode("1234AB"));
        assert!(is_dutch_postcode("9999zz"));
        assert!(!is_dutch_postcode("0123 AB"));
        assert!(!is_dutch_postcode("12345"));
        assert!(!is_dutch_postcode("AB 1234"));
        assert!(!is_dutch_postcode("1234 ABC"));
    }

    #[test]
    fn test_postcode_rejects_non_ascii_without_panicking() {
        // "123éA" is five characters but six bytes once filtered
        assert!(!is_dutch_postcode("123\u{e9}A"));
        assert!(!is_dutch_postcode("123\u{e9} AB"));
        assert!(!is_dutch_postcode("1234 \u{e9}B"));
        assert!(!is_dutch_postcode("\u{20ac}\u{20ac}"));
    }

    #[test]
    fn test_phone_formats() {
        assert!(is_dutch_phone("0612345678"));
        assert!(is_dutch_phone("06-12345678"));
        assert!(is_dutch_phone("+31612345678"));
        assert!(is_dutch_phone("010 123 45 67"));
        assert!(!is_dutch_phone("12345"));
        assert!(!is_dutch_phone("612345678"));
        assert!(!is_dutch_phone("06123456789"));
    }

    #[test]
    fn test_email_formats() {
        assert!(is_email("anna@example.nl"));
        assert!(is_email("a.b+c@sub.example.com"));
        assert!(!is_email("anna@"));
        assert!(!is_email("@example.nl"));
        assert!(!is_email("anna@example"));
        assert!(!is_email("anna @example.nl"));
    }

    #[test]
    fn test_age_verified_must_be_exactly_true() {
        let errors = validate_section(
            PAYMENT_SCHEMA,
            &[
                ("method", FieldValue::Text("ideal")),
                ("ageVerified", FieldValue::Flag(false)),
            ],
        );
        assert_eq!(
            errors.get("ageVerified").unwrap(),
            "Je moet bevestigen dat je 18 jaar of ouder bent"
        );

        let ok = validate_section(
            PAYMENT_SCHEMA,
            &[
                ("method", FieldValue::Text("ideal")),
                ("ageVerified", FieldValue::Flag(true)),
            ],
        );
        assert!(ok.is_empty());
    }

    #[test]
    fn test_gift_message_bounded_but_optional() {
        let empty = validate_section(GIFT_SCHEMA, &[("message", FieldValue::Text(""))]);
        assert!(empty.is_empty());

        let long = "x".repeat(241);
        let errors = validate_section(GIFT_SCHEMA, &[("message", FieldValue::Text(&long))]);
        assert_eq!(errors.get("message").unwrap(), "Maximaal 240 tekens");
    }
}
