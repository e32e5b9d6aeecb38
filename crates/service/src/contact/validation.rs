//! Acceptance rules for contact form payloads.
//!
//! Rules live in a static table: each field maps to an ordered list of
//! `(predicate, message)` pairs. Every rule of every field is evaluated so the
//! client sees all problems at once.

use serde_json::Value;

use models::contact_submission::Category;

use super::domain::{FieldError, NewSubmission, RawSubmission, ValidationErrors};

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 255;
pub const DEPARTMENT_MAX: usize = 255;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 5000;

pub const CATEGORY_MESSAGE: &str = "Category must be one of: feedback, suggestion, problem";

type Check = fn(&str) -> bool;

struct Rule {
    check: Check,
    message: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    /// Falsy raw values (absent, null, "", false, 0) skip every rule.
    Optional,
}

struct FieldRules {
    field: &'static str,
    presence: Presence,
    rules: &'static [Rule],
}

const RULES: &[FieldRules] = &[
    FieldRules {
        field: "name",
        presence: Presence::Required,
        rules: &[
            Rule { check: not_empty, message: "Name is required" },
            Rule { check: name_length, message: "Name must be between 2 and 255 characters" },
        ],
    },
    FieldRules {
        field: "lastName",
        presence: Presence::Required,
        rules: &[
            Rule { check: not_empty, message: "Last name is required" },
            Rule { check: name_length, message: "Last name must be between 2 and 255 characters" },
        ],
    },
    FieldRules {
        field: "email",
        presence: Presence::Required,
        rules: &[
            Rule { check: not_empty, message: "Email is required" },
            Rule { check: is_email, message: "Must be a valid email address" },
        ],
    },
    FieldRules {
        field: "department",
        presence: Presence::Optional,
        rules: &[Rule { check: department_length, message: "Department must be less than 255 characters" }],
    },
    FieldRules {
        field: "category",
        presence: Presence::Required,
        rules: &[
            Rule { check: not_empty, message: "Category is required" },
            Rule { check: is_category, message: CATEGORY_MESSAGE },
        ],
    },
    FieldRules {
        field: "message",
        presence: Presence::Required,
        rules: &[
            Rule { check: not_empty, message: "Message is required" },
            Rule { check: message_length, message: "Message must be between 10 and 5000 characters" },
        ],
    },
];

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn not_empty(s: &str) -> bool {
    !s.is_empty()
}

fn name_length(s: &str) -> bool {
    (NAME_MIN..=NAME_MAX).contains(&char_len(s))
}

fn department_length(s: &str) -> bool {
    char_len(s) <= DEPARTMENT_MAX
}

fn message_length(s: &str) -> bool {
    (MESSAGE_MIN..=MESSAGE_MAX).contains(&char_len(s))
}

fn is_category(s: &str) -> bool {
    Category::parse(s).is_some()
}

/// Syntactically valid address whose domain carries a top-level label.
pub fn is_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) || !email_address::EmailAddress::is_valid(s) {
        return false;
    }
    match s.rsplit_once('@') {
        Some((local, domain)) => !local.is_empty() && has_tld(domain),
        None => false,
    }
}

fn has_tld(domain: &str) -> bool {
    let Some((host, tld)) = domain.rsplit_once('.') else { return false };
    if host.is_empty() || host.starts_with('.') || host.ends_with('.') {
        return false;
    }
    let tld = tld.to_ascii_lowercase();
    tld.starts_with("xn--") || (char_len(&tld) >= 2 && tld.chars().all(char::is_alphabetic))
}

/// Textual form of a raw value; objects and arrays count as empty.
fn coerce(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) | None => String::new(),
    }
}

fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

fn trimmed(raw: &RawSubmission, field: &str) -> String {
    coerce(raw.get(field)).trim().to_string()
}

/// Apply every rule; on success return the normalized record.
pub fn validate(raw: &RawSubmission) -> Result<NewSubmission, ValidationErrors> {
    let mut errors = Vec::new();
    for field_rules in RULES {
        let value = raw.get(field_rules.field);
        if field_rules.presence == Presence::Optional && is_falsy(value) {
            continue;
        }
        let text = coerce(value);
        let text = text.trim();
        for rule in field_rules.rules {
            if !(rule.check)(text) {
                errors.push(FieldError::new(field_rules.field, rule.message));
            }
        }
    }
    if let Some(errors) = ValidationErrors::from_vec(errors) {
        return Err(errors);
    }

    let category = trimmed(raw, "category");
    let Some(category) = Category::parse(&category) else {
        return Err(ValidationErrors::single("category", CATEGORY_MESSAGE));
    };

    let department = if is_falsy(raw.get("department")) {
        None
    } else {
        Some(trimmed(raw, "department")).filter(|d| !d.is_empty())
    };

    Ok(NewSubmission {
        name: trimmed(raw, "name"),
        last_name: trimmed(raw, "lastName"),
        email: normalize_email(&trimmed(raw, "email")),
        department,
        category,
        message: trimmed(raw, "message"),
    })
}

const GMAIL_DOMAINS: &[&str] = &["gmail.com", "googlemail.com"];

const PLUS_TAG_DOMAINS: &[&str] = &[
    "hotmail.com", "hotmail.co.uk", "hotmail.de", "hotmail.es", "hotmail.fr", "hotmail.it",
    "live.com", "live.co.uk", "live.de", "live.fr", "live.it", "msn.com", "passport.com",
    "outlook.com", "outlook.de", "outlook.es", "outlook.fr", "outlook.it",
    "icloud.com", "me.com", "mac.com",
];

const DASH_TAG_DOMAINS: &[&str] = &[
    "yahoo.com", "yahoo.ca", "yahoo.co.uk", "yahoo.de", "yahoo.fr", "yahoo.in", "yahoo.it",
    "ymail.com", "rocketmail.com",
];

/// Canonical form of a valid address.
///
/// Lowercases the whole address and strips provider-specific sub-addressing
/// (`+tag` on Gmail, Outlook and iCloud, `-tag` on Yahoo). Gmail also ignores
/// dots in the local part and treats googlemail.com as gmail.com. When a rule
/// would leave the local part empty the lowercased address is kept.
pub fn normalize_email(email: &str) -> String {
    let lowered = email.to_lowercase();
    let Some((local, domain)) = lowered.rsplit_once('@') else { return lowered };

    let (local, domain) = if GMAIL_DOMAINS.contains(&domain) {
        let base = strip_tag(local, '+');
        (base.replace('.', ""), "gmail.com")
    } else if PLUS_TAG_DOMAINS.contains(&domain) {
        (strip_tag(local, '+').to_string(), domain)
    } else if DASH_TAG_DOMAINS.contains(&domain) {
        (strip_tag(local, '-').to_string(), domain)
    } else {
        (local.to_string(), domain)
    };

    if local.is_empty() {
        return lowered;
    }
    format!("{local}@{domain}")
}

fn strip_tag(local: &str, sep: char) -> &str {
    local.split(sep).next().unwrap_or(local)
}
