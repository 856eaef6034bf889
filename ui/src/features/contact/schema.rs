//! Validation schema for the contact form
//!
//! Each field carries an ordered list of rules. The first rule that fails
//! provides the message shown next to the field.

use super::types::{ContactField, ContactForm, ContactPayload, FieldErrors};

const REQUIRED: &str = "Obrigatório";
const BAD_FORMAT: &str = "Formato incorreto";

/// A single constraint on a field value
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Rule {
    /// Text must not be empty; for the radio group, a choice must be made
    Required(&'static str),
    MinLength(usize, &'static str),
    Email(&'static str),
    MinItems(usize, &'static str),
}

impl Rule {
    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required(message)
            | Rule::MinLength(_, message)
            | Rule::Email(message)
            | Rule::MinItems(_, message) => *message,
        }
    }

    fn check(&self, field: ContactField, form: &ContactForm) -> bool {
        match (self, form.text(field)) {
            (Rule::Required(_), Some(text)) => !text.is_empty(),
            (Rule::MinLength(min, _), Some(text)) => text.chars().count() >= *min,
            (Rule::Email(_), Some(text)) => is_valid_email(text),
            (Rule::Required(_), None) => match field {
                ContactField::Gender => form.gender.is_some(),
                _ => !form.selection.is_empty(),
            },
            (Rule::MinItems(min, _), None) => form.selection.len() >= *min,
            // Text rules never apply to the option list or the radio group and vice versa
            _ => true,
        }
    }
}

/// Rules for each field, checked in order
pub fn rules_for(field: ContactField) -> &'static [Rule] {
    match field {
        ContactField::Name => &[
            Rule::Required(REQUIRED),
            Rule::MinLength(3, "No minimo 3 caracteres"),
        ],
        ContactField::Email => &[Rule::Required(REQUIRED), Rule::Email(BAD_FORMAT)],
        ContactField::Phone => &[Rule::Required(REQUIRED), Rule::MinLength(15, BAD_FORMAT)],
        ContactField::BirthDate => &[Rule::Required(REQUIRED), Rule::MinLength(10, BAD_FORMAT)],
        ContactField::PostalCode => &[Rule::Required(REQUIRED), Rule::MinLength(9, BAD_FORMAT)],
        ContactField::Address => &[
            Rule::Required(REQUIRED),
            Rule::MinLength(3, "Insira um endereço valido"),
        ],
        ContactField::Locality => &[
            Rule::Required(REQUIRED),
            Rule::MinLength(3, "Insira uma localidade valida"),
        ],
        ContactField::Selection => &[Rule::MinItems(1, "É necessário no minimo 1 item")],
        ContactField::Gender => &[Rule::Required(REQUIRED)],
    }
}

/// Validate one field, returning the message of the first failing rule
pub fn validate_field(field: ContactField, form: &ContactForm) -> Option<String> {
    rules_for(field)
        .iter()
        .find(|rule| !rule.check(field, form))
        .map(|rule| rule.message().to_string())
}

/// Validate every field and, when all pass, produce the payload to submit
pub fn validate_contact_form(form: &ContactForm) -> Result<ContactPayload, FieldErrors> {
    let mut errors = FieldErrors::new();
    for field in ContactField::ALL {
        if let Some(message) = validate_field(field, form) {
            errors.insert(field, message);
        }
    }

    match form.gender {
        Some(gender) if errors.is_empty() => Ok(ContactPayload {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            birth_date: form.birth_date.clone(),
            postal_code: form.postal_code.clone(),
            address: form.address.clone(),
            locality: form.locality.clone(),
            selection: form.selection.clone(),
            gender,
        }),
        _ => Err(errors),
    }
}

/// Email check: dotted local part without leading or doubled dots, and a
/// dotted domain ending in an alphabetic TLD of two or more letters
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.');

    match local.chars().last() {
        Some(last) if last.is_ascii_alphanumeric() || matches!(last, '_' | '+' | '-') => {}
        _ => return false,
    }

    !local.starts_with('.') && !local.contains("..") && local.chars().all(allowed)
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };

    if hosts.is_empty() || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    hosts.iter().all(|label| {
        let mut chars = label.chars();
        matches!(chars.next(), Some(first) if first.is_ascii_alphanumeric())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contact::types::{Gender, SelectOption};

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "João".to_string(),
            email: "joao.silva@mail.com.br".to_string(),
            phone: "(21) 99876-5432".to_string(),
            birth_date: "15/08/1985".to_string(),
            postal_code: "20040-020".to_string(),
            address: "Avenida Rio Branco".to_string(),
            locality: "Rio de Janeiro".to_string(),
            selection: vec![SelectOption::new("chocolate", "Chocolate")],
            gender: Some(Gender::Masculino),
        }
    }

    #[test]
    fn test_valid_form_is_accepted() {
        let payload = validate_contact_form(&valid_form()).unwrap();
        assert_eq!(payload.postal_code, "20040-020");
        assert_eq!(payload.selection.len(), 1);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate_contact_form(&ContactForm::default()).unwrap_err();

        for field in ContactField::ALL {
            assert!(errors.get(field).is_some(), "missing error for {}", field);
        }
        assert_eq!(errors.get(ContactField::Name), Some(REQUIRED));
        assert_eq!(errors.get(ContactField::Gender), Some(REQUIRED));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let mut form = valid_form();

        form.name = String::new();
        assert_eq!(validate_field(ContactField::Name, &form).as_deref(), Some(REQUIRED));

        form.name = "Li".to_string();
        assert_eq!(
            validate_field(ContactField::Name, &form).as_deref(),
            Some("No minimo 3 caracteres")
        );
    }

    #[test]
    fn test_incomplete_masked_values_are_malformed() {
        let mut form = valid_form();
        form.phone = "(21) 9987-543".to_string();
        form.birth_date = "15/08/198".to_string();
        form.postal_code = "20040-02".to_string();

        let errors = validate_contact_form(&form).unwrap_err();
        assert_eq!(errors.get(ContactField::Phone), Some(BAD_FORMAT));
        assert_eq!(errors.get(ContactField::BirthDate), Some(BAD_FORMAT));
        assert_eq!(errors.get(ContactField::PostalCode), Some(BAD_FORMAT));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_short_address_and_locality_messages() {
        let mut form = valid_form();
        form.address = "Av".to_string();
        form.locality = "RJ".to_string();

        assert_eq!(
            validate_field(ContactField::Address, &form).as_deref(),
            Some("Insira um endereço valido")
        );
        assert_eq!(
            validate_field(ContactField::Locality, &form).as_deref(),
            Some("Insira uma localidade valida")
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut form = valid_form();
        form.name = "Zé".to_string();
        assert!(validate_field(ContactField::Name, &form).is_some());

        form.name = "Zéç".to_string();
        assert!(validate_field(ContactField::Name, &form).is_none());
    }

    #[test]
    fn test_missing_gender_or_selection_rejects() {
        let mut form = valid_form();
        form.gender = None;
        assert!(validate_contact_form(&form).is_err());

        let mut form = valid_form();
        form.selection.clear();
        let errors = validate_contact_form(&form).unwrap_err();
        assert_eq!(
            errors.get(ContactField::Selection),
            Some("É necessário no minimo 1 item")
        );
    }

    #[test]
    fn test_email_format() {
        for valid in [
            "user@example.com",
            "first.last+tag@sub.example.org",
            "o'neil@example.co",
            "a_b-c@my-host.io",
        ] {
            assert!(is_valid_email(valid), "{} should be valid", valid);
        }

        for invalid in [
            "plainaddress",
            "@example.com",
            ".user@example.com",
            "user..name@example.com",
            "user.@example.com",
            "user@example",
            "user@example.c",
            "user@-example.com",
            "user@example..com",
            "user@exa_mple.com",
            "user@example.c0m",
            "us er@example.com",
            "user@@example.com",
        ] {
            assert!(!is_valid_email(invalid), "{} should be invalid", invalid);
        }
    }
}
