// Core types for the contact form - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::{debug, info};

use super::mask::InputMask;
use super::schema::{validate_contact_form, validate_field};
use crate::services::cep::normalize_cep;

/// Fields of the contact form, in render order
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    BirthDate,
    PostalCode,
    Address,
    Locality,
    Selection,
    Gender,
}

impl ContactField {
    pub const ALL: [ContactField; 9] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::BirthDate,
        ContactField::PostalCode,
        ContactField::Address,
        ContactField::Locality,
        ContactField::Selection,
        ContactField::Gender,
    ];

    /// Name used in the submitted payload
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "nome",
            ContactField::Email => "email",
            ContactField::Phone => "celular",
            ContactField::BirthDate => "nascimento",
            ContactField::PostalCode => "cep",
            ContactField::Address => "endereco",
            ContactField::Locality => "localidade",
            ContactField::Selection => "selecao",
            ContactField::Gender => "sexo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Nome",
            ContactField::Email => "E-mail",
            ContactField::Phone => "Celular com DDD",
            ContactField::BirthDate => "Data de nascimento",
            ContactField::PostalCode => "CEP",
            ContactField::Address => "Endereço",
            ContactField::Locality => "Localidade",
            ContactField::Selection => "Escolha uma opção",
            ContactField::Gender => "Sexo",
        }
    }

    /// DOM id of the input bound to this field
    pub fn dom_id(&self) -> &'static str {
        match self {
            ContactField::Phone => "tel",
            ContactField::BirthDate => "data-nascimento",
            other => other.name(),
        }
    }

    /// Mask applied to user input, if the field is masked
    pub fn mask(&self) -> Option<InputMask> {
        match self {
            ContactField::Phone => Some(InputMask::PHONE),
            ContactField::BirthDate => Some(InputMask::BIRTH_DATE),
            ContactField::PostalCode => Some(InputMask::CEP),
            _ => None,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single-choice gender field
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Gender {
    Masculino,
    Feminino,
    Outro,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculino, Gender::Feminino, Gender::Outro];

    pub fn value(&self) -> &'static str {
        match self {
            Gender::Masculino => "Masculino",
            Gender::Feminino => "Feminino",
            Gender::Outro => "Outro",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gender| gender.value() == value)
    }
}

/// One entry of the option multi-select
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Address fields returned by the postal-code lookup
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CepAddress {
    pub cep: String,
    pub logradouro: String,
    pub localidade: String,
    pub bairro: String,
    pub uf: String,
}

/// Draft state of the form while the user is editing it
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub postal_code: String,
    pub address: String,
    pub locality: String,
    pub selection: Vec<SelectOption>,
    pub gender: Option<Gender>,
}

impl ContactForm {
    /// Value of a text field; `None` for the option list and the radio group
    pub fn text(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => Some(&self.name),
            ContactField::Email => Some(&self.email),
            ContactField::Phone => Some(&self.phone),
            ContactField::BirthDate => Some(&self.birth_date),
            ContactField::PostalCode => Some(&self.postal_code),
            ContactField::Address => Some(&self.address),
            ContactField::Locality => Some(&self.locality),
            ContactField::Selection | ContactField::Gender => None,
        }
    }

    fn text_mut(&mut self, field: ContactField) -> Option<&mut String> {
        match field {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Phone => Some(&mut self.phone),
            ContactField::BirthDate => Some(&mut self.birth_date),
            ContactField::PostalCode => Some(&mut self.postal_code),
            ContactField::Address => Some(&mut self.address),
            ContactField::Locality => Some(&mut self.locality),
            ContactField::Selection | ContactField::Gender => None,
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selection.iter().any(|option| option.value == value)
    }
}

/// Validated payload produced by a successful submission
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContactPayload {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "celular")]
    pub phone: String,
    #[serde(rename = "nascimento")]
    pub birth_date: String,
    #[serde(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "localidade")]
    pub locality: String,
    #[serde(rename = "selecao")]
    pub selection: Vec<SelectOption>,
    #[serde(rename = "sexo")]
    pub gender: Gender,
}

/// Inline error messages, at most one per field
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FieldErrors(BTreeMap<ContactField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: ContactField, message: String) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: ContactField) {
        self.0.remove(&field);
    }

    /// Store the outcome of validating a single field
    pub fn set(&mut self, field: ContactField, message: Option<String>) {
        match message {
            Some(message) => self.insert(field, message),
            None => self.remove(field),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum ContactAction {
    SetText(ContactField, String),
    SetGender(Gender),
    SetSelection(Vec<SelectOption>),
    AddOption(SelectOption),
    RemoveOption(String),
    ClearSelection,
    Blur(ContactField),
    SetLookingUpCep(bool),
    ApplyAddress(CepAddress),
    Submit,
    Reset,
}

/// Consolidated state of the contact form
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: FieldErrors,
    /// Fields that have been changed, blurred or submitted at least once
    pub validated: BTreeSet<ContactField>,
    pub touched: BTreeSet<ContactField>,
    /// Lookups started but not yet finished; overlapping blurs each count
    pub pending_lookups: u32,
    pub submit_attempted: bool,
    pub submission_count: u32,
    pub last_submission: Option<ContactPayload>,
}

impl ContactState {
    pub fn reduce_in_place(&mut self, action: ContactAction) {
        match action {
            ContactAction::SetText(field, value) => {
                let value = match field.mask() {
                    Some(mask) => mask.apply(&value),
                    None => value,
                };
                if let Some(slot) = self.form.text_mut(field) {
                    *slot = value;
                    self.revalidate(field);
                }
            }
            ContactAction::SetGender(gender) => {
                self.form.gender = Some(gender);
                self.revalidate(ContactField::Gender);
            }
            ContactAction::SetSelection(selection) => {
                self.form.selection = selection;
                self.revalidate(ContactField::Selection);
            }
            ContactAction::AddOption(option) => {
                if !self.form.is_selected(&option.value) {
                    self.form.selection.push(option);
                }
                self.revalidate(ContactField::Selection);
            }
            ContactAction::RemoveOption(value) => {
                self.form.selection.retain(|option| option.value != value);
                self.revalidate(ContactField::Selection);
            }
            ContactAction::ClearSelection => {
                self.form.selection.clear();
                self.revalidate(ContactField::Selection);
            }
            ContactAction::Blur(field) => {
                self.touched.insert(field);
                self.revalidate(field);
            }
            ContactAction::SetLookingUpCep(true) => {
                self.pending_lookups += 1;
            }
            ContactAction::SetLookingUpCep(false) => {
                self.pending_lookups = self.pending_lookups.saturating_sub(1);
            }
            ContactAction::ApplyAddress(address) => {
                // The draft may have been submitted, reset or given another CEP meanwhile
                let target = self.cep_lookup_target();
                if target.is_none() || normalize_cep(&address.cep).ok() != target {
                    debug!(
                        "Dropping lookup result for CEP {}: draft holds {:?}",
                        address.cep, self.form.postal_code
                    );
                    return;
                }
                debug!("Applying address lookup result for CEP {}", address.cep);
                self.form.address = address.logradouro;
                self.form.locality = address.localidade;
                for field in [ContactField::Address, ContactField::Locality] {
                    if self.validated.contains(&field) {
                        self.errors.set(field, validate_field(field, &self.form));
                    }
                }
            }
            ContactAction::Submit => {
                self.submit_attempted = true;
                self.validated.extend(ContactField::ALL);
                match validate_contact_form(&self.form) {
                    Ok(payload) => {
                        info!("Contact form accepted");
                        *self = ContactState {
                            pending_lookups: self.pending_lookups,
                            submission_count: self.submission_count + 1,
                            last_submission: Some(payload),
                            ..ContactState::default()
                        };
                    }
                    Err(errors) => {
                        info!("Contact form rejected with {} invalid field(s)", errors.len());
                        self.errors = errors;
                    }
                }
            }
            ContactAction::Reset => {
                *self = ContactState {
                    pending_lookups: self.pending_lookups,
                    submission_count: self.submission_count,
                    last_submission: self.last_submission.take(),
                    ..ContactState::default()
                };
            }
        }
    }

    fn revalidate(&mut self, field: ContactField) {
        self.validated.insert(field);
        self.errors.set(field, validate_field(field, &self.form));
    }

    pub fn is_looking_up_cep(&self) -> bool {
        self.pending_lookups > 0
    }

    pub fn error_for(&self, field: ContactField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Digits of the CEP to look up, once the masked value is complete
    pub fn cep_lookup_target(&self) -> Option<String> {
        let mask = InputMask::CEP;
        if mask.is_complete(&self.form.postal_code) {
            Some(mask.raw_value(&self.form.postal_code))
        } else {
            None
        }
    }

    pub fn is_submittable(&self) -> bool {
        validate_contact_form(&self.form).is_ok()
    }
}
