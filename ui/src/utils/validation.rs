//! Class and style helpers that reflect a field's validation state

/// Visual state of a bound field
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldStatus {
    /// Not validated yet, or no message to show
    Pristine,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn from_error(validated: bool, error: Option<&str>) -> Self {
        match (validated, error) {
            (false, _) => FieldStatus::Pristine,
            (true, Some(_)) => FieldStatus::Invalid,
            (true, None) => FieldStatus::Valid,
        }
    }
}

pub fn field_class(status: FieldStatus) -> &'static str {
    match status {
        FieldStatus::Invalid => "input-primary input-invalid",
        FieldStatus::Valid => "input-primary input-valid",
        FieldStatus::Pristine => "input-primary",
    }
}

pub fn field_style(status: FieldStatus) -> &'static str {
    match status {
        FieldStatus::Invalid => "border: 2px solid #dc2626;",
        _ => "",
    }
}

const SELECT_BORDER_ACTIVE: &str = "2px solid #17171b";
const SELECT_BORDER_IDLE: &str = "2px solid #ced4da";

/// Inline style of the multi-select control box
pub fn select_control_style(focused: bool, hovered: bool) -> String {
    let border = if focused || hovered {
        SELECT_BORDER_ACTIVE
    } else {
        SELECT_BORDER_IDLE
    };

    format!(
        "background-color: white; padding: .20rem; color: #17171b; border: {}; border-radius: 8px; box-shadow: none;",
        border
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_error() {
        assert_eq!(FieldStatus::from_error(false, Some("Obrigatório")), FieldStatus::Pristine);
        assert_eq!(FieldStatus::from_error(true, Some("Obrigatório")), FieldStatus::Invalid);
        assert_eq!(FieldStatus::from_error(true, None), FieldStatus::Valid);
    }

    #[test]
    fn test_select_border_follows_focus_and_hover() {
        assert!(select_control_style(false, false).contains(SELECT_BORDER_IDLE));
        assert!(select_control_style(true, false).contains(SELECT_BORDER_ACTIVE));
        assert!(select_control_style(false, true).contains(SELECT_BORDER_ACTIVE));
        assert!(select_control_style(true, true).contains("border-radius: 8px"));
    }
}
