use super::types::SelectOption;

/// Options offered by the multi-select when no configuration overrides them
pub fn default_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("chocolate", "Chocolate"),
        SelectOption::new("strawberry", "Morango"),
        SelectOption::new("vanilla", "Baunilha"),
    ]
}

/// Options not yet picked, in their configured order
pub fn remaining_options<'a>(
    options: &'a [SelectOption],
    selected: &'a [SelectOption],
) -> impl Iterator<Item = &'a SelectOption> + 'a {
    options
        .iter()
        .filter(move |option| !selected.iter().any(|s| s.value == option.value))
}

pub fn find_option<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a SelectOption> {
    options.iter().find(|option| option.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_options_excludes_selected() {
        let options = default_options();
        let selected = vec![SelectOption::new("strawberry", "Morango")];

        let remaining: Vec<&str> = remaining_options(&options, &selected)
            .map(|option| option.value.as_str())
            .collect();
        assert_eq!(remaining, vec!["chocolate", "vanilla"]);
    }

    #[test]
    fn test_find_option_by_value() {
        let options = default_options();
        assert_eq!(find_option(&options, "vanilla").map(|o| o.label.as_str()), Some("Baunilha"));
        assert!(find_option(&options, "pistachio").is_none());
    }
}
