//! Input masks for formatted text fields
//!
//! Mask characters: `9` accepts a digit, `a` an ASCII letter, `*` an ASCII
//! letter or digit. Everything else is a literal inserted between slots.
//! No placeholder is rendered: literals appear only once the slot after them
//! is filled, so a partially typed value never ends in a literal.

pub const PHONE_MASK: &str = "(99) 99999-9999";
pub const BIRTH_DATE_MASK: &str = "99/99/9999";
pub const CEP_MASK: &str = "99999-999";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Slot {
    Digit,
    Letter,
    Alphanumeric,
}

impl Slot {
    fn from_mask_char(c: char) -> Option<Self> {
        match c {
            '9' => Some(Slot::Digit),
            'a' => Some(Slot::Letter),
            '*' => Some(Slot::Alphanumeric),
            _ => None,
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self {
            Slot::Digit => c.is_ascii_digit(),
            Slot::Letter => c.is_ascii_alphabetic(),
            Slot::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InputMask {
    pattern: &'static str,
}

impl InputMask {
    pub const PHONE: InputMask = InputMask::new(PHONE_MASK);
    pub const BIRTH_DATE: InputMask = InputMask::new(BIRTH_DATE_MASK);
    pub const CEP: InputMask = InputMask::new(CEP_MASK);

    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }

    /// Number of user-fillable positions
    pub fn slot_count(&self) -> usize {
        self.pattern
            .chars()
            .filter(|c| Slot::from_mask_char(*c).is_some())
            .count()
    }

    /// Length of a completely filled value
    pub fn len(&self) -> usize {
        self.pattern.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Reformat raw or partially formatted input against the mask
    pub fn apply(&self, input: &str) -> String {
        let mut candidates = input.chars().filter(|c| c.is_ascii_alphanumeric()).peekable();
        let mut output = String::with_capacity(self.pattern.len());
        let mut filled_len = 0;

        for mask_char in self.pattern.chars() {
            match Slot::from_mask_char(mask_char) {
                Some(slot) => {
                    // Skip characters that cannot go into this slot
                    let Some(c) = candidates.by_ref().find(|c| slot.accepts(*c)) else {
                        break;
                    };
                    output.push(c);
                    filled_len = output.len();
                }
                None => {
                    if candidates.peek().is_none() {
                        break;
                    }
                    output.push(mask_char);
                }
            }
        }

        output.truncate(filled_len);
        output
    }

    /// Characters typed into the slots, without literals
    pub fn raw_value(&self, masked: &str) -> String {
        self.pattern
            .chars()
            .zip(masked.chars())
            .filter(|(mask_char, _)| Slot::from_mask_char(*mask_char).is_some())
            .map(|(_, c)| c)
            .collect()
    }

    /// Whether every slot of the mask is filled with an acceptable character
    pub fn is_complete(&self, masked: &str) -> bool {
        masked.chars().count() == self.len()
            && self.pattern.chars().zip(masked.chars()).all(|(mask_char, c)| {
                match Slot::from_mask_char(mask_char) {
                    Some(slot) => slot.accepts(c),
                    None => mask_char == c,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_phone_digit_by_digit() {
        let mask = InputMask::PHONE;
        let mut value = String::new();
        let mut seen = Vec::new();
        for digit in "11987654321".chars() {
            value.push(digit);
            value = mask.apply(&value);
            seen.push(value.clone());
        }

        assert_eq!(seen[0], "(1");
        assert_eq!(seen[1], "(11");
        assert_eq!(seen[2], "(11) 9");
        assert_eq!(seen[6], "(11) 98765");
        assert_eq!(seen[7], "(11) 98765-4");
        assert_eq!(value, "(11) 98765-4321");
        assert!(mask.is_complete(&value));
    }

    #[test]
    fn test_pasted_input_is_reformatted() {
        assert_eq!(InputMask::CEP.apply("01001000"), "01001-000");
        assert_eq!(InputMask::CEP.apply("01001-000"), "01001-000");
        assert_eq!(InputMask::BIRTH_DATE.apply("31.12.1999"), "31/12/1999");
        assert_eq!(InputMask::PHONE.apply("+55 (11) 98765-4321"), "(55) 11987-6543");
    }

    #[test]
    fn test_non_matching_and_overflow_characters_are_dropped() {
        assert_eq!(InputMask::CEP.apply("01a001b000"), "01001-000");
        assert_eq!(InputMask::CEP.apply("010010001234"), "01001-000");
        assert_eq!(InputMask::CEP.apply("abc"), "");
    }

    #[test]
    fn test_deleting_back_to_a_literal_removes_it() {
        // Backspace over the last digit leaves "01001-", which collapses
        assert_eq!(InputMask::CEP.apply("01001-"), "01001");
        assert_eq!(InputMask::BIRTH_DATE.apply("12/"), "12");
    }

    #[test]
    fn test_letter_and_alphanumeric_slots() {
        let plate = InputMask::new("aaa-9*99");
        assert_eq!(plate.apply("abc1d23"), "abc-1d23");
        assert_eq!(plate.apply("1abc"), "abc");
        assert_eq!(plate.slot_count(), 7);
    }

    #[test]
    fn test_full_lengths_match_minimum_lengths() {
        assert_eq!(InputMask::PHONE.len(), 15);
        assert_eq!(InputMask::BIRTH_DATE.len(), 10);
        assert_eq!(InputMask::CEP.len(), 9);
    }

    #[test]
    fn test_raw_value_and_completeness() {
        assert_eq!(InputMask::CEP.raw_value("01001-000"), "01001000");
        assert_eq!(InputMask::PHONE.raw_value("(11) 98"), "1198");
        assert!(!InputMask::CEP.is_complete("01001-00"));
        assert!(!InputMask::CEP.is_complete("01001 000"));
        assert!(InputMask::CEP.is_complete("01001-000"));
    }
}
