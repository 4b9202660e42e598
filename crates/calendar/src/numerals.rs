//! Bengali digits and script selection for display.

use std::str::FromStr;

use crate::error::CalendarError;

/// Which script to render names and numbers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    /// Romanized names with ASCII digits.
    #[default]
    Latin,
    /// Bengali-script names with Bengali digits.
    Bengali,
}

impl FromStr for Script {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latin" | "roman" | "en" => Ok(Script::Latin),
            "bengali" | "bangla" | "bn" => Ok(Script::Bengali),
            _ => Err(CalendarError::UnknownScript {
                name: s.to_string(),
            }),
        }
    }
}

const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Replaces every ASCII digit in `text` with its Bengali counterpart.
///
/// ```ignore
/// assert_eq!(to_bengali_digits("1431"), "১৪৩১");
/// ```
pub fn to_bengali_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                BENGALI_DIGITS[usize::from(c as u8 - b'0')]
            } else {
                c
            }
        })
        .collect()
}

/// Formats `n` in the given script.
pub fn format_number(n: impl ToString, script: Script) -> String {
    let text = n.to_string();
    match script {
        Script::Latin => text,
        Script::Bengali => to_bengali_digits(&text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!(to_bengali_digits("1431"), "১৪৩১");
        assert_eq!(to_bengali_digits("0123456789"), "০১২৩৪৫৬৭৮৯");
    }

    #[test]
    fn non_digits_pass_through() {
        assert_eq!(to_bengali_digits("-7 Poush"), "-৭ Poush");
    }

    #[test]
    fn format_by_script() {
        assert_eq!(format_number(17, Script::Latin), "17");
        assert_eq!(format_number(17, Script::Bengali), "১৭");
    }

    #[test]
    fn parse_script() {
        assert_eq!("Bengali".parse::<Script>().unwrap(), Script::Bengali);
        assert_eq!("bn".parse::<Script>().unwrap(), Script::Bengali);
        assert_eq!("latin".parse::<Script>().unwrap(), Script::Latin);
        assert!("cyrillic".parse::<Script>().is_err());
    }
}
