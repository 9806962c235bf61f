/// Distance from an ASCII uppercase letter to its regional indicator symbol
/// (`'A'` = U+0041 maps to U+1F1E6).
pub const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// Builds the flag emoji for a two-letter country code.
///
/// The code is uppercased and every ASCII letter is shifted into the regional
/// indicator block. Anything else is copied through as-is.
pub fn flag_emoji(code: &str) -> String {
    code.chars()
        .flat_map(char::to_uppercase)
        .map(|c| {
            if c.is_ascii_uppercase() {
                char::from_u32(c as u32 + REGIONAL_INDICATOR_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_for_us() {
        let flag = flag_emoji("US");
        let scalars: Vec<u32> = flag.chars().map(|c| c as u32).collect();
        assert_eq!(scalars, vec![0x1F1FA, 0x1F1F8]);
    }

    #[test]
    fn test_flag_is_case_insensitive() {
        assert_eq!(flag_emoji("ua"), flag_emoji("UA"));
        assert_eq!(flag_emoji("UA"), "🇺🇦");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(flag_emoji("A1"), "🇦1");
        assert_eq!(flag_emoji(""), "");
    }
}
