use std::borrow::Cow;

/// Maps a Vietnamese letter carrying a tone mark and/or a vowel modifier to its bare ASCII letter.
///
/// Case is preserved: lowercase letters fold to lowercase ASCII, uppercase to uppercase. Any
/// character outside the Vietnamese alphabet yields `None`.
///
/// # Example
/// ```
/// use vnslug::text::diacritics::fold_vietnamese;
///
/// assert_eq!(fold_vietnamese('ệ'), Some('e'));
/// assert_eq!(fold_vietnamese('Đ'), Some('D'));
/// assert_eq!(fold_vietnamese('é'), Some('e'));
/// assert_eq!(fold_vietnamese('ü'), None);
/// ```
#[rustfmt::skip]
pub fn fold_vietnamese(c: char) -> Option<char> {
    let folded = match c {
        'á' | 'à' | 'ả' | 'ã' | 'ạ'
        | 'ă' | 'ắ' | 'ằ' | 'ẳ' | 'ẵ' | 'ặ'
        | 'â' | 'ấ' | 'ầ' | 'ẩ' | 'ẫ' | 'ậ' => 'a',
        'Á' | 'À' | 'Ả' | 'Ã' | 'Ạ'
        | 'Ă' | 'Ắ' | 'Ằ' | 'Ẳ' | 'Ẵ' | 'Ặ'
        | 'Â' | 'Ấ' | 'Ầ' | 'Ẩ' | 'Ẫ' | 'Ậ' => 'A',

        'é' | 'è' | 'ẻ' | 'ẽ' | 'ẹ'
        | 'ê' | 'ế' | 'ề' | 'ể' | 'ễ' | 'ệ' => 'e',
        'É' | 'È' | 'Ẻ' | 'Ẽ' | 'Ẹ'
        | 'Ê' | 'Ế' | 'Ề' | 'Ể' | 'Ễ' | 'Ệ' => 'E',

        'í' | 'ì' | 'ỉ' | 'ĩ' | 'ị' => 'i',
        'Í' | 'Ì' | 'Ỉ' | 'Ĩ' | 'Ị' => 'I',

        'ó' | 'ò' | 'ỏ' | 'õ' | 'ọ'
        | 'ô' | 'ố' | 'ồ' | 'ổ' | 'ỗ' | 'ộ'
        | 'ơ' | 'ớ' | 'ờ' | 'ở' | 'ỡ' | 'ợ' => 'o',
        'Ó' | 'Ò' | 'Ỏ' | 'Õ' | 'Ọ'
        | 'Ô' | 'Ố' | 'Ồ' | 'Ổ' | 'Ỗ' | 'Ộ'
        | 'Ơ' | 'Ớ' | 'Ờ' | 'Ở' | 'Ỡ' | 'Ợ' => 'O',

        'ú' | 'ù' | 'ủ' | 'ũ' | 'ụ'
        | 'ư' | 'ứ' | 'ừ' | 'ử' | 'ữ' | 'ự' => 'u',
        'Ú' | 'Ù' | 'Ủ' | 'Ũ' | 'Ụ'
        | 'Ư' | 'Ứ' | 'Ừ' | 'Ử' | 'Ữ' | 'Ự' => 'U',

        'ý' | 'ỳ' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
        'Ý' | 'Ỳ' | 'Ỷ' | 'Ỹ' | 'Ỵ' => 'Y',

        'đ' => 'd',
        'Đ' => 'D',

        _ => return None,
    };
    Some(folded)
}

/// Replaces every Vietnamese accented letter in `input` with its ASCII base letter.
///
/// Characters that aren't part of the Vietnamese alphabet are left untouched, so the output is not
/// guaranteed to be ASCII. Blank input, and input without anything to fold, is borrowed back as-is.
///
/// # Example
/// ```
/// use vnslug::text::remove_diacritics;
///
/// assert_eq!(remove_diacritics("Việt Nam"), "Viet Nam");
/// assert_eq!(remove_diacritics("Crème brûlée 🍮"), "Creme brûlee 🍮");
/// ```
pub fn remove_diacritics(input: &str) -> Cow<'_, str> {
    if input.trim().is_empty() || !input.chars().any(|c| fold_vietnamese(c).is_some()) {
        return Cow::Borrowed(input);
    }

    Cow::Owned(
        input
            .chars()
            .map(|c| fold_vietnamese(c).unwrap_or(c))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOWER_GROUPS: &[(&str, char)] = &[
        ("áàảãạăắằẳẵặâấầẩẫậ", 'a'),
        ("éèẻẽẹêếềểễệ", 'e'),
        ("íìỉĩị", 'i'),
        ("óòỏõọôốồổỗộơớờởỡợ", 'o'),
        ("úùủũụưứừửữự", 'u'),
        ("ýỳỷỹỵ", 'y'),
        ("đ", 'd'),
    ];

    #[test]
    fn test_fold_covers_every_vietnamese_letter() {
        for (letters, base) in LOWER_GROUPS {
            for c in letters.chars() {
                assert_eq!(fold_vietnamese(c), Some(*base), "lowercase {}", c);

                let upper = c.to_uppercase().next().unwrap();
                assert_ne!(upper, c);
                assert_eq!(
                    fold_vietnamese(upper),
                    Some(base.to_ascii_uppercase()),
                    "uppercase {}",
                    upper
                );
            }
        }
    }

    #[test]
    fn test_fold_ignores_other_characters() {
        for c in "azAZ09 -_!ñüçøßж中🙂".chars() {
            assert_eq!(fold_vietnamese(c), None, "{}", c);
        }
    }

    #[test]
    fn test_remove_diacritics() {
        assert_eq!(remove_diacritics("Việt Nam"), "Viet Nam");
        assert_eq!(remove_diacritics("Đà Nẵng"), "Da Nang");
        assert_eq!(
            remove_diacritics("Thành phố Hồ Chí Minh"),
            "Thanh pho Ho Chi Minh"
        );
        assert_eq!(remove_diacritics("NGƯỜI ĐẸP"), "NGUOI DEP");
    }

    #[test]
    fn test_remove_diacritics_keeps_foreign_characters() {
        assert_eq!(remove_diacritics("Ñoño über"), "Ñoño über");
        assert_eq!(remove_diacritics("北京 🙂"), "北京 🙂");
    }

    #[test]
    fn test_remove_diacritics_blank_input() {
        for blank in &["", " ", "\t\n", "\u{3000}"] {
            assert!(matches!(remove_diacritics(blank), Cow::Borrowed(s) if s == *blank));
        }
    }

    #[test]
    fn test_remove_diacritics_borrows_when_unchanged() {
        assert!(matches!(remove_diacritics("plain ascii"), Cow::Borrowed(_)));
        assert!(matches!(remove_diacritics("Hà Nội"), Cow::Owned(_)));
    }

    #[test]
    fn test_remove_diacritics_idempotent() {
        for input in &["Việt Nam", "Đà Nẵng 2024!", "Ñandú", "", "   ", "Ở đâu?"] {
            let once = remove_diacritics(input).into_owned();
            assert_eq!(remove_diacritics(&once), once);
        }
    }
}
