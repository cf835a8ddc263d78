//! Canonical relation keys and the gender-dependent choice between them.
//!
//! Keys are the language-neutral identifiers stored in the relation rule
//! collection, so they must match it byte for byte (including the U+2019
//! apostrophes).

/// The one gender value with special meaning. Everything else takes the
/// female-labeled branch.
pub const MALE: &str = "Male";

/// Whether a gender selects the male-labeled variant of a relation.
pub fn is_male_label(gender: &str) -> bool {
    gender == MALE
}

pub const FATHER: &str = "Father";
pub const MOTHER: &str = "Mother";
pub const SON: &str = "Son";
pub const DAUGHTER: &str = "Daughter";
pub const BROTHER: &str = "Brother";
pub const SISTER: &str = "Sister";
pub const HUSBAND: &str = "Husband";
pub const WIFE: &str = "Wife";

pub const GRANDFATHER_PATERNAL: &str = "Grandfather (Paternal)";
pub const GRANDMOTHER_PATERNAL: &str = "Grandmother (Paternal)";
pub const GRANDFATHER_MATERNAL: &str = "Grandfather (Maternal)";
pub const GRANDMOTHER_MATERNAL: &str = "Grandmother (Maternal)";
pub const GRANDSON: &str = "Grandson";
pub const GRANDDAUGHTER: &str = "Granddaughter";

pub const UNCLE_FATHERS_BROTHER: &str = "Uncle (Father’s brother)";
pub const AUNT_FATHERS_BROTHERS_WIFE: &str = "Aunt (Father’s brother’s wife)";
pub const AUNT_FATHERS_SISTER: &str = "Aunt (Father’s sister)";
pub const UNCLE_FATHERS_SISTERS_HUSBAND: &str = "Uncle (Father’s sister’s husband)";
pub const UNCLE_MOTHERS_BROTHER: &str = "Uncle (Mother’s brother)";
pub const AUNT_MOTHERS_BROTHERS_WIFE: &str = "Aunt (Mother’s brother’s wife)";
pub const AUNT_MOTHERS_SISTER: &str = "Aunt (Mother’s sister)";
pub const UNCLE_MOTHERS_SISTERS_HUSBAND: &str = "Uncle (Mother’s sister’s husband)";

pub const COUSIN_PATERNAL_MALE: &str = "Cousin (Paternal, Male)";
pub const COUSIN_PATERNAL_FEMALE: &str = "Cousin (Paternal, Female)";
pub const COUSIN_MATERNAL_MALE: &str = "Cousin (Maternal, Male)";
pub const COUSIN_MATERNAL_FEMALE: &str = "Cousin (Maternal, Female)";

pub const NEPHEW_BROTHERS_SON: &str = "Nephew (Brother’s son)";
pub const NIECE_BROTHERS_DAUGHTER: &str = "Niece (Brother’s daughter)";
pub const NEPHEW_SISTERS_SON: &str = "Nephew (Sister’s son)";
pub const NIECE_SISTERS_DAUGHTER: &str = "Niece (Sister’s daughter)";

pub const FATHER_IN_LAW: &str = "Father-in-law";
pub const MOTHER_IN_LAW: &str = "Mother-in-law";
pub const BROTHER_IN_LAW_WIFES_BROTHER: &str = "Brother-in-law (wife’s brother)";
pub const BROTHER_IN_LAW_HUSBANDS_BROTHER: &str = "Brother-in-law (husband’s brother)";
pub const SISTER_IN_LAW_WIFES_SISTER: &str = "Sister-in-law (wife’s sister)";
pub const SISTER_IN_LAW_HUSBANDS_SISTER: &str = "Sister-in-law (husband’s sister)";

/// Which parent a relation is reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Paternal,
    Maternal,
}

fn pick(male: bool, if_male: &'static str, otherwise: &'static str) -> &'static str {
    if male {
        if_male
    } else {
        otherwise
    }
}

pub fn child(gender: &str) -> &'static str {
    pick(is_male_label(gender), SON, DAUGHTER)
}

pub fn sibling(gender: &str) -> &'static str {
    pick(is_male_label(gender), BROTHER, SISTER)
}

/// Labeled by the spouse's own gender.
pub fn spouse(gender: &str) -> &'static str {
    pick(is_male_label(gender), HUSBAND, WIFE)
}

pub fn grandchild(gender: &str) -> &'static str {
    pick(is_male_label(gender), GRANDSON, GRANDDAUGHTER)
}

/// `through_father` is true for the grandparent's father link.
pub fn grandparent(side: Side, through_father: bool) -> &'static str {
    match side {
        Side::Paternal => pick(through_father, GRANDFATHER_PATERNAL, GRANDMOTHER_PATERNAL),
        Side::Maternal => pick(through_father, GRANDFATHER_MATERNAL, GRANDMOTHER_MATERNAL),
    }
}

/// A parent's sibling.
pub fn uncle_or_aunt(side: Side, relative_gender: &str) -> &'static str {
    let male = is_male_label(relative_gender);
    match side {
        Side::Paternal => pick(male, UNCLE_FATHERS_BROTHER, AUNT_FATHERS_SISTER),
        Side::Maternal => pick(male, UNCLE_MOTHERS_BROTHER, AUNT_MOTHERS_SISTER),
    }
}

/// The spouse of a parent's sibling, labeled by the sibling's gender.
pub fn uncle_or_aunt_by_marriage(side: Side, relative_gender: &str) -> &'static str {
    let male = is_male_label(relative_gender);
    match side {
        Side::Paternal => pick(
            male,
            AUNT_FATHERS_BROTHERS_WIFE,
            UNCLE_FATHERS_SISTERS_HUSBAND,
        ),
        Side::Maternal => pick(
            male,
            AUNT_MOTHERS_BROTHERS_WIFE,
            UNCLE_MOTHERS_SISTERS_HUSBAND,
        ),
    }
}

pub fn cousin(side: Side, gender: &str) -> &'static str {
    let male = is_male_label(gender);
    match side {
        Side::Paternal => pick(male, COUSIN_PATERNAL_MALE, COUSIN_PATERNAL_FEMALE),
        Side::Maternal => pick(male, COUSIN_MATERNAL_MALE, COUSIN_MATERNAL_FEMALE),
    }
}

pub fn nephew_or_niece(sibling_gender: &str, child_gender: &str) -> &'static str {
    let male = is_male_label(child_gender);
    if is_male_label(sibling_gender) {
        pick(male, NEPHEW_BROTHERS_SON, NIECE_BROTHERS_DAUGHTER)
    } else {
        pick(male, NEPHEW_SISTERS_SON, NIECE_SISTERS_DAUGHTER)
    }
}

pub fn parent_in_law(through_father: bool) -> &'static str {
    pick(through_father, FATHER_IN_LAW, MOTHER_IN_LAW)
}

/// A spouse's sibling, phrased by the subject's gender.
///
/// The two branches are not mirror images: a non-male subject's brother-in-law
/// is the "wife’s brother" key while a male subject's sister-in-law is the
/// "wife’s sister" key. Rule collections are keyed on exactly these pairings.
pub fn sibling_in_law(subject_gender: &str, sibling_gender: &str) -> &'static str {
    let subject_male = is_male_label(subject_gender);
    if is_male_label(sibling_gender) {
        pick(
            subject_male,
            BROTHER_IN_LAW_HUSBANDS_BROTHER,
            BROTHER_IN_LAW_WIFES_BROTHER,
        )
    } else {
        pick(
            subject_male,
            SISTER_IN_LAW_WIFES_SISTER,
            SISTER_IN_LAW_HUSBANDS_SISTER,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_male_literal_is_male() {
        assert!(is_male_label("Male"));
        assert!(!is_male_label("male"));
        assert!(!is_male_label("Female"));
        assert!(!is_male_label("Other"));
        assert!(!is_male_label(""));
    }

    #[test]
    fn test_immediate_family_keys() {
        assert_eq!(child("Male"), SON);
        assert_eq!(child("Other"), DAUGHTER);
        assert_eq!(sibling("Male"), BROTHER);
        assert_eq!(sibling(""), SISTER);
        assert_eq!(spouse("Male"), HUSBAND);
        assert_eq!(spouse("Female"), WIFE);
        assert_eq!(grandchild("Male"), GRANDSON);
        assert_eq!(grandchild("Female"), GRANDDAUGHTER);
    }

    #[test]
    fn test_grandparent_keys() {
        assert_eq!(grandparent(Side::Paternal, true), "Grandfather (Paternal)");
        assert_eq!(grandparent(Side::Paternal, false), "Grandmother (Paternal)");
        assert_eq!(grandparent(Side::Maternal, true), "Grandfather (Maternal)");
        assert_eq!(grandparent(Side::Maternal, false), "Grandmother (Maternal)");
    }

    #[test]
    fn test_extended_family_keys() {
        assert_eq!(uncle_or_aunt(Side::Paternal, "Male"), "Uncle (Father’s brother)");
        assert_eq!(uncle_or_aunt(Side::Maternal, "Female"), "Aunt (Mother’s sister)");
        assert_eq!(
            uncle_or_aunt_by_marriage(Side::Paternal, "Male"),
            "Aunt (Father’s brother’s wife)"
        );
        assert_eq!(
            uncle_or_aunt_by_marriage(Side::Maternal, "Female"),
            "Uncle (Mother’s sister’s husband)"
        );
        assert_eq!(cousin(Side::Paternal, "Male"), "Cousin (Paternal, Male)");
        assert_eq!(cousin(Side::Maternal, "x"), "Cousin (Maternal, Female)");
        assert_eq!(nephew_or_niece("Male", "Female"), "Niece (Brother’s daughter)");
        assert_eq!(nephew_or_niece("Female", "Male"), "Nephew (Sister’s son)");
    }

    #[test]
    fn test_in_law_keys_follow_subject_gender() {
        assert_eq!(parent_in_law(true), FATHER_IN_LAW);
        assert_eq!(parent_in_law(false), MOTHER_IN_LAW);
        assert_eq!(sibling_in_law("Male", "Male"), BROTHER_IN_LAW_HUSBANDS_BROTHER);
        assert_eq!(sibling_in_law("Male", "Female"), SISTER_IN_LAW_WIFES_SISTER);
        assert_eq!(sibling_in_law("Female", "Male"), BROTHER_IN_LAW_WIFES_BROTHER);
        assert_eq!(sibling_in_law("Female", "Female"), SISTER_IN_LAW_HUSBANDS_SISTER);
        assert_eq!(sibling_in_law("", "Male"), BROTHER_IN_LAW_WIFES_BROTHER);
        assert_eq!(sibling_in_law("Other", "Female"), SISTER_IN_LAW_HUSBANDS_SISTER);
    }
}
