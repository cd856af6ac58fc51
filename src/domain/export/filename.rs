//! Download filenames.

/// Extension of every exported document.
pub const DOC_EXTENSION: &str = "doc";

/// Replaces each run of whitespace with a single underscore.
///
/// Nothing else changes: accents and punctuation survive, and leading or
/// trailing whitespace becomes a leading or trailing underscore.
pub fn underscore_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_gap = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_gap {
                out.push('_');
            }
            in_gap = true;
        } else {
            out.push(c);
            in_gap = false;
        }
    }
    out
}

/// `<prefix>_<subject>.doc` with the subject's whitespace collapsed.
pub fn document_filename(prefix: &str, subject: &str) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        underscore_whitespace(subject),
        DOC_EXTENSION
    )
}

/// Filename for an exported lesson plan, keyed on its title.
pub fn lesson_plan_filename(title: &str) -> String {
    document_filename("Plan_Clase", title)
}

/// Filename for an exported assessment, keyed on the unit.
pub fn assessment_filename(unit: &str) -> String {
    document_filename("Evaluacion", unit)
}

/// Filename for a technique worksheet, keyed on the technique title.
pub fn worksheet_filename(title: &str) -> String {
    document_filename("Plantilla", title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unit_with_accents_keeps_them() {
        assert_eq!(underscore_whitespace("Genética y Herencia"), "Genética_y_Herencia");
    }

    #[test]
    fn runs_collapse_to_one_underscore() {
        assert_eq!(underscore_whitespace("a  \t b\n\nc"), "a_b_c");
        assert_eq!(underscore_whitespace(" edge "), "_edge_");
    }

    #[test]
    fn prefixes_per_document_kind() {
        assert_eq!(
            assessment_filename("Genética y Herencia"),
            "Evaluacion_Genética_y_Herencia.doc"
        );
        assert_eq!(lesson_plan_filename("Redes de Vida"), "Plan_Clase_Redes_de_Vida.doc");
        assert_eq!(
            worksheet_filename("Titulares (Headlines)"),
            "Plantilla_Titulares_(Headlines).doc"
        );
    }

    proptest! {
        #[test]
        fn output_has_no_whitespace(text in "\\PC{0,40}") {
            prop_assert!(!underscore_whitespace(&text).chars().any(char::is_whitespace));
        }

        #[test]
        fn non_whitespace_characters_are_preserved_in_order(text in "\\PC{0,40}") {
            let kept: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            let out: String = underscore_whitespace(&text)
                .chars()
                .filter(|c| *c != '_')
                .collect();
            let kept_without_underscores: String = kept.chars().filter(|c| *c != '_').collect();
            prop_assert_eq!(out, kept_without_underscores);
        }

        #[test]
        fn is_idempotent(text in "\\PC{0,40}") {
            let once = underscore_whitespace(&text);
            prop_assert_eq!(underscore_whitespace(&once), once.clone());
        }
    }
}
