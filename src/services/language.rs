/// Errors from the language classifier.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("could not determine the language of the message")]
    Unclassifiable,
}

/// Detect the language of `text`, returning its ISO 639-3 code.
///
/// Empty input, or input without enough script signal to classify
/// (whitespace, punctuation), yields `DetectionError::Unclassifiable`.
pub fn detect_language(text: &str) -> Result<&'static str, DetectionError> {
    whatlang::detect(text)
        .map(|info| info.lang().code())
        .ok_or(DetectionError::Unclassifiable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_english() {
        let lang = detect_language("Hello, I would like to ask about a mortgage loan.").unwrap();
        assert_eq!(lang, "eng");
    }

    #[test]
    fn detects_spanish() {
        let lang =
            detect_language("Hola, necesito ayuda con un préstamo hipotecario, por favor.")
                .unwrap();
        assert_eq!(lang, "spa");
    }

    #[test]
    fn empty_input_is_unclassifiable() {
        assert!(matches!(
            detect_language(""),
            Err(DetectionError::Unclassifiable)
        ));
    }

    #[test]
    fn whitespace_only_is_unclassifiable() {
        assert!(matches!(
            detect_language("   \n\t"),
            Err(DetectionError::Unclassifiable)
        ));
    }
}
