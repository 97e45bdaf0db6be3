//! One-call conversion from CSS text to classes

use serde::Serialize;

use crate::emit::ClassEmitter;
use crate::error::Result;
use crate::gradient::{parse, GradientKind, ParsedGradient};

/// Everything a caller needs to show for one converted gradient
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Conversion {
    pub gradient: ParsedGradient,
    pub classes: String,
    /// The input as given, usable directly as a CSS `background` value
    pub preview: String,
    /// Set when the gradient could only be approximated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ClassEmitter {
    /// Parse `text` and render it as classes
    pub fn convert(&self, text: &str) -> Result<Conversion> {
        let gradient = parse(text)?;
        let classes = self.emit(&gradient);
        let warning = approximation_warning(gradient.kind).map(str::to_string);

        Ok(Conversion {
            gradient,
            classes,
            preview: text.to_string(),
            warning,
        })
    }
}

/// [`ClassEmitter::convert`] with the default configuration
pub fn convert(text: &str) -> Result<Conversion> {
    ClassEmitter::default().convert(text)
}

/// User-facing warning for gradient kinds that have no class equivalent
pub fn approximation_warning(kind: GradientKind) -> Option<&'static str> {
    match kind {
        GradientKind::Linear => None,
        GradientKind::Radial => Some(
            "Radial gradients are not natively supported in Tailwind CSS. \
             The output shows a linear gradient approximation.",
        ),
        GradientKind::Conic => Some(
            "Conic gradients are not natively supported in Tailwind CSS. \
             The output shows a linear gradient approximation.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GradientError;

    #[test]
    fn test_convert_linear() {
        let input = "linear-gradient(45deg, #ff6b6b, #4ecdc4)";
        let conversion = convert(input).unwrap();
        assert_eq!(conversion.classes, "bg-gradient-to-tr from-red-400 to-teal-400");
        assert_eq!(conversion.preview, input);
        assert_eq!(conversion.warning, None);
        assert_eq!(conversion.gradient.kind, GradientKind::Linear);
    }

    #[test]
    fn test_convert_radial_warns() {
        let conversion = convert("radial-gradient(circle, #667eea, #764ba2)").unwrap();
        let warning = conversion.warning.unwrap();
        assert!(warning.starts_with("Radial gradients are not natively supported"));
        assert!(conversion.classes.ends_with("*/"));
    }

    #[test]
    fn test_convert_conic_warns() {
        let conversion = convert("conic-gradient(red, blue)").unwrap();
        assert!(conversion.warning.unwrap().starts_with("Conic gradients"));
    }

    #[test]
    fn test_convert_propagates_parse_errors() {
        assert_eq!(
            convert("linear-gradient"),
            Err(GradientError::MalformedSyntax("linear-gradient".to_string()))
        );
    }
}
