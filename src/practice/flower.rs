//! # Flower (Decorator pattern)
//!
//! [`FlowerBase`] is the plain component. A [`TagDecorator`] wraps any
//! [`Flower`], forwards `name()` and `region()` untouched and appends one care
//! clause to `description()`. Decorators nest, so the description grows in the
//! order the tags were applied:
//!
//! ```text
//! TagDecorator(Season) ─► TagDecorator(Temperature) ─► TagDecorator(Ph) ─► FlowerBase
//!
//! description() = base + ph clause + temperature clause + season clause
//! ```
//!
//! Thresholds come from free text typed into a form. [`Threshold::parse`] is the
//! only way text becomes a threshold and it never fails: input that is not a
//! finite number becomes `0`.

use std::fmt;

/// The component interface shared by the base flower and every decorator.
pub trait Flower {
    fn name(&self) -> &str;
    fn description(&self) -> String;
    fn region(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowerBase {
    name: String,
    description: String,
    region: String,
}

impl FlowerBase {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            region: region.into(),
        }
    }
}

impl Flower for FlowerBase {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn region(&self) -> &str {
        &self.region
    }
}

/// A numeric care threshold. Always finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Threshold(f64);

impl Threshold {
    /// Parses form text into a threshold.
    ///
    /// Surrounding whitespace is ignored. Empty, non-numeric, NaN and infinite
    /// input all yield `0`; this is the policy for bad numeric input, not an error,
    /// and nothing is reported to the user.
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Threshold(v),
            _ => {
                tracing::debug!(input = text, "invalid threshold, using 0");
                Threshold::default()
            }
        }
    }

    /// Builds a threshold from a number, applying the same policy as [`Self::parse`].
    pub fn from_value(v: f64) -> Self {
        if v.is_finite() {
            Threshold(v)
        } else {
            Threshold::default()
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of care a decorator asks for, with its threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tag {
    Ph(Threshold),
    Temperature(Threshold),
    Season(Threshold),
}

impl Tag {
    /// The text appended to a description for this tag.
    pub fn clause(&self) -> String {
        match self {
            Tag::Ph(v) => format!("\nVIGILA EL PH!\nMantén el pH del suelo cerca de {v}"),
            Tag::Temperature(v) => {
                format!("\nVIGILA LA TEMPERATURA!\nNo la expongas a menos de {v} grados")
            }
            Tag::Season(v) => format!("\nVIGILA LA TEMPORADA!\nSolo florece {v} meses al año"),
        }
    }

    pub fn threshold(&self) -> Threshold {
        match self {
            Tag::Ph(v) | Tag::Temperature(v) | Tag::Season(v) => *v,
        }
    }
}

/// Wraps a flower and appends the clause of its [`Tag`] to the description.
pub struct TagDecorator {
    inner: Box<dyn Flower>,
    tag: Tag,
}

impl TagDecorator {
    pub fn new(inner: Box<dyn Flower>, tag: Tag) -> Self {
        tracing::debug!(?tag, flower = inner.name(), "decorating");
        Self { inner, tag }
    }

    pub fn ph(inner: Box<dyn Flower>, ph: Threshold) -> Self {
        Self::new(inner, Tag::Ph(ph))
    }

    pub fn temperature(inner: Box<dyn Flower>, temperature: Threshold) -> Self {
        Self::new(inner, Tag::Temperature(temperature))
    }

    pub fn season(inner: Box<dyn Flower>, months: Threshold) -> Self {
        Self::new(inner, Tag::Season(months))
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }
}

impl Flower for TagDecorator {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn description(&self) -> String {
        let mut description = self.inner.description();
        description.push_str(&self.tag.clause());
        description
    }

    fn region(&self) -> &str {
        self.inner.region()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rose() -> Box<dyn Flower> {
        Box::new(FlowerBase::new("Rose", "Flor roja", "Europa"))
    }

    #[test]
    fn base_flower_exposes_its_fields() {
        let flower = FlowerBase::new("Tulip", "Bulbo", "Holanda");
        assert_eq!(flower.name(), "Tulip");
        assert_eq!(flower.description(), "Bulbo");
        assert_eq!(flower.region(), "Holanda");
    }

    #[test]
    fn ph_then_temperature_appends_in_wrap_order() {
        let with_ph = TagDecorator::ph(rose(), Threshold::parse("6.5"));
        let flower = TagDecorator::temperature(Box::new(with_ph), Threshold::parse("18"));

        assert_eq!(flower.name(), "Rose");
        assert_eq!(flower.region(), "Europa");
        assert_eq!(
            flower.description(),
            "Flor roja\
             \nVIGILA EL PH!\nMantén el pH del suelo cerca de 6.5\
             \nVIGILA LA TEMPERATURA!\nNo la expongas a menos de 18 grados"
        );
    }

    #[test]
    fn wrap_order_is_observable() {
        let a = TagDecorator::ph(
            Box::new(TagDecorator::season(rose(), Threshold::from_value(3.0))),
            Threshold::from_value(7.0),
        );
        let description = a.description();
        let season_at = description.find("TEMPORADA").unwrap();
        let ph_at = description.find("PH!").unwrap();
        assert!(season_at < ph_at);
    }

    #[test]
    fn empty_threshold_text_defaults_to_zero() {
        let flower = TagDecorator::ph(rose(), Threshold::parse(""));
        assert_eq!(flower.tag().threshold().value(), 0.0);
        assert!(flower.description().ends_with("cerca de 0"));
    }

    #[test]
    fn non_numeric_and_non_finite_text_default_to_zero() {
        for text in ["abc", "6,5", "NaN", "inf", "-infinity", "  "] {
            assert_eq!(Threshold::parse(text).value(), 0.0, "input {text:?}");
        }
        assert_eq!(Threshold::from_value(f64::NAN).value(), 0.0);
    }

    #[test]
    fn threshold_text_is_trimmed() {
        assert_eq!(Threshold::parse(" 18 ").value(), 18.0);
        assert_eq!(Threshold::parse("-2.5").value(), -2.5);
    }

    #[test]
    fn decorating_does_not_change_the_wrapped_description() {
        let base = FlowerBase::new("Rose", "Flor roja", "Europa");
        let copy = base.clone();
        let decorated = TagDecorator::ph(Box::new(base), Threshold::from_value(6.0));
        assert_ne!(decorated.description(), copy.description());
        assert_eq!(decorated.inner.description(), copy.description());
    }
}
