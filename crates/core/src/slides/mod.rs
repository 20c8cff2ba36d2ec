use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::{Result, ShowcaseError};

/// Static content shown while the carousel rests on a given index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub category: String,
    pub name: String,
    pub description: String,
}

impl Slide {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Fixed, non-empty, ordered sequence of slides.
///
/// The deck is built once at startup and never resized, so every index in
/// `0..len()` stays valid for the lifetime of the carousel that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Slide>", into = "Vec<Slide>")]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(ShowcaseError::EmptyDeck);
        }
        Ok(Self { slides })
    }

    /// The product line-up the site ships with.
    pub fn product_showcase() -> Self {
        Self {
            slides: vec![
                Slide::new(
                    "SunMax 360",
                    "Solar Panels",
                    "Innovative Solar Panels for Your Energy Needs",
                    "Discover cutting-edge solar panels designed to maximize energy efficiency and durability. From sleek monocrystalline.",
                ),
                Slide::new(
                    "EcoPower Pro",
                    "Solar Panels",
                    "Professional Grade Solar Solutions",
                    "Advanced solar technology designed for commercial and industrial applications with maximum efficiency.",
                ),
                Slide::new(
                    "SolarPlus Elite",
                    "Solar Panels",
                    "Premium Solar Panel Systems",
                    "Top-tier solar panels with industry-leading performance and extended warranty coverage for peace of mind.",
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// A deck always holds at least one slide.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

impl Default for SlideDeck {
    fn default() -> Self {
        Self::product_showcase()
    }
}

impl Index<usize> for SlideDeck {
    type Output = Slide;

    fn index(&self, index: usize) -> &Slide {
        &self.slides[index]
    }
}

impl TryFrom<Vec<Slide>> for SlideDeck {
    type Error = ShowcaseError;

    fn try_from(value: Vec<Slide>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SlideDeck> for Vec<Slide> {
    fn from(value: SlideDeck) -> Self {
        value.slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_decks() {
        let err = SlideDeck::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ShowcaseError::EmptyDeck));
    }

    #[test]
    fn default_deck_holds_the_product_lineup() {
        let deck = SlideDeck::default();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.get(0).unwrap().title, "SunMax 360");
        assert_eq!(deck.get(2).unwrap().title, "SolarPlus Elite");
        assert!(deck.get(3).is_none());
    }

    #[test]
    fn deserializes_from_a_plain_list() {
        let json = r#"[
            {"title": "A", "category": "c", "name": "n", "description": "d"}
        ]"#;
        let deck: SlideDeck = serde_json::from_str(json).unwrap();
        assert_eq!(deck.len(), 1);

        let err = serde_json::from_str::<SlideDeck>("[]").unwrap_err();
        assert!(err.to_string().contains("at least one slide"));
    }
}
