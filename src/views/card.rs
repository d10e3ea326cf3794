use crate::models::Property;
use crate::views::{capitalize, clamp, format_number, format_price};
use std::fmt;

/// One listing card. `index` is the 1-based number used by `open <n>`.
pub struct Card<'a> {
    pub index: usize,
    pub property: &'a Property,
}

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let property = self.property;

        let mut badges = vec![property.listing_type.label()];
        if property.featured {
            badges.push("Featured");
        }

        writeln!(
            f,
            "[{}] {}  ({})  {}",
            self.index,
            clamp(&property.title, 60),
            badges.join(" · "),
            format_price(property.price)
        )?;
        writeln!(f, "    {}, {}", property.city, property.country)?;
        if !property.description.is_empty() {
            writeln!(f, "    {}", clamp(&property.description, 120))?;
        }
        writeln!(
            f,
            "    {} bd · {} ba · {} m² · {}",
            property.bedrooms,
            property.bathrooms,
            format_number(property.area),
            capitalize(property.property_type.as_str())
        )
    }
}

pub fn render_card(index: usize, property: &Property) -> String {
    Card { index, property }.to_string()
}

/// Numbered grid of cards, a blank line between each
pub struct Cards<'a>(pub &'a [Property]);

impl fmt::Display for Cards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, property) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", Card { index: i + 1, property })?;
        }
        Ok(())
    }
}

pub fn render_cards(properties: &[Property]) -> String {
    Cards(properties).to_string()
}
