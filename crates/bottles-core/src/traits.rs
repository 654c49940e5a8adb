//! Tagged component attributes and the name-based fallback used for records
//! authored before the tags existed.
//!
//! Catalog editors are expected to fill in `finish`, `color`, `style` and
//! `material` on every component. Legacy records only carry a display name such
//! as `"Shiny Gold Flat Cap"`, so each attribute can also be inferred from the
//! name. Inference is token based (split on anything that is not alphanumeric)
//! so `"Goldenrod"` never reads as gold.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finish {
    Shiny,
    Matte,
}

impl std::fmt::Display for Finish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finish::Shiny => write!(f, "shiny"),
            Finish::Matte => write!(f, "matte"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Gold,
    RoseGold,
    Silver,
    Black,
    White,
    Copper,
    Bronze,
    Clear,
}

impl Color {
    /// Parses a color keyword as used in env configuration, swatch ids and
    /// CMS tags (`"silver"`, `"rose_gold"`, `"Rose-Gold"`, `"rose gold"`).
    /// Case-insensitive.
    #[must_use]
    pub fn parse_keyword(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "gold" => Some(Color::Gold),
            "rose_gold" | "rosegold" => Some(Color::RoseGold),
            "silver" => Some(Color::Silver),
            "black" => Some(Color::Black),
            "white" => Some(Color::White),
            "copper" => Some(Color::Copper),
            "bronze" => Some(Color::Bronze),
            "clear" => Some(Color::Clear),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Gold => write!(f, "gold"),
            Color::RoseGold => write!(f, "rose_gold"),
            Color::Silver => write!(f, "silver"),
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
            Color::Copper => write!(f, "copper"),
            Color::Bronze => write!(f, "bronze"),
            Color::Clear => write!(f, "clear"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapStyle {
    Flat,
    Standard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Metal,
    Plastic,
}

/// Explicit attribute tags as authored in the catalog. Every field is
/// optional; see [`crate::Component::finish`] and friends for the resolved
/// values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTraits {
    #[serde(default)]
    pub finish: Option<Finish>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub style: Option<CapStyle>,
    #[serde(default)]
    pub material: Option<Material>,
}

/// Lowercased alphanumeric tokens of a display name.
fn tokens(name: &str) -> Vec<String> {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Infers the finish from a display name (`"Shiny Gold"` → `Shiny`).
#[must_use]
pub fn infer_finish(name: &str) -> Option<Finish> {
    tokens(name).iter().find_map(|t| match t.as_str() {
        "shiny" | "gloss" | "glossy" | "polished" => Some(Finish::Shiny),
        "matte" | "matt" | "brushed" | "satin" => Some(Finish::Matte),
        _ => None,
    })
}

/// Infers the color from a display name. `"rose gold"` is checked as a pair
/// before the single-word colors so it does not collapse into plain gold.
#[must_use]
pub fn infer_color(name: &str) -> Option<Color> {
    let toks = tokens(name);
    if toks
        .windows(2)
        .any(|w| w[0] == "rose" && w[1] == "gold")
        || toks.iter().any(|t| t == "rosegold")
    {
        return Some(Color::RoseGold);
    }
    toks.iter().find_map(|t| match t.as_str() {
        "gold" => Some(Color::Gold),
        "silver" => Some(Color::Silver),
        "black" => Some(Color::Black),
        "white" => Some(Color::White),
        "copper" => Some(Color::Copper),
        "bronze" => Some(Color::Bronze),
        "clear" => Some(Color::Clear),
        _ => None,
    })
}

/// Infers the cap style. Only `"flat"` is recognized; anything else is
/// [`CapStyle::Standard`].
#[must_use]
pub fn infer_style(name: &str) -> CapStyle {
    if tokens(name).iter().any(|t| t == "flat") {
        CapStyle::Flat
    } else {
        CapStyle::Standard
    }
}

#[must_use]
pub fn infer_material(name: &str) -> Option<Material> {
    tokens(name).iter().find_map(|t| match t.as_str() {
        "metal" | "metallic" | "aluminum" | "aluminium" | "steel" => Some(Material::Metal),
        "plastic" => Some(Material::Plastic),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_inferred_case_insensitively() {
        assert_eq!(infer_finish("SHINY Gold Cap"), Some(Finish::Shiny));
        assert_eq!(infer_finish("Matte Silver"), Some(Finish::Matte));
        assert_eq!(infer_finish("Gold Cap"), None);
    }

    #[test]
    fn color_inference_prefers_rose_gold_over_gold() {
        assert_eq!(infer_color("Rose Gold Sprayer"), Some(Color::RoseGold));
        assert_eq!(infer_color("Shiny Gold"), Some(Color::Gold));
    }

    #[test]
    fn color_inference_is_token_based() {
        assert_eq!(infer_color("Goldenrod Dropper"), None);
        assert_eq!(infer_color("silver-sprayer"), Some(Color::Silver));
    }

    #[test]
    fn style_flat_requires_whole_word() {
        assert_eq!(infer_style("Flat Black Cap"), CapStyle::Flat);
        assert_eq!(infer_style("Flatiron Tall Cap"), CapStyle::Standard);
    }

    #[test]
    fn material_inference() {
        assert_eq!(infer_material("Metal Roller"), Some(Material::Metal));
        assert_eq!(infer_material("Plastic Roller"), Some(Material::Plastic));
        assert_eq!(infer_material("Roller"), None);
    }

    #[test]
    fn color_keyword_parsing_accepts_separators() {
        assert_eq!(Color::parse_keyword("Rose-Gold"), Some(Color::RoseGold));
        assert_eq!(Color::parse_keyword(" silver "), Some(Color::Silver));
        assert_eq!(Color::parse_keyword("Rose Gold"), Some(Color::RoseGold));
        assert_eq!(Color::parse_keyword("teal"), None);
    }
}
