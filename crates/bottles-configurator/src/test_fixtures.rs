//! Product snapshots shared by the unit tests.

use bottles_core::{
    AssemblyOffset, Component, ComponentKind, ComponentTraits, ProductConfig, ProductConfigParts,
};
use rust_decimal::Decimal;

pub fn component(
    id: &str,
    name: &str,
    kind: ComponentKind,
    sku_part: &str,
    price: Decimal,
) -> Component {
    Component {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        sku_part: sku_part.to_string(),
        price_modifier: price,
        layer_image: format!("https://cdn.example.com/{id}.png"),
        preview_swatch_image: None,
        assembly_offset: None,
        overcap_image: None,
        traits: ComponentTraits::default(),
    }
}

fn sprayer(id: &str, name: &str, sku_part: &str) -> Component {
    let mut c = component(id, name, ComponentKind::Fitment, sku_part, Decimal::ZERO);
    c.overcap_image = Some(format!("https://cdn.example.com/{id}-overcap.png"));
    c.assembly_offset = Some(AssemblyOffset { x: 0, y: -14 });
    c
}

/// 9ml roll-on: Clear/Frosted glass, plastic and metal rollers, a shiny gold
/// cap (default), a flat black cap and a matte silver cap.
pub fn roll_on() -> ProductConfig {
    let mut gold = component(
        "cap-gold-shiny",
        "Shiny Gold",
        ComponentKind::Cap,
        "GlSh",
        Decimal::new(75, 2),
    );
    gold.assembly_offset = Some(AssemblyOffset { x: 0, y: -6 });

    ProductConfig::new(ProductConfigParts {
        id: "roll-on-9ml".to_string(),
        title: "9ml Roll-On".to_string(),
        base_price: Decimal::new(150, 2),
        sku: "RO9".to_string(),
        default_glass: Some("glass-clear".to_string()),
        glass_options: vec![
            component("glass-clear", "Clear", ComponentKind::Glass, "GBCyl", Decimal::ZERO),
            component(
                "glass-frosted",
                "Frosted",
                ComponentKind::Glass,
                "GBFr",
                Decimal::new(50, 2),
            ),
        ],
        fitment_options: vec![
            component(
                "fitment-roller-plastic",
                "Plastic Roller",
                ComponentKind::Fitment,
                "Roll",
                Decimal::ZERO,
            ),
            component(
                "fitment-roller-metal",
                "Metal Roller",
                ComponentKind::Fitment,
                "MRoll",
                Decimal::new(40, 2),
            ),
        ],
        cap_options: vec![
            gold,
            component(
                "cap-black-flat",
                "Flat Black Cap",
                ComponentKind::Cap,
                "FlBlk",
                Decimal::new(25, 2),
            ),
            component(
                "cap-silver-matte",
                "Matte Silver",
                ComponentKind::Cap,
                "SlMt",
                Decimal::new(60, 2),
            ),
        ],
        cap_swatches: None,
    })
    .expect("roll-on fixture is valid")
}

/// 10ml fused sprayer with the standard swatch palette. No shiny silver
/// sprayer is offered, and the chrome sprayer carries no color keyword.
pub fn fused_sprayer() -> ProductConfig {
    ProductConfig::new(ProductConfigParts {
        id: "spray-10ml".to_string(),
        title: "10ml Sprayer".to_string(),
        base_price: Decimal::new(225, 2),
        sku: "SP10".to_string(),
        default_glass: None,
        glass_options: vec![component(
            "glass-clear",
            "Clear",
            ComponentKind::Glass,
            "GBCyl",
            Decimal::ZERO,
        )],
        fitment_options: vec![
            sprayer("fitment-sprayer-gold-matte", "Matte Gold Sprayer", "SpGlMt"),
            sprayer("fitment-sprayer-gold-shiny", "Shiny Gold Sprayer", "SpGlSh"),
            sprayer("fitment-sprayer-black-matte", "Matte Black Sprayer", "SpBkMt"),
            sprayer("fitment-sprayer-chrome", "Chrome Sprayer", "SpCr"),
        ],
        cap_options: Vec::new(),
        cap_swatches: None,
    })
    .expect("sprayer fixture is valid")
}
