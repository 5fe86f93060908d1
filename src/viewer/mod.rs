use crate::models::Property;
use std::fmt::Write;

/// Thousands-grouped `£` price rendering
pub fn format_price(price: i64) -> String {
    let digits = price.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("£{}", grouped.chars().rev().collect::<String>())
}

fn headline(property: &Property) -> String {
    format!("{} - {}", property.property_type, format_price(property.price))
}

/// One search-result card
pub fn property_card(property: &Property, favorited: bool) -> String {
    let marker = if favorited { "  ♥" } else { "" };
    let added = property
        .added
        .map(|d| format!(" · added {d}"))
        .unwrap_or_default();
    format!(
        "{}{}\n   {}\n   {} bedrooms{} · id {}",
        headline(property),
        marker,
        property.location,
        property.bedrooms,
        added,
        property.id,
    )
}

/// Full detail view for one listing
pub fn property_detail(property: &Property) -> String {
    let mut out = String::new();
    writeln!(out, "{}", headline(property)).ok();
    writeln!(out, "{}", property.location).ok();
    write!(out, "{} bedrooms", property.bedrooms).ok();
    if let Some(added) = property.added {
        write!(out, " · added {added}").ok();
    }
    writeln!(out).ok();

    writeln!(out, "\nPicture: {}", property.picture).ok();
    writeln!(out, "\n{}", property.long_description).ok();

    match &property.floor_plan {
        Some(plan) => writeln!(out, "\nFloor plan: {plan}").ok(),
        None => writeln!(out, "\nFloor plan is not available for this property.").ok(),
    };

    if property.images.is_empty() {
        writeln!(out, "\nNo additional images available.").ok();
    } else {
        writeln!(out, "\nAdditional images:").ok();
        for image in &property.images {
            writeln!(out, "   {image}").ok();
        }
    }

    match (property.latitude, property.longitude) {
        (Some(lat), Some(lng)) => writeln!(out, "\nMap: {lat}, {lng}").ok(),
        _ => writeln!(out, "\nMap is not available for this property.").ok(),
    };

    out
}

/// User-visible message for an unknown listing id
pub fn not_found(id: &str) -> String {
    format!("Property {id} not found!")
}

/// The favorites sidebar
pub fn favorites_panel(entries: &[Property]) -> String {
    let mut out = String::from("Favorites\n");
    if entries.is_empty() {
        out.push_str("   Drag properties here to add to favorites.\n");
        return out;
    }
    for property in entries {
        writeln!(out, "   {} · {} · id {}", headline(property), property.location, property.id).ok();
    }
    out
}
