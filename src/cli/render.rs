//! Terminal rendering of guidance and place lists.

use console::style;

use lifeline::models::{EmergencyEntry, PlaceRecord};
use lifeline::services::{Guidance, GuidanceSource, PlaceResults};

/// Plain-text block for one place; `distance_km` is `None` for city lookups.
pub fn format_place(place: &PlaceRecord, distance_km: Option<f64>) -> String {
    let distance = match distance_km {
        Some(km) => format!("{:.2} km", km),
        None => "N/A".to_string(),
    };
    format!(
        "{} ({})\n  Address: {}, {}\n  Phone: {}\n  Distance: {}",
        place.name, place.category, place.address, place.city, place.phone, distance
    )
}

pub fn print_guidance(query: &str, guidance: &Guidance) {
    println!("{} {}", style("Guidance for:").bold(), query.trim());
    match guidance.source {
        GuidanceSource::Catalog => {
            println!("{}", style("(offline guidance from the local catalog)").dim())
        }
        GuidanceSource::NotFound | GuidanceSource::Prompt => {
            println!("{} {}", style("!").yellow(), guidance);
            return;
        }
        GuidanceSource::Advisory => {}
    }
    println!();
    println!("{}", guidance);
}

pub fn print_places(results: &PlaceResults) {
    match results {
        PlaceResults::NoLocation => {
            println!(
                "{} No location given; pass --lat/--lon or --city to list nearby services",
                style("!").yellow()
            );
            return;
        }
        _ if results.is_empty() => {
            println!("{} No emergency places found", style("!").yellow());
            return;
        }
        _ => {}
    }

    println!("{}", style("Nearby Emergency Places / Services").bold());
    match results {
        PlaceResults::Nearest(list) => {
            for nearby in list {
                println!("{}", format_place(&nearby.place, Some(nearby.distance_km)));
            }
        }
        PlaceResults::InCity(list) => {
            for place in list {
                println!("{}", format_place(place, None));
            }
        }
        PlaceResults::NoLocation => {}
    }
}

pub fn print_emergencies(entries: &[EmergencyEntry]) {
    if entries.is_empty() {
        println!("{} The emergency catalog is empty", style("!").yellow());
        return;
    }
    for entry in entries {
        println!("{}", style(&entry.name).bold());
        println!("  {}", entry.steps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeline::models::PlaceCategory;

    fn mayo() -> PlaceRecord {
        PlaceRecord {
            city: "Lahore".to_string(),
            name: "Mayo Hospital".to_string(),
            category: PlaceCategory::Hospital,
            address: "Nisbat Rd".to_string(),
            phone: "1122".to_string(),
            latitude: 31.5680,
            longitude: 74.3090,
        }
    }

    #[test]
    fn test_format_place_with_distance() {
        let text = format_place(&mayo(), Some(6.456));
        assert_eq!(
            text,
            "Mayo Hospital (Hospital)\n  Address: Nisbat Rd, Lahore\n  Phone: 1122\n  Distance: 6.46 km"
        );
    }

    #[test]
    fn test_format_place_without_distance() {
        let text = format_place(&mayo(), None);
        assert!(text.ends_with("Distance: N/A"));
    }
}
