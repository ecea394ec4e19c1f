//! Console rendering of workflow results.

use std::fmt::Write;

use menu_synth::{CheapestReport, RestaurantMetadata, TunaOption};
use sushi_tools::ordering::OrderConfirmation;
use sushi_tools::places::RestaurantDetails;

fn delivery_label(option: &TunaOption) -> String {
    match (option.delivery_time_minutes, option.delivery_fee) {
        (Some(minutes), Some(fee)) if option.delivery_available => {
            format!("delivery {} min, ${:.2}", minutes, fee)
        }
        _ => "pickup only".to_string(),
    }
}

pub fn restaurants(list: &[RestaurantMetadata]) -> String {
    let mut out = format!("Found {} restaurants:\n", list.len());
    for restaurant in list {
        let tier = restaurant
            .price_level
            .map(|level| level.label())
            .unwrap_or_else(|| "unknown".to_string());
        let rating = restaurant
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        let range = match (restaurant.price_range_low, restaurant.price_range_high) {
            (Some(low), Some(high)) => format!(" ${}-${}", low, high),
            (Some(low), None) => format!(" ${}+", low),
            _ => String::new(),
        };
        let _ = writeln!(
            out,
            "  - {} ({}, rating {}){}",
            restaurant.display_name(),
            tier,
            rating,
            range
        );
    }
    out
}

pub fn ranking(report: &CheapestReport) -> String {
    let mut out = format!(
        "Tuna roll options ({} found across {} restaurants):\n",
        report.total_options_found, report.total_restaurants_checked
    );
    for (rank, option) in report.all_options.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. ${:>6.2}  {} at {} ({} pcs, ${:.2}/pc, {})",
            rank + 1,
            option.price,
            option.item_name,
            option.restaurant_name,
            option.pieces,
            option.price_per_piece,
            delivery_label(option)
        );
    }
    out
}

pub fn winner(report: &CheapestReport) -> String {
    match report.cheapest.as_ref() {
        Some(best) => format!(
            "Cheapest: {} at {} for ${:.2} (${:.2} with delivery)",
            best.item_name, best.restaurant_name, best.price, best.total_with_delivery
        ),
        None => "No available tuna rolls found".to_string(),
    }
}

fn yes_no(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unknown",
    }
}

pub fn details(details: &RestaurantDetails) -> String {
    let restaurant = &details.restaurant;
    let mut out = format!("{}\n", restaurant.display_name());
    if let Some(address) = restaurant.address.as_deref().filter(|a| !a.is_empty()) {
        let _ = writeln!(out, "  {}", address);
    }
    let _ = writeln!(
        out,
        "  Delivery: {}, takeout: {}, dine-in: {}",
        yes_no(restaurant.delivery),
        yes_no(details.takeout),
        yes_no(details.dine_in)
    );
    if let Some(summary) = details.summary.as_deref() {
        let _ = writeln!(out, "  {}", summary);
    }
    for day in &details.hours {
        let _ = writeln!(out, "  {}", day);
    }
    for review in &details.reviews {
        let stars = review
            .rating
            .map(|r| format!("{:.0}/5", r))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "  [{}] {} ({})", stars, review.text, review.time);
    }
    out
}

pub fn confirmation(order: &OrderConfirmation) -> String {
    let costs = &order.cost_breakdown;
    let mut out = format!(
        "Order {} {}: {} from {}\n",
        order.order_id, order.status, order.item.name, order.restaurant.name
    );
    let _ = writeln!(
        out,
        "  Deliver to {} in ~{} min",
        order.delivery.address, order.delivery.estimated_time_minutes
    );
    let _ = writeln!(
        out,
        "  Subtotal ${:.2} + delivery ${:.2} + tax ${:.2} = ${:.2}",
        costs.subtotal, costs.delivery_fee, costs.tax, costs.total
    );
    let _ = write!(out, "  {}", order.note);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_synth::{find_cheapest, PriceLevel};
    use sushi_tools::places::format_restaurant_details;

    #[test]
    fn test_restaurants_lists_each() {
        let list = vec![
            RestaurantMetadata::new("a")
                .with_name("Sushi A")
                .with_price_level(PriceLevel::Moderate),
            RestaurantMetadata::new("b"),
        ];
        let text = restaurants(&list);
        assert!(text.starts_with("Found 2 restaurants"));
        assert!(text.contains("Sushi A (moderate, rating -)"));
        assert!(text.contains("Unknown Restaurant (unknown"));
    }

    #[test]
    fn test_winner_empty() {
        let report = find_cheapest(&[]);
        assert_eq!(winner(&report), "No available tuna rolls found");
        assert_eq!(ranking(&report).lines().count(), 1);
    }

    #[test]
    fn test_ranking_numbers_options() {
        let list = vec![RestaurantMetadata::new("display-1")
            .with_name("Numbered")
            .with_price_level(PriceLevel::Inexpensive)
            .with_delivery(false)];
        let report = find_cheapest(&list);
        let text = ranking(&report);
        assert_eq!(text.lines().count(), 2);
        assert_eq!(
            text.lines().nth(1).unwrap(),
            "   1. $  7.49  Spicy Tuna Roll at Numbered (8 pcs, $0.94/pc, pickup only)"
        );
        assert_eq!(
            winner(&report),
            "Cheapest: Spicy Tuna Roll at Numbered for $7.49 ($7.49 with delivery)"
        );
    }

    #[test]
    fn test_details_lines() {
        let place = serde_json::json!({
            "displayName": {"text": "Counter Sushi"},
            "formattedAddress": "9 Pier St",
            "delivery": false,
            "takeout": true,
            "currentOpeningHours": {"weekdayDescriptions": ["Monday: Closed"]},
            "reviews": [{"rating": 4, "text": {"text": "Fresh fish."}, "relativePublishTimeDescription": "a month ago"}]
        });
        let text = details(&format_restaurant_details(&place));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Counter Sushi",
                "  9 Pier St",
                "  Delivery: no, takeout: yes, dine-in: unknown",
                "  Monday: Closed",
                "  [4/5] Fresh fish. (a month ago)",
            ]
        );
    }
}
