//! Mapping from storefront payloads to the served schema.
//!
//! Absent fields become empty strings or zero, never `null`.

use serde_json::Value;

use super::types::ItunesItem;
use crate::models::{AppDetail, AppSummary, RankedApp};
use crate::utils::number::round_to;

const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// First 200 characters plus `...`, appended even when nothing was cut.
pub fn preview(description: &str) -> String {
    let mut out: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    out.push_str("...");
    out
}

fn id_of(item: &ItunesItem) -> String {
    item.track_id.map(|id| id.to_string()).unwrap_or_default()
}

fn rating_of(item: &ItunesItem) -> f64 {
    round_to(item.average_user_rating.unwrap_or(0.0), 1)
}

pub(super) fn summary_from_item(item: ItunesItem) -> AppSummary {
    AppSummary {
        id: id_of(&item),
        rating: rating_of(&item),
        description: preview(item.description.as_deref().unwrap_or_default()),
        name: item.track_name.unwrap_or_default(),
        developer: item.artist_name.unwrap_or_default(),
        category: item.primary_genre_name.unwrap_or_default(),
        price: item.price.unwrap_or(0.0),
        rating_count: item.user_rating_count.unwrap_or(0),
        version: item.version.unwrap_or_default(),
        icon_url: item.artwork_url_512.unwrap_or_default(),
        url: item.track_view_url.unwrap_or_default(),
    }
}

pub(super) fn detail_from_item(item: ItunesItem) -> AppDetail {
    AppDetail {
        id: id_of(&item),
        rating: rating_of(&item),
        name: item.track_name.unwrap_or_default(),
        developer: item.artist_name.unwrap_or_default(),
        category: item.primary_genre_name.unwrap_or_default(),
        rating_count: item.user_rating_count.unwrap_or(0),
        version: item.version.unwrap_or_default(),
        description: item.description.unwrap_or_default(),
        release_notes: item.release_notes.unwrap_or_default(),
        price: item.price.unwrap_or(0.0),
        icon_url: item.artwork_url_512.unwrap_or_default(),
        screenshots: item.screenshot_urls,
        url: item.track_view_url.unwrap_or_default(),
    }
}

fn label(value: &Value) -> String {
    value
        .get("label")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn attribute<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.get("attributes").and_then(|attrs| attrs.get(name))
}

fn attribute_str(value: &Value, name: &str) -> String {
    attribute(value, name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Feed fields that hold either one object or a list of them.
fn first_or_self(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        Value::Null => None,
        other => Some(other),
    }
}

fn ranked_from_entry(rank: u32, entry: &Value) -> RankedApp {
    let app_id = entry
        .get("id")
        .map(|id| attribute_str(id, "im:id"))
        .unwrap_or_default();

    let icon_url = match entry.get("im:image") {
        Some(Value::Array(images)) => images.last().map(label).unwrap_or_default(),
        Some(image @ Value::Object(_)) => label(image),
        _ => String::new(),
    };

    let url = entry
        .get("link")
        .and_then(first_or_self)
        .map(|link| attribute_str(link, "href"))
        .unwrap_or_default();

    let price = entry
        .get("im:price")
        .and_then(|p| attribute(p, "amount"))
        .and_then(|amount| match amount {
            Value::String(s) => s.trim().parse::<f64>().ok(),
            Value::Number(n) => n.as_f64(),
            _ => None,
        })
        .unwrap_or(0.0);

    let description = entry
        .get("summary")
        .map(label)
        .filter(|s| !s.is_empty())
        .map(|s| preview(&s))
        .unwrap_or_default();

    RankedApp {
        rank,
        id: app_id.clone(),
        app_id,
        name: entry.get("im:name").map(label).unwrap_or_default(),
        developer: entry.get("im:artist").map(label).unwrap_or_default(),
        category: entry
            .get("category")
            .map(|c| attribute_str(c, "label"))
            .unwrap_or_default(),
        price,
        description,
        icon_url,
        url,
    }
}

/// Ranks follow feed order, starting at 1. A feed whose `entry` is a
/// single object is read as a one-element chart.
pub(super) fn ranked_from_feed(body: &Value) -> Vec<RankedApp> {
    let entries: Vec<&Value> = match body.get("feed").and_then(|feed| feed.get("entry")) {
        Some(Value::Array(entries)) => entries.iter().collect(),
        Some(entry @ Value::Object(_)) => vec![entry],
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| ranked_from_entry(idx as u32 + 1, entry))
        .collect()
}
