use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ItunesResponse {
    #[serde(default)]
    pub result_count: u32,
    #[serde(default)]
    pub results: Vec<ItunesItem>,
}

/// One software item from `/search` or `/lookup`. Every field is optional
/// upstream.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ItunesItem {
    pub track_id: Option<u64>,
    pub track_name: Option<String>,
    pub artist_name: Option<String>,
    pub primary_genre_name: Option<String>,
    pub price: Option<f64>,
    pub average_user_rating: Option<f64>,
    pub user_rating_count: Option<u64>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub release_notes: Option<String>,
    #[serde(rename = "artworkUrl512")]
    pub artwork_url_512: Option<String>,
    #[serde(default)]
    pub screenshot_urls: Vec<String>,
    pub track_view_url: Option<String>,
}
