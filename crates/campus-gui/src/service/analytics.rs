//! Startup page-view beacon.
//!
//! One GA4 measurement-protocol hit is sent when the app starts. The result
//! is only logged; nothing waits on it.

use iced::Task;
use reqwest::Url;
use uuid::Uuid;

use crate::error::GuiError;
use crate::message::Message;
use crate::state::AnalyticsSettings;

/// GA4 measurement-protocol collector.
pub const COLLECT_URL: &str = "https://www.google-analytics.com/g/collect";

/// Document title reported with the page view.
pub const PAGE_TITLE: &str = "Campus Essentials";

/// Build the page-view URL for one launch.
pub fn page_view_url(
    measurement_id: &str,
    client_id: Uuid,
    title: &str,
) -> Result<Url, GuiError> {
    let client_id = client_id.to_string();
    Url::parse_with_params(
        COLLECT_URL,
        [
            ("v", "2"),
            ("tid", measurement_id),
            ("cid", client_id.as_str()),
            ("en", "page_view"),
            ("dt", title),
        ],
    )
    .map_err(|e| GuiError::analytics(e.to_string()))
}

/// Send the page view in the background.
///
/// Returns `Task::none()` when analytics is disabled.
pub fn send_page_view(settings: &AnalyticsSettings) -> Task<Message> {
    if !settings.enabled {
        tracing::debug!("Analytics disabled");
        return Task::none();
    }

    let url = match page_view_url(&settings.measurement_id, Uuid::new_v4(), PAGE_TITLE) {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!(error = %err, "Skipping analytics beacon");
            return Task::none();
        }
    };

    Task::perform(post_beacon(url), Message::AnalyticsSent)
}

async fn post_beacon(url: Url) -> Result<(), GuiError> {
    let client = reqwest::Client::builder()
        .build()
        .map_err(|e| GuiError::HttpClient {
            reason: e.to_string(),
        })?;

    client.post(url).send().await?.error_for_status()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view_url() {
        let url = page_view_url("G-9EG5HKKXP1", Uuid::nil(), PAGE_TITLE).unwrap();
        insta::assert_snapshot!(url.as_str(), @"https://www.google-analytics.com/g/collect?v=2&tid=G-9EG5HKKXP1&cid=00000000-0000-0000-0000-000000000000&en=page_view&dt=Campus+Essentials");
    }
}
