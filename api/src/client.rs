use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::GameEvent;
use crate::cfbd::parse_cfbd_play;
use crate::classify::game_event_from_cfbd_play;
use crate::result::{ApiError, ApiResult, ResultExt, collect_all, message_from_value};

const CFBD_API_HOST: &str = "https://api.collegefootballdata.com";

/// Which slice of the season to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonType {
    Regular,
    Postseason,
    Both,
}

impl SeasonType {
    /// Value CFBD expects in the `seasonType` query parameter.
    pub fn as_query_value(self) -> &'static str {
        match self {
            SeasonType::Regular => "regular",
            SeasonType::Postseason => "postseason",
            SeasonType::Both => "both",
        }
    }
}

/// Selects one team-week of play-by-play.
#[derive(Debug, Clone)]
pub struct TeamWeekFilter {
    pub season_type: SeasonType,
    pub year: u16,
    pub week: u8,
    pub team: String,
}

/// CFBD API client. The bearer token comes in through the constructor; no
/// process-wide configuration is read here.
#[derive(Debug, Clone)]
pub struct CfbdClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

struct JsonResponse {
    status_code: u16,
    body: Value,
}

impl CfbdClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, CFBD_API_HOST)
    }

    /// Same client against a different host. Tests point this at a local
    /// mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent("drivechart/0.1 (play-by-play drive charts)")
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Fetch one team-week of play-by-play and classify it into game events.
    ///
    /// Stages run in order and the first failure wins: transport, array
    /// shape, per-record validation, per-record classification. Plays the
    /// classifier deliberately skips are filtered out at the end; the batch
    /// still succeeds.
    pub async fn fetch_events_by_team_week(
        &self,
        filter: &TeamWeekFilter,
    ) -> ApiResult<Vec<GameEvent>> {
        let url = format!("{}/plays", self.base_url);
        let query = [
            ("seasonType", filter.season_type.as_query_value().to_string()),
            ("year", filter.year.to_string()),
            ("week", filter.week.to_string()),
            ("team", filter.team.clone()),
        ];

        let response = self
            .get_json(&url, &query)
            .await
            .context("Error fetching play-by-play from CFBD")?;

        debug!("CFBD /plays responded with status {}", response.status_code);

        let Value::Array(raw_plays) = response.body else {
            return Err(ApiError::Other(
                "Play-by-play response from CFBD is not an array".to_string(),
            ));
        };

        let plays = collect_all(raw_plays.iter().map(parse_cfbd_play))
            .context("Error parsing raw play-by-play response from CFBD")?;

        let events = collect_all(plays.iter().map(game_event_from_cfbd_play))
            .context("Play-by-play from CFBD has unexpected values")?;

        Ok(events.into_iter().flatten().collect())
    }

    /// One GET returning the decoded JSON body. Non-2xx responses become
    /// transport failures carrying the status and the body's error message;
    /// network and decode failures use 500 by convention.
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> ApiResult<JsonResponse> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .query(query)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Transport { status_code: 500, message: e.to_string() })?;

        let status_code = response.status().as_u16();

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<Value>(&text) {
                Ok(body) => message_from_value(&body),
                Err(_) if !text.is_empty() => text,
                Err(_) => format!("Error {status_code} making GET request to {url}"),
            };
            return Err(ApiError::Transport { status_code, message });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Transport { status_code: 500, message: e.to_string() })?;

        Ok(JsonResponse { status_code, body })
    }
}
