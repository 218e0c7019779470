//! Remote game service client
//!
//! [`GameService`] is the seam between the sync core and the network; the
//! production implementation speaks JSON over HTTP with `reqwest`. The
//! service is authoritative for all chess rules; this client never judges
//! legality, it only relays verdicts. No request is ever retried.

use crate::core::{ClientConfig, SyncError, SyncResult};
use crate::networking::dto::{
    BestMoveResponse, EndgameResponse, EvaluationResponse, HistoryResponse, MoveAccepted,
    MoveRequest, MoveResponseBody, ResetResponse, StateResponse,
};
use async_trait::async_trait;
use tracing::debug;

/// Boundary trait for the remote authoritative game service
#[async_trait]
pub trait GameService: Send + Sync {
    /// `GET /state` - current authoritative game state
    async fn fetch_state(&self) -> SyncResult<StateResponse>;

    /// `POST /move` - submit a move; `Err(IllegalMove)` on rejection
    async fn submit_move(&self, request: &MoveRequest) -> SyncResult<MoveAccepted>;

    /// `POST /reset` - reinitialize the remote game
    async fn reset(&self) -> SyncResult<ResetResponse>;

    /// `POST /undo` - take back the most recent move
    async fn undo(&self) -> SyncResult<ResetResponse>;

    /// `GET /endgame` - status text (check, checkmate, draw, ongoing)
    async fn endgame(&self) -> SyncResult<EndgameResponse>;

    /// `GET /history` - authoritative move list
    async fn history(&self) -> SyncResult<HistoryResponse>;

    /// `GET /evaluate` - evaluation display text
    async fn evaluate(&self) -> SyncResult<EvaluationResponse>;

    /// `GET /best_move` - suggested move display text
    async fn best_move(&self) -> SyncResult<BestMoveResponse>;
}

/// HTTP implementation of [`GameService`]
pub struct HttpGameService {
    config: ClientConfig,
    http: reqwest::Client,
}

impl HttpGameService {
    pub fn new(config: ClientConfig) -> SyncResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SyncError::RequestFailed {
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { config, http })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> SyncResult<T> {
        let url = self.config.endpoint(path);
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SyncError::RequestFailed {
                message: format!("{path} returned {status}: {text}"),
            });
        }
        Ok(response.json::<T>().await?)
    }

    async fn post_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> SyncResult<T> {
        let url = self.config.endpoint(path);
        debug!(%url, "POST");
        let response = self.http.post(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SyncError::RequestFailed {
                message: format!("{path} returned {status}: {text}"),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl GameService for HttpGameService {
    async fn fetch_state(&self) -> SyncResult<StateResponse> {
        self.get_json("state").await
    }

    async fn submit_move(&self, request: &MoveRequest) -> SyncResult<MoveAccepted> {
        let url = self.config.endpoint("move");
        debug!(%url, from = %request.from_square, to = %request.to_square, "POST move");
        let response = self.http.post(url).json(request).send().await?;
        let status = response.status();

        // Rejection dialects: a client-error status with a detail body, or
        // a 200 carrying {valid:false, error}.
        if status.is_client_error() {
            let text = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|v| {
                    v.get("detail")
                        .or_else(|| v.get("error"))
                        .and_then(|d| d.as_str().map(str::to_string))
                })
                .unwrap_or_else(|| format!("move rejected with status {status}"));
            return Err(SyncError::IllegalMove { message: reason });
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SyncError::RequestFailed {
                message: format!("move returned {status}: {text}"),
            });
        }

        let body = response.json::<MoveResponseBody>().await?;
        if body.valid == Some(false) {
            return Err(SyncError::IllegalMove {
                message: body.error.unwrap_or_else(|| "Invalid move".to_string()),
            });
        }
        // Some services nest the fresh state under `state`
        let (fen, move_history) = match body.state {
            Some(state) => (state.fen, Some(state.move_history)),
            None => (body.fen, body.move_history),
        };
        Ok(MoveAccepted { fen, move_history })
    }

    async fn reset(&self) -> SyncResult<ResetResponse> {
        self.post_json("reset").await
    }

    async fn undo(&self) -> SyncResult<ResetResponse> {
        self.post_json("undo").await
    }

    async fn endgame(&self) -> SyncResult<EndgameResponse> {
        self.get_json("endgame").await
    }

    async fn history(&self) -> SyncResult<HistoryResponse> {
        self.get_json("history").await
    }

    async fn evaluate(&self) -> SyncResult<EvaluationResponse> {
        self.get_json("evaluate").await
    }

    async fn best_move(&self) -> SyncResult<BestMoveResponse> {
        self.get_json("best_move").await
    }
}
