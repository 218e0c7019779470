//! Game session orchestration
//!
//! One session owns one [`BoardStore`] and drives every flow against the
//! remote service: move submission, reset, resume, and undo. All flows are
//! serialized through a single busy flag, and every reconciliation is
//! guarded by a session epoch so a response that outlived a completed
//! reset or resume is discarded instead of applied.

use crate::board::{is_promotion_move, BoardStore, Square, DEFAULT_PROMOTION};
use crate::core::{EventBus, GameEvent, SyncError, SyncResult};
use crate::networking::{GameService, MoveAccepted, MoveRequest};
use crate::notation;
use crate::session::flow::{MoveFlow, PendingMove};
use std::sync::Arc;
use tracing::{info, warn};

/// Client-side session for one game against the remote service
pub struct GameSession {
    store: BoardStore,
    service: Arc<dyn GameService>,
    events: EventBus,
    flow: MoveFlow,
    busy: bool,
    epoch: u64,
}

impl GameSession {
    pub fn new(service: Arc<dyn GameService>) -> Self {
        Self {
            store: BoardStore::new(),
            service,
            events: EventBus::new(),
            flow: MoveFlow::default(),
            busy: false,
            epoch: 0,
        }
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Start a drag gesture from a square. Refused while any flow is in
    /// flight, while another gesture is active, or when the square is
    /// empty.
    pub fn begin_drag(&mut self, from: Square) -> bool {
        if self.busy {
            return false;
        }
        let Some(piece) = self.store.grid().piece_at(from) else {
            return false;
        };
        self.flow.begin(from, piece)
    }

    /// Abandon the current drag gesture, if any
    pub fn cancel_drag(&mut self) {
        self.flow.cancel();
    }

    /// Complete the gesture at a destination square and submit the move.
    /// A drop without an active drag, or back onto the source square, is a
    /// no-op. On rejection or transport failure local state is left
    /// exactly as it was before the gesture; nothing is retried.
    pub async fn drop_on(&mut self, to: Square) -> SyncResult<()> {
        let Some(pending) = self.flow.drop_to(to) else {
            return Ok(());
        };
        self.busy = true;
        let epoch = self.epoch;
        let result = self.submit(pending, epoch).await;
        self.flow.resolve();
        self.busy = false;
        if let Err(err) = &result {
            self.publish_failure(err);
        }
        result
    }

    /// Reinitialize the remote game and re-synchronize local state. Uses
    /// the encoding from the reset response, falling back to the standard
    /// start position when the service returns none.
    pub async fn reset(&mut self) -> SyncResult<()> {
        self.acquire("reset")?;
        let result = self.do_reset().await;
        self.busy = false;
        if let Err(err) = &result {
            self.publish_failure(err);
        }
        result
    }

    /// Re-synchronize from the current authoritative state. Unlike
    /// `reset`, never implicitly initializes a new game: a state response
    /// without an encoding is an error and local state stays put.
    pub async fn resume(&mut self) -> SyncResult<()> {
        self.acquire("resume")?;
        let result = self.do_resume().await;
        self.busy = false;
        if let Err(err) = &result {
            self.publish_failure(err);
        }
        result
    }

    /// Take back the most recent move on the remote game and reconcile
    pub async fn undo(&mut self) -> SyncResult<()> {
        self.acquire("undo")?;
        let result = self.do_undo().await;
        self.busy = false;
        if let Err(err) = &result {
            self.publish_failure(err);
        }
        result
    }

    /// Gate a lifecycle flow behind the session-level busy flag
    fn acquire(&mut self, operation: &str) -> SyncResult<()> {
        if self.busy || !self.flow.is_idle() {
            return Err(SyncError::Busy {
                message: format!("{operation} refused while another flow is in flight"),
            });
        }
        self.busy = true;
        Ok(())
    }

    async fn submit(&mut self, pending: PendingMove, epoch: u64) -> SyncResult<()> {
        let request = MoveRequest {
            from_square: pending.from.to_algebraic(),
            to_square: pending.to.to_algebraic(),
            promotion: is_promotion_move(pending.piece, pending.to)
                .then(|| DEFAULT_PROMOTION.letter().to_string()),
        };
        info!(from = %request.from_square, to = %request.to_square, "submitting move");

        let accepted = self.service.submit_move(&request).await?;
        let Some(history_known) = self.reconcile_accepted(&pending, accepted, epoch)? else {
            return Ok(());
        };
        self.run_follow_ups(epoch, history_known).await;
        Ok(())
    }

    /// Merge a success verdict into the store. Returns `None` when the
    /// response belongs to a superseded epoch and was discarded, otherwise
    /// whether the verdict already carried the authoritative history.
    fn reconcile_accepted(
        &mut self,
        pending: &PendingMove,
        accepted: MoveAccepted,
        epoch: u64,
    ) -> SyncResult<Option<bool>> {
        if epoch != self.epoch {
            warn!(
                response_epoch = epoch,
                session_epoch = self.epoch,
                "discarding move response from a superseded session"
            );
            return Ok(None);
        }

        match accepted.fen {
            Some(fen) => {
                self.store.replace_from_encoding(&fen)?;
                self.events.publish(GameEvent::BoardReplaced);
            }
            None => {
                // Bare verdict: the server confirmed but sent no fresh
                // encoding, so move the piece locally.
                self.store
                    .apply_local_move(pending.from, pending.to, pending.piece);
            }
        }
        self.events.publish(GameEvent::MoveApplied {
            from: pending.from.to_algebraic(),
            to: pending.to.to_algebraic(),
        });

        let history_known = match accepted.move_history {
            Some(history) => {
                let length = history.len();
                self.store.set_history(history);
                self.events.publish(GameEvent::HistoryReplaced { length });
                true
            }
            None => false,
        };
        Ok(Some(history_known))
    }

    /// Auxiliary requests after an applied move. Each one merges into the
    /// store independently; a failure is surfaced as an event and never
    /// rolls back the already-applied move.
    async fn run_follow_ups(&mut self, epoch: u64, history_known: bool) {
        match self.service.endgame().await {
            Ok(endgame) if epoch == self.epoch => {
                self.store.set_status(endgame.message.clone());
                self.events.publish(GameEvent::StatusUpdated {
                    text: endgame.message,
                });
            }
            Ok(_) => warn!("discarding stale endgame response"),
            Err(err) => self.follow_up_failed("endgame", &err),
        }

        if !history_known {
            match self.service.history().await {
                Ok(response) if epoch == self.epoch => {
                    let length = response.history.len();
                    self.store.set_history(response.history);
                    self.events.publish(GameEvent::HistoryReplaced { length });
                }
                Ok(_) => warn!("discarding stale history response"),
                Err(err) => self.follow_up_failed("history", &err),
            }
        }

        match self.service.evaluate().await {
            Ok(response) if epoch == self.epoch => {
                self.store.set_evaluation(response.evaluation.clone());
                self.events.publish(GameEvent::EvaluationUpdated {
                    text: response.evaluation,
                });
            }
            Ok(_) => warn!("discarding stale evaluation response"),
            Err(err) => self.follow_up_failed("evaluate", &err),
        }

        match self.service.best_move().await {
            Ok(response) if epoch == self.epoch => {
                self.store.set_suggestion(response.message.clone());
                self.events.publish(GameEvent::SuggestionUpdated {
                    text: response.message,
                });
            }
            Ok(_) => warn!("discarding stale best-move response"),
            Err(err) => self.follow_up_failed("best_move", &err),
        }
    }

    fn follow_up_failed(&self, endpoint: &str, err: &SyncError) {
        warn!(endpoint, error = %err, "follow-up request failed");
        self.events.publish(GameEvent::FollowUpFailed {
            endpoint: endpoint.to_string(),
            reason: err.to_string(),
        });
    }

    async fn do_reset(&mut self) -> SyncResult<()> {
        info!("requesting remote game reset");
        let response = self.service.reset().await?;
        let fen = response.fen().unwrap_or(notation::START_POSITION);
        self.store.replace_from_encoding(fen)?;
        self.store.clear_annotations();
        self.epoch += 1;
        self.events.publish(GameEvent::SessionReset);
        Ok(())
    }

    async fn do_resume(&mut self) -> SyncResult<()> {
        info!("resuming from authoritative state");
        let state = self.service.fetch_state().await?;
        let Some(fen) = state.fen else {
            return Err(SyncError::RequestFailed {
                message: "state response carried no board encoding".to_string(),
            });
        };
        self.store.replace_from_encoding(&fen)?;
        let length = state.move_history.len();
        self.store.set_history(state.move_history);
        self.epoch += 1;
        self.events.publish(GameEvent::SessionResumed);
        self.events.publish(GameEvent::HistoryReplaced { length });
        Ok(())
    }

    async fn do_undo(&mut self) -> SyncResult<()> {
        info!("requesting undo of last move");
        let response = self.service.undo().await?;
        let fen = match response.fen() {
            Some(fen) => fen.to_string(),
            None => {
                let message = response
                    .error
                    .or(response.message)
                    .unwrap_or_else(|| "undo response carried no board encoding".to_string());
                return Err(SyncError::RequestFailed { message });
            }
        };
        self.store.replace_from_encoding(&fen)?;
        if let Some(history) = response.history() {
            let length = history.len();
            self.store.set_history(history.to_vec());
            self.events.publish(GameEvent::HistoryReplaced { length });
        }
        self.events.publish(GameEvent::BoardReplaced);
        Ok(())
    }

    fn publish_failure(&self, err: &SyncError) {
        match err {
            SyncError::IllegalMove { message } => {
                self.events.publish(GameEvent::MoveRejected {
                    reason: message.clone(),
                });
            }
            other => {
                self.events.publish(GameEvent::RequestFailed {
                    reason: other.to_string(),
                });
            }
        }
    }
}
