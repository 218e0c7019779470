//! Session Flow Integration Tests
//!
//! Drives a full GameSession against a scripted in-memory service:
//! move acceptance and rejection, reconciliation from fresh encodings,
//! follow-up merging, and the reset/resume/undo lifecycle.

use async_trait::async_trait;
use chessboard_client::networking::dto::{
    BestMoveResponse, EndgameResponse, EvaluationResponse, HistoryResponse, MoveAccepted,
    MoveRequest, ResetResponse, StateBody, StateResponse,
};
use chessboard_client::notation;
use chessboard_client::{GameEvent, GameService, GameSession, Square, SyncError, SyncResult};
use std::sync::{Arc, Mutex};

/// Start position after 1. e4
const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR";

/// Scripted stand-in for the remote service. Each field, when set,
/// overrides the canned default for one endpoint; the last submitted
/// move request is recorded for inspection.
#[derive(Default)]
struct StubService {
    move_response: Mutex<Option<SyncResult<MoveAccepted>>>,
    state_response: Mutex<Option<SyncResult<StateResponse>>>,
    reset_response: Mutex<Option<SyncResult<ResetResponse>>>,
    undo_response: Mutex<Option<SyncResult<ResetResponse>>>,
    endgame_response: Mutex<Option<SyncResult<EndgameResponse>>>,
    history_response: Mutex<Option<SyncResult<HistoryResponse>>>,
    last_move: Mutex<Option<MoveRequest>>,
}

impl StubService {
    fn with_move(self, response: SyncResult<MoveAccepted>) -> Self {
        *self.move_response.lock().unwrap() = Some(response);
        self
    }

    fn with_state(self, response: SyncResult<StateResponse>) -> Self {
        *self.state_response.lock().unwrap() = Some(response);
        self
    }

    fn with_reset(self, response: SyncResult<ResetResponse>) -> Self {
        *self.reset_response.lock().unwrap() = Some(response);
        self
    }

    fn with_undo(self, response: SyncResult<ResetResponse>) -> Self {
        *self.undo_response.lock().unwrap() = Some(response);
        self
    }

    fn with_endgame(self, response: SyncResult<EndgameResponse>) -> Self {
        *self.endgame_response.lock().unwrap() = Some(response);
        self
    }

    fn with_history(self, response: SyncResult<HistoryResponse>) -> Self {
        *self.history_response.lock().unwrap() = Some(response);
        self
    }

    fn last_move(&self) -> Option<MoveRequest> {
        self.last_move.lock().unwrap().clone()
    }
}

#[async_trait]
impl GameService for StubService {
    async fn fetch_state(&self) -> SyncResult<StateResponse> {
        self.state_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(StateResponse::default()))
    }

    async fn submit_move(&self, request: &MoveRequest) -> SyncResult<MoveAccepted> {
        *self.last_move.lock().unwrap() = Some(request.clone());
        self.move_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(MoveAccepted::default()))
    }

    async fn reset(&self) -> SyncResult<ResetResponse> {
        self.reset_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(ResetResponse::default()))
    }

    async fn undo(&self) -> SyncResult<ResetResponse> {
        self.undo_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(ResetResponse::default()))
    }

    async fn endgame(&self) -> SyncResult<EndgameResponse> {
        self.endgame_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| {
                Ok(EndgameResponse {
                    status: Some("ongoing".to_string()),
                    winner: None,
                    message: "Game is ongoing.".to_string(),
                })
            })
    }

    async fn history(&self) -> SyncResult<HistoryResponse> {
        self.history_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(HistoryResponse::default()))
    }

    async fn evaluate(&self) -> SyncResult<EvaluationResponse> {
        Ok(EvaluationResponse {
            score: Some(0),
            evaluation: "Position is equal (0.0)".to_string(),
        })
    }

    async fn best_move(&self) -> SyncResult<BestMoveResponse> {
        Ok(BestMoveResponse {
            best_move: Some("d7d5".to_string()),
            message: "Suggested move: d7d5".to_string(),
        })
    }
}

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn illegal(message: &str) -> SyncError {
    SyncError::IllegalMove {
        message: message.to_string(),
    }
}

async fn play(session: &mut GameSession, from: &str, to: &str) -> SyncResult<()> {
    assert!(session.begin_drag(sq(from)), "drag from {from} refused");
    session.drop_on(sq(to)).await
}

// ============================================================================
// Move Submission
// ============================================================================

#[tokio::test]
async fn test_accepted_move_with_fresh_encoding_reconciles() {
    let stub = Arc::new(StubService::default().with_move(Ok(MoveAccepted {
        fen: Some(AFTER_E4.to_string()),
        move_history: Some(vec!["e4".to_string()]),
    })));
    let mut session = GameSession::new(stub.clone());
    let events = session.events().subscribe();

    play(&mut session, "e2", "e4").await.unwrap();

    // Grid exactly matches the decoded server encoding
    assert_eq!(notation::encode_board(session.store().grid()), AFTER_E4);
    assert_eq!(session.store().move_history(), ["e4".to_string()]);

    // Follow-ups merged independently
    assert_eq!(session.store().status_text(), "Game is ongoing.");
    assert_eq!(session.store().evaluation(), "Position is equal (0.0)");
    assert_eq!(session.store().suggestion(), "Suggested move: d7d5");

    let received: Vec<GameEvent> = events.try_iter().collect();
    assert!(received.contains(&GameEvent::MoveApplied {
        from: "e2".to_string(),
        to: "e4".to_string(),
    }));
    assert!(received.contains(&GameEvent::BoardReplaced));
}

#[tokio::test]
async fn test_rejected_move_leaves_state_byte_identical() {
    let stub = Arc::new(StubService::default().with_move(Err(illegal("Illegal move (Check rules)"))));
    let mut session = GameSession::new(stub);
    let events = session.events().subscribe();

    let grid_before = notation::encode_board(session.store().grid());
    let history_before = session.store().move_history().to_vec();
    let status_before = session.store().status_text().to_string();

    let err = play(&mut session, "e2", "e5").await.unwrap_err();
    assert!(matches!(err, SyncError::IllegalMove { .. }));

    assert_eq!(notation::encode_board(session.store().grid()), grid_before);
    assert_eq!(session.store().move_history(), history_before);
    assert_eq!(session.store().status_text(), status_before);

    let received: Vec<GameEvent> = events.try_iter().collect();
    assert!(received.contains(&GameEvent::MoveRejected {
        reason: "Illegal move (Check rules)".to_string(),
    }));

    // The gesture is terminal; a new drag is accepted afterwards
    assert!(session.begin_drag(sq("e2")));
}

#[tokio::test]
async fn test_bare_verdict_applies_move_locally() {
    let stub = Arc::new(
        StubService::default()
            .with_move(Ok(MoveAccepted::default()))
            .with_history(Ok(HistoryResponse {
                history: vec!["e2e4".to_string()],
            })),
    );
    let mut session = GameSession::new(stub);
    let pawn = session.store().grid().piece_at(sq("e2")).unwrap();

    play(&mut session, "e2", "e4").await.unwrap();

    assert!(session.store().grid().piece_at(sq("e2")).is_none());
    assert_eq!(session.store().grid().piece_at(sq("e4")), Some(pawn));
    // History came from the follow-up endpoint
    assert_eq!(session.store().move_history(), ["e2e4".to_string()]);
}

#[tokio::test]
async fn test_follow_up_failure_does_not_roll_back_move() {
    let stub = Arc::new(
        StubService::default()
            .with_move(Ok(MoveAccepted {
                fen: Some(AFTER_E4.to_string()),
                move_history: Some(vec!["e4".to_string()]),
            }))
            .with_endgame(Err(SyncError::RequestFailed {
                message: "endgame endpoint down".to_string(),
            })),
    );
    let mut session = GameSession::new(stub);
    let events = session.events().subscribe();

    play(&mut session, "e2", "e4").await.unwrap();

    assert_eq!(notation::encode_board(session.store().grid()), AFTER_E4);

    let received: Vec<GameEvent> = events.try_iter().collect();
    assert!(received.iter().any(|event| matches!(
        event,
        GameEvent::FollowUpFailed { endpoint, .. } if endpoint == "endgame"
    )));
}

#[tokio::test]
async fn test_promotion_heuristic_defaults_to_queen() {
    let stub = Arc::new(
        StubService::default()
            .with_state(Ok(StateResponse {
                fen: Some("4k3/4P3/8/8/8/8/8/4K3".to_string()),
                turn: Some("white".to_string()),
                move_history: Vec::new(),
            }))
            .with_move(Ok(MoveAccepted {
                fen: Some("4Q3/8/8/8/8/8/8/4K3".to_string()),
                move_history: None,
            })),
    );
    let mut session = GameSession::new(stub.clone());

    session.resume().await.unwrap();
    play(&mut session, "e7", "e8").await.unwrap();

    let request = stub.last_move().expect("move was submitted");
    assert_eq!(request.from_square, "e7");
    assert_eq!(request.to_square, "e8");
    assert_eq!(request.promotion.as_deref(), Some("q"));
}

#[tokio::test]
async fn test_ordinary_move_carries_no_promotion() {
    let stub = Arc::new(StubService::default());
    let mut session = GameSession::new(stub.clone());

    play(&mut session, "e2", "e4").await.unwrap();

    let request = stub.last_move().expect("move was submitted");
    assert!(request.promotion.is_none());
}

#[tokio::test]
async fn test_drop_without_drag_submits_nothing() {
    let stub = Arc::new(StubService::default());
    let mut session = GameSession::new(stub.clone());

    session.drop_on(sq("e4")).await.unwrap();

    assert!(stub.last_move().is_none());
}

// ============================================================================
// Session Lifecycle
// ============================================================================

#[tokio::test]
async fn test_reset_falls_back_to_start_position() {
    let stub = Arc::new(
        StubService::default()
            .with_state(Ok(StateResponse {
                fen: Some(AFTER_E4.to_string()),
                turn: Some("black".to_string()),
                move_history: vec!["e2e4".to_string()],
            }))
            // FastAPI dialect: reset acknowledges without an encoding
            .with_reset(Ok(ResetResponse {
                message: Some("Board reset".to_string()),
                ..ResetResponse::default()
            })),
    );
    let mut session = GameSession::new(stub);

    session.resume().await.unwrap();
    assert!(!session.store().move_history().is_empty());

    session.reset().await.unwrap();

    assert_eq!(
        notation::encode_board(session.store().grid()),
        notation::START_POSITION
    );
    assert!(session.store().move_history().is_empty());
    assert_eq!(session.store().status_text(), "Game is ongoing.");
}

#[tokio::test]
async fn test_reset_uses_nested_state_encoding() {
    let stub = Arc::new(StubService::default().with_reset(Ok(ResetResponse {
        state: Some(StateBody {
            fen: Some(AFTER_E4.to_string()),
            move_history: Vec::new(),
        }),
        ..ResetResponse::default()
    })));
    let mut session = GameSession::new(stub);

    session.reset().await.unwrap();

    assert_eq!(notation::encode_board(session.store().grid()), AFTER_E4);
}

#[tokio::test]
async fn test_failed_reset_leaves_state_unchanged() {
    let stub = Arc::new(StubService::default().with_reset(Err(SyncError::RequestFailed {
        message: "connection refused".to_string(),
    })));
    let mut session = GameSession::new(stub);
    let before = notation::encode_board(session.store().grid());

    let err = session.reset().await.unwrap_err();
    assert!(matches!(err, SyncError::RequestFailed { .. }));
    assert_eq!(notation::encode_board(session.store().grid()), before);
}

#[tokio::test]
async fn test_resume_applies_state_and_history() {
    let stub = Arc::new(StubService::default().with_state(Ok(StateResponse {
        fen: Some(AFTER_E4.to_string()),
        turn: Some("black".to_string()),
        move_history: vec!["e2e4".to_string()],
    })));
    let mut session = GameSession::new(stub);
    let events = session.events().subscribe();

    session.resume().await.unwrap();

    assert_eq!(notation::encode_board(session.store().grid()), AFTER_E4);
    assert_eq!(session.store().move_history(), ["e2e4".to_string()]);

    let received: Vec<GameEvent> = events.try_iter().collect();
    assert!(received.contains(&GameEvent::SessionResumed));
}

#[tokio::test]
async fn test_resume_without_encoding_is_an_error() {
    let stub = Arc::new(StubService::default().with_state(Ok(StateResponse::default())));
    let mut session = GameSession::new(stub);
    let before = notation::encode_board(session.store().grid());

    let err = session.resume().await.unwrap_err();
    assert!(matches!(err, SyncError::RequestFailed { .. }));
    assert_eq!(notation::encode_board(session.store().grid()), before);
}

#[tokio::test]
async fn test_undo_reconciles_from_returned_state() {
    let stub = Arc::new(StubService::default().with_undo(Ok(ResetResponse {
        state: Some(StateBody {
            fen: Some(notation::START_POSITION.to_string()),
            move_history: Vec::new(),
        }),
        ..ResetResponse::default()
    })));
    let mut session = GameSession::new(stub);

    session.undo().await.unwrap();

    assert_eq!(
        notation::encode_board(session.store().grid()),
        notation::START_POSITION
    );
}

#[tokio::test]
async fn test_undo_with_nothing_to_undo_is_an_error() {
    let stub = Arc::new(StubService::default().with_undo(Ok(ResetResponse {
        error: Some("No moves to undo".to_string()),
        ..ResetResponse::default()
    })));
    let mut session = GameSession::new(stub);

    let err = session.undo().await.unwrap_err();
    assert!(matches!(
        err,
        SyncError::RequestFailed { message } if message == "No moves to undo"
    ));
}
