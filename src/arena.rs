// THEORY:
// The `arena` module ties the recognition engine to the game. It has two
// halves:
//
// 1.  **MatchController** — the synchronous round lifecycle. A round is armed,
//     counts down against wall-clock time (polled once per tick, never
//     event-driven), and locks in exactly one sample of the tracker's
//     debounced gesture when the countdown expires. The opponent engine is
//     consulted at that same instant, after the session's player history is
//     already up to date, and the arbiter records the round.
//
// 2.  **ArenaService** — the concurrency boundary. Session state is long-lived
//     and shared: a frame loop advances rounds while a control plane reads
//     status or issues reset/difficulty commands. Instead of sprinkling locks,
//     a single actor task owns the controller and drains a command channel;
//     one command is one logical operation, so every read and write is
//     serialized by construction. Handles are cheap clones of the sender.

use crate::core_modules::session::{GameSession, GameStatus, RoundRecord};
use crate::core_modules::strategy::OpponentEngine;
use crate::pipeline::{FrameReport, GesturePipeline, LandmarkFrame, PipelineConfig};
use serde::Serialize;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot};

/// Countdown value a newly armed round starts from.
const COUNTDOWN_START: i32 = 3;
/// Wall-clock time between countdown steps.
const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);
/// Command-channel depth for the arena actor.
const COMMAND_BUFFER: usize = 32;

/// Where the current round stands in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchPhase {
    /// Waiting for a start command; frames are classified but nothing counts.
    Idle,
    /// Armed: the countdown is running and will lock in a choice at expiry.
    Countdown,
    /// The round locked in; its record is on the session until the next start.
    Revealed,
}

/// Everything a rendering collaborator needs about one processed tick.
#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    /// The frame's classification and the current debounced gesture.
    pub report: FrameReport,
    pub phase: MatchPhase,
    /// Remaining countdown steps, clamped at zero for display.
    pub countdown: i32,
    /// Present exactly once: on the tick whose countdown expiry locked the
    /// round in.
    pub locked_round: Option<RoundRecord>,
}

/// Owns the pipeline, the session, and the opponent, and advances one round
/// at a time. Synchronous; the service below serializes access to it.
pub struct MatchController {
    pipeline: GesturePipeline,
    session: GameSession,
    opponent: OpponentEngine,
    phase: MatchPhase,
    countdown: i32,
    last_step: Instant,
}

impl MatchController {
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_opponent(config, OpponentEngine::new())
    }

    /// Injects a (typically seeded) opponent engine, keeping all randomness
    /// traceable in tests.
    pub fn with_opponent(config: PipelineConfig, opponent: OpponentEngine) -> Self {
        Self {
            pipeline: GesturePipeline::new(config),
            session: GameSession::new(),
            opponent,
            phase: MatchPhase::Idle,
            countdown: COUNTDOWN_START,
            last_step: Instant::now(),
        }
    }

    /// Arms the next round. Rejected once the session is complete — an
    /// explicit reset is required to play again.
    pub fn start_round(&mut self, now: Instant) -> bool {
        if self.session.completed() {
            log::debug!("start rejected, session already complete");
            return false;
        }
        self.phase = MatchPhase::Countdown;
        self.countdown = COUNTDOWN_START;
        self.last_step = now;
        log::debug!("round armed, countdown {}", self.countdown);
        true
    }

    /// Processes one tick: classify the frame (or its absence), advance the
    /// countdown if armed, and lock the round in when it expires.
    pub fn tick(&mut self, frame: Option<&LandmarkFrame>, now: Instant) -> TickReport {
        let report = match frame {
            Some(frame) => self.pipeline.observe_frame(frame),
            None => self.pipeline.observe_absence(),
        };

        let mut locked_round = None;
        if self.phase == MatchPhase::Countdown {
            if now.duration_since(self.last_step) >= COUNTDOWN_INTERVAL {
                self.countdown -= 1;
                self.last_step = now;
            }
            if self.countdown < 0 {
                locked_round = self.lock_in();
            }
        }

        TickReport {
            report,
            phase: self.phase,
            countdown: self.countdown.max(0),
            locked_round,
        }
    }

    /// Samples the debounced gesture once, picks the opponent's answer, and
    /// records the round.
    fn lock_in(&mut self) -> Option<RoundRecord> {
        let user_choice = self.pipeline.stable_gesture();
        let computer_choice = self
            .opponent
            .select(self.session.difficulty(), self.session.player_history());
        let record = self.session.play_round(user_choice, Some(computer_choice));
        self.phase = MatchPhase::Revealed;
        if let Some(record) = &record {
            log::info!(
                "round {} locked: {:?} vs {:?} -> {:?}",
                record.round,
                record.user_choice,
                record.computer_choice,
                record.outcome
            );
        }
        record
    }

    pub fn set_difficulty(&mut self, level: &str) -> bool {
        self.session.set_difficulty(level)
    }

    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Discards the whole match: session, player history, tracker state, and
    /// any in-progress countdown.
    pub fn reset(&mut self, now: Instant) {
        self.session.reset();
        self.pipeline.reset();
        self.phase = MatchPhase::Idle;
        self.countdown = COUNTDOWN_START;
        self.last_step = now;
    }
}

/// Message type for the arena actor.
enum ArenaCommand {
    Tick(Option<LandmarkFrame>, oneshot::Sender<TickReport>),
    StartRound(oneshot::Sender<bool>),
    SetDifficulty(String, oneshot::Sender<bool>),
    Status(oneshot::Sender<GameStatus>),
    Reset(oneshot::Sender<()>),
}

/// A cloneable handle to the arena actor. Every method is one serialized
/// logical operation on the shared match state.
#[derive(Clone)]
pub struct ArenaHandle {
    commands: mpsc::Sender<ArenaCommand>,
}

/// Spawns the actor task that owns a `MatchController`.
pub struct ArenaService;

impl ArenaService {
    pub fn spawn(config: PipelineConfig) -> ArenaHandle {
        Self::spawn_with_controller(MatchController::new(config))
    }

    pub fn spawn_with_controller(mut controller: MatchController) -> ArenaHandle {
        let (commands, mut receiver) = mpsc::channel::<ArenaCommand>(COMMAND_BUFFER);

        tokio::spawn(async move {
            while let Some(command) = receiver.recv().await {
                match command {
                    ArenaCommand::Tick(frame, reply) => {
                        let report = controller.tick(frame.as_ref(), Instant::now());
                        let _ = reply.send(report);
                    }
                    ArenaCommand::StartRound(reply) => {
                        let _ = reply.send(controller.start_round(Instant::now()));
                    }
                    ArenaCommand::SetDifficulty(level, reply) => {
                        let _ = reply.send(controller.set_difficulty(&level));
                    }
                    ArenaCommand::Status(reply) => {
                        let _ = reply.send(controller.status());
                    }
                    ArenaCommand::Reset(reply) => {
                        controller.reset(Instant::now());
                        let _ = reply.send(());
                    }
                }
            }
        });

        ArenaHandle { commands }
    }
}

impl ArenaHandle {
    pub async fn tick(&self, frame: Option<LandmarkFrame>) -> Result<TickReport, &'static str> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(ArenaCommand::Tick(frame, reply))
            .await
            .map_err(|_| "failed to send command to arena service")?;
        response
            .await
            .map_err(|_| "failed to receive reply from arena service")
    }

    pub async fn start_round(&self) -> Result<bool, &'static str> {
        self.request(ArenaCommand::StartRound).await
    }

    pub async fn set_difficulty(&self, level: &str) -> Result<bool, &'static str> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(ArenaCommand::SetDifficulty(level.to_owned(), reply))
            .await
            .map_err(|_| "failed to send command to arena service")?;
        response
            .await
            .map_err(|_| "failed to receive reply from arena service")
    }

    pub async fn status(&self) -> Result<GameStatus, &'static str> {
        self.request(ArenaCommand::Status).await
    }

    pub async fn reset(&self) -> Result<(), &'static str> {
        self.request(ArenaCommand::Reset).await
    }

    async fn request<T>(
        &self,
        command: fn(oneshot::Sender<T>) -> ArenaCommand,
    ) -> Result<T, &'static str> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .await
            .map_err(|_| "failed to send command to arena service")?;
        response
            .await
            .map_err(|_| "failed to receive reply from arena service")
    }
}
