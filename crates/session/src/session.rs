//! Game session - the caller-owned record the engine reports into
//!
//! A [`GameSession`] owns the grid, the score and the animation in progress,
//! and drives one push at a time:
//!
//! 1. Reject the push while a previous move is still animating.
//! 2. Apply the move. If the grid changed, spawn a tile, append its `Appear`
//!    animation and start the animation timer.
//! 3. If nothing changed, check whether any push could still change the grid;
//!    if not, the game is over.
//!
//! Time only advances through [`GameSession::tick`], so the session is as
//! deterministic as its random source.

use tracing::{debug, info};

use crate::core::{
    apply_move, ease_between, grid_changed, is_terminal, new_game, spawn_random_tile,
    RandomSource, SimpleRng, SpawnedTile,
};
use crate::store::{GameState, StateStore, StoreError};
use crate::types::{
    Animation, Direction, GameError, Grid, Position, ANIMATION_DURATION_MS, DEFAULT_GRID_SIZE,
    EASE_EXPONENT,
};

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub grid_size: usize,
    /// Length of a move animation; 0 disables animation
    pub animation_ms: u32,
    /// Exponent for [`crate::core::ease`]
    pub ease_exponent: f64,
    pub seed: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            animation_ms: ANIMATION_DURATION_MS,
            ease_exponent: EASE_EXPONENT,
            seed: 1,
        }
    }
}

/// What happened to a push
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// A previous move is still animating; the push was ignored
    Busy,
    /// The grid did not change, but other pushes still can
    NoChange,
    /// The grid changed and a tile was spawned
    Moved {
        score_delta: u32,
        spawned: SpawnedTile,
    },
    /// No push can change the grid
    GameOver,
}

/// Interpolated tile position for the current animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileFrame {
    pub row: f64,
    pub column: f64,
    pub value: u32,
}

#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    config: SessionConfig,
    rng: R,
    grid: Grid,
    previous_grid: Option<Grid>,
    score: u32,
    previous_score: Option<u32>,
    best_score: u32,
    animations: Vec<Animation>,
    animation_elapsed_ms: u32,
    animating: bool,
    game_over: bool,
    /// Accepted pushes since the last restart
    moves: u32,
}

impl GameSession<SimpleRng> {
    /// Start a new game seeded from `config.seed`
    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        Self::with_rng(config, SimpleRng::new(config.seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Start a new game with a caller-provided random source
    pub fn with_rng(config: SessionConfig, mut rng: R) -> Result<Self, GameError> {
        let grid = new_game(config.grid_size, &mut rng)?;
        Ok(Self::assemble(config, rng, grid))
    }

    /// Resume a saved game
    pub fn from_state(
        mut config: SessionConfig,
        rng: R,
        state: GameState,
    ) -> Result<Self, GameError> {
        state.validate()?;
        config.grid_size = state.grid.size();
        let mut session = Self::assemble(config, rng, state.grid);
        session.previous_grid = state.previous_grid;
        session.score = state.score;
        session.previous_score = state.previous_score;
        session.best_score = state.score;
        Ok(session)
    }

    /// Resume the stored game if there is one, otherwise start fresh
    pub fn load(
        config: SessionConfig,
        rng: R,
        store: &impl StateStore,
    ) -> Result<Self, StoreError> {
        let mut session = match store.load()? {
            Some(state) => {
                debug!(score = state.score, "resuming stored game");
                Self::from_state(config, rng, state)?
            }
            None => Self::with_rng(config, rng)?,
        };
        session.best_score = session.best_score.max(store.best_score()?);
        Ok(session)
    }

    fn assemble(config: SessionConfig, rng: R, grid: Grid) -> Self {
        Self {
            config,
            rng,
            grid,
            previous_grid: None,
            score: 0,
            previous_score: None,
            best_score: 0,
            animations: Vec::new(),
            animation_elapsed_ms: 0,
            animating: false,
            game_over: false,
            moves: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn previous_grid(&self) -> Option<&Grid> {
        self.previous_grid.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Animations of the last accepted push (empty once it finished)
    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    /// Snapshot for storage
    pub fn state(&self) -> GameState {
        GameState {
            grid: self.grid.clone(),
            previous_grid: self.previous_grid.clone(),
            score: self.score,
            previous_score: self.previous_score,
        }
    }

    /// Write the current game and best score to a store
    pub fn save(&self, store: &mut impl StateStore) -> Result<(), StoreError> {
        store.save(&self.state())?;
        if self.best_score > store.best_score()? {
            store.set_best_score(self.best_score)?;
        }
        Ok(())
    }

    /// Apply one push
    pub fn push(&mut self, direction: Direction) -> Result<PushOutcome, GameError> {
        if self.animating {
            return Ok(PushOutcome::Busy);
        }

        let result = apply_move(&self.grid, direction);
        if !grid_changed(&self.grid, &result.grid) {
            if is_terminal(&self.grid) {
                if !self.game_over {
                    info!(score = self.score, moves = self.moves, "game over");
                }
                self.game_over = true;
                return Ok(PushOutcome::GameOver);
            }
            return Ok(PushOutcome::NoChange);
        }

        let spawn = spawn_random_tile(&result.grid, &mut self.rng)?;

        self.previous_grid = Some(std::mem::replace(&mut self.grid, spawn.grid));
        self.previous_score = Some(self.score);
        self.score = self.score.saturating_add(result.score_delta);
        self.best_score = self.best_score.max(self.score);
        self.moves += 1;

        let mut animations = result.animations;
        animations.push(spawn.tile.animation());
        self.animations = animations;
        self.animation_elapsed_ms = 0;
        self.animating = self.config.animation_ms > 0;
        if !self.animating {
            self.animations.clear();
        }

        debug!(
            direction = direction.as_str(),
            score_delta = result.score_delta,
            score = self.score,
            spawned = %spawn.tile.position,
            "move accepted"
        );

        Ok(PushOutcome::Moved {
            score_delta: result.score_delta,
            spawned: spawn.tile,
        })
    }

    /// Advance the animation clock. Returns true when the animation finishes
    /// during this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.animating {
            return false;
        }
        self.animation_elapsed_ms = self.animation_elapsed_ms.saturating_add(elapsed_ms);
        if self.animation_elapsed_ms >= self.config.animation_ms {
            self.finish_animation();
            return true;
        }
        false
    }

    /// Skip to the end of the running animation
    pub fn finish_animation(&mut self) {
        self.animating = false;
        self.animation_elapsed_ms = 0;
        self.animations.clear();
    }

    /// Linear progress of the running animation in `[0, 1]` (1 when idle)
    pub fn animation_progress(&self) -> f64 {
        if !self.animating || self.config.animation_ms == 0 {
            return 1.0;
        }
        (self.animation_elapsed_ms as f64 / self.config.animation_ms as f64).min(1.0)
    }

    /// Eased positions of the moving tiles for the current frame
    pub fn animation_frames(&self) -> Vec<TileFrame> {
        let t = self.animation_progress();
        self.animations
            .iter()
            .filter_map(|anim| match *anim {
                Animation::Move { from, to, value } => {
                    let (row, column) = ease_between(from, to, t, self.config.ease_exponent);
                    Some(TileFrame { row, column, value })
                }
                Animation::Appear { .. } => None,
            })
            .collect()
    }

    /// Whether the tile drawn at `pos` on the previous grid is currently
    /// travelling away, so the renderer should draw the cell empty
    pub fn is_moving_from(&self, pos: Position) -> bool {
        self.animations
            .iter()
            .any(|anim| matches!(anim, Animation::Move { from, .. } if *from == pos))
    }

    /// Restore the grid and score from before the last accepted push.
    ///
    /// Only one level of undo exists; returns false when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.previous_grid.take() else {
            return false;
        };
        self.grid = previous;
        if let Some(score) = self.previous_score.take() {
            self.score = score;
        }
        self.finish_animation();
        self.game_over = false;
        debug!(score = self.score, "undo");
        true
    }

    /// Start over with a fresh board. The best score is kept.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.grid = new_game(self.config.grid_size, &mut self.rng)?;
        self.previous_grid = None;
        self.score = 0;
        self.previous_score = None;
        self.finish_animation();
        self.game_over = false;
        self.moves = 0;
        info!(size = self.config.grid_size, "new game");
        Ok(())
    }
}
