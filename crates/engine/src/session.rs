//! Session module - the explicit per-step game driver
//!
//! A session owns the field, the current and next figures, the RNG and the
//! score. Callers feed it player intents and elapsed time; it answers with a
//! [`StepOutcome`] describing what happened during that step.
//!
//! Per step:
//! 1. Intents are applied in a fixed order (left, right, drop, rotate), each
//!    only if the figure is allowed to make that move.
//! 2. Gravity moves the figure down one row. A figure that cannot move down is
//!    merged into the field, full lines are removed, and the next figure is
//!    promoted to the spawn position.
//! 3. A promoted figure that already collides ends the game; the session keeps
//!    its best score and restarts on a fresh field.

use arrayvec::ArrayVec;
use log::{debug, info, trace};

use crate::config::{ConfigError, SessionConfig};
use crate::core::{Field, Figure, Result, SimpleRng};
use crate::scoring::{calculate_level, calculate_line_score, get_drop_interval_ms};
use crate::types::{Intent, POINTS_PER_LINE, SPAWN_X, SPAWN_Y};

/// Maximum number of intents considered per step
pub const MAX_INTENTS_PER_STEP: usize = 8;

/// Fixed-capacity intent list
pub type Intents = ArrayVec<Intent, MAX_INTENTS_PER_STEP>;

/// What happened during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Lines removed during this step
    pub lines_cleared: usize,
    /// Whether a figure was merged into the field
    pub locked: bool,
    /// Whether the game ended (the session has already restarted)
    pub game_over: bool,
}

impl StepOutcome {
    fn absorb(&mut self, other: StepOutcome) {
        self.lines_cleared += other.lines_cleared;
        self.locked |= other.locked;
        self.game_over |= other.game_over;
    }
}

/// Load a uniformly random catalog piece and orientation into `figure`
fn build_random(rng: &mut SimpleRng, figure: &mut Figure) {
    let (id, rotations) = rng.next_piece();
    figure.build_new(id, rotations);
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    field: Field,
    current: Figure,
    next: Figure,
    rng: SimpleRng,
    score: u32,
    best_score: u32,
    level: u32,
    lines: u32,
    drop_timer_ms: u32,
}

impl Session {
    /// Create a session on an empty field with two random figures
    pub fn new(config: SessionConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        let mut session = Self {
            field: Field::new(config.width, config.height),
            current: Figure::default(),
            next: Figure::default(),
            rng: SimpleRng::new(config.seed),
            score: 0,
            best_score: 0,
            level: calculate_level(0),
            lines: 0,
            drop_timer_ms: 0,
            config,
        };
        session.spawn_fresh_figures();
        Ok(session)
    }

    /// Assemble a session from already validated parts
    pub(crate) fn from_parts(
        config: SessionConfig,
        field: Field,
        current: Figure,
        next: Figure,
        score: u32,
        best_score: u32,
    ) -> Self {
        Self {
            rng: SimpleRng::new(config.seed),
            config,
            field,
            current,
            next,
            score,
            best_score: best_score.max(score),
            level: calculate_level(score),
            lines: score / POINTS_PER_LINE,
            drop_timer_ms: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn current(&self) -> &Figure {
        &self.current
    }

    pub fn next(&self) -> &Figure {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Gravity interval for the current level
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(
            self.level,
            self.config.start_interval_ms,
            self.config.interval_step_ms,
        )
    }

    fn spawn_fresh_figures(&mut self) {
        build_random(&mut self.rng, &mut self.current);
        self.current.x = SPAWN_X;
        self.current.y = SPAWN_Y;
        build_random(&mut self.rng, &mut self.next);
    }

    /// Start over on an empty field, keeping the best score
    pub fn restart(&mut self) {
        self.best_score = self.best_score.max(self.score);
        self.score = 0;
        self.lines = 0;
        self.level = calculate_level(0);
        self.drop_timer_ms = 0;
        self.field.reset();
        self.spawn_fresh_figures();
    }

    /// Apply a set of intents and return the ones that took effect
    ///
    /// Each kind of intent is applied at most once, in the order left, right,
    /// soft drop, hard drop, rotate, regardless of the order given.
    pub fn apply_intents(&mut self, intents: &[Intent]) -> Intents {
        const ORDER: [Intent; 5] = [
            Intent::MoveLeft,
            Intent::MoveRight,
            Intent::SoftDrop,
            Intent::HardDrop,
            Intent::Rotate,
        ];

        let mut applied = Intents::new();
        for intent in ORDER.into_iter().filter(|i| intents.contains(i)) {
            let moved = match intent {
                Intent::MoveLeft => self.current.move_left_if_allowed(&self.field),
                Intent::MoveRight => self.current.move_right_if_allowed(&self.field),
                Intent::SoftDrop => self.current.move_down_if_allowed(&self.field),
                Intent::HardDrop => self.current.drop_to_floor(&self.field) > 0,
                Intent::Rotate => self.current.rotate_if_allowed(&self.field),
            };
            if moved {
                applied.push(intent);
            } else {
                trace!("{} declined at ({}, {})", intent.as_str(), self.current.x, self.current.y);
            }
        }
        applied
    }

    /// Advance gravity by one row, locking the figure if it cannot fall
    pub fn gravity_step(&mut self) -> Result<StepOutcome> {
        if self.field.check_collision(&self.current)? {
            return Ok(self.game_over());
        }
        if self.current.move_down_if_allowed(&self.field) {
            return Ok(StepOutcome::default());
        }
        self.lock_current()
    }

    /// Apply intents, then run exactly one gravity step
    pub fn step(&mut self, intents: &[Intent]) -> Result<StepOutcome> {
        self.apply_intents(intents);
        self.gravity_step()
    }

    /// Apply intents, then run as many gravity steps as `elapsed_ms` allows
    pub fn tick(&mut self, elapsed_ms: u32, intents: &[Intent]) -> Result<StepOutcome> {
        self.apply_intents(intents);

        let mut outcome = StepOutcome::default();
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);

        while self.drop_timer_ms >= self.drop_interval_ms() {
            self.drop_timer_ms -= self.drop_interval_ms();
            outcome.absorb(self.gravity_step()?);
            if outcome.game_over {
                break;
            }
        }
        Ok(outcome)
    }

    fn lock_current(&mut self) -> Result<StepOutcome> {
        self.field.merge(&self.current)?;
        let cleared = self.field.remove_full_lines();
        self.update_stats(cleared);

        if cleared > 0 {
            debug!(
                "cleared {} line(s): score={} level={}",
                cleared, self.score, self.level
            );
        }

        // Promote next to current
        self.current.set(self.next.shape().clone());
        self.current.x = SPAWN_X;
        self.current.y = SPAWN_Y;
        build_random(&mut self.rng, &mut self.next);
        debug!("spawned {}x{} figure", self.current.width(), self.current.height());

        let mut outcome = StepOutcome {
            lines_cleared: cleared,
            locked: true,
            game_over: false,
        };
        if self.field.check_collision(&self.current)? {
            outcome.absorb(self.game_over());
        }
        Ok(outcome)
    }

    fn game_over(&mut self) -> StepOutcome {
        info!(
            "game over: score={} lines={} best={}",
            self.score,
            self.lines,
            self.best_score.max(self.score)
        );
        self.restart();
        StepOutcome {
            game_over: true,
            ..StepOutcome::default()
        }
    }

    fn update_stats(&mut self, cleared: usize) {
        self.score = self.score.saturating_add(calculate_line_score(cleared));
        self.lines = self.lines.saturating_add(cleared as u32);
        self.level = calculate_level(self.score);
        self.best_score = self.best_score.max(self.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{catalog, Shape};
    use crate::types::PieceKind;

    fn session_with(field: Field, current: Figure, next: Figure) -> Session {
        Session::from_parts(SessionConfig::default(), field, current, next, 0, 0)
    }

    #[test]
    fn new_session_spawns_at_spawn_point() {
        let session = Session::new(SessionConfig::default()).unwrap();
        assert_eq!((session.current().x, session.current().y), (SPAWN_X, SPAWN_Y));
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
        assert!(session.field().full_lines().is_empty());
    }

    #[test]
    fn same_seed_same_figures() {
        let a = Session::new(SessionConfig::default().with_seed(9)).unwrap();
        let b = Session::new(SessionConfig::default().with_seed(9)).unwrap();
        assert_eq!(a.current(), b.current());
        assert_eq!(a.next(), b.next());
    }

    #[test]
    fn intents_apply_in_fixed_order() {
        let field = Field::new(10, 20);
        let current = Figure::at(catalog::shape(PieceKind::O), 3, 0);
        let mut session = session_with(field, current.clone(), current);

        let applied = session.apply_intents(&[Intent::Rotate, Intent::MoveRight, Intent::MoveLeft]);
        assert_eq!(
            applied.as_slice(),
            &[Intent::MoveLeft, Intent::MoveRight, Intent::Rotate]
        );
        assert_eq!(session.current().x, 3);
    }

    #[test]
    fn duplicate_intents_apply_once() {
        let field = Field::new(10, 20);
        let current = Figure::at(catalog::shape(PieceKind::O), 3, 0);
        let mut session = session_with(field, current.clone(), current);

        session.apply_intents(&[Intent::MoveLeft, Intent::MoveLeft, Intent::MoveLeft]);
        assert_eq!(session.current().x, 2);
    }

    #[test]
    fn declined_intents_are_not_reported() {
        let field = Field::new(10, 20);
        let current = Figure::at(catalog::shape(PieceKind::O), 0, 0);
        let mut session = session_with(field, current.clone(), current);

        assert!(session.apply_intents(&[Intent::MoveLeft]).is_empty());
    }

    #[test]
    fn tick_waits_for_interval() {
        let field = Field::new(10, 20);
        let current = Figure::at(catalog::shape(PieceKind::O), 3, 0);
        let mut session = session_with(field, current.clone(), current);
        let interval = session.drop_interval_ms();

        session.tick(interval - 1, &[]).unwrap();
        assert_eq!(session.current().y, 0);

        session.tick(1, &[]).unwrap();
        assert_eq!(session.current().y, 1);

        session.tick(interval * 3, &[]).unwrap();
        assert_eq!(session.current().y, 4);
    }

    #[test]
    fn promoted_figure_takes_next_shape() {
        let field = Field::new(10, 20);
        let current = Figure::at(catalog::shape(PieceKind::O), 3, 18);
        let next = Figure::new(Shape::from_bits(&[[1u8, 1, 1]]).unwrap());
        let mut session = session_with(field, current, next.clone());

        let outcome = session.step(&[]).unwrap();
        assert!(outcome.locked);
        assert_eq!(session.current().shape(), next.shape());
        assert_eq!((session.current().x, session.current().y), (SPAWN_X, SPAWN_Y));
    }
}
