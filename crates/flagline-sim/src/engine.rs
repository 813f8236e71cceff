//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `FrameSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::{HashSet, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use flagline_core::commands::PlayerCommand;
use flagline_core::components::Tower;
use flagline_core::constants::{DT, TOWER_PICK_RADIUS};
use flagline_core::enums::{GamePhase, PlacementRejection};
use flagline_core::events::GameEvent;
use flagline_core::factions::FactionCatalog;
use flagline_core::path::PathGeometry;
use flagline_core::state::FrameSnapshot;
use flagline_core::types::{Position, SimTime};
use flagline_procgen::generate_roster;

use crate::config::{ConfigError, SimConfig};
use crate::economy::Economy;
use crate::session::{SavedTower, SessionError, SessionSnapshot, SESSION_VERSION};
use crate::systems;
use crate::systems::wave_spawner::WaveState;
use crate::world_setup;

/// Upper bound for `SetTimeScale`.
const MAX_TIME_SCALE: f64 = 4.0;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    catalog: FactionCatalog,
    path: PathGeometry,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    economy: Economy,
    wave: WaveState,
    /// Factions drawn into any roster this session.
    seen_factions: HashSet<String>,
    next_spawn_seq: u64,
    next_placement_seq: u64,
}

impl SimulationEngine {
    /// Create a new simulation engine with the built-in faction catalog.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_catalog(config, FactionCatalog::builtin())
    }

    /// Create a new simulation engine over a custom faction catalog.
    pub fn with_catalog(config: SimConfig, catalog: FactionCatalog) -> Result<Self, ConfigError> {
        config.validate()?;
        let path = config.path_geometry()?;
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            economy: Economy::new(config.starting_currency, config.starting_lives),
            wave: WaveState::default(),
            seen_factions: HashSet::new(),
            next_spawn_seq: 0,
            next_placement_seq: 0,
            catalog,
            path,
            config,
        })
    }

    /// Rebuild an engine from a saved session with the built-in catalog.
    pub fn restore(config: SimConfig, session: &SessionSnapshot) -> Result<Self, SessionError> {
        Self::restore_with_catalog(config, FactionCatalog::builtin(), session)
    }

    /// Rebuild an engine from a saved session.
    ///
    /// The session's seed replaces the configured one. Towers that now lie on
    /// the path are skipped. The engine starts Active with an idle wave.
    pub fn restore_with_catalog(
        config: SimConfig,
        catalog: FactionCatalog,
        session: &SessionSnapshot,
    ) -> Result<Self, SessionError> {
        if let Err(err) = session.validate() {
            warn!(error = %err, "rejecting session restore");
            return Err(err);
        }

        let config = SimConfig {
            seed: session.seed,
            ..config
        };
        let mut engine = Self::with_catalog(config, catalog)?;

        engine.economy.currency = session.currency;
        engine.economy.lives = session.lives;
        engine.economy.upgrades = session.upgrades;
        engine.economy.apply_upgrades();
        engine.economy.owned_factions = session.owned_factions.iter().cloned().collect();
        engine.wave.index = session.wave_index;

        for saved in &session.towers {
            let position = Position::new(saved.x, saved.y);
            if engine.path.is_on_path(position, engine.config.placement_tolerance) {
                warn!(faction = %saved.faction_id, x = saved.x, y = saved.y, "skipping saved tower on path");
                continue;
            }
            engine.spawn_tower(&saved.faction_id, position, saved.placed_at_wave);
        }

        engine.phase = GamePhase::Active;
        info!(
            wave = session.wave_index,
            towers = engine.tower_count(),
            "session restored"
        );
        Ok(engine)
    }

    /// Capture the state needed to resume later.
    pub fn save_session(&self) -> SessionSnapshot {
        let mut towers: Vec<(u64, SavedTower)> = self
            .world
            .query::<(&Tower, &Position)>()
            .iter()
            .map(|(_, (tower, pos))| {
                (
                    tower.placement_seq,
                    SavedTower {
                        x: pos.x,
                        y: pos.y,
                        faction_id: tower.faction_id.clone(),
                        placed_at_wave: tower.placed_at_wave,
                    },
                )
            })
            .collect();
        towers.sort_by_key(|(seq, _)| *seq);

        SessionSnapshot {
            version: SESSION_VERSION,
            seed: self.config.seed,
            wave_index: self.wave.index,
            currency: self.economy.currency,
            lives: self.economy.lives,
            towers: towers.into_iter().map(|(_, t)| t).collect(),
            owned_factions: self.economy.owned_factions.iter().cloned().collect(),
            upgrades: self.economy.upgrades,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = DT * self.time_scale;
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.wave,
            &self.economy,
            events,
        )
    }

    /// Place a tower at `(x, y)` for `cost`.
    ///
    /// Returns `false` and emits `PlacementRejected` if the game is not
    /// running, the position is invalid or on the path, or it is unaffordable.
    pub fn try_place_tower(&mut self, faction_id: &str, x: f64, y: f64, cost: u32) -> bool {
        let position = Position::new(x, y);
        let rejection = if !matches!(self.phase, GamePhase::Active | GamePhase::Paused) {
            Some(PlacementRejection::NotActive)
        } else if !position.is_finite() {
            Some(PlacementRejection::InvalidPosition)
        } else if self.path.is_on_path(position, self.config.placement_tolerance) {
            Some(PlacementRejection::OnPath)
        } else if !self.economy.spend(cost) {
            Some(PlacementRejection::Unaffordable)
        } else {
            None
        };

        if let Some(reason) = rejection {
            debug!(faction = faction_id, x, y, ?reason, "placement rejected");
            self.events.push(GameEvent::PlacementRejected {
                faction_id: faction_id.to_string(),
                reason,
            });
            return false;
        }

        self.spawn_tower(faction_id, position, self.wave.index);
        self.events.push(GameEvent::TowerPlaced {
            faction_id: faction_id.to_string(),
            x,
            y,
        });
        true
    }

    /// Remove the tower nearest to `(x, y)` within the pick radius.
    pub fn remove_tower(&mut self, x: f64, y: f64) -> bool {
        let point = Position::new(x, y);
        let nearest = self
            .world
            .query::<(&Tower, &Position)>()
            .iter()
            .map(|(entity, (tower, pos))| (entity, pos.distance(point), tower.placement_seq))
            .filter(|(_, distance, _)| *distance <= TOWER_PICK_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.2.cmp(&b.2)))
            .map(|(entity, _, _)| entity);

        let Some(entity) = nearest else {
            return false;
        };
        self.despawn_tower(entity, false);
        true
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn catalog(&self) -> &FactionCatalog {
        &self.catalog
    }

    pub fn path(&self) -> &PathGeometry {
        &self.path
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    pub fn tower_count(&self) -> usize {
        self.world.query::<&Tower>().iter().count()
    }

    /// Get a mutable reference to the wave state (for tests driving the scheduler).
    #[cfg(test)]
    pub fn wave_mut(&mut self) -> &mut WaveState {
        &mut self.wave
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Lobby | GamePhase::GameOver) {
                    self.reset_session();
                    self.phase = GamePhase::Active;
                    info!(seed = self.config.seed, "game started");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                if scale.is_finite() {
                    self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
                }
            }
            PlayerCommand::StartWave => {
                self.start_wave();
            }
            PlayerCommand::PlaceTower {
                faction_id,
                x,
                y,
                cost,
            } => {
                self.try_place_tower(&faction_id, x, y, cost);
            }
            PlayerCommand::RemoveTower { x, y } => {
                self.remove_tower(x, y);
            }
            PlayerCommand::SetModifiers { modifiers } => {
                self.economy.set_modifiers(modifiers);
                world_setup::refresh_tower_stats(&mut self.world, &self.catalog, &self.economy.modifiers);
            }
            PlayerCommand::RecordUpgrade { axis } => {
                self.economy.upgrades.record(axis);
                self.economy.apply_upgrades();
                world_setup::refresh_tower_stats(&mut self.world, &self.catalog, &self.economy.modifiers);
            }
            PlayerCommand::GrantFaction { faction_id } => {
                self.economy.owned_factions.insert(faction_id);
            }
            PlayerCommand::AdjustCurrency { delta } => {
                self.economy.adjust(delta);
            }
        }
    }

    /// Fresh world and economy for a new game.
    fn reset_session(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let owned = std::mem::take(&mut self.economy.owned_factions);
        self.economy = Economy::new(self.config.starting_currency, self.config.starting_lives);
        self.economy.owned_factions = owned;
        self.wave = WaveState::default();
        self.seen_factions.clear();
        self.next_spawn_seq = 0;
        self.next_placement_seq = 0;
    }

    /// Open the next wave if the game is running and no wave is in progress.
    fn start_wave(&mut self) {
        if self.phase != GamePhase::Active || self.wave.is_running() {
            return;
        }

        let index = self.wave.index + 1;
        self.expire_towers(index);

        let roster = generate_roster(index, &self.catalog, &self.seen_factions, &mut self.rng);
        self.seen_factions.extend(roster.iter().map(|e| e.faction_id.clone()));
        self.wave
            .schedule(&roster, self.time.elapsed_secs, self.config.wave_duration);

        info!(
            wave = index,
            roster = roster.len(),
            min_power = roster.window.min,
            max_power = roster.window.max,
            "wave started"
        );
        self.events.push(GameEvent::WaveStarted {
            wave_index: index,
            roster_size: roster.len() as u32,
        });
    }

    /// Remove towers that have outlived the configured lifespan.
    fn expire_towers(&mut self, wave_index: u32) {
        let Some(lifespan) = self.config.tower_lifespan_waves else {
            return;
        };
        let mut expired: Vec<(u64, hecs::Entity)> = self
            .world
            .query::<&Tower>()
            .iter()
            .filter(|(_, tower)| wave_index.saturating_sub(tower.placed_at_wave) >= lifespan)
            .map(|(entity, tower)| (tower.placement_seq, entity))
            .collect();
        expired.sort_by_key(|(seq, _)| *seq);

        for (_, entity) in expired {
            self.despawn_tower(entity, true);
        }
    }

    fn spawn_tower(&mut self, faction_id: &str, position: Position, placed_at_wave: u32) {
        world_setup::spawn_tower(
            &mut self.world,
            &self.catalog,
            &self.economy.modifiers,
            faction_id,
            position,
            placed_at_wave,
            self.next_placement_seq,
        );
        self.next_placement_seq += 1;
    }

    fn despawn_tower(&mut self, entity: hecs::Entity, expired: bool) {
        let removed = match self.world.query_one_mut::<(&Tower, &Position)>(entity) {
            Ok((tower, pos)) => (tower.faction_id.clone(), *pos),
            Err(_) => return,
        };
        let _ = self.world.despawn(entity);

        let (faction_id, pos) = removed;
        if expired {
            info!(faction = %faction_id, x = pos.x, y = pos.y, "tower expired");
        }
        self.events.push(GameEvent::TowerRemoved {
            faction_id,
            x: pos.x,
            y: pos.y,
            expired,
        });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let now = self.time.elapsed_secs;

        // 1. Wave bookkeeping
        systems::wave_spawner::advance_phase(&mut self.wave);
        // 2. Spawn scheduler
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.wave,
            &self.catalog,
            &self.path,
            now,
            &mut self.next_spawn_seq,
            &mut self.events,
        );
        // 3. Movement along the path
        systems::movement::run(&mut self.world, &self.path, now, dt);
        // 4. Arrivals
        systems::arrival::run(
            &mut self.world,
            self.path.total_length(),
            now,
            &mut self.economy,
            &mut self.wave,
            &mut self.events,
        );
        // 5. Combat (targeting, abilities, damage, rewards)
        systems::combat::run(
            &mut self.world,
            &self.catalog,
            self.config.targeting,
            now,
            &mut self.rng,
            &mut self.economy,
            &mut self.wave,
            &mut self.events,
        );
        // 6. Cleanup (defeated, arrived)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 7. Wave completion and overrun timeout
        let live = systems::cleanup::live_enemy_count(&self.world);
        systems::wave_spawner::check_completion(
            &mut self.wave,
            live,
            now,
            self.config.wave_duration,
            self.config.wave_timeout_grace,
            &mut self.events,
        );
        // 8. Game over
        if self.economy.lives == 0 {
            let cancelled = self.wave.cancel_pending();
            self.phase = GamePhase::GameOver;
            info!(wave = self.wave.index, cancelled, "game over");
            self.events.push(GameEvent::GameOver {
                wave_index: self.wave.index,
            });
        }
    }
}
