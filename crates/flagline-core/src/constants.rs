//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Economy ---

/// Currency at the start of a fresh session.
pub const STARTING_CURRENCY: u32 = 200;

/// Lives at the start of a fresh session.
pub const STARTING_LIVES: u32 = 20;

/// Per-purchase increase applied to a global multiplier (+10%).
pub const UPGRADE_STEP: f64 = 0.10;

// --- Power rating ---

/// Power rating used when a faction id does not resolve.
pub const FALLBACK_POWER_RATING: f64 = 1.0;

// --- Enemy derivation ---

/// Hit points floor before wave and size scaling.
pub const ENEMY_MIN_BASE_HIT_POINTS: f64 = 5.0;

/// Multiplier on sqrt(power) for base hit points.
pub const ENEMY_HIT_POINTS_SCALE: f64 = 10.0;

/// Extra hit-point fraction gained by wave 100.
pub const WAVE_HIT_POINT_RAMP: f64 = 0.5;

/// Wave at which the hit-point ramp saturates.
pub const WAVE_HIT_POINT_RAMP_WAVES: f64 = 100.0;

/// Base enemy speed (pixels per second) before power scaling.
pub const ENEMY_BASE_SPEED: f64 = 60.0;

/// Lower bound on the speed factor so no enemy ever stalls.
pub const ENEMY_MIN_SPEED_FACTOR: f64 = 0.3;

/// Base kill reward before power scaling.
pub const ENEMY_BASE_REWARD: f64 = 10.0;

/// Reward gained per decade of power rating.
pub const ENEMY_REWARD_PER_DECADE: f64 = 5.0;

/// Visual scale gained per decade of power rating.
pub const ENEMY_SCALE_PER_DECADE: f64 = 0.1;

/// Visual scale cap, relative to the role's base size.
pub const ENEMY_MAX_SCALE_FACTOR: f64 = 1.5;

// --- Tower derivation ---

/// Base tower range (pixels).
pub const TOWER_BASE_RANGE: f64 = 100.0;

/// Range gained per decade of power rating.
pub const TOWER_RANGE_PER_DECADE: f64 = 10.0;

/// Base tower damage per attack.
pub const TOWER_BASE_DAMAGE: f64 = 3.0;

/// Base seconds between tower attacks.
pub const TOWER_BASE_ATTACK_INTERVAL: f64 = 1.0;

/// Radius (pixels) within which a removal request picks a tower.
pub const TOWER_PICK_RADIUS: f64 = 20.0;

// --- Placement ---

/// Default distance (pixels) from the path inside which towers may not be placed.
pub const PATH_PLACEMENT_TOLERANCE: f64 = 30.0;

// --- Abilities ---

/// Splash radius around the primary target (pixels).
pub const SPLASH_RADIUS: f64 = 60.0;

/// Bearing tolerance for pierce lines (radians, ~5.7 degrees).
pub const PIERCE_ANGLE_TOLERANCE: f64 = 0.1;

// --- Waves ---

/// Upper bound on roster length.
pub const MAX_ROSTER_SIZE: usize = 30;

/// Roster entries added per wave.
pub const ROSTER_GROWTH_PER_WAVE: f64 = 1.5;

/// Roster entries at wave zero.
pub const ROSTER_BASE_SIZE: usize = 3;

/// Every Nth wave ends in a boss.
pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// Every Mth wave seeds reinforced units through the roster.
pub const REINFORCED_WAVE_INTERVAL: u32 = 3;

/// Within a reinforced wave, every Kth roster entry is reinforced.
pub const REINFORCED_ROSTER_STRIDE: usize = 4;

/// Seconds over which a wave's roster is dispatched.
pub const WAVE_DURATION_SECS: f64 = 20.0;

/// Extra seconds after the wave duration before a stuck wave is force-closed.
pub const WAVE_TIMEOUT_GRACE_SECS: f64 = 40.0;
