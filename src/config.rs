// Tunables for every effect on the page. The values are the ones the
// portfolio shipped with; `FieldConfig` exists so tests can shrink or bend
// the particle field without touching the constants.

/// Surface area (in px²) that earns one particle.
pub const AREA_PER_PARTICLE: f64 = 12000.0;
pub const MAX_PARTICLES: usize = 120;
/// Pointer influence radius.
pub const POINTER_RADIUS: f64 = 150.0;
pub const REPULSION_STRENGTH: f64 = 0.01;
pub const MAX_LINK_DISTANCE: f64 = 120.0;
pub const MAX_LINK_OPACITY: f64 = 0.12;
pub const LINK_LINE_WIDTH: f64 = 0.5;
pub const RESIZE_DEBOUNCE_MS: u32 = 200;

pub const MAX_SPEED: f64 = 0.25;
pub const MIN_SIZE: f64 = 0.5;
pub const MAX_SIZE: f64 = 2.5;
pub const MIN_OPACITY: f64 = 0.1;
pub const MAX_OPACITY: f64 = 0.6;

// Typewriter timings (ms)
pub const TYPE_DELAY_MS: u32 = 80;
pub const DELETE_DELAY_MS: u32 = 40;
pub const HOLD_DELAY_MS: u32 = 2000;
pub const NEXT_WORD_DELAY_MS: u32 = 400;
pub const TYPE_START_DELAY_MS: u32 = 1000;

pub const TYPED_WORDS: [&str; 6] = [
    "Cybersécurité",
    "Infrastructure réseau",
    "Active Directory",
    "Administration systèmes",
    "Sécurisation des SI",
    "Cloud & DevOps",
];

// Navigation
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
pub const BACK_TO_TOP_AFTER: f64 = 500.0;
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

// Counters
pub const COUNTER_STEPS: u32 = 40;
pub const COUNTER_DURATION_MS: f64 = 1500.0;
pub const COUNTER_THRESHOLD: f64 = 0.5;

// Reveal + stagger
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SKILL_THRESHOLD: f64 = 0.2;
pub const TIMELINE_STAGGER_S: f64 = 0.1;
pub const CERT_STAGGER_S: f64 = 0.08;
pub const SKILL_TAG_STAGGER_S: f64 = 0.03;
pub const SKILL_TAG_REVEAL_STEP_MS: u32 = 50;

/// Knobs for a single particle field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub area_per_particle: f64,
    pub max_particles: usize,
    pub max_link_distance: f64,
    pub repulsion_strength: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            area_per_particle: AREA_PER_PARTICLE,
            max_particles: MAX_PARTICLES,
            max_link_distance: MAX_LINK_DISTANCE,
            repulsion_strength: REPULSION_STRENGTH,
        }
    }
}
