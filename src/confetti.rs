//! Checkmate celebration: three timed confetti bursts over the board.
//!
//! A burst spawns a cloud of small unlit cuboids that scatter upward inside
//! a cone and fall back under gravity. The schedule is a resource so a reset
//! mid-celebration can cancel the bursts that have not fired yet.

use bevy::prelude::*;
use rand::Rng;

use crate::game::events::CelebrationRequest;
use crate::game::system_sets::GameSystems;

/// Particles per burst.
pub const BURST_PARTICLES: usize = 100;
/// Half-angle of the scatter cone, in degrees.
pub const BURST_SPREAD_DEGREES: f32 = 70.0;
/// When each burst fires, in seconds after the celebration starts.
pub const BURST_DELAYS: [f32; 3] = [0.0, 0.5, 1.0];
/// How long a single particle lives, in seconds.
const PARTICLE_LIFETIME: f32 = 2.5;
/// Board-space point the bursts erupt from (center of the board, just above it).
const BURST_ORIGIN: Vec3 = Vec3::new(3.5, 0.5, 3.5);

/// Pink-heavy confetti palette, as sRGB bytes.
const PALETTE: [(u8, u8, u8); 6] = [
    (0xff, 0x0a, 0x54),
    (0xff, 0x47, 0x7e),
    (0xff, 0x70, 0x96),
    (0xff, 0x85, 0xa2),
    (0xfb, 0xb1, 0xbd),
    (0xf9, 0xbe, 0xc7),
];

pub struct ConfettiPlugin;

impl Plugin for ConfettiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConfettiSchedule>()
            .add_systems(Startup, load_confetti_assets)
            .add_systems(
                Update,
                (start_celebration, advance_bursts, animate_confetti)
                    .chain()
                    .in_set(GameSystems::Visual),
            );
    }
}

/// Shared particle mesh and one material per palette color, built once.
#[derive(Resource)]
pub struct ConfettiAssets {
    mesh: Handle<Mesh>,
    materials: [Handle<StandardMaterial>; PALETTE.len()],
}

fn load_confetti_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ConfettiAssets {
        mesh: meshes.add(Cuboid::new(0.08, 0.02, 0.12)),
        materials: PALETTE.map(|(r, g, b)| {
            materials.add(StandardMaterial {
                base_color: Color::srgb_u8(r, g, b),
                unlit: true,
                ..default()
            })
        }),
    });
}

/// Pending bursts for the current celebration. Empty when idle.
#[derive(Resource, Default)]
pub struct ConfettiSchedule {
    bursts: Vec<Timer>,
}

impl ConfettiSchedule {
    /// Arms one timer per burst delay. Replaces any celebration in flight.
    pub fn celebration() -> Self {
        Self {
            bursts: BURST_DELAYS
                .iter()
                .map(|&delay| Timer::from_seconds(delay, TimerMode::Once))
                .collect(),
        }
    }

    /// Drops every burst that has not fired yet.
    pub fn cancel(&mut self) {
        self.bursts.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.bursts.is_empty()
    }

    /// Ticks the timers and returns how many bursts fired this frame.
    /// Fired timers are removed from the schedule.
    fn tick(&mut self, delta: std::time::Duration) -> usize {
        let mut fired = 0;
        self.bursts.retain_mut(|timer| {
            timer.tick(delta);
            if timer.just_finished() {
                fired += 1;
                false
            } else {
                true
            }
        });
        fired
    }
}

/// A single piece of confetti.
#[derive(Component)]
pub struct ConfettiParticle {
    velocity: Vec3,
    spin_axis: Vec3,
    spin_speed: f32,
    lifetime: Timer,
}

impl ConfettiParticle {
    pub fn new(velocity: Vec3, spin_axis: Vec3, spin_speed: f32, lifetime_secs: f32) -> Self {
        Self {
            velocity,
            spin_axis,
            spin_speed,
            lifetime: Timer::from_seconds(lifetime_secs, TimerMode::Once),
        }
    }
}

/// Arms the burst schedule when a celebration is requested.
fn start_celebration(
    mut requests: MessageReader<CelebrationRequest>,
    mut schedule: ResMut<ConfettiSchedule>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();
    *schedule = ConfettiSchedule::celebration();
    info!("[CONFETTI] Celebration armed: {} bursts", BURST_DELAYS.len());
}

/// Ticks the schedule and spawns a particle cloud for each burst that fires.
fn advance_bursts(
    mut commands: Commands,
    time: Res<Time>,
    mut schedule: ResMut<ConfettiSchedule>,
    assets: Res<ConfettiAssets>,
) {
    if schedule.is_idle() {
        return;
    }

    let fired = schedule.tick(time.delta());
    if fired == 0 {
        return;
    }

    let mut rng = rand::rng();
    let spread = BURST_SPREAD_DEGREES.to_radians() / 2.0;

    for _ in 0..fired {
        for _ in 0..BURST_PARTICLES {
            let material = assets.materials[rng.random_range(0..assets.materials.len())].clone();

            // Direction inside a cone around straight up.
            let tilt = rng.random_range(0.0..spread);
            let azimuth = rng.random_range(0.0..std::f32::consts::TAU);
            let direction = Vec3::new(
                tilt.sin() * azimuth.cos(),
                tilt.cos(),
                tilt.sin() * azimuth.sin(),
            );
            let speed = rng.random_range(8.0..14.0);

            let spin_axis = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            )
            .normalize_or(Vec3::Y);

            commands.spawn((
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(BURST_ORIGIN),
                ConfettiParticle::new(
                    direction * speed,
                    spin_axis,
                    rng.random_range(5.0..15.0),
                    PARTICLE_LIFETIME,
                ),
                Name::new("Confetti Particle"),
            ));
        }
        debug!("[CONFETTI] Burst fired: {} particles", BURST_PARTICLES);
    }
}

/// Gravity plus tumble; particles despawn when their lifetime runs out.
fn animate_confetti(
    mut commands: Commands,
    time: Res<Time>,
    mut particles: Query<(Entity, &mut Transform, &mut ConfettiParticle)>,
) {
    const GRAVITY: f32 = 18.0;

    for (entity, mut transform, mut particle) in particles.iter_mut() {
        particle.lifetime.tick(time.delta());

        if particle.lifetime.is_finished() {
            commands.entity(entity).despawn();
            continue;
        }

        particle.velocity.y -= GRAVITY * time.delta_secs();
        transform.translation += particle.velocity * time.delta_secs();
        transform.rotate_axis(
            Dir3::new(particle.spin_axis).unwrap_or(Dir3::Y),
            particle.spin_speed * time.delta_secs(),
        );
    }
}
