use rand::Rng;

use crate::{Config, GameRng, Params};

/// A single falling confetti particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Confetti {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: [u8; 3],
    pub speed: f32, // Fall distance per tick
}

impl Confetti {
    fn random(config: &Config, rng: &mut GameRng) -> Self {
        Self {
            x: rng.0.gen_range(0.0..config.court_width),
            // Starts above the court and falls in
            y: rng.0.gen_range(-config.court_height..0.0),
            size: rng.0.gen_range(5.0..15.0),
            color: [
                rng.0.gen_range(0..255),
                rng.0.gen_range(0..255),
                rng.0.gen_range(0..255),
            ],
            speed: rng.0.gen_range(2.0..5.0),
        }
    }
}

/// Confetti shower shown after a match is won
#[derive(Debug, Clone, Default)]
pub struct VictoryEffect {
    pub particles: Vec<Confetti>,
    pub frame: u32,
}

impl VictoryEffect {
    pub fn new(config: &Config, rng: &mut GameRng) -> Self {
        let particles = (0..Params::CONFETTI_COUNT)
            .map(|_| Confetti::random(config, rng))
            .collect();
        Self {
            particles,
            frame: 0,
        }
    }

    /// Let every particle fall one tick; those past the bottom re-enter at the top
    pub fn advance(&mut self, config: &Config, rng: &mut GameRng) {
        for particle in &mut self.particles {
            particle.y += particle.speed;
            if particle.y > config.court_height {
                particle.y = -particle.size;
                particle.x = rng.0.gen_range(0.0..config.court_width);
            }
        }
        self.frame = self.frame.wrapping_add(1);
    }

    /// Scale for the pulsing victory banner
    pub fn pulse_scale(&self) -> f32 {
        1.0 + 0.1 * (self.frame as f32 * 0.1).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_effect_spawns_confetti_above_court() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let effect = VictoryEffect::new(&config, &mut rng);

        assert_eq!(effect.particles.len(), Params::CONFETTI_COUNT);
        assert_eq!(effect.frame, 0);
        for p in &effect.particles {
            assert!(p.x >= 0.0 && p.x < config.court_width);
            assert!(p.y >= -config.court_height && p.y < 0.0);
            assert!(p.size >= 5.0 && p.size < 15.0);
            assert!(p.speed >= 2.0 && p.speed < 5.0);
        }
    }

    #[test]
    fn test_advance_moves_particles_down() {
        let config = Config::new();
        let mut rng = GameRng::new(2);
        let mut effect = VictoryEffect::new(&config, &mut rng);
        let before = effect.particles.clone();

        effect.advance(&config, &mut rng);

        assert_eq!(effect.frame, 1);
        for (old, new) in before.iter().zip(&effect.particles) {
            assert_eq!(new.y, old.y + old.speed);
            assert_eq!(new.x, old.x);
        }
    }

    #[test]
    fn test_particle_wraps_to_top() {
        let config = Config::new();
        let mut rng = GameRng::new(3);
        let mut effect = VictoryEffect {
            particles: vec![Confetti {
                x: 10.0,
                y: 399.0,
                size: 6.0,
                color: [255, 0, 0],
                speed: 3.0,
            }],
            frame: 0,
        };

        effect.advance(&config, &mut rng);

        let p = effect.particles[0];
        assert_eq!(p.y, -6.0);
        assert!(p.x >= 0.0 && p.x < config.court_width);
    }

    #[test]
    fn test_pulse_scale_oscillates() {
        let mut effect = VictoryEffect::default();
        assert_eq!(effect.pulse_scale(), 1.0);
        effect.frame = 16; // sin(1.6) is near the peak
        assert!(effect.pulse_scale() > 1.09);
        assert!(effect.pulse_scale() <= 1.1);
    }
}
