//! Simulated heart rate and oxygen readouts.
//!
//! Purely decorative: every [`VITALS_INTERVAL_SEC`] a new target is drawn and
//! the displayed values ease toward it.

use crate::constants::*;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vitals {
    pub bpm: f32,
    pub oxygen_percent: f32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            bpm: INITIAL_BPM as f32,
            oxygen_percent: INITIAL_OXYGEN,
        }
    }
}

impl Vitals {
    /// Heart rate as shown in the overlay.
    pub fn bpm_display(&self) -> u32 {
        self.bpm.round() as u32
    }

    pub fn oxygen_active(&self) -> bool {
        self.oxygen_percent > OXYGEN_ACTIVE_THRESHOLD
    }

    fn lerp(a: Vitals, b: Vitals, t: f32) -> Vitals {
        Vitals {
            bpm: a.bpm + (b.bpm - a.bpm) * t,
            oxygen_percent: a.oxygen_percent + (b.oxygen_percent - a.oxygen_percent) * t,
        }
    }
}

pub struct VitalsSimulator {
    rng: StdRng,
    from: Vitals,
    target: Vitals,
    since_update: f32,
    since_target: f32,
}

impl VitalsSimulator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            from: Vitals::default(),
            target: Vitals::default(),
            since_update: 0.0,
            since_target: VITALS_EASE_SEC,
        }
    }

    /// Most recently drawn values.
    pub fn target(&self) -> Vitals {
        self.target
    }

    /// Values eased between the previous and current targets.
    pub fn current(&self) -> Vitals {
        let t = self.since_target / VITALS_EASE_SEC;
        if t >= 1.0 {
            return self.target;
        }
        Vitals::lerp(self.from, self.target, ease_in_out(t))
    }

    /// Advance the simulation clock. Returns true when a new target was drawn.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        let dt_sec = dt_sec.max(0.0);
        self.since_update += dt_sec;
        self.since_target += dt_sec;
        let mut drew = false;
        while self.since_update >= VITALS_INTERVAL_SEC {
            self.since_update -= VITALS_INTERVAL_SEC;
            self.retarget();
            drew = true;
        }
        drew
    }

    fn retarget(&mut self) {
        self.from = self.current();
        self.target = Vitals {
            bpm: self.rng.gen_range(BPM_MIN..=BPM_MAX) as f32,
            oxygen_percent: self.rng.gen_range(OXYGEN_MIN..=OXYGEN_MAX),
        };
        self.since_target = self.since_update;
        log::debug!(
            "vitals target: {} BPM, {:.1}% O2",
            self.target.bpm_display(),
            self.target.oxygen_percent
        );
    }
}

/// Smoothstep-style ease in \[0, 1\].
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
