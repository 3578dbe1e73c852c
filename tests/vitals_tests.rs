// Host-side tests for the simulated vitals.

use helix_core::*;

#[test]
fn starts_at_resting_values() {
    let sim = VitalsSimulator::new(7);
    let v = sim.current();
    assert_eq!(v.bpm_display(), 72);
    assert!((v.oxygen_percent - 98.5).abs() < 1e-6);
    assert!(v.oxygen_active());
}

#[test]
fn only_retargets_on_the_interval() {
    let mut sim = VitalsSimulator::new(1);
    let dt = 1.0 / 60.0;
    let mut draws = 0;
    let mut elapsed = 0.0f32;
    while elapsed < 10.0 - dt {
        if sim.tick(dt) {
            draws += 1;
        }
        elapsed += dt;
    }
    assert_eq!(draws, 4);
}

#[test]
fn short_ticks_do_not_change_target() {
    let mut sim = VitalsSimulator::new(3);
    let before = sim.target();
    for _ in 0..10 {
        assert!(!sim.tick(0.1));
    }
    assert_eq!(sim.target(), before);
}

#[test]
fn large_tick_draws_once_per_elapsed_interval() {
    let mut sim = VitalsSimulator::new(9);
    assert!(sim.tick(VITALS_INTERVAL_SEC * 3.5));
    // 1.0 s carried over from the large tick
    assert!(!sim.tick(0.4));
    assert!(sim.tick(0.7));
}

#[test]
fn targets_stay_in_range() {
    let mut sim = VitalsSimulator::new(42);
    for _ in 0..500 {
        sim.tick(VITALS_INTERVAL_SEC);
        let t = sim.target();
        assert!((68.0..=78.0).contains(&t.bpm));
        assert_eq!(t.bpm.fract(), 0.0);
        assert!((97.0..=99.5).contains(&t.oxygen_percent));
        let c = sim.current();
        assert!((68.0..=78.0).contains(&c.bpm));
        assert!((97.0..=99.5).contains(&c.oxygen_percent));
    }
}

#[test]
fn same_seed_same_sequence() {
    let mut a = VitalsSimulator::new(1234);
    let mut b = VitalsSimulator::new(1234);
    for _ in 0..20 {
        a.tick(VITALS_INTERVAL_SEC);
        b.tick(VITALS_INTERVAL_SEC);
        assert_eq!(a.target(), b.target());
    }
}

#[test]
fn displayed_values_ease_toward_target() {
    let mut sim = VitalsSimulator::new(5);
    // find a draw that actually moves the heart rate
    let mut tries = 0;
    loop {
        let before = sim.current();
        sim.tick(VITALS_INTERVAL_SEC);
        if (sim.target().bpm - before.bpm).abs() >= 1.0 {
            let start = sim.current();
            assert!((start.bpm - before.bpm).abs() < 1e-4, "eases from the old value");
            sim.tick(VITALS_EASE_SEC / 2.0);
            let mid = sim.current();
            let lo = before.bpm.min(sim.target().bpm);
            let hi = before.bpm.max(sim.target().bpm);
            assert!(mid.bpm > lo && mid.bpm < hi);
            sim.tick(VITALS_EASE_SEC / 2.0 + 0.01);
            assert!((sim.current().bpm - sim.target().bpm).abs() < 1e-4);
            break;
        }
        tries += 1;
        assert!(tries < 100, "rng never changed bpm");
    }
}

#[test]
fn ease_curve_is_monotonic_and_pinned() {
    assert_eq!(ease_in_out(0.0), 0.0);
    assert_eq!(ease_in_out(1.0), 1.0);
    assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = ease_in_out(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
    assert_eq!(ease_in_out(-3.0), 0.0);
    assert_eq!(ease_in_out(7.0), 1.0);
}

#[test]
fn low_oxygen_is_flagged_inactive() {
    let v = Vitals {
        bpm: 70.0,
        oxygen_percent: 94.0,
    };
    assert!(!v.oxygen_active());
}
