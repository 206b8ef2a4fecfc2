mod support;

use device_core::device::{Mode, MoistureSensor, Pump, PumpState};
use device_core::runner::run_next_tick;

use support::world::TestWorldBuilder;

#[test]
fn pump_off_drains_between_five_and_ten() {
    for seed in 0..20 {
        let (mut world, mut schedule) = TestWorldBuilder::new()
            .seed(seed)
            .initial_moisture(80)
            .pump(PumpState::Off)
            .build();

        assert!(run_next_tick(&mut world, &mut schedule));

        let value = world.resource::<MoistureSensor>().value();
        let drop = 80 - value;
        assert!(
            (5..=10).contains(&drop),
            "seed {seed}: expected drain in [5,10], got {drop}"
        );
    }
}

#[test]
fn pump_on_fills_between_ten_and_fifteen() {
    for seed in 0..20 {
        let (mut world, mut schedule) = TestWorldBuilder::new()
            .seed(seed)
            .initial_moisture(40)
            .pump(PumpState::On)
            .build();

        assert!(run_next_tick(&mut world, &mut schedule));

        let value = world.resource::<MoistureSensor>().value();
        let gain = value - 40;
        assert!(
            (10..=15).contains(&gain),
            "seed {seed}: expected fill in [10,15], got {gain}"
        );
    }
}

#[test]
fn drain_clamps_at_zero() {
    let (mut world, mut schedule) = TestWorldBuilder::new()
        .initial_moisture(3)
        .pump(PumpState::Off)
        .build();

    assert!(run_next_tick(&mut world, &mut schedule));
    assert_eq!(world.resource::<MoistureSensor>().value(), 0);
}

#[test]
fn fill_clamps_at_hundred_and_manual_pump_stays_on() {
    // Spec scenario: 95% moisture, pump on, manual mode. One tick clamps the
    // reading to 100 and the pump keeps running because manual mode ignores
    // thresholds.
    let (mut world, mut schedule) = TestWorldBuilder::new()
        .initial_moisture(95)
        .mode(Mode::Manual)
        .pump(PumpState::On)
        .build();

    assert!(run_next_tick(&mut world, &mut schedule));

    assert_eq!(world.resource::<MoistureSensor>().value(), 100);
    assert_eq!(world.resource::<Pump>().state, PumpState::On);
}

#[test]
fn moisture_stays_in_range_over_long_runs() {
    let (mut world, mut schedule) = TestWorldBuilder::new()
        .mode(Mode::Automatic)
        .build();

    for _ in 0..500 {
        assert!(run_next_tick(&mut world, &mut schedule));
        let value = world.resource::<MoistureSensor>().value();
        assert!(value <= 100, "moisture escaped range: {value}");
    }
}
