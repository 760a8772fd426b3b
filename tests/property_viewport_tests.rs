use proptest::prelude::*;
use signal_viewport::api::{DatasetRegistry, ViewportEngine};
use signal_viewport::core::TimeSeries;
use signal_viewport::interaction::{DEFAULT_CHART, ViewportEvent};

const CHARTS: [&str; 2] = ["accelerometer", "signal"];

fn sorted_times() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-20.0f64..60.0, 1..128).prop_map(|mut times| {
        times.sort_by(f64::total_cmp);
        times
    })
}

fn event_strategy() -> impl Strategy<Value = ViewportEvent> {
    prop_oneof![
        (0usize..CHARTS.len(), -30.0f64..80.0).prop_map(|(chart, time)| ViewportEvent::Click {
            chart: CHARTS[chart].to_owned(),
            time,
        }),
        (0.0f64..40.0).prop_map(|window_size| ViewportEvent::Resize { window_size }),
        Just(ViewportEvent::Reset),
    ]
}

fn series(time: Vec<f64>) -> TimeSeries {
    let values = vec![0.0; time.len()];
    TimeSeries::from_channels(time, [("value", values)]).expect("sorted series")
}

fn engine(accelerometer: Vec<f64>, signal: Vec<f64>) -> ViewportEngine {
    let registry = DatasetRegistry::new()
        .with_dataset(CHARTS[0], series(accelerometer))
        .and_then(|r| r.with_dataset(CHARTS[1], series(signal)))
        .expect("registry");
    ViewportEngine::with_default_config(registry).expect("engine init")
}

proptest! {
    #[test]
    fn index_range_stays_inside_dataset(
        accelerometer in sorted_times(),
        signal in sorted_times(),
        events in proptest::collection::vec(event_strategy(), 0..24)
    ) {
        let mut engine = engine(accelerometer, signal);
        for event in &events {
            engine.apply(event).expect("generated events are valid");
            for chart in CHARTS {
                let len = engine.registry().get(chart).expect("registered").len();
                let result = engine.window_for(chart).expect("window");
                prop_assert!(result.start_idx <= result.end_idx);
                prop_assert!(result.end_idx <= len);
                prop_assert_eq!(result.num_points, result.end_idx - result.start_idx);
            }
        }
    }

    #[test]
    fn window_for_is_idempotent(
        accelerometer in sorted_times(),
        events in proptest::collection::vec(event_strategy(), 0..16)
    ) {
        let mut engine = engine(accelerometer.clone(), accelerometer);
        engine.apply_all(&events).expect("generated events are valid");
        for chart in CHARTS {
            let first = engine.window_for(chart).expect("first");
            let second = engine.window_for(chart).expect("second");
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn click_centers_window(
        time in sorted_times(),
        window_size in 0.0f64..40.0,
        clicked in -30.0f64..80.0
    ) {
        let mut engine = engine(time.clone(), time);
        engine.resize(window_size).expect("resize");
        let result = engine.click(CHARTS[1], clicked).expect("click");

        prop_assert!((result.min_time - (clicked - window_size / 2.0).max(0.0)).abs() <= 1e-9);
        prop_assert!((result.max_time - (clicked + window_size / 2.0)).abs() <= 1e-9);
    }

    #[test]
    fn unclicked_window_starts_at_origin(
        time in sorted_times(),
        window_size in 0.0f64..40.0
    ) {
        let mut engine = engine(time.clone(), time);
        let result = engine.resize(window_size).expect("resize");
        prop_assert_eq!(result.min_time, 0.0);
        prop_assert_eq!(result.max_time, window_size);
    }

    #[test]
    fn reset_restores_defaults_and_keeps_window_size(
        time in sorted_times(),
        events in proptest::collection::vec(event_strategy(), 0..16)
    ) {
        let mut engine = engine(time.clone(), time);
        engine.apply_all(&events).expect("generated events are valid");
        let window_size = engine.window_size();

        let result = engine.reset().expect("reset");
        prop_assert_eq!(engine.clicked_time(), None);
        prop_assert_eq!(engine.active_chart(), DEFAULT_CHART);
        prop_assert_eq!(engine.window_size(), window_size);
        prop_assert_eq!(result.min_time, 0.0);
        prop_assert_eq!(result.max_time, window_size);
    }

    #[test]
    fn num_points_is_monotonic_in_window_size(
        time in sorted_times(),
        clicked in proptest::option::of(-30.0f64..80.0),
        smaller in 0.0f64..40.0,
        extra in 0.0f64..40.0
    ) {
        let larger = smaller + extra;
        let mut engine = engine(time.clone(), time);
        if let Some(clicked) = clicked {
            engine.click(CHARTS[0], clicked).expect("click");
        }

        let narrow = engine.resize(smaller).expect("narrow");
        let wide = engine.resize(larger).expect("wide");
        prop_assert!(narrow.num_points <= wide.num_points);

        let narrow_again = engine.resize(smaller).expect("narrow again");
        prop_assert!(narrow_again.num_points <= wide.num_points);
        prop_assert_eq!(narrow_again, narrow);
    }

    #[test]
    fn negative_resize_never_mutates_state(
        time in sorted_times(),
        events in proptest::collection::vec(event_strategy(), 0..16),
        negative in -100.0f64..-1e-9
    ) {
        let mut engine = engine(time.clone(), time);
        engine.apply_all(&events).expect("generated events are valid");
        let before = engine.state().clone();

        prop_assert!(engine.resize(negative).is_err());
        prop_assert_eq!(engine.state(), &before);
    }
}
