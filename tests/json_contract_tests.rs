use signal_viewport::api::{
    DatasetRegistry, VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1, ViewportEngine, ViewportEngineConfig,
    ViewportSnapshot, WindowResult,
};
use signal_viewport::core::TimeSeries;
use signal_viewport::error::ViewportError;

fn registry() -> DatasetRegistry {
    let time: Vec<f64> = (0..500).map(|i| i as f64 / 50.0).collect();
    let values = vec![1.0; 500];
    DatasetRegistry::new()
        .with_dataset(
            "accelerometer",
            TimeSeries::from_channels(time.clone(), [("x", values.clone())]).expect("series"),
        )
        .and_then(|r| {
            r.with_dataset(
                "filtering",
                TimeSeries::from_channels(time, [("ch1", values)]).expect("series"),
            )
        })
        .expect("registry")
}

#[test]
fn window_result_uses_camel_case_keys() {
    let mut engine = ViewportEngine::with_default_config(registry()).expect("engine init");
    let result = engine.click("filtering", 3.0).expect("click");
    let value: serde_json::Value =
        serde_json::from_str(&result.to_json_pretty().expect("json")).expect("valid json");

    assert_eq!(value["chart"], "filtering");
    assert_eq!(value["minTime"], 2.0);
    assert_eq!(value["maxTime"], 4.0);
    assert_eq!(value["startIdx"], 100);
    assert_eq!(value["endIdx"], 201);
    assert_eq!(value["numPoints"], 101);
}

#[test]
fn window_result_contract_round_trips_through_compat_parser() {
    let engine = ViewportEngine::with_default_config(registry()).expect("engine init");
    let json = engine
        .window_for_json_contract_v1_pretty("accelerometer")
        .expect("contract json");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = WindowResult::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, engine.window_for("accelerometer").expect("window"));

    let bare = parsed.to_json_pretty().expect("bare json");
    assert_eq!(
        WindowResult::from_json_compat_str(&bare).expect("parse bare"),
        parsed
    );
}

#[test]
fn window_result_contract_rejects_unknown_schema() {
    let raw = r#"{"schema_version":9,"result":{"chart":"a","minTime":0.0,"maxTime":1.0,"numPoints":0,"startIdx":0,"endIdx":0}}"#;
    let err = WindowResult::from_json_compat_str(raw).expect_err("schema 9");
    assert!(matches!(err, ViewportError::InvalidConfig(_)));
}

#[test]
fn snapshot_restore_reproduces_window() {
    let mut source = ViewportEngine::with_default_config(registry()).expect("source");
    source.resize(1.5).expect("resize");
    source.click("filtering", 6.0).expect("click");

    let json = source.snapshot_json_contract_v1_pretty().expect("snapshot json");
    let snapshot = ViewportSnapshot::from_json_compat_str(&json).expect("parse snapshot");
    assert_eq!(snapshot.default_chart, "accelerometer");
    assert_eq!(snapshot.state.clicked_time(), Some(6.0));

    let mut target = ViewportEngine::with_default_config(registry()).expect("target");
    let restored = target.restore(&snapshot).expect("restore");
    assert_eq!(restored, snapshot.active_window);
    assert_eq!(target.state(), source.state());
}

#[test]
fn restore_rejects_snapshot_for_unknown_chart() {
    let raw = format!(
        r#"{{"schema_version":{VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1},"snapshot":{{
            "state":{{"window_size":2.0,"active_chart":"psd","clicked_time":null}},
            "default_chart":"accelerometer",
            "active_window":{{"chart":"psd","minTime":0.0,"maxTime":2.0,"numPoints":0,"startIdx":0,"endIdx":0}}
        }}}}"#
    );
    let snapshot = ViewportSnapshot::from_json_compat_str(&raw).expect("parse");

    let mut engine = ViewportEngine::with_default_config(registry()).expect("engine init");
    let before = engine.state().clone();
    let err = engine.restore(&snapshot).expect_err("psd is not registered");
    assert_eq!(
        err,
        ViewportError::UnknownChart {
            name: "psd".to_owned()
        }
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn restore_rejects_negative_window() {
    let raw = r#"{
        "state":{"window_size":-1.0,"active_chart":"accelerometer","clicked_time":null},
        "default_chart":"accelerometer",
        "active_window":{"chart":"accelerometer","minTime":0.0,"maxTime":0.0,"numPoints":0,"startIdx":0,"endIdx":0}
    }"#;
    let snapshot = ViewportSnapshot::from_json_compat_str(raw).expect("bare snapshot");

    let mut engine = ViewportEngine::with_default_config(registry()).expect("engine init");
    let err = engine.restore(&snapshot).expect_err("negative window");
    assert_eq!(err, ViewportError::InvalidWindowSize { value: -1.0 });
}

#[test]
fn unbounded_window_survives_contract_round_trip() {
    let mut engine = ViewportEngine::with_default_config(registry()).expect("engine init");
    engine.resize(f64::INFINITY).expect("infinite window is accepted");

    let json = engine
        .window_for_json_contract_v1_pretty("accelerometer")
        .expect("contract json");
    assert!(json.contains("\"maxTime\": \"inf\""));
    let parsed = WindowResult::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, engine.window_for("accelerometer").expect("window"));
    assert_eq!(parsed.max_time, f64::INFINITY);
    assert_eq!(parsed.num_points, 500);

    let json = engine.snapshot_json_contract_v1_pretty().expect("snapshot json");
    let snapshot = ViewportSnapshot::from_json_compat_str(&json).expect("parse snapshot");
    assert_eq!(snapshot.state.window_size(), f64::INFINITY);

    let mut target = ViewportEngine::with_default_config(registry()).expect("target");
    let restored = target.restore(&snapshot).expect("restore");
    assert_eq!(restored, snapshot.active_window);
    assert_eq!(target.state(), engine.state());
}

#[test]
fn restore_rejects_snapshot_from_other_default_chart() {
    let mut source = ViewportEngine::new(registry(), ViewportEngineConfig::new("filtering"))
        .expect("source");
    source.click("accelerometer", 3.0).expect("click");
    let snapshot = source.snapshot().expect("snapshot");

    let mut target = ViewportEngine::with_default_config(registry()).expect("target");
    let before = target.state().clone();
    let err = target.restore(&snapshot).expect_err("default charts differ");
    assert!(matches!(err, ViewportError::InvalidConfig(_)));
    assert_eq!(target.state(), &before);
}
