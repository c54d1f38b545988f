//! Snapshot tests for replayed gesture scripts.
//!
//! Each snapshot is the JSONL the binary would print for the script.

use swipeable::integration::{replay, ReplayRecord};
use swipeable::model::{Side, SwipeConfig};
use swipeable::script::parse_script;
use swipeable::state::DragStateMachine;

fn run(direction: Side, range: f32, script: &str) -> String {
    let steps = parse_script(script).expect("script should parse");
    let mut machine = DragStateMachine::new(SwipeConfig::new(direction, range).unwrap());
    let records = replay(&mut machine, &steps);
    render(&records)
}

fn render(records: &[ReplayRecord]) -> String {
    records
        .iter()
        .map(|record| serde_json::to_string(record).unwrap())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn snapshot_fling_dismisses_free_side() {
    let output = run(
        Side::Right,
        1.0,
        r#"{"op":"reset","width":375}
{"op":"begin"}
{"op":"drag","dx":250}
{"op":"release","velocity":5.0}
{"op":"settle"}"#,
    );

    insta::assert_snapshot!(output, @r#"
    {"step":1,"op":"reset","phase":"idle","offset":0}
    {"step":2,"op":"begin","phase":"dragging","offset":0}
    {"step":3,"op":"drag","phase":"dragging","offset":250}
    {"step":4,"op":"release","phase":"settling","offset":250,"target":300}
    {"step":5,"op":"settle","phase":"idle","offset":300,"committed":{"side":"right","kind":"dismissed"}}
    "#);
}

#[test]
fn snapshot_restricted_side_commits_on_return() {
    let output = run(
        Side::Left,
        0.5,
        r#"{"op":"reset","width":375}
{"op":"begin"}
{"op":"drag","dx":-120}
{"op":"drag","dx":-120}
{"op":"release","velocity":0.0}
{"op":"settle"}
{"op":"swipe_back"}
{"op":"settle"}"#,
    );

    insta::assert_snapshot!(output, @r#"
    {"step":1,"op":"reset","phase":"idle","offset":0}
    {"step":2,"op":"begin","phase":"dragging","offset":0}
    {"step":3,"op":"drag","phase":"dragging","offset":-60}
    {"step":4,"op":"drag","phase":"dragging","offset":-120}
    {"step":5,"op":"release","phase":"settling","offset":-120,"target":0}
    {"step":6,"op":"settle","phase":"idle","offset":0,"committed":{"side":"left","kind":"restricted"}}
    {"step":7,"op":"swipe_back","phase":"settling","offset":0}
    {"step":8,"op":"settle","phase":"idle","offset":0}
    "#);
}

#[test]
fn snapshot_swipe_back_interrupted_by_new_drag() {
    let output = run(
        Side::Right,
        1.0,
        r#"{"op":"reset","width":375}
{"op":"drag","dx":40}
{"op":"begin"}
{"op":"drag","dx":40}
{"op":"swipe_back"}
{"op":"tick"}
{"op":"begin"}
{"op":"release","velocity":0.0}
{"op":"settle"}"#,
    );

    insta::assert_snapshot!(output, @r#"
    {"step":1,"op":"reset","phase":"idle","offset":0}
    {"step":2,"op":"drag","phase":"idle","offset":0}
    {"step":3,"op":"begin","phase":"dragging","offset":0}
    {"step":4,"op":"drag","phase":"dragging","offset":40}
    {"step":5,"op":"swipe_back","phase":"settling","offset":40}
    {"step":6,"op":"tick","phase":"settling","offset":24}
    {"step":7,"op":"begin","phase":"dragging","offset":24}
    {"step":8,"op":"release","phase":"settling","offset":24,"target":0}
    {"step":9,"op":"settle","phase":"idle","offset":0}
    "#);
}
