pub mod runner;

pub use runner::TableRunner;

use std::cell::RefCell;

use cueball::{Command, RackLayout};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<TableRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut TableRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Table not initialized. Call table_init() first.");
        f(runner)
    })
}

/// Create the table from a JSON config (empty string for defaults).
/// Replaces any table created earlier.
#[wasm_bindgen]
pub fn table_init(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = TableRunner::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!(
        "cueball: {}x{} table, {} balls",
        runner.table_length(),
        runner.table_width(),
        runner.ball_count()
    );
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    Ok(())
}

/// Advance by `dt` seconds of wall-clock time. Returns frames simulated.
#[wasm_bindgen]
pub fn table_tick(dt: f32) -> u32 {
    with_runner(|r| r.tick(dt))
}

// ---- Commands ----

#[wasm_bindgen]
pub fn table_aim_at(x: f64, y: f64) {
    with_runner(|r| r.push(Command::AimAt { x, y }));
}

#[wasm_bindgen]
pub fn table_set_cue_angle(degrees: f64) {
    with_runner(|r| r.push(Command::SetCueAngle(Some(degrees))));
}

#[wasm_bindgen]
pub fn table_clear_cue() {
    with_runner(|r| r.push(Command::SetCueAngle(None)));
}

#[wasm_bindgen]
pub fn table_strike() {
    with_runner(|r| r.push_strike());
}

/// Rack a layout: 0 = three-ball, 1 = nine-ball.
#[wasm_bindgen]
pub fn table_rack(layout: u32) {
    match RackLayout::from_index(layout) {
        Some(layout) => with_runner(|r| r.push(Command::Rack(layout))),
        None => log::warn!("unknown rack layout {}", layout),
    }
}

#[wasm_bindgen]
pub fn table_stop_all() {
    with_runner(|r| r.push(Command::StopAll));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_balls_ptr() -> *const f32 {
    with_runner(|r| r.balls_ptr())
}

#[wasm_bindgen]
pub fn get_ball_count() -> u32 {
    with_runner(|r| r.ball_count())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_event_count() -> u32 {
    with_runner(|r| r.event_count())
}

#[wasm_bindgen]
pub fn get_pockets_ptr() -> *const f32 {
    with_runner(|r| r.pockets_ptr())
}

#[wasm_bindgen]
pub fn get_pocket_count() -> u32 {
    with_runner(|r| r.pocket_count())
}

#[wasm_bindgen]
pub fn get_pocket_radius() -> f32 {
    with_runner(|r| r.pocket_radius())
}

#[wasm_bindgen]
pub fn get_cue_line_ptr() -> *const f32 {
    with_runner(|r| r.cue_line_ptr())
}

#[wasm_bindgen]
pub fn has_cue_line() -> bool {
    with_runner(|r| r.has_cue_line())
}

#[wasm_bindgen]
pub fn get_table_length() -> f32 {
    with_runner(|r| r.table_length())
}

#[wasm_bindgen]
pub fn get_table_width() -> f32 {
    with_runner(|r| r.table_width())
}

#[wasm_bindgen]
pub fn get_balls_remaining() -> u32 {
    with_runner(|r| r.balls_remaining())
}

#[wasm_bindgen]
pub fn is_settled() -> bool {
    with_runner(|r| r.is_settled())
}
