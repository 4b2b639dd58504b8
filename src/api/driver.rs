//! Browser tick driver
//!
//! Mounts an engine on the page timers:
//! - interval cadence: one `setInterval` for the lifetime of the animation
//! - one-shot cadence: a single `setTimeout` closure that re-arms itself while
//!   the engine reports `Continue`, started by the first click after idling
//!
//! Every committed snapshot is forwarded to the JS renderer as
//! `on_frame(colors: Uint32Array, version: number)`. The callback runs inside
//! the tick: clicks made from it are dropped and reads return undefined.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use js_sys::{Function, Uint32Array};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::core::grid::Grid;
use crate::domain::mode::{Cadence, SpreadMode, TickOutcome};
use crate::domain::palette::Palette;
use crate::simulation::{colorize, EngineCore};

type StepSlot = RefCell<Option<Closure<dyn FnMut()>>>;

#[wasm_bindgen]
pub struct Animation {
    engine: Rc<RefCell<EngineCore>>,
    window: web_sys::Window,
    cadence: Cadence,
    delay_ms: i32,

    // Interval cadence
    interval_id: Option<i32>,
    interval: Option<Closure<dyn FnMut()>>,

    // One-shot cadence
    step: Rc<StepSlot>,
    timeout_id: Rc<Cell<Option<i32>>>,
}

#[wasm_bindgen]
impl Animation {
    /// Build an engine from `config_json`, start its timers and render the
    /// initial snapshot through `on_frame`.
    pub fn mount(config_json: String, on_frame: Function) -> Result<Animation, JsValue> {
        let mut core = EngineCore::from_config_json(&config_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

        let palette = core.palette().clone();
        let mode = core.mode();
        emit_frame(&on_frame, &core.snapshot(), &palette, &mode, core.version());
        core.subscribe(Box::new(move |grid: &Grid, version: u64| {
            emit_frame(&on_frame, grid, &palette, &mode, version);
        }));

        let cadence = mode.cadence();
        let delay_ms = i32::try_from(core.config().delay_ms).unwrap_or(i32::MAX);

        let mut animation = Animation {
            engine: Rc::new(RefCell::new(core)),
            window,
            cadence,
            delay_ms,
            interval_id: None,
            interval: None,
            step: Rc::new(RefCell::new(None)),
            timeout_id: Rc::new(Cell::new(None)),
        };

        match cadence {
            Cadence::Interval => animation.start_interval()?,
            Cadence::OneShot => animation.install_step(),
        }
        Ok(animation)
    }

    /// Cell click from the renderer. Returns true if it queued work.
    pub fn interact(&self, row: u32, col: u32) -> Result<bool, JsValue> {
        let Ok(mut engine) = self.engine.try_borrow_mut() else {
            tracing::warn!(row, col, "click during a tick dropped");
            return Ok(false);
        };
        let queued = engine.interact(row, col);
        let needs_chain = engine.has_pending_work();
        drop(engine);

        if self.cadence == Cadence::OneShot && needs_chain && self.timeout_id.get().is_none() {
            schedule_step(&self.window, &self.step, &self.timeout_id, self.delay_ms)?;
        }
        Ok(queued)
    }

    /// Clear the grid and any queued work
    pub fn clear(&self) {
        if let Some(id) = self.timeout_id.take() {
            self.window.clear_timeout_with_handle(id);
        }
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.clear();
        }
    }

    // Readers return undefined while a tick holds the engine (e.g. when
    // called from `on_frame`); the frame callback already has the snapshot.

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> Option<u64> {
        read_engine(&self.engine, |engine| engine.frame())
    }

    #[wasm_bindgen(getter)]
    pub fn active_cells(&self) -> Option<u32> {
        read_engine(&self.engine, |engine| engine.active_cells())
    }

    #[wasm_bindgen(getter)]
    pub fn click_counter(&self) -> Option<u32> {
        read_engine(&self.engine, |engine| engine.click_counter())
    }

    /// Raw cell states of the current snapshot, row-major
    pub fn cells(&self) -> Option<Vec<u32>> {
        read_engine(&self.engine, |engine| engine.snapshot().cells().to_vec())
    }
}

impl Animation {
    fn start_interval(&mut self) -> Result<(), JsValue> {
        let engine = Rc::clone(&self.engine);
        let tick = Closure::wrap(Box::new(move || {
            if let Ok(mut engine) = engine.try_borrow_mut() {
                engine.tick();
            }
        }) as Box<dyn FnMut()>);

        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                self.delay_ms,
            )?;
        self.interval_id = Some(id);
        self.interval = Some(tick);
        Ok(())
    }

    fn install_step(&mut self) {
        let engine = Rc::clone(&self.engine);
        let window = self.window.clone();
        // Weak: the slot owns this closure, a strong handle would never be freed
        let slot: Weak<StepSlot> = Rc::downgrade(&self.step);
        let timeout_id = Rc::clone(&self.timeout_id);
        let delay_ms = self.delay_ms;

        let step = Closure::wrap(Box::new(move || {
            timeout_id.set(None);
            let outcome = match engine.try_borrow_mut() {
                Ok(mut engine) => engine.tick(),
                // Engine busy: try again next frame
                Err(_) => TickOutcome::Continue,
            };
            if outcome != TickOutcome::Continue {
                return;
            }
            let Some(slot) = slot.upgrade() else {
                return;
            };
            if let Err(err) = schedule_step(&window, &slot, &timeout_id, delay_ms) {
                web_sys::console::error_2(&"failed to schedule next frame".into(), &err);
            }
        }) as Box<dyn FnMut()>);

        *self.step.borrow_mut() = Some(step);
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        if let Some(id) = self.interval_id.take() {
            self.window.clear_interval_with_handle(id);
        }
        if let Some(id) = self.timeout_id.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

fn read_engine<T>(engine: &RefCell<EngineCore>, read: impl FnOnce(&EngineCore) -> T) -> Option<T> {
    match engine.try_borrow() {
        Ok(engine) => Some(read(&engine)),
        Err(_) => {
            tracing::debug!("engine busy, read skipped");
            None
        }
    }
}

fn schedule_step(
    window: &web_sys::Window,
    slot: &StepSlot,
    timeout_id: &Cell<Option<i32>>,
    delay_ms: i32,
) -> Result<(), JsValue> {
    let guard = slot.borrow();
    let Some(step) = guard.as_ref() else {
        return Err(JsValue::from_str("frame step not installed"));
    };
    let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        step.as_ref().unchecked_ref(),
        delay_ms,
    )?;
    timeout_id.set(Some(id));
    Ok(())
}

fn emit_frame(on_frame: &Function, grid: &Grid, palette: &Palette, mode: &SpreadMode, version: u64) {
    let colors = colorize(grid, palette, mode);
    let array = Uint32Array::from(colors.as_slice());
    if let Err(err) = on_frame.call2(&JsValue::NULL, &array, &JsValue::from_f64(version as f64)) {
        web_sys::console::error_2(&"on_frame callback failed".into(), &err);
    }
}
