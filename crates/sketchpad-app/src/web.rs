//! WebAssembly entry point: builds the page and forwards DOM events.

use crate::app::{App, AppConfig, UiAction};
use crate::shortcuts::ShortcutRegistry;
use kurbo::Point;
use sketchpad_core::PointerEvent;
use sketchpad_core::input::to_surface;
use sketchpad_render::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlCanvasElement, KeyboardEvent,
    MouseEvent,
};

type SharedApp = Rc<RefCell<App<CanvasSurface>>>;
type ToolButtons = Rc<RefCell<Vec<HtmlButtonElement>>>;

/// Register `handler` for `event` on `target`, downcasting the DOM event.
fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // The page lives as long as the listeners do.
    closure.forget();
    Ok(())
}

fn create_button(document: &Document, parent: &Element, label: &str) -> Result<HtmlButtonElement, JsValue> {
    let button = document
        .create_element("button")?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| JsValue::from_str("button element has wrong type"))?;
    button.set_text_content(Some(label));
    parent.append_child(&button)?;
    Ok(button)
}

/// Mark exactly the active tool's button as selected.
fn refresh_selection(app: &SharedApp, buttons: &ToolButtons) {
    let selected = app.borrow().selected_button();
    for (index, button) in buttons.borrow().iter().enumerate() {
        let class = if Some(index) == selected { "selected" } else { "" };
        button.set_class_name(class);
    }
}

fn apply(app: &SharedApp, buttons: &ToolButtons, action: UiAction) {
    if let Err(e) = app.borrow_mut().apply(action) {
        log::warn!("Action failed: {}", e);
    }
    refresh_selection(app, buttons);
}

/// Add a DOM button for toolbar entry `index`.
fn add_tool_button(
    document: &Document,
    row: &Element,
    app: &SharedApp,
    buttons: &ToolButtons,
    index: usize,
) -> Result<(), JsValue> {
    let (label, slot) = {
        let app = app.borrow();
        let Some(button) = app.buttons().get(index) else {
            return Ok(());
        };
        (button.label.clone(), button.slot)
    };

    let element = create_button(document, row, &label)?;
    let (app, list) = (app.clone(), buttons.clone());
    listen(&element, "click", move |_: MouseEvent| {
        apply(&app, &list, slot.into());
    })?;
    buttons.borrow_mut().push(element);
    Ok(())
}

fn pointer_position(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    to_surface(
        Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
        Point::new(rect.left(), rect.top()),
    )
}

fn build_page(document: &Document, config: AppConfig) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.set_inner_html("");

    let title = document.create_element("h1")?;
    title.set_text_content(Some(&config.title));
    body.append_child(&title)?;

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("canvas element has wrong type"))?;
    canvas.set_width(config.sketchpad.canvas_width);
    canvas.set_height(config.sketchpad.canvas_height);
    canvas.set_id("sketchCanvas");
    body.append_child(&canvas)?;

    let surface = CanvasSurface::new(&canvas).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let app: SharedApp = Rc::new(RefCell::new(
        App::new(config, surface).map_err(|e| JsValue::from_str(&e.to_string()))?,
    ));
    let buttons: ToolButtons = Rc::new(RefCell::new(Vec::new()));

    // Pointer events
    let canvas_target: &EventTarget = canvas.as_ref();
    {
        let (app, canvas) = (app.clone(), canvas.clone());
        listen(canvas_target, "mousedown", move |event: MouseEvent| {
            let position = pointer_position(&canvas, &event);
            app.borrow_mut().handle_pointer_event(PointerEvent::Down { position });
        })?;
    }
    {
        let (app, canvas) = (app.clone(), canvas.clone());
        listen(canvas_target, "mousemove", move |event: MouseEvent| {
            let position = pointer_position(&canvas, &event);
            app.borrow_mut().handle_pointer_event(PointerEvent::Move { position });
        })?;
    }
    {
        let (app, canvas) = (app.clone(), canvas.clone());
        listen(canvas_target, "mouseup", move |event: MouseEvent| {
            let position = pointer_position(&canvas, &event);
            app.borrow_mut().handle_pointer_event(PointerEvent::Up { position });
        })?;
    }
    {
        let app = app.clone();
        listen(canvas_target, "mouseleave", move |_: MouseEvent| {
            app.borrow_mut().handle_pointer_event(PointerEvent::Leave);
        })?;
    }

    // Command buttons
    let command_row = document.create_element("div")?;
    body.append_child(&command_row)?;
    for (label, action) in [
        ("Clear", UiAction::Clear),
        ("Undo", UiAction::Undo),
        ("Redo", UiAction::Redo),
    ] {
        let button = create_button(document, &command_row, label)?;
        let (app, list) = (app.clone(), buttons.clone());
        listen(&button, "click", move |_: MouseEvent| {
            apply(&app, &list, action.clone());
        })?;
    }

    // Tool buttons
    let tool_row = document.create_element("div")?;
    body.append_child(&tool_row)?;
    let tool_count = app.borrow().buttons().len();
    for index in 0..tool_count {
        add_tool_button(document, &tool_row, &app, &buttons, index)?;
    }

    let custom = create_button(document, &command_row, "Custom sticker")?;
    {
        let (app, list, document, row) = (app.clone(), buttons.clone(), document.clone(), tool_row.clone());
        listen(&custom, "click", move |_: MouseEvent| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Ok(Some(glyph)) = window.prompt_with_message("Custom sticker:") else {
                return;
            };
            let before = app.borrow().buttons().len();
            apply(&app, &list, UiAction::AddSticker(glyph));
            let after = app.borrow().buttons().len();
            for index in before..after {
                if let Err(e) = add_tool_button(&document, &row, &app, &list, index) {
                    log::error!("Failed to add sticker button: {:?}", e);
                }
            }
            refresh_selection(&app, &list);
        })?;
    }

    // Keyboard shortcuts
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    {
        let (app, list) = (app.clone(), buttons.clone());
        listen(&window, "keydown", move |event: KeyboardEvent| {
            let ctrl = event.ctrl_key() || event.meta_key();
            if let Some(action) = ShortcutRegistry::lookup(&event.key(), ctrl, event.shift_key()) {
                event.prevent_default();
                apply(&app, &list, action);
            }
        })?;
    }

    refresh_selection(&app, &buttons);
    Ok(())
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub fn run_wasm() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
    }

    log::info!("Starting Sticker Sketchpad (WASM)");
    ShortcutRegistry::log_all();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    build_page(&document, AppConfig::default())
}
