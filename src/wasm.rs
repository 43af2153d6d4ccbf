//! WebAssembly bindings for the browser frame editor.
//!
//! Frames cross the boundary in the editor's `{ grid, delay }` shape; see
//! [`EditorFrame`].

use wasm_bindgen::prelude::*;

use crate::{
    animation::AnimationSequence,
    codec::Notice,
    schema::ShortRowPolicy,
    text::{
        EditorFrame, editor_frames, extract_word_rows_lenient, sequence_from_editor_frames,
        split_frames, to_c_array,
    },
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

fn log_notices(notices: &[Notice]) {
    for notice in notices {
        log::warn!("{}", notice);
    }
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Encode an ASCII frame sheet into a C array listing named `name`.
#[wasm_bindgen(js_name = encodeSheet)]
pub fn encode_sheet(text: &str, delay: u32, name: &str) -> Result<String, JsValue> {
    let groups = split_frames(text);
    let normalized = AnimationSequence::from_frame_groups(&groups, delay).map_err(to_js_error)?;
    log_notices(&normalized.notices);
    Ok(to_c_array(&normalized.value, name))
}

/// Encode editor frames into a C array listing named `name`.
#[wasm_bindgen(js_name = encodeFrames)]
pub fn encode_frames(frames: JsValue, name: &str) -> Result<String, JsValue> {
    let frames: Vec<EditorFrame> = serde_wasm_bindgen::from_value(frames)
        .map_err(|e| JsValue::from_str(&format!("Invalid frames: {e}")))?;

    let normalized = sequence_from_editor_frames(&frames).map_err(to_js_error)?;
    log_notices(&normalized.notices);
    Ok(to_c_array(&normalized.value, name))
}

/// Decode a C array listing, or bare `{...}` rows, into editor frames.
#[wasm_bindgen(js_name = decodeListing)]
pub fn decode_listing(text: &str) -> Result<JsValue, JsValue> {
    let rows = extract_word_rows_lenient(text).map_err(to_js_error)?;
    let normalized =
        AnimationSequence::from_word_rows(&rows, ShortRowPolicy::Skip).map_err(to_js_error)?;
    log_notices(&normalized.notices);

    serde_wasm_bindgen::to_value(&editor_frames(&normalized.value))
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}
