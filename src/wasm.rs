//! JavaScript bindings.
//!
//! Compiled only with the `wasm` feature. Inputs and outputs cross the
//! boundary as plain JS values; `serde_wasm_bindgen` converts them against
//! the same `serde` shapes the native API exposes, so a criteria object
//! may omit any field it does not care about and its tag tokens parse
//! leniently, with unknown ones ignored.

use wasm_bindgen::prelude::*;

use crate::engine::{ProjectionRunner, SelectionCriteria, DEFAULT_VARIANT_COUNT};
use crate::model::{CourseDefinition, HistoryRecord};

/// Computes one selection.
///
/// `curriculum` is an array of course definitions, `history` an array of
/// recorded attempts, `criteria` a selection-criteria object.
#[wasm_bindgen(js_name = computeSelection)]
pub fn compute_selection(
    curriculum: JsValue,
    history: JsValue,
    criteria: JsValue,
) -> Result<JsValue, JsError> {
    let curriculum: Vec<CourseDefinition> = serde_wasm_bindgen::from_value(curriculum)?;
    let history: Vec<HistoryRecord> = serde_wasm_bindgen::from_value(history)?;
    let criteria: SelectionCriteria = serde_wasm_bindgen::from_value(criteria)?;
    let result = ProjectionRunner::compute_selection(&curriculum, &history, &criteria);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Computes the base selection plus alternates.
///
/// Omitting `max_count` asks for [`DEFAULT_VARIANT_COUNT`] results in
/// total; zero yields just the base.
#[wasm_bindgen(js_name = computeVariants)]
pub fn compute_variants(
    curriculum: JsValue,
    history: JsValue,
    criteria: JsValue,
    max_count: Option<usize>,
) -> Result<JsValue, JsError> {
    let curriculum: Vec<CourseDefinition> = serde_wasm_bindgen::from_value(curriculum)?;
    let history: Vec<HistoryRecord> = serde_wasm_bindgen::from_value(history)?;
    let criteria: SelectionCriteria = serde_wasm_bindgen::from_value(criteria)?;
    let results = ProjectionRunner::compute_variants(
        &curriculum,
        &history,
        &criteria,
        max_count.unwrap_or(DEFAULT_VARIANT_COUNT),
    );
    Ok(serde_wasm_bindgen::to_value(&results)?)
}
