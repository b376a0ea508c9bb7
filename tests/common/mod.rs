#![allow(dead_code)]

pub mod fixtures;

use quire::{DrawOp, QuireError, RenderBuilder, RenderOutput};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a renderer from a JSON skeleton and runs one pass.
pub fn render_json(skeleton: &Value) -> Result<RenderOutput, QuireError> {
    let source = serde_json::to_string(skeleton)?;
    RenderBuilder::new()
        .with_skeleton_source(&source)?
        .build()?
        .render(None)
}

/// Text of every `fillText` op, in paint order.
pub fn painted_texts(ops: &[DrawOp]) -> Vec<String> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::FillText { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

pub fn rotations(ops: &[DrawOp]) -> Vec<f64> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Rotate { angle } => Some(*angle),
            _ => None,
        })
        .collect()
}
