use serde_json::{Value, json};

/// A single A5-ish page with one text line of two spans.
pub fn single_page_skeleton() -> Value {
    json!({
        "pages": [{
            "width": 420,
            "height": 595,
            "marginTop": 20,
            "marginLeft": 30,
            "sections": [{
                "top": 0,
                "columns": [{
                    "left": 0,
                    "width": 360,
                    "lines": [{
                        "type": "TEXT",
                        "top": 0,
                        "asc": 9,
                        "lineHeight": 14,
                        "divides": [{
                            "spanGroup": [
                                { "content": "Hello", "width": 28, "left": 0 },
                                { "content": "", "width": 0, "left": 28 },
                                { "content": "world", "width": 30, "left": 31,
                                  "style": { "bold": true, "underline": true } }
                            ]
                        }]
                    }]
                }]
            }]
        }]
    })
}

/// `count` identical pages, each `height` tall with `lines` text lines.
pub fn multi_page_skeleton(count: usize, height: f64, lines: usize) -> Value {
    let lines: Vec<Value> = (0..lines)
        .map(|i| {
            json!({
                "type": "TEXT",
                "top": i as f64 * 16.0,
                "asc": 10,
                "lineHeight": 16,
                "divides": [{
                    "spans": [
                        { "content": format!("line {}", i), "width": 40, "left": 0 },
                        { "content": "tail", "width": 20, "left": 44,
                          "style": { "background": "#FFEE00" } }
                    ]
                }]
            })
        })
        .collect();
    let page = json!({
        "width": 400,
        "height": height,
        "sections": [{ "top": 0, "columns": [{ "left": 0, "width": 400, "lines": lines }] }]
    });
    json!({ "pages": vec![page; count] })
}

/// One page whose text is skewed by `vertex_angle` degrees.
pub fn rotated_skeleton(vertex_angle: f64, wrap_strategy: &str) -> Value {
    json!({
        "pages": [{
            "width": 300,
            "height": 200,
            "renderConfig": {
                "vertexAngle": vertex_angle,
                "wrapStrategy": wrap_strategy,
                "horizontalAlign": "CENTER"
            },
            "sections": [{
                "columns": [{
                    "width": 300,
                    "lines": [
                        { "top": 0, "asc": 10, "lineHeight": 14,
                          "divides": [{ "spans": [{ "content": "slanted", "width": 50 }] }] },
                        { "top": 14, "asc": 10, "lineHeight": 14,
                          "divides": [{ "spans": [{ "content": "text", "width": 30 }] }] }
                    ]
                }]
            }]
        }]
    })
}

/// A page mixing a block line between two text lines.
pub fn block_skeleton() -> Value {
    json!({
        "pages": [{
            "width": 300,
            "height": 200,
            "sections": [{
                "columns": [{
                    "width": 300,
                    "lines": [
                        { "top": 0, "lineHeight": 14,
                          "divides": [{ "spans": [{ "content": "above", "width": 30 }] }] },
                        { "type": "BLOCK", "top": 14, "width": 120, "lineHeight": 60 },
                        { "top": 74, "lineHeight": 14,
                          "divides": [{ "spans": [{ "content": "below", "width": 30 }] }] }
                    ]
                }]
            }]
        }]
    })
}
