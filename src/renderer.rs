use crate::error::QuireError;
use quire_docs::{Documents, DrawStats};
use quire_render_core::{DrawOp, RecordingSurface};
use quire_types::BoundRect;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Where a page landed during a pass, as reported by the page observable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOffset {
    pub index: usize,
    pub left: f64,
    pub top: f64,
}

/// Result of one recorded draw pass.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput {
    pub stats: DrawStats,
    pub pages: Vec<PageOffset>,
    pub ops: Vec<DrawOp>,
}

/// Runs draw passes of a configured [`Documents`] into a recording surface.
#[derive(Debug)]
pub struct DocumentRenderer {
    documents: Documents,
    page_offsets: Rc<RefCell<Vec<PageOffset>>>,
}

impl DocumentRenderer {
    pub fn new(mut documents: Documents) -> Self {
        let page_offsets = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&page_offsets);
        documents.on_page_render.add(move |event| {
            sink.borrow_mut().push(PageOffset {
                index: event.page_index,
                left: event.page_left,
                top: event.page_top,
            });
        });
        Self {
            documents,
            page_offsets,
        }
    }

    pub fn documents(&self) -> &Documents {
        &self.documents
    }

    pub fn documents_mut(&mut self) -> &mut Documents {
        &mut self.documents
    }

    /// Draws every page once and returns the recorded ops.
    pub fn render(&mut self, bounds: Option<&BoundRect>) -> Result<RenderOutput, QuireError> {
        self.page_offsets.borrow_mut().clear();
        let mut surface = RecordingSurface::new();
        let stats = self.documents.draw(&mut surface, bounds)?;
        let pages = self.page_offsets.borrow_mut().drain(..).collect();
        Ok(RenderOutput {
            stats,
            pages,
            ops: surface.take_ops(),
        })
    }
}
