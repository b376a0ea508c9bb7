use crate::documents::Documents;
use crate::extension::{DocsExtension, ExtensionOffset, LineExtension, SpanExtension};
use quire_render_core::{DrawingSurface, RenderError};
use quire_skeleton::{
    Column, Divide, DocumentSkeleton, Line, LineType, Page, RenderConfig, Section, SkeletonData,
    SkeletonProvider, Span,
};
use quire_types::{BoundRect, Scale};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn span(content: &str, left: f64, width: f64) -> Span {
    Span {
        content: content.to_string(),
        left,
        width,
        ..Span::default()
    }
}

pub fn text_line(top: f64, spans: Vec<Span>) -> Line {
    Line {
        line_type: LineType::Text,
        top,
        ascent: 10.0,
        line_height: 14.0,
        divides: vec![Divide {
            spans,
            ..Divide::default()
        }],
        ..Line::default()
    }
}

pub fn block_line(top: f64) -> Line {
    Line {
        line_type: LineType::Block,
        top,
        width: 100.0,
        line_height: 40.0,
        ..Line::default()
    }
}

pub fn page_with_lines(width: f64, height: f64, lines: Vec<Line>) -> Page {
    Page {
        width,
        height,
        sections: vec![Section {
            top: 0.0,
            columns: vec![Column {
                left: 0.0,
                width,
                lines,
            }],
        }],
        ..Page::default()
    }
}

pub fn empty_page(width: f64, height: f64) -> Page {
    Page {
        width,
        height,
        ..Page::default()
    }
}

pub fn with_config(mut page: Page, render_config: RenderConfig) -> Page {
    page.render_config = render_config;
    page
}

/// A component over `pages`, sized to fit the widest and tallest page, with
/// the default extensions removed.
pub fn bare_documents(pages: Vec<Page>) -> Documents {
    let width = pages.iter().map(|p| p.width).fold(0.0, f64::max);
    let height = pages.iter().map(|p| p.height).fold(0.0, f64::max);
    let skeleton: Arc<dyn SkeletonProvider> =
        Arc::new(DocumentSkeleton::new(SkeletonData { pages }));
    let mut documents = Documents::create("test", Some(skeleton), None);
    documents.resize(width, height);
    let keys: Vec<String> = documents.extensions().keys().map(str::to_string).collect();
    for key in keys {
        documents.extensions_mut().unregister(&key);
    }
    documents
}

/// Calls seen by a [`Recorder`], shared with the test body.
pub type CallLog = Rc<RefCell<Vec<RecordedCall>>>;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub key: String,
    pub unit: String,
    pub offset: ExtensionOffset,
}

/// Extension that records every dispatch and optionally fails on one span.
pub struct Recorder {
    key: String,
    log: CallLog,
    fail_on: Option<String>,
}

impl Recorder {
    pub fn new(key: &str, log: &CallLog) -> Self {
        Self {
            key: key.to_string(),
            log: Rc::clone(log),
            fail_on: None,
        }
    }

    pub fn failing_on(mut self, content: &str) -> Self {
        self.fail_on = Some(content.to_string());
        self
    }

    fn record(&self, unit: String, offset: &ExtensionOffset) {
        self.log.borrow_mut().push(RecordedCall {
            key: self.key.clone(),
            unit,
            offset: *offset,
        });
    }
}

impl SpanExtension for Recorder {
    fn key(&self) -> &str {
        &self.key
    }

    fn draw(
        &mut self,
        surface: &mut dyn DrawingSurface,
        _parent_scale: Scale,
        span: &Span,
        offset: &ExtensionOffset,
        _bounds: Option<&BoundRect>,
    ) -> Result<(), RenderError> {
        if self.fail_on.as_deref() == Some(span.content.as_str()) {
            return Err(RenderError::extension(&self.key, "refused span"));
        }
        self.record(span.content.clone(), offset);
        let point = offset.span_point_with_font;
        surface.fill_text(&span.content, point.x, point.y)
    }
}

/// Line-level twin of [`Recorder`].
pub struct LineRecorder(pub Recorder);

impl LineExtension for LineRecorder {
    fn key(&self) -> &str {
        &self.0.key
    }

    fn draw(
        &mut self,
        _surface: &mut dyn DrawingSurface,
        _parent_scale: Scale,
        line: &Line,
        offset: &ExtensionOffset,
        _bounds: Option<&BoundRect>,
    ) -> Result<(), RenderError> {
        self.0.record(format!("block@{}", line.top), offset);
        Ok(())
    }
}

pub fn new_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn recorder(key: &str, log: &CallLog) -> DocsExtension {
    DocsExtension::span(Recorder::new(key, log))
}
