//! Renders a document skeleton onto a drawing surface.
//!
//! [`Documents`] walks pages → sections → columns → lines → divides → spans once
//! per draw pass. It resolves alignment and rotation per page, threads offsets
//! down the tree with a [`Liquid`] cursor, and hands every paintable unit to the
//! registered extensions in registration order.

pub mod align;
pub mod config;
pub mod documents;
pub mod extension;
pub mod liquid;
pub mod observable;
pub mod rotation;

pub use self::align::{PagePadding, horizontal_offset, vertical_offset};
pub use self::config::{DocumentOffsetConfig, DocumentsConfig};
pub use self::documents::{Documents, DrawStats};
pub use self::extension::{
    BlockPlaceholder, DocsExtension, ExtensionKind, ExtensionOffset, ExtensionRegistry,
    FontAndBaseline, LineExtension, SpanBackground, SpanDecoration, SpanExtension,
    default_extensions,
};
pub use self::liquid::{Liquid, LiquidScope};
pub use self::observable::{ObserverId, PageRenderEvent, PageRenderObservable};
pub use self::rotation::{
    RotatedAlignment, RotatedEnvelope, rotate_point, rotated_alignment, rotated_envelope,
};

#[cfg(test)]
mod test_utils;
