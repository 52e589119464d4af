//! Chat-platform boundary: inbound event shape, outbound documents and the
//! delivery port. Everything platform-specific (webhooks, auth, rendering)
//! lives on the other side of [`port::ChatPort`].

pub mod document;
pub mod event;
pub mod port;

pub use document::{Document, Run};
pub use event::{InboundEvent, MessageNode};
pub use port::ChatPort;
