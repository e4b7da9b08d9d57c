//! MediaLive shapes
//!
//! Every shape is a partial record: each field is independently present or
//! absent, and absence means "let the service decide", never zero. Shapes are
//! built incrementally through `set_*`/`with_*` accessors, compared
//! structurally, rendered with `Display` and serialized by [`crate::wire`].
//!
//! Field values are not validated here. Out-of-range numbers and unknown
//! enumeration tokens are accepted and reported by the service, if at all.

#[macro_use]
mod macros;

pub mod hash;
pub mod render;

pub mod audio;
pub mod captions;
pub mod encoder;
pub mod enums;
pub mod output;
pub mod reservation;
pub mod video;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use hash::{StructuralEq, StructuralHash};
pub use render::Render;

pub use audio::*;
pub use captions::*;
pub use encoder::*;
pub use enums::*;
pub use output::*;
pub use reservation::*;
pub use video::*;

/// Common surface of every generated shape.
pub trait Shape:
    fmt::Debug
    + fmt::Display
    + Clone
    + Default
    + PartialEq
    + Eq
    + StructuralEq
    + StructuralHash
    + Render
    + Serialize
    + DeserializeOwned
{
    /// Shape name as used by the service.
    const NAME: &'static str;

    /// Wire names of the fields, in declaration order.
    const FIELDS: &'static [&'static str];
}
