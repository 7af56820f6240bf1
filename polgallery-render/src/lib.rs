pub mod asset;
pub mod comparison;
pub mod error;
pub mod gallery;

pub use asset::{decode_batch, decode_png, resolve, AssetRequest, RgbaImage};
pub use comparison::{build_comparison, ComparisonSlot, ComparisonView, SlotImage};
pub use error::RenderError;
pub use gallery::{build_gallery, compare_records, GalleryCard, GalleryGroup, GalleryView};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
