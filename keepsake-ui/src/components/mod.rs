//! Gallery components

pub mod gallery;
pub mod icons;
pub mod lightbox;
pub mod thumbnail;

pub use gallery::Gallery;
pub use icons::{CameraIcon, ChevronLeftIcon, ChevronRightIcon, PlayIcon, XIcon};
pub use lightbox::LightboxView;
pub use thumbnail::GalleryThumbnail;
