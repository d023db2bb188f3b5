//! Image sequences feeding the carousel.

mod static_gallery;
mod url_list;

pub use static_gallery::{DEFAULT_IMAGES, SliceGallery};
pub use url_list::{MAX_GALLERY_IMAGES, UrlGallery};

/// One gallery entry. Immutable once constructed; identity is the `url`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GalleryImage<'a> {
    pub title: &'a str,
    pub url: &'a str,
}

/// Read-only ordered image sequence.
pub trait ImageSource {
    fn image_count(&self) -> u16;
    fn image_at(&self, index: u16) -> Option<GalleryImage<'_>>;

    fn is_empty(&self) -> bool {
        self.image_count() == 0
    }
}
