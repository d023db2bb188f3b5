use heapless::Vec;
use log::warn;

use super::{GalleryImage, ImageSource, static_gallery::DEFAULT_IMAGES};

/// Upper bound on configured gallery entries per page section.
pub const MAX_GALLERY_IMAGES: usize = 16;

/// Default titles rotated across configured URLs, in site order.
const SECTION_TITLES: [&str; 8] = [
    "Research Lab",
    "Innovation Space",
    "Team Collaboration",
    "Advanced Equipment",
    "Design Studio",
    "Testing Facility",
    "Workshop Area",
    "Presentation Room",
];

/// Gallery built from a plain ordered URL list, the shape the site
/// settings backend stores. Titles come from the rotating default list.
#[derive(Clone, Debug)]
pub struct UrlGallery<'a> {
    images: Vec<GalleryImage<'a>, MAX_GALLERY_IMAGES>,
}

impl<'a> UrlGallery<'a> {
    pub fn from_urls(urls: &[&'a str]) -> Self {
        let mut images = Vec::new();

        for (index, url) in urls.iter().copied().enumerate() {
            let image = GalleryImage {
                title: SECTION_TITLES[index % SECTION_TITLES.len()],
                url,
            };
            if images.push(image).is_err() {
                warn!(
                    "gallery: dropping configured entries beyond {}",
                    MAX_GALLERY_IMAGES
                );
                break;
            }
        }

        Self { images }
    }

    /// Substitutes [`DEFAULT_IMAGES`] when `urls` is empty.
    pub fn from_urls_or_default(urls: &[&'a str]) -> Self {
        let mut gallery = Self::from_urls(urls);
        if gallery.images.is_empty() {
            for image in DEFAULT_IMAGES {
                let _ = gallery.images.push(image);
            }
        }
        gallery
    }
}

impl ImageSource for UrlGallery<'_> {
    fn image_count(&self) -> u16 {
        self.images.len() as u16
    }

    fn image_at(&self, index: u16) -> Option<GalleryImage<'_>> {
        self.images.get(index as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_rotate_through_the_default_list() {
        let urls: std::vec::Vec<&str> = (0..9).map(|_| "https://example.org/x.jpg").collect();
        let gallery = UrlGallery::from_urls(&urls);

        assert_eq!(gallery.image_count(), 9);
        assert_eq!(gallery.image_at(0).unwrap().title, "Research Lab");
        assert_eq!(gallery.image_at(1).unwrap().title, "Innovation Space");
        assert_eq!(gallery.image_at(7).unwrap().title, "Presentation Room");
        assert_eq!(gallery.image_at(8).unwrap().title, "Research Lab");
    }

    #[test]
    fn keeps_url_order() {
        let gallery = UrlGallery::from_urls(&["https://a.example/1", "https://a.example/2"]);

        assert_eq!(gallery.image_at(0).unwrap().url, "https://a.example/1");
        assert_eq!(gallery.image_at(1).unwrap().url, "https://a.example/2");
    }

    #[test]
    fn empty_list_stays_empty_without_fallback() {
        let gallery = UrlGallery::from_urls(&[]);

        assert!(gallery.is_empty());
    }

    #[test]
    fn empty_list_falls_back_to_default_sequence() {
        let gallery = UrlGallery::from_urls_or_default(&[]);

        assert_eq!(gallery.image_count(), 6);
        assert_eq!(gallery.image_at(0).unwrap().title, "Research Lab");
    }

    #[test]
    fn overflowing_list_is_capped() {
        let urls: std::vec::Vec<&str> = (0..24).map(|_| "https://example.org/x.jpg").collect();
        let gallery = UrlGallery::from_urls(&urls);

        assert_eq!(gallery.image_count(), MAX_GALLERY_IMAGES as u16);
    }
}
