use super::{GalleryImage, ImageSource};

/// Lab-themed images shown until a configured gallery arrives.
pub const DEFAULT_IMAGES: [GalleryImage<'static>; 6] = [
    GalleryImage {
        title: "Research Lab",
        url: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=800&auto=format&fit=crop&q=60",
    },
    GalleryImage {
        title: "Circuit Design",
        url: "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800&auto=format&fit=crop&q=60",
    },
    GalleryImage {
        title: "Innovation Hub",
        url: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=800&auto=format&fit=crop&q=60",
    },
    GalleryImage {
        title: "Team Collaboration",
        url: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800&auto=format&fit=crop&q=60",
    },
    GalleryImage {
        title: "Robotics Lab",
        url: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=800&auto=format&fit=crop&q=60",
    },
    GalleryImage {
        title: "Data Center",
        url: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&auto=format&fit=crop&q=60",
    },
];

/// Gallery over a borrowed, pre-titled image slice.
#[derive(Clone, Copy, Debug)]
pub struct SliceGallery<'a> {
    images: &'a [GalleryImage<'a>],
}

impl<'a> SliceGallery<'a> {
    pub const fn new(images: &'a [GalleryImage<'a>]) -> Self {
        Self { images }
    }

    /// Substitutes [`DEFAULT_IMAGES`] when `images` is empty.
    pub const fn with_fallback(images: &'a [GalleryImage<'a>]) -> Self {
        if images.is_empty() {
            Self {
                images: &DEFAULT_IMAGES,
            }
        } else {
            Self { images }
        }
    }
}

impl ImageSource for SliceGallery<'_> {
    fn image_count(&self) -> u16 {
        self.images.len().min(u16::MAX as usize) as u16
    }

    fn image_at(&self, index: u16) -> Option<GalleryImage<'_>> {
        self.images.get(index as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_order_of_provided_images() {
        let images = [
            GalleryImage {
                title: "One",
                url: "https://example.org/1.jpg",
            },
            GalleryImage {
                title: "Two",
                url: "https://example.org/2.jpg",
            },
        ];
        let gallery = SliceGallery::with_fallback(&images);

        assert_eq!(gallery.image_count(), 2);
        assert_eq!(gallery.image_at(0).unwrap().title, "One");
        assert_eq!(gallery.image_at(1).unwrap().url, "https://example.org/2.jpg");
        assert_eq!(gallery.image_at(2), None);
    }

    #[test]
    fn empty_slice_falls_back_to_default_sequence() {
        let gallery = SliceGallery::with_fallback(&[]);

        assert_eq!(gallery.image_count(), 6);
        assert_eq!(gallery.image_at(0).unwrap().title, "Research Lab");
        assert_eq!(gallery.image_at(5).unwrap().title, "Data Center");
    }

    #[test]
    fn plain_constructor_keeps_empty_slice_empty() {
        let gallery = SliceGallery::new(&[]);

        assert!(gallery.is_empty());
        assert_eq!(gallery.image_at(0), None);
    }
}
