//! Ordered frame sequences.
//!
//! A scrub animation is driven by a set of sequentially numbered images.
//! [`FrameSequence`] collects their URLs, keeps the ones with a recognized
//! raster extension, and orders them by the decimal integer embedded in the
//! filename — numerically, so `frame_2` precedes `frame_10`.

/// File extensions recognized as sequence frames (case-insensitive).
const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// An ordered set of frame image URLs.
///
/// Display indices are 1-based: `get(1)` is the first frame and `get(len())`
/// the last, matching the index range the scroll mapper produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<String>,
}

impl FrameSequence {
    /// Collects and orders the frame URLs.
    ///
    /// URLs without a supported extension are skipped. The remaining URLs
    /// are sorted ascending by the first run of decimal digits in their
    /// final path segment; URLs without digits sort first (key 0), and
    /// equal keys keep their input order.
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut frames: Vec<String> = urls
            .into_iter()
            .map(Into::into)
            .filter(|url| has_supported_extension(url))
            .collect();
        frames.sort_by_key(|url| numeric_key(url));
        Self { frames }
    }

    /// Number of frames in the sequence.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if the sequence contains no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the frame URL at the 1-based `display_index`.
    ///
    /// Indices outside `1..=len()` return `None`; the scroll mapper can
    /// produce them when the page overscrolls past either end.
    pub fn get(&self, display_index: usize) -> Option<&str> {
        display_index
            .checked_sub(1)
            .and_then(|index| self.frames.get(index))
            .map(String::as_str)
    }

    /// The first frame, used as the initial texture.
    pub fn first(&self) -> Option<&str> {
        self.frames.first().map(String::as_str)
    }

    /// Iterates over the ordered frame URLs.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(String::as_str)
    }
}

/// Sort key: the first run of decimal digits in the final path segment.
///
/// URLs without digits get key 0 and therefore sort first.
fn numeric_key(url: &str) -> u64 {
    let name = url.rsplit('/').next().unwrap_or(url);
    name.chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .fold(0u64, |key, digit| {
            key.saturating_mul(10)
                .saturating_add(u64::from(digit as u8 - b'0'))
        })
}

/// Returns `true` if the URL ends in a supported raster extension.
fn has_supported_extension(url: &str) -> bool {
    url.rsplit('.').next().is_some_and(|extension| {
        SUPPORTED_EXTENSIONS
            .iter()
            .any(|supported| extension.eq_ignore_ascii_case(supported))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_order() {
        let sequence = FrameSequence::new(["img2.png", "img10.png", "img1.png"]);
        let ordered: Vec<&str> = sequence.iter().collect();
        assert_eq!(ordered, ["img1.png", "img2.png", "img10.png"]);
    }

    #[test]
    fn test_digitless_names_sort_first() {
        let sequence = FrameSequence::new(["shot_3.jpg", "cover.jpg", "shot_1.jpg"]);
        let ordered: Vec<&str> = sequence.iter().collect();
        assert_eq!(ordered, ["cover.jpg", "shot_1.jpg", "shot_3.jpg"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let sequence = FrameSequence::new(["b7.png", "a7.png", "c7.png"]);
        let ordered: Vec<&str> = sequence.iter().collect();
        assert_eq!(ordered, ["b7.png", "a7.png", "c7.png"]);
    }

    #[test]
    fn test_extension_filter() {
        let sequence = FrameSequence::new([
            "frame_1.PNG",
            "frame_2.Jpg",
            "frame_3.JPEG",
            "frame_4.gif",
            "notes.txt",
            "frame_5",
        ]);
        let ordered: Vec<&str> = sequence.iter().collect();
        assert_eq!(ordered, ["frame_1.PNG", "frame_2.Jpg", "frame_3.JPEG"]);
    }

    #[test]
    fn test_key_ignores_directory_digits() {
        assert_eq!(numeric_key("assets/10/frame2.png"), 2);
        assert_eq!(numeric_key("assets/images/drift_042.jpg"), 42);
        assert_eq!(numeric_key("cover.png"), 0);
    }

    #[test]
    fn test_display_indices_are_one_based() {
        let sequence = FrameSequence::new(["a1.png", "a2.png", "a3.png"]);
        assert_eq!(sequence.get(0), None);
        assert_eq!(sequence.get(1), Some("a1.png"));
        assert_eq!(sequence.get(3), Some("a3.png"));
        assert_eq!(sequence.get(4), None);
        assert_eq!(sequence.first(), sequence.get(1));
    }
}
