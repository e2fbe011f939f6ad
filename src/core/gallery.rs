// Media gallery navigation: mode, clamped index and swipe detection.

use super::constants::SWIPE_THRESHOLD_PX;
use super::error::CoreError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl FromStr for MediaKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            other => Err(CoreError::UnknownMode(other.to_string())),
        }
    }
}

/// The item the viewer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaItem<'a> {
    pub kind: MediaKind,
    pub src: &'a str,
}

pub struct Gallery {
    images: Vec<String>,
    videos: Vec<String>,
    mode: MediaKind,
    index: usize,
    touch_start_x: Option<f64>,
}

impl Gallery {
    pub fn new<S: AsRef<str>>(images: &[S], videos: &[S]) -> Result<Self, CoreError> {
        if images.is_empty() {
            return Err(CoreError::EmptyMediaList(MediaKind::Image.as_str()));
        }
        if videos.is_empty() {
            return Err(CoreError::EmptyMediaList(MediaKind::Video.as_str()));
        }
        Ok(Self {
            images: images.iter().map(|s| s.as_ref().to_string()).collect(),
            videos: videos.iter().map(|s| s.as_ref().to_string()).collect(),
            mode: MediaKind::Image,
            index: 0,
            touch_start_x: None,
        })
    }

    fn list(&self) -> &[String] {
        match self.mode {
            MediaKind::Image => &self.images,
            MediaKind::Video => &self.videos,
        }
    }

    pub fn mode(&self) -> MediaKind {
        self.mode
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    pub fn current(&self) -> MediaItem<'_> {
        MediaItem {
            kind: self.mode,
            src: &self.list()[self.index],
        }
    }

    pub fn set_mode(&mut self, mode: MediaKind) {
        self.mode = mode;
        self.index = 0;
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.len() {
            self.index += 1;
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch_start_x = Some(x);
    }

    /// Completes a swipe. A leftward drag beyond the threshold advances, a
    /// rightward one retreats; a drag of exactly the threshold does nothing.
    pub fn touch_end(&mut self, x: f64) {
        let Some(start) = self.touch_start_x.take() else {
            return;
        };
        let diff = start - x;
        if diff > SWIPE_THRESHOLD_PX {
            self.next();
        } else if diff < -SWIPE_THRESHOLD_PX {
            self.prev();
        }
    }
}
