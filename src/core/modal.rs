use super::constants::{PHOTO_BASE_URL, PHOTO_MAX_ID};
use rand::Rng;

/// Open/closed state of the photo modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape closes an open modal; returns whether the state changed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.open = false;
            true
        } else {
            false
        }
    }

    pub fn display(&self) -> &'static str {
        if self.open {
            "block"
        } else {
            "none"
        }
    }
}

/// Placeholder photo URL with a cache-busting id in `1..=PHOTO_MAX_ID`.
pub fn random_photo_url<R: Rng + ?Sized>(rng: &mut R) -> String {
    let id = rng.gen_range(1..=PHOTO_MAX_ID);
    format!("{}?random={}", PHOTO_BASE_URL, id)
}
