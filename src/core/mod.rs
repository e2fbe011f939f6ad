// Browser-independent behaviour models; the DOM glue drives these.
pub mod constants;
pub mod content;
pub mod error;
pub mod gallery;
pub mod lyrics;
pub mod modal;
pub mod orbit;
pub mod read_more;
pub mod relay;
pub mod scroll;
pub mod tracker;
pub mod typing;
