// Shared behaviour tuning constants for the portfolio page.

// Navbar section tracking
pub const SECTION_THRESHOLD: f64 = 0.3; // fraction of a section that must be visible
pub const SECTION_ROOT_MARGIN: &str = "-100px 0px -100px 0px";

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Typing effect (milliseconds)
pub const TYPE_CHAR_MS: u32 = 100;
pub const DELETE_CHAR_MS: u32 = 50;
pub const PAUSE_AFTER_TYPE_MS: u32 = 2000;
pub const PAUSE_AFTER_DELETE_MS: u32 = 500;

// Orbit layout
pub const ORBIT_BASE_RADIUS_PX: f64 = 120.0;
pub const ORBIT_RADIUS_STEP_PX: f64 = 40.0;
pub const ORBIT_MIN_PERIOD_SEC: f64 = 15.0;
pub const ORBIT_PERIOD_SPAN_SEC: f64 = 15.0; // period drawn from [min, min + span)

// Lyric reveal
pub const LYRIC_CHAR_MS: u32 = 100;

// Gallery swipe
pub const SWIPE_THRESHOLD_PX: f64 = 50.0; // exclusive

// Smooth scroll
pub const HEADER_OFFSET_PX: f64 = 80.0;

// Photo modal
pub const PHOTO_BASE_URL: &str = "https://picsum.photos/600/400";
pub const PHOTO_MAX_ID: u32 = 1000;

// Email relay (public identifiers, safe to ship)
pub const RELAY_PUBLIC_KEY: &str = "sm08AnEPv9i2Vfjzu";
pub const RELAY_SERVICE_ID: &str = "service_jtnlzjh";
pub const RELAY_TEMPLATE_ID: &str = "template_1g0ebr8";
