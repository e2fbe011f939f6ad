// Fixed page content: typing phrases, the lyric sheet and gallery media.

/// Phrases cycled by the hero typing effect.
pub const PHRASES: &[&str] = &[
    "Web Developer",
    "Front-End",
    "Problem Solver",
    "Code Explorer",
    "AI Explorer",
    "Innovator",
];

/// `(seconds, text)` pairs, sorted by time.
pub const LYRICS: &[(f64, &str)] = &[
    (1.0, "I've been too busy, ignoring, and hiding"),
    (7.0, "About what my heart actually say"),
    (17.0, "Stay awake while"),
    (19.0, "I'm drowning on my thoughts"),
    (24.0, "Sometimes a happiness is just a happiness"),
    (35.0, "I've never been enjoyin' my serenity"),
    (41.0, "Even if I've got a lot of company"),
    (46.0, "That makes me happy"),
    (50.0, "Soul try to figure it out"),
    (55.0, "From where I've been escapin'"),
    (60.0, "Running to end all the sin"),
    (64.0, "Get away from the pressure"),
    (68.0, "Wondering to get a love that is so pure"),
    (76.0, "Gotta have to always make sure"),
    (80.0, "That I'm not just somebody's pleasure"),
];

pub const GALLERY_IMAGES: &[&str] = &[
    "img/gallery/1.jpg",
    "img/gallery/2.jpg",
    "img/gallery/3.JPG",
    "img/gallery/4.jpg",
    "img/gallery/5.jpg",
    "img/gallery/6.jpg",
    "img/gallery/7.JPG",
];

pub const GALLERY_VIDEOS: &[&str] = &[
    "video/1.mp4",
    "video/2.mp4",
    "video/3.mp4",
    "video/4.mp4",
    "video/6.mp4",
    "video/6.mp4",
];
