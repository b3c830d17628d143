/// Gallery captions, in the order the gallery items are rendered.
pub static CAPTIONS: [&str; 6] = [
    "Live performance at The Junction",
    "Audience engagement during monthly showcase",
    "Beginner workshop in action",
    "The IMPROV.AE team",
    "Pre-show warm-up exercises",
    "Interactive comedy games with audience",
];
