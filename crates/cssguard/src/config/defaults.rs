//! Built-in allow-lists and limits.

/// Default input cap, in characters (64 KiB).
pub const DEFAULT_MAX_LENGTH: usize = 65536;

/// Declaration property names allowed out of the box.
///
/// `background-image` is deliberately absent; callers that want it must
/// add it, at which point its `url(...)` values go through the URL hooks.
pub const DEFAULT_ALLOWED_PROPERTIES: &[&str] = &[
    "color",
    "font-family",
    "font-size",
    "font-weight",
    "line-height",
    "text-align",
    "text-decoration",
    "text-transform",
    "letter-spacing",
    "display",
    "width",
    "height",
    "max-width",
    "max-height",
    "min-width",
    "min-height",
    "margin",
    "padding",
    "border",
    "background-color",
    "opacity",
    "box-shadow",
    "transform",
    "transition",
    "background",
    "animation",
    "animation-delay",
    "animation-direction",
    "animation-duration",
    "animation-fill-mode",
    "animation-iteration-count",
    "animation-name",
    "animation-play-state",
    "animation-timing-function",
    "cursor",
    "pointer-events",
    "user-select",
    "visibility",
    "word-break",
    "word-wrap",
    "overflow",
    "text-overflow",
    "clip-path",
    "filter",
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "z-index",
    "float",
    "clear",
    "object-fit",
    "object-position",
    "content",
    "overflow-x",
    "overflow-y",
    "text-shadow",
    "vertical-align",
    "white-space",
    "border-radius",
    "justify-content",
    "align-items",
    "flex-wrap",
    "flex-direction",
    "flex",
];

/// At-rule keywords that open a pass-through context.
pub const DEFAULT_ALLOWED_AT_RULES: &[&str] = &["@media", "@keyframes", "@font-face", "@import"];

/// Pseudo-classes carried in the configuration. Not consulted by the scanner.
pub const DEFAULT_ALLOWED_PSEUDO_CLASSES: &[&str] = &[
    ":hover",
    ":active",
    ":focus",
    ":visited",
    ":first-child",
    ":last-child",
    ":nth-child",
    ":nth-of-type",
    ":not",
    ":before",
    ":after",
];

/// Hosts the default URL sanitizer lets through.
pub const DEFAULT_ALLOWED_HOSTS: &[&str] = &["fonts.googleapis.com"];
