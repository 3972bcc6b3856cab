//! Highlight capture names and their CSS classes
//!
//! Tree-sitter queries tag nodes with hierarchical capture names; pages style
//! code with the short Pygments class names the stylesheet knows about.

/// Wraps every highlighted blob
pub const HIGHLIGHT_START: &str = "<div class=\"highlight\"><pre>";
pub const HIGHLIGHT_END: &str = "</pre></div>";

/// Standard tree-sitter capture names mapped to CSS classes.
/// Index into this array is the HighlightId.
pub const HIGHLIGHT_CLASSES: &[(&str, &str)] = &[
    ("attribute", "nd"),            // @attribute (decorators, #[derive])
    ("boolean", "kc"),              // @boolean (true, false)
    ("comment", "c1"),              // @comment
    ("constant", "no"),             // @constant
    ("constant.builtin", "kc"),     // @constant.builtin (nil, None)
    ("constructor", "nc"),          // @constructor
    ("escape", "se"),               // @escape (string escapes)
    ("function", "nf"),             // @function
    ("function.builtin", "nb"),     // @function.builtin (len, print)
    ("function.macro", "nf"),       // @function.macro (println!)
    ("function.method", "nf"),      // @function.method
    ("keyword", "k"),               // @keyword
    ("keyword.function", "kd"),     // @keyword.function (fn, def, func)
    ("keyword.operator", "ow"),     // @keyword.operator (and, or, not)
    ("label", "nl"),                // @label
    ("module", "nn"),               // @module
    ("number", "m"),                // @number
    ("operator", "o"),              // @operator
    ("property", "na"),             // @property
    ("punctuation", "p"),           // @punctuation (general)
    ("string", "s"),                // @string
    ("string.escape", "se"),        // @string.escape
    ("string.special", "sr"),       // @string.special (regex, heredoc)
    ("tag", "nt"),                  // @tag
    ("type", "kt"),                 // @type
    ("type.builtin", "kt"),         // @type.builtin (int, str, bool)
    ("variable", "nv"),             // @variable
    ("variable.builtin", "bp"),     // @variable.builtin (self, this)
    ("variable.parameter", "nv"),   // @variable.parameter
];

/// Index into HIGHLIGHT_CLASSES
pub type HighlightId = u16;

/// Look up highlight ID by capture name
pub fn highlight_id_for_name(name: &str) -> Option<HighlightId> {
    // Handle hierarchical names: try exact match first, then progressively shorter
    // parents (e.g. "keyword.control.import" -> "keyword.control" -> "keyword").
    let mut current = name;
    loop {
        if let Some(pos) = HIGHLIGHT_CLASSES.iter().position(|&(n, _)| n == current) {
            return Some(pos as HighlightId);
        }

        let Some(dot_pos) = current.rfind('.') else {
            break;
        };
        current = &current[..dot_pos];
    }

    None
}

/// CSS class for a highlight ID
pub fn css_class(id: HighlightId) -> &'static str {
    HIGHLIGHT_CLASSES
        .get(id as usize)
        .map_or("", |&(_, class)| class)
}

/// CSS class for a capture name, if the name (or one of its parents) is known
pub fn css_class_for_capture(name: &str) -> Option<&'static str> {
    highlight_id_for_name(name).map(css_class)
}
