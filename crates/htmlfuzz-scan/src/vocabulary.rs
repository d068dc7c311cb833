//! Reference vocabularies
//!
//! Coverage is measured against these fixed lists. Entries are lower-case
//! and unique within each list.

/// Current HTML5 element names
pub const HTML5_TAGS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col",
    "colgroup", "data", "datalist", "dd", "del", "dfn", "div", "dl", "dt", "em", "embed",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "head", "header", "hr", "html", "i", "iframe", "img", "input", "ins", "kbd", "keygen",
    "label", "legend", "li", "link", "main", "map", "mark", "meta", "meter", "nav", "noscript",
    "object", "ol", "optgroup", "option", "output", "p", "param", "pre", "progress", "q", "rb",
    "rp", "rt", "rtc", "ruby", "s", "samp", "script", "section", "select", "small", "source",
    "span", "strong", "style", "sub", "sup", "table", "tbody", "td", "template", "textarea",
    "tfoot", "th", "thead", "time", "title", "tr", "track", "u", "ul", "var", "video", "wbr",
];

/// Obsolete and non-standard element names
pub const OBSOLETE_TAGS: &[&str] = &[
    "acronym", "app", "applet", "basefont", "bgsound", "big", "blink", "center", "command",
    "comment", "details", "dialog", "dir", "frame", "frameset", "hgroup", "hp0", "hp1", "hp2",
    "hp3", "hype", "ilayer", "image", "isindex", "key", "layer", "listing", "marquee", "menu",
    "menuitem", "multicol", "nextid", "nobr", "noembed", "noframes", "plaintext", "server",
    "sound", "spacer", "strike", "summary", "tt", "typewriter", "xmp",
];

/// Attribute names
pub const ATTRIBUTES: &[&str] = &[
    "abbr", "above", "accept", "accept-charset", "accesskey", "action", "align", "alink",
    "alt", "archive", "async", "autocomplete", "autofocus", "autoplay", "axis", "background",
    "balance", "behavior", "below", "bgcolor", "border", "cellpadding", "cellspacing",
    "challenge", "char", "charoff", "charset", "checked", "cite", "class", "clip", "code",
    "codebase", "color", "cols", "compact", "content", "contenteditable", "contextmenu",
    "controls", "coords", "crossorigin", "datetime", "declare", "default", "defer", "dir",
    "direction", "dirname", "download", "draggable", "dropzone", "enctype", "face", "for",
    "form", "formaction", "formenctype", "formmethod", "formnovalidate", "formtarget", "frame",
    "frameborder", "headers", "height", "hidden", "high", "href", "hreflang", "hspace", "icon",
    "id", "keytype", "kind", "label", "lang", "left", "link", "list", "longdesc", "loop",
    "low", "max", "maxlength", "marginheight", "marginwidth", "media", "method", "min",
    "multiple", "name", "noresize", "noshade", "novalidate", "nowrap", "object", "optimum",
    "pagex", "pagey", "pattern", "placeholder", "preload", "radiogroup", "readonly", "rel",
    "required", "rev", "reversed", "rows", "rules", "sandbox", "scheme", "scope", "scoped",
    "scrollamount", "scrolldelay", "scrolling", "selected", "sortable", "shape", "size",
    "sizes", "span", "spellcheck", "src", "srcdoc", "srclang", "standby", "start", "step",
    "style", "summary", "tabindex", "target", "text", "title", "top", "translate", "type",
    "value", "valuetype", "visibility", "vlink", "vspace", "width", "wrap", "z-index",
];

/// The three vocabularies a corpus is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary<'a> {
    /// Current element names
    pub html5_tags: &'a [&'a str],
    /// Obsolete element names
    pub obsolete_tags: &'a [&'a str],
    /// Attribute names
    pub attributes: &'a [&'a str],
}

impl Vocabulary<'static> {
    /// Built-in reference lists
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            html5_tags: HTML5_TAGS,
            obsolete_tags: OBSOLETE_TAGS,
            attributes: ATTRIBUTES,
        }
    }
}

impl Default for Vocabulary<'static> {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn distinct(list: &[&str]) -> usize {
        list.iter().collect::<BTreeSet<_>>().len()
    }

    #[test]
    fn list_sizes() {
        assert_eq!(HTML5_TAGS.len(), 108);
        assert_eq!(OBSOLETE_TAGS.len(), 44);
        assert_eq!(ATTRIBUTES.len(), 147);
    }

    #[test]
    fn entries_are_unique_and_lower_case() {
        for list in [HTML5_TAGS, OBSOLETE_TAGS, ATTRIBUTES] {
            assert_eq!(distinct(list), list.len());
            assert!(list.iter().all(|name| name.to_ascii_lowercase() == *name));
        }
    }

    #[test]
    fn tag_lists_are_disjoint() {
        let current: BTreeSet<_> = HTML5_TAGS.iter().collect();
        assert!(OBSOLETE_TAGS.iter().all(|tag| !current.contains(tag)));
    }
}
