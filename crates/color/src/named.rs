//! Named colors recognized by [`Color::parse`](crate::Color::parse).

/// Look up a named color (case-insensitive, `-`/`_`/space insensitive).
pub(crate) fn lookup(name: &str) -> Option<(u8, u8, u8)> {
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let rgb = match key.as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "maroon" => (128, 0, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "navy" => (0, 0, 128),
        "yellow" => (255, 255, 0),
        "olive" => (128, 128, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "teal" => (0, 128, 128),
        "magenta" | "fuchsia" => (255, 0, 255),
        "purple" => (128, 0, 128),
        "silver" => (192, 192, 192),
        "gray" | "grey" => (128, 128, 128),
        "darkgray" | "darkgrey" => (169, 169, 169),
        "lightgray" | "lightgrey" => (211, 211, 211),
        "orange" => (255, 165, 0),
        "pink" => (255, 192, 203),
        "brown" => (165, 42, 42),
        "gold" => (255, 215, 0),
        "indigo" => (75, 0, 130),
        "violet" => (238, 130, 238),
        "crimson" => (220, 20, 60),
        "coral" => (255, 127, 80),
        "salmon" => (250, 128, 114),
        "tomato" => (255, 99, 71),
        "khaki" => (240, 230, 140),
        "turquoise" => (64, 224, 208),
        "skyblue" => (135, 206, 235),
        "steelblue" => (70, 130, 180),
        "royalblue" => (65, 105, 225),
        "dodgerblue" => (30, 144, 255),
        "forestgreen" => (34, 139, 34),
        "seagreen" => (46, 139, 87),
        "darkorange" => (255, 140, 0),
        "firebrick" => (178, 34, 34),
        "slategray" | "slategrey" => (112, 128, 144),
        "whitesmoke" => (245, 245, 245),
        // ANSI bright variants
        "brightblack" => (128, 128, 128),
        "brightred" => (255, 85, 85),
        "brightgreen" => (85, 255, 85),
        "brightyellow" => (255, 255, 85),
        "brightblue" => (85, 85, 255),
        "brightmagenta" => (255, 85, 255),
        "brightcyan" => (85, 255, 255),
        "brightwhite" => (255, 255, 255),
        _ => return None,
    };
    Some(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_normalizes_key() {
        assert_eq!(lookup("Dark-Gray"), Some((169, 169, 169)));
        assert_eq!(lookup("BRIGHT_RED"), Some((255, 85, 85)));
        assert_eq!(lookup("sky blue"), Some((135, 206, 235)));
        assert_eq!(lookup("blurple"), None);
    }
}
