/// The closed set of marker roles drawn on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    You,
    Friend,
    Midpoint,
    Place,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub background: &'static str,
    pub border_color: &'static str,
    pub glyph_color: &'static str,
    pub glyph: Option<char>,
    pub scale: f32,
}

const WHITE: &str = "#ffffff";

impl MarkerKind {
    pub fn style(self) -> MarkerStyle {
        let (background, glyph, scale) = match self {
            MarkerKind::You => ("#2563eb", Some('Y'), 1.2),
            MarkerKind::Friend => ("#16a34a", Some('F'), 1.2),
            MarkerKind::Midpoint => ("#dc2626", Some('M'), 1.0),
            MarkerKind::Place => ("#ef4444", None, 1.0),
        };

        MarkerStyle {
            background,
            border_color: WHITE,
            glyph_color: WHITE,
            glyph,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_enlarged_and_labelled() {
        let you = MarkerKind::You.style();
        let friend = MarkerKind::Friend.style();

        assert_eq!(you.glyph, Some('Y'));
        assert_eq!(friend.glyph, Some('F'));
        assert_eq!(you.scale, 1.2);
        assert_ne!(you.background, friend.background);
    }

    #[test]
    fn places_use_the_default_pin() {
        let style = MarkerKind::Place.style();

        assert_eq!(style.glyph, None);
        assert_eq!(style.scale, 1.0);
        assert_eq!(style.border_color, "#ffffff");
    }
}
