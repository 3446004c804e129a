//! Shared styles referenced by placemarks.

use std::fmt;

/// An RGBA colour.
///
/// KML spells colours as `aabbggrr` hex, which is what [`fmt::Display`]
/// produces.
///
/// # Examples
///
/// ```
/// use xctransfer_core::Color;
///
/// let orange = Color::rgba(237, 100, 0, 255);
/// assert_eq!(orange.to_string(), "ff0064ed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Construct a colour from its channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}",
            self.a, self.b, self.g, self.r
        )
    }
}

/// Identifier of one of the three shared styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
    /// Orange route line over a translucent green fill.
    Route,
    /// Waypoint icon.
    Waypoint,
    /// Findpoint icon.
    Findpoint,
}

impl StyleId {
    /// The `id` attribute of the style element.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Route => "orangeLineGreenPoly",
            Self::Waypoint => "wayPoint",
            Self::Findpoint => "findPoint",
        }
    }

    /// The `styleUrl` a placemark uses to reference this style.
    pub fn url(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line colour and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke colour.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
}

/// Fill colour for the area under a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolyStyle {
    /// Fill colour.
    pub color: Color,
}

/// Tint applied to a point icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStyle {
    /// Icon colour.
    pub color: Color,
}

/// A shared `<Style>` declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Style identifier.
    pub id: StyleId,
    /// Line styling, if any.
    pub line: Option<LineStyle>,
    /// Polygon fill styling, if any.
    pub poly: Option<PolyStyle>,
    /// Icon styling, if any.
    pub icon: Option<IconStyle>,
}

const ROUTE_LINE: Color = Color::rgba(237, 100, 0, 255);
const ROUTE_FILL: Color = Color::rgba(0, 255, 0, 127);
const ROUTE_WIDTH: f64 = 4.0;
const FINDPOINT_ICON: Color = Color::rgba(255, 0, 0, 255);
const WAYPOINT_ICON: Color = Color::rgba(255, 163, 0, 255);

/// The styles every document declares, in declaration order.
pub const SHARED_STYLES: [Style; 3] = [
    Style {
        id: StyleId::Route,
        line: Some(LineStyle {
            color: ROUTE_LINE,
            width: ROUTE_WIDTH,
        }),
        poly: Some(PolyStyle { color: ROUTE_FILL }),
        icon: None,
    },
    Style {
        id: StyleId::Findpoint,
        line: None,
        poly: None,
        icon: Some(IconStyle {
            color: FINDPOINT_ICON,
        }),
    },
    Style {
        id: StyleId::Waypoint,
        line: None,
        poly: None,
        icon: Some(IconStyle {
            color: WAYPOINT_ICON,
        }),
    },
];
