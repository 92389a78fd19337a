//! Named color catalog.
//!
//! The SVG/X11 color names as byte RGBA, scaled into the active precision on
//! lookup. Names are matched case-insensitively. `transparent` and `none`
//! carry zero alpha; everything else is opaque.

use crate::device::DeviceColor;
use tinct_core::Quantum;

/// One catalog entry: a color name and its byte RGBA value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    /// Lowercase color name.
    pub name: &'static str,
    /// Byte-scaled R, G, B, A.
    pub rgba: [u8; 4],
}

/// Looks up `name` in the catalog, case-insensitively.
///
/// ```
/// use tinct_color::{named, DeviceColor};
///
/// let red: DeviceColor<u8> = named::lookup("Red").unwrap();
/// assert_eq!((red.r, red.g, red.b, red.a), (255, 0, 0, 255));
/// assert!(named::lookup::<u8>("not-a-color").is_none());
/// ```
pub fn lookup<Q: Quantum>(name: &str) -> Option<DeviceColor<Q>> {
    let needle = name.trim().to_ascii_lowercase();
    CATALOG
        .iter()
        .find(|c| c.name == needle)
        .map(|c| DeviceColor::from_rgba_bytes(c.rgba[0], c.rgba[1], c.rgba[2], c.rgba[3]))
}

/// The full catalog, sorted by name.
pub static CATALOG: &[NamedColor] = &[
    NamedColor { name: "aliceblue", rgba: [240, 248, 255, 255] },
    NamedColor { name: "antiquewhite", rgba: [250, 235, 215, 255] },
    NamedColor { name: "aqua", rgba: [0, 255, 255, 255] },
    NamedColor { name: "aquamarine", rgba: [127, 255, 212, 255] },
    NamedColor { name: "azure", rgba: [240, 255, 255, 255] },
    NamedColor { name: "beige", rgba: [245, 245, 220, 255] },
    NamedColor { name: "bisque", rgba: [255, 228, 196, 255] },
    NamedColor { name: "black", rgba: [0, 0, 0, 255] },
    NamedColor { name: "blanchedalmond", rgba: [255, 235, 205, 255] },
    NamedColor { name: "blue", rgba: [0, 0, 255, 255] },
    NamedColor { name: "blueviolet", rgba: [138, 43, 226, 255] },
    NamedColor { name: "brown", rgba: [165, 42, 42, 255] },
    NamedColor { name: "burlywood", rgba: [222, 184, 135, 255] },
    NamedColor { name: "cadetblue", rgba: [95, 158, 160, 255] },
    NamedColor { name: "chartreuse", rgba: [127, 255, 0, 255] },
    NamedColor { name: "chocolate", rgba: [210, 105, 30, 255] },
    NamedColor { name: "coral", rgba: [255, 127, 80, 255] },
    NamedColor { name: "cornflowerblue", rgba: [100, 149, 237, 255] },
    NamedColor { name: "cornsilk", rgba: [255, 248, 220, 255] },
    NamedColor { name: "crimson", rgba: [220, 20, 60, 255] },
    NamedColor { name: "cyan", rgba: [0, 255, 255, 255] },
    NamedColor { name: "darkblue", rgba: [0, 0, 139, 255] },
    NamedColor { name: "darkcyan", rgba: [0, 139, 139, 255] },
    NamedColor { name: "darkgoldenrod", rgba: [184, 134, 11, 255] },
    NamedColor { name: "darkgray", rgba: [169, 169, 169, 255] },
    NamedColor { name: "darkgreen", rgba: [0, 100, 0, 255] },
    NamedColor { name: "darkgrey", rgba: [169, 169, 169, 255] },
    NamedColor { name: "darkkhaki", rgba: [189, 183, 107, 255] },
    NamedColor { name: "darkmagenta", rgba: [139, 0, 139, 255] },
    NamedColor { name: "darkolivegreen", rgba: [85, 107, 47, 255] },
    NamedColor { name: "darkorange", rgba: [255, 140, 0, 255] },
    NamedColor { name: "darkorchid", rgba: [153, 50, 204, 255] },
    NamedColor { name: "darkred", rgba: [139, 0, 0, 255] },
    NamedColor { name: "darksalmon", rgba: [233, 150, 122, 255] },
    NamedColor { name: "darkseagreen", rgba: [143, 188, 143, 255] },
    NamedColor { name: "darkslateblue", rgba: [72, 61, 139, 255] },
    NamedColor { name: "darkslategray", rgba: [47, 79, 79, 255] },
    NamedColor { name: "darkslategrey", rgba: [47, 79, 79, 255] },
    NamedColor { name: "darkturquoise", rgba: [0, 206, 209, 255] },
    NamedColor { name: "darkviolet", rgba: [148, 0, 211, 255] },
    NamedColor { name: "deeppink", rgba: [255, 20, 147, 255] },
    NamedColor { name: "deepskyblue", rgba: [0, 191, 255, 255] },
    NamedColor { name: "dimgray", rgba: [105, 105, 105, 255] },
    NamedColor { name: "dimgrey", rgba: [105, 105, 105, 255] },
    NamedColor { name: "dodgerblue", rgba: [30, 144, 255, 255] },
    NamedColor { name: "firebrick", rgba: [178, 34, 34, 255] },
    NamedColor { name: "floralwhite", rgba: [255, 250, 240, 255] },
    NamedColor { name: "forestgreen", rgba: [34, 139, 34, 255] },
    NamedColor { name: "fuchsia", rgba: [255, 0, 255, 255] },
    NamedColor { name: "gainsboro", rgba: [220, 220, 220, 255] },
    NamedColor { name: "ghostwhite", rgba: [248, 248, 255, 255] },
    NamedColor { name: "gold", rgba: [255, 215, 0, 255] },
    NamedColor { name: "goldenrod", rgba: [218, 165, 32, 255] },
    NamedColor { name: "gray", rgba: [128, 128, 128, 255] },
    NamedColor { name: "green", rgba: [0, 128, 0, 255] },
    NamedColor { name: "greenyellow", rgba: [173, 255, 47, 255] },
    NamedColor { name: "grey", rgba: [128, 128, 128, 255] },
    NamedColor { name: "honeydew", rgba: [240, 255, 240, 255] },
    NamedColor { name: "hotpink", rgba: [255, 105, 180, 255] },
    NamedColor { name: "indianred", rgba: [205, 92, 92, 255] },
    NamedColor { name: "indigo", rgba: [75, 0, 130, 255] },
    NamedColor { name: "ivory", rgba: [255, 255, 240, 255] },
    NamedColor { name: "khaki", rgba: [240, 230, 140, 255] },
    NamedColor { name: "lavender", rgba: [230, 230, 250, 255] },
    NamedColor { name: "lavenderblush", rgba: [255, 240, 245, 255] },
    NamedColor { name: "lawngreen", rgba: [124, 252, 0, 255] },
    NamedColor { name: "lemonchiffon", rgba: [255, 250, 205, 255] },
    NamedColor { name: "lightblue", rgba: [173, 216, 230, 255] },
    NamedColor { name: "lightcoral", rgba: [240, 128, 128, 255] },
    NamedColor { name: "lightcyan", rgba: [224, 255, 255, 255] },
    NamedColor { name: "lightgoldenrodyellow", rgba: [250, 250, 210, 255] },
    NamedColor { name: "lightgray", rgba: [211, 211, 211, 255] },
    NamedColor { name: "lightgreen", rgba: [144, 238, 144, 255] },
    NamedColor { name: "lightgrey", rgba: [211, 211, 211, 255] },
    NamedColor { name: "lightpink", rgba: [255, 182, 193, 255] },
    NamedColor { name: "lightsalmon", rgba: [255, 160, 122, 255] },
    NamedColor { name: "lightseagreen", rgba: [32, 178, 170, 255] },
    NamedColor { name: "lightskyblue", rgba: [135, 206, 250, 255] },
    NamedColor { name: "lightslategray", rgba: [119, 136, 153, 255] },
    NamedColor { name: "lightslategrey", rgba: [119, 136, 153, 255] },
    NamedColor { name: "lightsteelblue", rgba: [176, 196, 222, 255] },
    NamedColor { name: "lightyellow", rgba: [255, 255, 224, 255] },
    NamedColor { name: "lime", rgba: [0, 255, 0, 255] },
    NamedColor { name: "limegreen", rgba: [50, 205, 50, 255] },
    NamedColor { name: "linen", rgba: [250, 240, 230, 255] },
    NamedColor { name: "magenta", rgba: [255, 0, 255, 255] },
    NamedColor { name: "maroon", rgba: [128, 0, 0, 255] },
    NamedColor { name: "mediumaquamarine", rgba: [102, 205, 170, 255] },
    NamedColor { name: "mediumblue", rgba: [0, 0, 205, 255] },
    NamedColor { name: "mediumorchid", rgba: [186, 85, 211, 255] },
    NamedColor { name: "mediumpurple", rgba: [147, 112, 219, 255] },
    NamedColor { name: "mediumseagreen", rgba: [60, 179, 113, 255] },
    NamedColor { name: "mediumslateblue", rgba: [123, 104, 238, 255] },
    NamedColor { name: "mediumspringgreen", rgba: [0, 250, 154, 255] },
    NamedColor { name: "mediumturquoise", rgba: [72, 209, 204, 255] },
    NamedColor { name: "mediumvioletred", rgba: [199, 21, 133, 255] },
    NamedColor { name: "midnightblue", rgba: [25, 25, 112, 255] },
    NamedColor { name: "mintcream", rgba: [245, 255, 250, 255] },
    NamedColor { name: "mistyrose", rgba: [255, 228, 225, 255] },
    NamedColor { name: "moccasin", rgba: [255, 228, 181, 255] },
    NamedColor { name: "navajowhite", rgba: [255, 222, 173, 255] },
    NamedColor { name: "navy", rgba: [0, 0, 128, 255] },
    NamedColor { name: "none", rgba: [0, 0, 0, 0] },
    NamedColor { name: "oldlace", rgba: [253, 245, 230, 255] },
    NamedColor { name: "olive", rgba: [128, 128, 0, 255] },
    NamedColor { name: "olivedrab", rgba: [107, 142, 35, 255] },
    NamedColor { name: "orange", rgba: [255, 165, 0, 255] },
    NamedColor { name: "orangered", rgba: [255, 69, 0, 255] },
    NamedColor { name: "orchid", rgba: [218, 112, 214, 255] },
    NamedColor { name: "palegoldenrod", rgba: [238, 232, 170, 255] },
    NamedColor { name: "palegreen", rgba: [152, 251, 152, 255] },
    NamedColor { name: "paleturquoise", rgba: [175, 238, 238, 255] },
    NamedColor { name: "palevioletred", rgba: [219, 112, 147, 255] },
    NamedColor { name: "papayawhip", rgba: [255, 239, 213, 255] },
    NamedColor { name: "peachpuff", rgba: [255, 218, 185, 255] },
    NamedColor { name: "peru", rgba: [205, 133, 63, 255] },
    NamedColor { name: "pink", rgba: [255, 192, 203, 255] },
    NamedColor { name: "plum", rgba: [221, 160, 221, 255] },
    NamedColor { name: "powderblue", rgba: [176, 224, 230, 255] },
    NamedColor { name: "purple", rgba: [128, 0, 128, 255] },
    NamedColor { name: "rebeccapurple", rgba: [102, 51, 153, 255] },
    NamedColor { name: "red", rgba: [255, 0, 0, 255] },
    NamedColor { name: "rosybrown", rgba: [188, 143, 143, 255] },
    NamedColor { name: "royalblue", rgba: [65, 105, 225, 255] },
    NamedColor { name: "saddlebrown", rgba: [139, 69, 19, 255] },
    NamedColor { name: "salmon", rgba: [250, 128, 114, 255] },
    NamedColor { name: "sandybrown", rgba: [244, 164, 96, 255] },
    NamedColor { name: "seagreen", rgba: [46, 139, 87, 255] },
    NamedColor { name: "seashell", rgba: [255, 245, 238, 255] },
    NamedColor { name: "sienna", rgba: [160, 82, 45, 255] },
    NamedColor { name: "silver", rgba: [192, 192, 192, 255] },
    NamedColor { name: "skyblue", rgba: [135, 206, 235, 255] },
    NamedColor { name: "slateblue", rgba: [106, 90, 205, 255] },
    NamedColor { name: "slategray", rgba: [112, 128, 144, 255] },
    NamedColor { name: "slategrey", rgba: [112, 128, 144, 255] },
    NamedColor { name: "snow", rgba: [255, 250, 250, 255] },
    NamedColor { name: "springgreen", rgba: [0, 255, 127, 255] },
    NamedColor { name: "steelblue", rgba: [70, 130, 180, 255] },
    NamedColor { name: "tan", rgba: [210, 180, 140, 255] },
    NamedColor { name: "teal", rgba: [0, 128, 128, 255] },
    NamedColor { name: "thistle", rgba: [216, 191, 216, 255] },
    NamedColor { name: "tomato", rgba: [255, 99, 71, 255] },
    NamedColor { name: "transparent", rgba: [255, 255, 255, 0] },
    NamedColor { name: "turquoise", rgba: [64, 224, 208, 255] },
    NamedColor { name: "violet", rgba: [238, 130, 238, 255] },
    NamedColor { name: "wheat", rgba: [245, 222, 179, 255] },
    NamedColor { name: "white", rgba: [255, 255, 255, 255] },
    NamedColor { name: "whitesmoke", rgba: [245, 245, 245, 255] },
    NamedColor { name: "yellow", rgba: [255, 255, 0, 255] },
    NamedColor { name: "yellowgreen", rgba: [154, 205, 50, 255] },
];
