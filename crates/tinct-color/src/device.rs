//! Device color value type.
//!
//! [`DeviceColor`] is the canonical color record: four or five channel
//! samples in the active precision plus a flag marking whether the first
//! three channels mean red/green/blue or cyan/magenta/yellow. It parses the
//! textual literal grammar (hex, named colors, `transparent`), formats back
//! to hex and `cmyk()`/`cmyka()` notation, and supports exact, ordered, and
//! fuzzy comparison.

use crate::error::{ColorError, ColorResult};
use crate::{hex, named};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;
use tinct_core::{Percentage, Quantum};

/// sqrt(1/2), the sub-quantum noise floor for fuzzy comparison.
const SQ1_2: f64 = 0.707_106_781_186_547_5;

/// Scale products below this are treated as fully transparent.
const EPSILON: f64 = 1.0e-12;

/// Canonical device color: RGBA or CMYKA samples in precision `Q`.
///
/// Channel fields are public and mutable; `k` stays zero and unused while
/// the color is not CMYK-flagged. No bounds validation happens on write, so
/// float precisions can carry out-of-range samples until a conversion clamps
/// them.
///
/// Equality compares the CMYK flag plus all five channels. Ordering is
/// lexicographic over r, g, b, k, a and ignores the flag; the one corner
/// where channels match but flags differ is unordered (see
/// [`cmp_channels`](DeviceColor::cmp_channels)).
///
/// ```
/// use tinct_color::DeviceColor;
///
/// let red: DeviceColor<u8> = "#F00".parse().unwrap();
/// assert_eq!((red.r, red.g, red.b, red.a), (255, 0, 0, 255));
/// assert_eq!(red.to_hex_string().unwrap(), "#FF0000");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviceColor<Q: Quantum> {
    /// Red (or cyan) sample.
    pub r: Q,
    /// Green (or magenta) sample.
    pub g: Q,
    /// Blue (or yellow) sample.
    pub b: Q,
    /// Black sample; zero and unused unless the color is CMYK.
    pub k: Q,
    /// Alpha sample.
    pub a: Q,
    is_cmyk: bool,
}

impl<Q: Quantum> DeviceColor<Q> {
    /// Creates an RGBA color from raw samples.
    pub fn new(r: Q, g: Q, b: Q, a: Q) -> Self {
        Self { r, g, b, k: Q::default(), a, is_cmyk: false }
    }

    /// Creates an opaque RGB color from raw samples.
    pub fn rgb(r: Q, g: Q, b: Q) -> Self {
        Self::new(r, g, b, Q::MAX)
    }

    /// Creates a CMYKA color from raw samples, setting the CMYK flag.
    pub fn cmyk(c: Q, m: Q, y: Q, k: Q, a: Q) -> Self {
        Self { r: c, g: m, b: y, k, a, is_cmyk: true }
    }

    /// Creates an RGBA color from byte values scaled into the precision.
    pub fn from_rgba_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(Q::from_byte(r), Q::from_byte(g), Q::from_byte(b), Q::from_byte(a))
    }

    /// Creates an opaque RGB color from byte values.
    pub fn from_rgb_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_bytes(r, g, b, 255)
    }

    /// Opaque black.
    pub fn black() -> Self {
        Self::rgb(Q::default(), Q::default(), Q::default())
    }

    /// Opaque white.
    pub fn white() -> Self {
        Self::rgb(Q::MAX, Q::MAX, Q::MAX)
    }

    /// Fully transparent white.
    pub fn transparent() -> Self {
        Self::new(Q::MAX, Q::MAX, Q::MAX, Q::default())
    }

    /// Whether the first three channels mean cyan/magenta/yellow.
    pub fn is_cmyk(&self) -> bool {
        self.is_cmyk
    }

    /// Lexicographic channel comparison over r, g, b, k, a.
    ///
    /// Never consults the CMYK flag, so two colors that differ only in the
    /// flag compare `Equal` here while remaining unequal under `==`. `None`
    /// only for NaN samples in float precisions.
    pub fn cmp_channels(&self, other: &Self) -> Option<Ordering> {
        let channels = [
            (self.r, other.r),
            (self.g, other.g),
            (self.b, other.b),
            (self.k, other.k),
            (self.a, other.a),
        ];
        for (p, q) in channels {
            match p.partial_cmp(&q)? {
                Ordering::Equal => continue,
                ord => return Some(ord),
            }
        }
        Some(Ordering::Equal)
    }

    /// Tolerance comparison with the fuzz given as a percentage of the
    /// sample range.
    ///
    /// Squared-distance test in normalized channel terms: the alpha delta
    /// gates first, then r/g/b deltas (and the black channel for CMYK
    /// colors) are weighted by the product of both alphas, with early exit
    /// as soon as the accumulated distance exceeds the tolerance. The fuzz
    /// is floored at sqrt(1/2) of one quantum step so sub-quantum noise
    /// never separates two colors.
    pub fn fuzzy_equals(&self, other: &Self, fuzz: Percentage) -> bool {
        let step = 1.0 / ((1u64 << (4 * Q::HEX_WIDTH)) - 1) as f64;
        let fuzz = (fuzz.value() / 100.0).max(SQ1_2 * step);
        let mut fuzz2 = fuzz * fuzz;

        let pa = self.a.to_norm();
        let qa = other.a.to_norm();
        let pixel = pa - qa;
        let mut distance = pixel * pixel;
        if distance > fuzz2 {
            return false;
        }

        let mut scale = pa * qa;
        if scale <= EPSILON {
            return true;
        }

        if self.is_cmyk {
            let pk = self.k.to_norm();
            let qk = other.k.to_norm();
            let pixel = pk - qk;
            scale *= (1.0 - pk) * (1.0 - qk);
            distance += pixel * pixel * scale;
            if distance > fuzz2 {
                return false;
            }
        }

        distance *= 3.0;
        fuzz2 *= 3.0;

        let channels = [(self.r, other.r), (self.g, other.g), (self.b, other.b)];
        for (p, q) in channels {
            let pixel = p.to_norm() - q.to_norm();
            distance += pixel * pixel * scale;
            if distance > fuzz2 {
                return false;
            }
        }
        true
    }

    /// Byte-scaled hex rendering, `#RRGGBB` with `AA` appended only when not
    /// fully opaque. Fails for CMYK-flagged colors.
    pub fn to_hex_string(&self) -> ColorResult<String> {
        if self.is_cmyk {
            return Err(ColorError::CmykNotSupported);
        }
        let (r, g, b) = (self.r.to_byte(), self.g.to_byte(), self.b.to_byte());
        if self.a == Q::MAX {
            Ok(format!("#{r:02X}{g:02X}{b:02X}"))
        } else {
            let a = self.a.to_byte();
            Ok(format!("#{r:02X}{g:02X}{b:02X}{a:02X}"))
        }
    }

    /// Short rendering: full [`Display`](fmt::Display) form when not opaque,
    /// otherwise `cmyk(C,M,Y,K)` or native-width hex without alpha.
    pub fn to_short_string(&self) -> String {
        if self.a != Q::MAX {
            return self.to_string();
        }
        if self.is_cmyk {
            format!(
                "cmyk({},{},{},{})",
                self.r.to_byte(),
                self.g.to_byte(),
                self.b.to_byte(),
                self.k.to_byte()
            )
        } else {
            let w = Q::HEX_WIDTH;
            format!(
                "#{:0w$X}{:0w$X}{:0w$X}",
                self.r.to_hex_unit(),
                self.g.to_hex_unit(),
                self.b.to_hex_unit(),
                w = w
            )
        }
    }

    /// Byte-scaled channel export: `[R,G,B,A]` or `[C,M,Y,K,A]`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![self.r.to_byte(), self.g.to_byte(), self.b.to_byte()];
        if self.is_cmyk {
            bytes.push(self.k.to_byte());
        }
        bytes.push(self.a.to_byte());
        bytes
    }
}

impl<Q: Quantum> PartialOrd for DeviceColor<Q> {
    /// Channel ordering, except that channel-equal colors with different
    /// CMYK flags are unordered (they are not `==`-equal).
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.cmp_channels(other) {
            Some(Ordering::Equal) if self.is_cmyk != other.is_cmyk => None,
            ord => ord,
        }
    }
}

impl<Q: Quantum> FromStr for DeviceColor<Q> {
    type Err = ColorError;

    /// Parses `transparent`, a `#` hex literal, or a catalog color name.
    ///
    /// Hex literals fill one channel as an opaque gray, three as opaque
    /// RGB, or four as RGBA.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(ColorError::EmptyValue);
        }
        if value.eq_ignore_ascii_case("transparent") {
            return Ok(Self::transparent());
        }
        if value.starts_with('#') {
            let channels =
                hex::parse::<Q>(value).ok_or_else(|| ColorError::InvalidHex(value.to_string()))?;
            let color = match channels.as_slice() {
                [gray] => Self::new(*gray, *gray, *gray, Q::MAX),
                [r, g, b] => Self::rgb(*r, *g, *b),
                [r, g, b, a] => Self::new(*r, *g, *b, *a),
                _ => return Err(ColorError::InvalidHex(value.to_string())),
            };
            return Ok(color);
        }
        named::lookup(value).ok_or_else(|| ColorError::UnknownName(value.to_string()))
    }
}

impl<Q: Quantum> Mul<Percentage> for DeviceColor<Q> {
    type Output = DeviceColor<Q>;

    /// Scales r, g, b (and k for CMYK colors) by the percentage, leaving
    /// alpha unchanged.
    fn mul(self, percentage: Percentage) -> Self::Output {
        let mut color = self;
        color.r = Q::from_f64(percentage.multiply(self.r.to_f64()));
        color.g = Q::from_f64(percentage.multiply(self.g.to_f64()));
        color.b = Q::from_f64(percentage.multiply(self.b.to_f64()));
        if self.is_cmyk {
            color.k = Q::from_f64(percentage.multiply(self.k.to_f64()));
        }
        color
    }
}

impl<Q: Quantum> fmt::Display for DeviceColor<Q> {
    /// `cmyka(C,M,Y,K,A)` with byte-scaled components and a fractional
    /// alpha, or native-width hex with alpha always included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cmyk {
            write!(
                f,
                "cmyka({},{},{},{},{})",
                self.r.to_byte(),
                self.g.to_byte(),
                self.b.to_byte(),
                self.k.to_byte(),
                format_alpha(self.a.to_norm())
            )
        } else {
            let w = Q::HEX_WIDTH;
            write!(
                f,
                "#{:0w$X}{:0w$X}{:0w$X}{:0w$X}",
                self.r.to_hex_unit(),
                self.g.to_hex_unit(),
                self.b.to_hex_unit(),
                self.a.to_hex_unit(),
                w = w
            )
        }
    }
}

/// Formats an alpha fraction with at least one and at most four decimals.
fn format_alpha(value: f64) -> String {
    let s = format!("{value:.4}");
    let trimmed = s.trim_end_matches('0');
    if trimmed.ends_with('.') {
        s[..trimmed.len() + 1].to_string()
    } else {
        trimmed.to_string()
    }
}
