//! Color values for border traits
//!
//! Border colors arrive here already resolved by the upstream style pass;
//! this module only carries them through merging and hands them to the
//! painter unchanged. No parsing or color-space conversion happens in this
//! crate.

/// RGBA color representation
///
/// Represents a color in the RGB color space with an alpha channel.
/// - R, G, B: 0-255 (stored as u8)
/// - A: 0.0-1.0 (stored as f32, where 0.0 is fully transparent, 1.0 is fully opaque)
///
/// # Examples
///
/// ```
/// use overpaint::Rgba;
///
/// let red = Rgba::new(255, 0, 0, 1.0);
/// let semi_transparent_blue = Rgba::new(0, 0, 255, 0.5);
/// let transparent = Rgba::TRANSPARENT;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0.0-1.0)
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    /// Opaque black
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };

    /// Opaque white
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 1.0,
    };

    /// Opaque red
    pub const RED: Self = Self {
        r: 255,
        g: 0,
        b: 0,
        a: 1.0,
    };

    /// Opaque green
    pub const GREEN: Self = Self {
        r: 0,
        g: 255,
        b: 0,
        a: 1.0,
    };

    /// Opaque blue
    pub const BLUE: Self = Self {
        r: 0,
        g: 0,
        b: 255,
        a: 1.0,
    };

    /// Creates a new RGBA color
    ///
    /// # Arguments
    /// * `r` - Red component (0-255)
    /// * `g` - Green component (0-255)
    /// * `b` - Blue component (0-255)
    /// * `a` - Alpha component (0.0-1.0)
    ///
    /// # Examples
    ///
    /// ```
    /// use overpaint::Rgba;
    ///
    /// let color = Rgba::new(255, 128, 0, 1.0); // Orange
    /// ```
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque RGB color (alpha = 1.0)
    ///
    /// # Examples
    ///
    /// ```
    /// use overpaint::Rgba;
    ///
    /// let purple = Rgba::rgb(128, 0, 128);
    /// assert_eq!(purple.a, 1.0);
    /// ```
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns true if the color is fully transparent
    ///
    /// # Examples
    ///
    /// ```
    /// use overpaint::Rgba;
    ///
    /// assert!(Rgba::TRANSPARENT.is_transparent());
    /// assert!(!Rgba::BLACK.is_transparent());
    /// ```
    pub fn is_transparent(self) -> bool {
        self.a == 0.0
    }
}
