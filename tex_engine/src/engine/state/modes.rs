//! The list-building modes of a TeX engine.

use std::fmt::Display;

/// The kind of list currently being built. Changing modes is entirely up to the interpreter.
#[derive(Copy,Clone,PartialEq,Eq,Hash,Debug)]
pub enum TeXMode {
    /// before the kernel has been initialized
    NoMode,
    /// initial mode outside of paragraphs and other boxes
    Vertical,
    /// mode inside of paragraphs
    Horizontal,
    /// mode inside of display math
    Math,
    /// mode inside of `\vbox` and similar boxes
    InternalVertical,
    /// mode inside of `\hbox` and similar boxes
    InternalHorizontal,
    /// mode inside of inline math
    InternalMath
}

impl Default for TeXMode {
    fn default() -> Self { TeXMode::NoMode }
}

impl TeXMode {
    pub fn is_vertical(&self) -> bool {
        use TeXMode::*;
        match self {
            Vertical | InternalVertical => true,
            _ => false
        }
    }
    pub fn is_horizontal(&self) -> bool {
        use TeXMode::*;
        match self {
            Horizontal | InternalHorizontal => true,
            _ => false
        }
    }
    pub fn is_math(&self) -> bool {
        use TeXMode::*;
        match self {
            Math | InternalMath => true,
            _ => false
        }
    }
    /// Restricted modes, i.e. inside boxes or inline math.
    pub fn is_internal(&self) -> bool {
        use TeXMode::*;
        match self {
            InternalVertical | InternalHorizontal | InternalMath => true,
            _ => false
        }
    }
}

impl Display for TeXMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TeXMode::*;
        match self {
            NoMode => write!(f, "no mode"),
            Vertical => write!(f, "vertical"),
            Horizontal => write!(f, "horizontal"),
            Math => write!(f, "display math"),
            InternalVertical => write!(f, "internal vertical"),
            InternalHorizontal => write!(f, "restricted horizontal"),
            InternalMath => write!(f, "math")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TeXMode;

    #[test]
    fn classification() {
        assert_eq!(TeXMode::default(),TeXMode::NoMode);
        assert!(TeXMode::InternalVertical.is_vertical() && TeXMode::InternalVertical.is_internal());
        assert!(TeXMode::Horizontal.is_horizontal() && !TeXMode::Horizontal.is_internal());
        assert!(TeXMode::InternalMath.is_math());
        let none = TeXMode::NoMode;
        assert!(!none.is_vertical() && !none.is_horizontal() && !none.is_math() && !none.is_internal());
        assert_eq!(TeXMode::InternalHorizontal.to_string(),"restricted horizontal");
    }
}
