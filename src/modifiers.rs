use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Keyboard modifier bitmask carried by key, button and wheel events.
///
/// The bit values are part of the producer/consumer compatibility contract
/// and never change: `ALT = 1`, `CTRL = 2`, `SHIFT = 4`, `SUPER = 8`.
///
/// # Example
///
/// ```rust
/// use eventport::Modifiers;
///
/// let mods = Modifiers::CTRL | Modifiers::SHIFT;
/// assert!(mods.contains(Modifiers::CTRL));
/// assert!(!mods.contains(Modifiers::ALT));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u32);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const ALT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(1 << 1);
    pub const SHIFT: Modifiers = Modifiers(1 << 2);
    pub const SUPER: Modifiers = Modifiers(1 << 3);

    const MASK: u32 = 0b1111;

    /// Raw bit representation.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build from raw bits, discarding any bit outside the known set.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Modifiers(bits & Self::MASK)
    }

    /// Whether every modifier in `other` is also set in `self`.
    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no modifier is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Modifiers) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;

    fn bitand(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 & rhs.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for (mask, name) in [
            (Modifiers::ALT, "alt"),
            (Modifiers::CTRL, "ctrl"),
            (Modifiers::SHIFT, "shift"),
            (Modifiers::SUPER, "super"),
        ] {
            if self.contains(mask) {
                if !first {
                    write!(f, "+")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_and_test() {
        let mut mods = Modifiers::CTRL;
        mods |= Modifiers::SUPER;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::SUPER));
        assert!(!mods.contains(Modifiers::SHIFT));
        assert!(mods.contains(Modifiers::NONE));
    }

    #[test]
    fn from_bits_truncates_unknown_bits() {
        let mods = Modifiers::from_bits_truncate(0xff);
        assert_eq!(
            mods,
            Modifiers::ALT | Modifiers::CTRL | Modifiers::SHIFT | Modifiers::SUPER
        );
    }

    #[test]
    fn display() {
        assert_eq!(Modifiers::NONE.to_string(), "none");
        assert_eq!((Modifiers::CTRL | Modifiers::SHIFT).to_string(), "ctrl+shift");
    }
}
