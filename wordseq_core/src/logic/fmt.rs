use core::fmt;

use crate::{Element, View};

impl<'a, T: Element> View<'a, T> {
    /// Writes the stored elements from most significant to least, each zero
    /// padded to the element width and `_` separated, followed by an `_a0` or
    /// `_a1` appendix suffix. An empty view writes just the prefix and suffix.
    fn debug_format_hexadecimal(&self, f: &mut fmt::Formatter, upper: bool) -> fmt::Result {
        let width = T::BITS / 4;
        f.write_str("0x")?;
        for (i, x) in self.body().iter().enumerate().rev() {
            if upper {
                write!(f, "{x:0width$X}")?;
            } else {
                write!(f, "{x:0width$x}")?;
            }
            if i != 0 {
                f.write_str("_")?;
            }
        }
        write!(f, "_a{}", self.appendix() as u8)
    }
}

impl<'a, T: Element> fmt::Debug for View<'a, T> {
    /// Forwards to the `LowerHex` impl
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl<'a, T: Element> fmt::Display for View<'a, T> {
    /// Forwards to the `Debug` impl
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<'a, T: Element> fmt::LowerHex for View<'a, T> {
    /// Lowercase hexadecimal formatting.
    ///
    /// ```
    /// use wordseq::prelude::*;
    /// assert_eq!(
    ///     format!("{:x}", View::new(&[0xbeefu16, 0xa], true)),
    ///     "0x000a_beef_a1"
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.debug_format_hexadecimal(f, false)
    }
}

impl<'a, T: Element> fmt::UpperHex for View<'a, T> {
    /// Uppercase hexadecimal formatting.
    ///
    /// ```
    /// use wordseq::prelude::*;
    /// assert_eq!(format!("{:X}", View::new(&[0xbeefu16], false)), "0xBEEF_a0");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.debug_format_hexadecimal(f, true)
    }
}
