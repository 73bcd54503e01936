use serde::{
    ser::{SerializeStruct, SerializeTuple},
    Serialize, Serializer,
};

use crate::{Element, ExchangeInt, SuccinctInt, View};

/// The succinct little endian bytes of a `View`
struct SuccinctBytes<'a, T: Element>(SuccinctInt<'a, T, u8>);

impl<'a, T: Element> Serialize for SuccinctBytes<'a, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

/// A `serde_support` impl
impl<'a, T: Element> Serialize for View<'a, T> {
    /// Serializes `self` in a platform and element width independent way. The
    /// value is rechunked into bytes and trimmed of fill bytes, so views of the
    /// same value serialize the same no matter their element type or how much
    /// fill they store. In human readable form, it serializes into a struct
    /// named "View" with two fields "appendix" and "bytes".
    ///
    /// Nothing is allocated on our side.
    ///
    /// ```
    /// // Example using the `ron` crate. Note that it
    /// // omits the struct name which would be "View".
    /// use wordseq::prelude::*;
    /// use ron::to_string;
    ///
    /// let x = View::new(&[0x0102u16, 0xffff, 0xffff], true);
    /// assert_eq!(to_string(&x).unwrap(), "(appendix:true,bytes:[2,1])");
    /// ```
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let exchange = ExchangeInt::<T, u8>::from_view(*self, self.appendix());
        let bytes = SuccinctBytes(exchange.succinct());
        if serializer.is_human_readable() {
            let mut s = serializer.serialize_struct("View", 2)?;
            s.serialize_field("appendix", &self.appendix())?;
            s.serialize_field("bytes", &bytes)?;
            s.end()
        } else {
            let mut s = serializer.serialize_tuple(2)?;
            s.serialize_element(&self.appendix())?;
            s.serialize_element(&bytes)?;
            s.end()
        }
    }
}
