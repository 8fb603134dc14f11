quick_error! {
    /// Errors raised while decoding ATM traffic.
    ///
    /// Offsets are byte offsets into the buffer handed to the failing decoder.
    /// The top-level decoder rebases them onto the start of the frame.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Error {
        /// A fixed-size field does not fit into the remaining bytes.
        TruncatedBuffer { offset: usize, needed: usize, available: usize } {
            display("truncated buffer: {} bytes needed at offset {}, {} available", needed, offset, available)
        }
        /// A length taken from the packet itself points past the end of the buffer.
        MalformedLength { what: &'static str, offset: usize, declared: usize, available: usize } {
            display("malformed {} length at offset {}: {} declared, {} available", what, offset, declared, available)
        }
    }
}

impl Error {
    #[inline]
    pub(crate) fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        Error::TruncatedBuffer {
            offset,
            needed,
            available,
        }
    }

    #[inline]
    pub(crate) fn malformed(
        what: &'static str,
        offset: usize,
        declared: usize,
        available: usize,
    ) -> Self {
        Error::MalformedLength {
            what,
            offset,
            declared,
            available,
        }
    }

    /// The offset at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            Error::TruncatedBuffer { offset, .. } => *offset,
            Error::MalformedLength { offset, .. } => *offset,
        }
    }

    /// Move the error offset forward by `base` bytes.
    pub fn shifted(self, base: usize) -> Self {
        match self {
            Error::TruncatedBuffer {
                offset,
                needed,
                available,
            } => Error::TruncatedBuffer {
                offset: offset + base,
                needed,
                available,
            },
            Error::MalformedLength {
                what,
                offset,
                declared,
                available,
            } => Error::MalformedLength {
                what,
                offset: offset + base,
                declared,
                available,
            },
        }
    }
}
