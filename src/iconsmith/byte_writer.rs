/// Append-only byte buffer that all container records serialize through.
///
/// Every multi-byte field in the PNG and ICO formats goes through one of
/// these primitives, so endianness and offset arithmetic live in exactly
/// one place.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    // Create an empty writer
    // @return: The new writer
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    // Create an empty writer with a pre-allocated capacity
    // @param capacity: The number of bytes to reserve
    // @return: The new writer
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append a single byte
    pub fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Append a u16 in little-endian order
    pub fn put_u16_le(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Append a u32 in little-endian order
    pub fn put_u32_le(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Append a u32 in big-endian order
    pub fn put_u32_be(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Append a raw byte slice unchanged
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// The number of bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and return the accumulated bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
