//! Wire-format tags and limits

/// SEC1 octet-string point prefixes
pub mod sec1 {
    /// Point at infinity, encoded as this single byte
    pub const TAG_INFINITY: u8 = 0x00;
    /// Compressed point with even y
    pub const TAG_COMPRESSED_EVEN: u8 = 0x02;
    /// Compressed point with odd y
    pub const TAG_COMPRESSED_ODD: u8 = 0x03;
    /// Uncompressed point
    pub const TAG_UNCOMPRESSED: u8 = 0x04;
}

/// DER identifier octets and length-field constants
pub mod der {
    /// INTEGER
    pub const TAG_INTEGER: u8 = 0x02;
    /// BIT STRING
    pub const TAG_BIT_STRING: u8 = 0x03;
    /// OCTET STRING
    pub const TAG_OCTET_STRING: u8 = 0x04;
    /// SEQUENCE (constructed)
    pub const TAG_SEQUENCE: u8 = 0x30;

    /// Largest length expressible in the short form
    pub const SHORT_FORM_MAX: usize = 0x7F;
    /// High bit marking a long-form length prefix
    pub const LONG_FORM_FLAG: u8 = 0x80;
    /// BER indefinite-length marker, never valid in DER
    pub const INDEFINITE_LENGTH: u8 = 0x80;
    /// Reserved length prefix
    pub const RESERVED_LENGTH: u8 = 0xFF;

    /// Deepest SEQUENCE nesting the decoder accepts
    pub const MAX_NESTING_DEPTH: usize = 64;
}
