//! Known-answer vectors

use p256coz_algorithms::ec::p256::SELF_TEST_VECTORS;

/// k·G = (x, y), all big-endian hex
#[derive(Clone, Copy, Debug)]
pub struct ScalarMulVector {
    pub k: &'static str,
    pub x: &'static str,
    pub y: &'static str,
}

/// Small multiples of the generator
pub const SMALL_MULTIPLES: [ScalarMulVector; 3] = [
    ScalarMulVector {
        k: "0000000000000000000000000000000000000000000000000000000000000001",
        x: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
        y: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    },
    ScalarMulVector {
        k: "0000000000000000000000000000000000000000000000000000000000000002",
        x: "7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978",
        y: "07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1",
    },
    ScalarMulVector {
        k: "0000000000000000000000000000000000000000000000000000000000000003",
        x: "5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c",
        y: "8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032",
    },
];

/// The co-Z self-test triples, shared with `p256::self_test`
pub fn co_z_vectors() -> impl Iterator<Item = ScalarMulVector> {
    SELF_TEST_VECTORS
        .iter()
        .map(|&(k, x, y)| ScalarMulVector { k, x, y })
}

/// n − 1, the largest reduced scalar
pub const N_MINUS_ONE: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550";

/// DER encodings of INTEGER values around the one- and two-octet boundaries
pub const DER_INTEGERS: [(i64, &str); 12] = [
    (0, "020100"),
    (1, "020101"),
    (-1, "0201ff"),
    (127, "02017f"),
    (128, "02020080"),
    (-128, "020180"),
    (-129, "0202ff7f"),
    (255, "020200ff"),
    (256, "02020100"),
    (32767, "02027fff"),
    (32768, "0203008000"),
    (-32769, "0203ff7fff"),
];

/// Inputs every strict DER decoder must reject, with the expected error kind name
pub const DER_REJECTS: [(&str, &str); 8] = [
    ("02027f", "TruncatedInput"),
    ("0202007f", "NonCanonicalInteger"),
    ("0202ff80", "NonCanonicalInteger"),
    ("0480", "MalformedLength"),
    ("04ff", "MalformedLength"),
    ("04817f", "MalformedLength"),
    ("02010100", "TrailingData"),
    ("0500", "TypeMismatch"),
];
