//! AES-GCM reference vectors (McGrew & Viega, test cases 1, 2, 7, 8, 13 and 14),
//! framed as `nonce || cipher text || tag`.

use std::collections::HashMap;

use crate::frame::Nonce;

#[derive(Debug)]
pub struct GcmTest {
    pub key: Vec<u8>,
    pub nonce: Nonce,
    pub plain_text: Vec<u8>,
    pub cipher_text: Vec<u8>,
    pub tag: Vec<u8>,
}

impl GcmTest {
    fn from_hex(key: &str, nonce: &str, plain_text: &str, cipher_text: &str, tag: &str) -> Self {
        Self {
            key: hex::decode(key).unwrap(),
            nonce: hex::decode(nonce).unwrap().try_into().unwrap(),
            plain_text: hex::decode(plain_text).unwrap(),
            cipher_text: hex::decode(cipher_text).unwrap(),
            tag: hex::decode(tag).unwrap(),
        }
    }

    pub fn frame(&self) -> Vec<u8> {
        [
            self.nonce.as_slice(),
            self.cipher_text.as_slice(),
            self.tag.as_slice(),
        ]
        .concat()
    }
}

const ZERO_NONCE: &str = "000000000000000000000000";
const ZERO_BLOCK: &str = "00000000000000000000000000000000";

lazy_static::lazy_static! {
    static ref GCM_TEST_VECTORS: HashMap<&'static str, GcmTest> = HashMap::from([
        (
            "aes_gcm_128_empty",
            GcmTest::from_hex(
                "00000000000000000000000000000000",
                ZERO_NONCE,
                "",
                "",
                "58e2fccefa7e3061367f1d57a4e7455a",
            ),
        ),
        (
            "aes_gcm_128_zero_block",
            GcmTest::from_hex(
                "00000000000000000000000000000000",
                ZERO_NONCE,
                ZERO_BLOCK,
                "0388dace60b6a392f328c2b971b2fe78",
                "ab6e47d42cec13bdf53a67b21257bddf",
            ),
        ),
        (
            "aes_gcm_192_empty",
            GcmTest::from_hex(
                "000000000000000000000000000000000000000000000000",
                ZERO_NONCE,
                "",
                "",
                "cd33b28ac773f74ba00ed1f312572435",
            ),
        ),
        (
            "aes_gcm_192_zero_block",
            GcmTest::from_hex(
                "000000000000000000000000000000000000000000000000",
                ZERO_NONCE,
                ZERO_BLOCK,
                "98e7247c07f0fe411c267e4384b0f600",
                "2ff58d80033927ab8ef4d4587514f0fb",
            ),
        ),
        (
            "aes_gcm_256_empty",
            GcmTest::from_hex(
                "0000000000000000000000000000000000000000000000000000000000000000",
                ZERO_NONCE,
                "",
                "",
                "530f8afbc74536b9a963b4f1c4cb738b",
            ),
        ),
        (
            "aes_gcm_256_zero_block",
            GcmTest::from_hex(
                "0000000000000000000000000000000000000000000000000000000000000000",
                ZERO_NONCE,
                ZERO_BLOCK,
                "cea7403d4d606b6e074ec5d3baf39d18",
                "d0d1c8a799996bf0265b98b5d48ab919",
            ),
        ),
    ]);
}

pub fn get_gcm_test_vector(name: &str) -> &'static GcmTest {
    GCM_TEST_VECTORS
        .get(name)
        .unwrap_or_else(|| panic!("No test vector named {name}"))
}
