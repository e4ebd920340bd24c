use hex_literal::hex;
use ppbkdf2::crypto::generate_work;
use ppbkdf2::{Algorithm, Encoding, Params, Strategy, derive, derive_with};

#[test]
fn sha256_natural_length() {
    let key = derive(Algorithm::Sha256, b"password", b"salt", 1, 0, Encoding::Binary).unwrap();
    assert_eq!(
        key.as_bytes(),
        hex!("364f9168b1243c5831593f7bcc8879ee8e4479c7d53a42f0e5cb15b37167eb4c")
    );
}

#[test]
fn sha256_work_value() {
    let prf = Algorithm::Sha256.prf();
    let work = generate_work(prf.as_ref(), b"password", b"salt", 1, Strategy::Sequential).unwrap();
    assert_eq!(
        work.as_bytes(),
        hex!("2c5bb85d6b6973ade0db0edaa686ff660f5c03bb58f55cc87d4c6b48163ed857")
    );
}

#[test]
fn sha256_two_block_output() {
    let key = derive(Algorithm::Sha256, b"password", b"salt", 1, 64, Encoding::Hex).unwrap();
    assert_eq!(
        key.as_hex(),
        Some(
            "364f9168b1243c5831593f7bcc8879ee8e4479c7d53a42f0e5cb15b37167eb4c\
             34eab8ff5997887d453497b138762fdc6a740f51c66d462b210821c14c116a08"
        )
    );
}

#[test]
fn sha256_cost_two() {
    let key = derive(Algorithm::Sha256, b"password", b"salt", 2, 0, Encoding::Hex).unwrap();
    assert_eq!(
        key.as_hex(),
        Some("dddaf362d59b9426f6d211ae4f6a1879830f3c8e4afc2b9c432d8d05369bcc5d")
    );
}

#[test]
fn sha1_natural_length() {
    let key = derive(Algorithm::Sha1, b"password", b"salt", 1, 0, Encoding::Hex).unwrap();
    assert_eq!(key.as_hex(), Some("918fa1e9708267e279012d4e7ee1fc04436081d4"));
}

#[test]
fn sha512_empty_inputs_truncated() {
    let key = derive(Algorithm::Sha512, b"", b"", 1, 16, Encoding::Binary).unwrap();
    assert_eq!(key.as_bytes(), hex!("c51f09e879d7016b42b2b933ef252022"));
}

#[test]
fn sha512_default_length_is_hash_len() {
    let key = derive(Algorithm::Sha512, b"", b"", 1, 0, Encoding::Binary).unwrap();
    assert_eq!(key.len(), 64);
    assert_eq!(&key.as_bytes()[..16], hex!("c51f09e879d7016b42b2b933ef252022"));
}

#[test]
fn sha3_256_natural_length() {
    let key = derive(Algorithm::Sha3_256, b"password", b"salt", 1, 0, Encoding::Hex).unwrap();
    assert_eq!(
        key.as_hex(),
        Some("290ff142856d10bd7263f35f915ae2ab7503603e1119387d9a1c2d0c63cd3ba1")
    );
}

#[test]
fn hex_is_encoding_of_binary() {
    let raw = derive(Algorithm::Sha1, b"pw", b"nacl", 1, 33, Encoding::Binary).unwrap();
    let text = derive(Algorithm::Sha1, b"pw", b"nacl", 1, 33, Encoding::Hex).unwrap();

    assert_eq!(text.as_hex(), Some(hex::encode(raw.as_bytes()).as_str()));
    assert_eq!(text.len(), 2 * raw.len());
}

#[test]
fn parallel_strategy_matches_known_vector() {
    let prf = Algorithm::Sha256.prf();
    let key = derive_with(
        prf.as_ref(),
        b"password",
        b"salt",
        1,
        0,
        Encoding::Hex,
        Strategy::Parallel,
    )
    .unwrap();
    assert_eq!(
        key.as_hex(),
        Some("364f9168b1243c5831593f7bcc8879ee8e4479c7d53a42f0e5cb15b37167eb4c")
    );
}

#[test]
fn params_from_json_derive_and_verify() {
    let params = Params::from_json(r#"{"algorithm":"sha1","cost":1}"#).unwrap();
    let hex = "918fa1e9708267e279012d4e7ee1fc04436081d4";

    assert_eq!(params.derive(b"password", b"salt").unwrap().as_hex(), Some(hex));
    assert!(params.verify(b"password", b"salt", hex.as_bytes()).unwrap());
    assert!(!params.verify(b"password", b"pepper", hex.as_bytes()).unwrap());
    assert!(!params.verify(b"password", b"salt", &hex.as_bytes()[..38]).unwrap());
}
