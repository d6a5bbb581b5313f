use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::SourceTrack;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Builds the destination search query for a source track: title and primary
/// artist joined by a single space, passed through verbatim. No case folding,
/// no diacritic stripping. The destination search engine gets the strings as
/// the source catalog spelled them.
pub fn search_query(track: &SourceTrack) -> String {
    format!("{} {}", track.title, track.artist)
}
