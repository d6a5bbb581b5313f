use playport::types::SourceTrack;
use playport::utils::*;

// Helper function to create a test track
fn create_test_track(id: &str, title: &str, artist: &str) -> SourceTrack {
    SourceTrack {
        source_id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_search_query_joins_title_and_artist() {
    let track = create_test_track("t1", "Song", "Band");
    assert_eq!(search_query(&track), "Song Band");
}

#[test]
fn test_search_query_applies_no_normalization() {
    // Case is passed through unchanged
    let track = create_test_track("t1", "LOUD Song", "QUIET band");
    assert_eq!(search_query(&track), "LOUD Song QUIET band");

    // Diacritics are passed through unchanged
    let track = create_test_track("t2", "Déjà Vu", "Beyoncé");
    assert_eq!(search_query(&track), "Déjà Vu Beyoncé");

    // Interior whitespace of either part is preserved, join is a single space
    let track = create_test_track("t3", "A  B", "C");
    assert_eq!(search_query(&track), "A  B C");
}
