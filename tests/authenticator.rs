mod common;

use std::sync::Arc;

use bearer_gate::api::v1::extractors::{AuthState, Authentication, RequestMetadata};
use bearer_gate::error::AppError;
use bearer_gate::services::directory::Subject;

use common::{StubTokens, UnavailableDirectory, alice, authenticator, directory, parts};

#[tokio::test]
async fn missing_header_leaves_request_unauthenticated() {
    let tokens = Arc::new(StubTokens::default());
    let auth = authenticator(tokens.clone(), directory());
    let mut state = AuthState::default();

    auth.authenticate(&parts(None), &mut state).await.unwrap();

    assert_eq!(state, AuthState::Unauthenticated);
    assert_eq!(tokens.extract_calls(), 0);
}

#[tokio::test]
async fn basic_scheme_never_reaches_token_service() {
    let tokens = Arc::new(StubTokens::default().with("abc123", Some("alice"), true));
    let auth = authenticator(tokens.clone(), directory());
    let mut state = AuthState::default();

    auth.authenticate(&parts(Some("Basic abc123")), &mut state)
        .await
        .unwrap();

    assert_eq!(state, AuthState::Unauthenticated);
    assert_eq!(tokens.extract_calls(), 0);
    assert_eq!(tokens.validate_calls(), 0);
}

#[tokio::test]
async fn lowercase_scheme_is_not_a_bearer_token() {
    let tokens = Arc::new(StubTokens::default().with("abc123", Some("alice"), true));
    let auth = authenticator(tokens.clone(), directory());
    let mut state = AuthState::default();

    auth.authenticate(&parts(Some("bearer abc123")), &mut state)
        .await
        .unwrap();

    assert!(!state.is_authenticated());
    assert_eq!(tokens.extract_calls(), 0);
}

#[tokio::test]
async fn valid_token_for_known_subject_authenticates() {
    let tokens = Arc::new(StubTokens::default().with("good", Some("alice"), true));
    let auth = authenticator(tokens.clone(), directory());
    let mut state = AuthState::default();

    auth.authenticate(&parts(Some("Bearer good")), &mut state)
        .await
        .unwrap();

    let authentication = state.authentication().expect("authenticated");
    assert_eq!(authentication.subject, alice());
    assert!(authentication.has_authority("ROLE_DENTIST"));
    assert_eq!(tokens.validate_calls(), 1);
}

#[tokio::test]
async fn invalid_token_leaves_request_unauthenticated() {
    let tokens = Arc::new(StubTokens::default().with("tampered", Some("alice"), false));
    let auth = authenticator(tokens.clone(), directory());
    let mut state = AuthState::default();

    auth.authenticate(&parts(Some("Bearer tampered")), &mut state)
        .await
        .unwrap();

    assert_eq!(state, AuthState::Unauthenticated);
    assert_eq!(tokens.validate_calls(), 1);
}

#[tokio::test]
async fn token_without_subject_skips_lookup_and_validation() {
    let tokens = Arc::new(StubTokens::default().with("anonymous", None, true));
    let auth = authenticator(tokens.clone(), Arc::new(UnavailableDirectory));
    let mut state = AuthState::default();

    // The directory is down; reaching it would surface as an error.
    auth.authenticate(&parts(Some("Bearer anonymous")), &mut state)
        .await
        .unwrap();

    assert_eq!(state, AuthState::Unauthenticated);
    assert_eq!(tokens.extract_calls(), 1);
    assert_eq!(tokens.validate_calls(), 0);
}

#[tokio::test]
async fn unknown_subject_is_skipped_silently() {
    let tokens = Arc::new(StubTokens::default().with("ghost", Some("bob"), true));
    let auth = authenticator(tokens.clone(), directory());
    let mut state = AuthState::default();

    auth.authenticate(&parts(Some("Bearer ghost")), &mut state)
        .await
        .unwrap();

    assert_eq!(state, AuthState::Unauthenticated);
    assert_eq!(tokens.validate_calls(), 0);
}

#[tokio::test]
async fn already_authenticated_state_is_never_overwritten() {
    let tokens = Arc::new(StubTokens::default().with("good", Some("alice"), true));
    let auth = authenticator(tokens.clone(), Arc::new(UnavailableDirectory));
    let existing = AuthState::Authenticated(Authentication::new(
        Subject::new("carol", ["ROLE_ADMIN"]),
        RequestMetadata::default(),
    ));
    let mut state = existing.clone();

    auth.authenticate(&parts(Some("Bearer good")), &mut state)
        .await
        .unwrap();

    assert_eq!(state, existing);
    assert_eq!(tokens.validate_calls(), 0);
}

#[tokio::test]
async fn directory_outage_is_propagated() {
    let tokens = Arc::new(StubTokens::default().with("good", Some("alice"), true));
    let auth = authenticator(tokens, Arc::new(UnavailableDirectory));
    let mut state = AuthState::default();

    let err = auth
        .authenticate(&parts(Some("Bearer good")), &mut state)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Internal));
    assert_eq!(state, AuthState::Unauthenticated);
}
