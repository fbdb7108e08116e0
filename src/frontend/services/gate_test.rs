use super::*;

fn state(is_loading: bool, is_authenticated: bool) -> SessionState {
    SessionState {
        is_authenticated,
        is_loading,
    }
}

// =============================================================================
// evaluate
// =============================================================================

#[test]
fn loading_dominates_both_authentication_values() {
    for is_authenticated in [false, true] {
        assert_eq!(
            evaluate(&state(true, is_authenticated), "/transactions"),
            Access::Checking
        );
    }
}

#[test]
fn resolved_anonymous_is_denied_with_the_origin() {
    assert_eq!(
        evaluate(&state(false, false), "/budgets"),
        Access::Denied {
            origin: "/budgets".to_string()
        }
    );
}

#[test]
fn resolved_signed_in_is_granted() {
    assert_eq!(evaluate(&state(false, true), "/transactions"), Access::Granted);
}

#[test]
fn every_state_maps_to_exactly_one_outcome() {
    // Four states, three outcomes: both loading states collapse into
    // Checking.
    let outcomes = [
        evaluate(&state(true, false), "/"),
        evaluate(&state(true, true), "/"),
        evaluate(&state(false, false), "/"),
        evaluate(&state(false, true), "/"),
    ];
    assert_eq!(outcomes[0], Access::Checking);
    assert_eq!(outcomes[1], Access::Checking);
    assert_eq!(
        outcomes[2],
        Access::Denied {
            origin: "/".to_string()
        }
    );
    assert_eq!(outcomes[3], Access::Granted);
}

#[test]
fn evaluation_is_idempotent() {
    for is_loading in [false, true] {
        for is_authenticated in [false, true] {
            let s = state(is_loading, is_authenticated);
            assert_eq!(evaluate(&s, "/calendar"), evaluate(&s, "/calendar"));
        }
    }
}

// =============================================================================
// public_target
// =============================================================================

#[test]
fn positive_hint_goes_to_the_stored_origin() {
    assert_eq!(
        public_target(true, Some("/budgets".to_string())),
        Some("/budgets".to_string())
    );
}

#[test]
fn positive_hint_without_an_origin_lands_home() {
    assert_eq!(public_target(true, None), Some(LANDING_PATH.to_string()));
}

#[test]
fn negative_hint_shows_the_public_content() {
    assert_eq!(public_target(false, None), None);
    // A failed hint read behaves exactly like a negative hint, origin
    // intent or not.
    assert_eq!(public_target(false, Some("/budgets".to_string())), None);
}

#[test]
fn public_decision_is_idempotent() {
    assert_eq!(
        public_target(true, Some("/x".to_string())),
        public_target(true, Some("/x".to_string()))
    );
    assert_eq!(public_target(false, None), public_target(false, None));
}

// =============================================================================
// End-to-end decision sequences
// =============================================================================

#[test]
fn pending_check_resolves_into_content_without_a_redirect() {
    // Landing on /transactions while the store still resolves.
    let path = "/transactions";
    assert_eq!(evaluate(&state(true, false), path), Access::Checking);

    // The store resolves to signed-in: the placeholder gives way to the
    // page, and at no point was a denial issued.
    assert_eq!(evaluate(&state(false, true), path), Access::Granted);
}

#[test]
fn denied_visit_resumes_at_its_origin_after_sign_in() {
    // Anonymous visit to /budgets: denied, origin carried along.
    let Access::Denied { origin } = evaluate(&state(false, false), "/budgets") else {
        panic!("expected a denial");
    };
    assert_eq!(origin, "/budgets");

    // After the sign-in succeeds, consuming the stored origin returns
    // the visit to where it started.
    assert_eq!(public_target(true, Some(origin)), Some("/budgets".to_string()));
}

#[test]
fn stale_marker_corrects_in_two_hops() {
    // A leftover credential file makes the hint positive on /login even
    // though the real session expired: first hop to the landing page.
    assert_eq!(public_target(true, None), Some("/".to_string()));

    // The authoritative gate there has resolved to anonymous: second
    // hop back to login, origin in hand.
    assert_eq!(
        evaluate(&state(false, false), "/"),
        Access::Denied {
            origin: "/".to_string()
        }
    );

    // Denial implies the store finished resolving, and a resolution
    // that ends anonymous evicts the stale marker. The hint is negative
    // now, so login renders: two hops, never a loop.
    assert_eq!(public_target(false, Some("/".to_string())), None);
}
