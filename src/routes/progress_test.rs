use super::*;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn progress_starts_at_zero() {
    let state = test_app_state();
    let Json(resp) = get_progress(State(state)).await;
    assert_eq!(resp.progress, 0);
}

#[tokio::test]
async fn update_accumulates_and_clamps() {
    let state = test_app_state();
    for expected in [5, 10, 15] {
        let Json(resp) = update_progress(State(state.clone()), Json(UpdateBody { increment: 5 })).await;
        assert_eq!(resp.progress, expected);
    }

    let Json(resp) = update_progress(State(state.clone()), Json(UpdateBody { increment: 90 })).await;
    assert_eq!(resp.progress, 100);

    let Json(resp) = update_progress(State(state), Json(UpdateBody { increment: 5 })).await;
    assert_eq!(resp.progress, 100);
}
