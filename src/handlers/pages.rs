use crate::state::AppState;
use crate::ui::render_index;
use axum::extract::State;
use axum::response::Html;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.store.lock().await;
    Html(render_index(&data))
}
