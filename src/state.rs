/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: credential store クライアントを足すならここ
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
