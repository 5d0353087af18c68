/*
 * Responsibility
 * - request に紐づく JWT subject の型
 * - middleware が計算して extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - 値は未検証の token から読んだもの。認可には使わない
 * - 空文字は「token なし」と「token 不正」の両方を表す
 */

/// `sub` claim of the inbound request's token, or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subject(String);

impl Subject {
    pub fn new(sub: impl Into<String>) -> Self {
        Self(sub.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
