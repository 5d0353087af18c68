/*
 * Responsibility
 * - JWT (未検証) から `sub` を取り出す library と、gateway 向け sidecar の部品
 * - binary (main.rs) はここを呼ぶだけ
 */
pub mod api;
pub mod app;
pub mod config;
pub mod middleware;
pub mod services;
pub mod state;
