// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod content;
pub mod queue;
pub mod repos;
pub mod security;
pub mod time;

// 時刻関連
pub use time::{DummyClock, fixed_now};

// セキュリティ関連
pub use security::{ADMIN_PASSWORD, ADMIN_USERNAME, PlainPasswordHasher};

// リポジトリ関連
pub use repos::{CountingPermissionRepo, CountingVersionRepo};

// 編集キュー
pub use queue::FailingEditQueue;

// コンテンツストア
pub use content::{FlakyContentStore, GatedContentStore};
