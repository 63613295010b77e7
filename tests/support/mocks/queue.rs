// tests/support/mocks/queue.rs
use article_gate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::queue::{EditQueue, PendingEdit, TicketId},
};
use async_trait::async_trait;

/// 常に失敗する編集キュー（孤立コンテンツの破棄を検証するため）
#[derive(Clone, Debug, Default)]
pub struct FailingEditQueue;

#[async_trait]
impl EditQueue for FailingEditQueue {
    async fn enqueue(&self, _edit: PendingEdit) -> ApplicationResult<TicketId> {
        Err(ApplicationError::infrastructure("edit queue unavailable"))
    }
}
