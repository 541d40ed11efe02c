use {
    super::Service,
    crate::server::{
        EXIT_CHECK_INTERVAL,
        SHOULD_EXIT,
    },
    anyhow::Result,
    std::sync::atomic::Ordering,
};

impl Service {
    /// Drives `close_expired_auctions` on the configured interval until
    /// shutdown is signalled.
    pub async fn run_sweep_loop(&self) -> Result<()> {
        tracing::info!(
            sweep_interval = ?self.config.sweep_interval,
            "Starting auction sweep...",
        );
        let mut exit_check_interval = tokio::time::interval(EXIT_CHECK_INTERVAL);
        let mut sweep_interval = tokio::time::interval(self.config.sweep_interval);

        while !SHOULD_EXIT.load(Ordering::Acquire) {
            tokio::select! {
                _ = sweep_interval.tick() => {
                    self.task_tracker.spawn({
                        let service = self.clone();
                        async move {
                            service.close_expired_auctions().await;
                        }
                    });
                }
                _ = exit_check_interval.tick() => {}
            }
        }
        tracing::info!("Shutting down auction sweep...");
        Ok(())
    }
}
